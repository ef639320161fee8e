//! wildfire-core - Basic data structures for fire detection
//!
//! This crate provides the grid types shared by every stage of the
//! pipeline:
//!
//! - [`Mask`] - Binary foreground/background grid (input of regioning)
//! - [`RgbImage`] / [`Rgb`] - Interleaved 8-bit color output
//! - [`Band`] - Floating-point spectral band
//!
//! All grids are row-major without padding and may have zero width or
//! height.

pub mod band;
pub mod error;
pub mod mask;
pub mod rgb;

pub use band::{Band, percentile_of};
pub use error::{Error, Result};
pub use mask::Mask;
pub use rgb::{Rgb, RgbImage};
