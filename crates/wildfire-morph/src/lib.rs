//! wildfire-morph - Binary morphology for fire masks
//!
//! This crate provides brick (rectangular) morphology on [`Mask`]:
//!
//! - Dilation and erosion
//! - Opening (erosion then dilation) and closing (dilation then erosion)
//!
//! Operations are separable and use running-window counts, so a 135×135
//! closing costs about the same as a 3×3 one.
//!
//! # Example
//!
//! ```
//! use wildfire_core::Mask;
//! use wildfire_morph::close_brick;
//!
//! let mask = Mask::from_rows(&[[1u8, 0, 1]]).unwrap();
//! let closed = close_brick(&mask, 3, 1).unwrap();
//! assert_eq!(closed.data(), &[1, 1, 1]);
//! ```
//!
//! [`Mask`]: wildfire_core::Mask

pub mod binary;
mod error;

pub use binary::{close_brick, dilate_brick, erode_brick, open_brick};
pub use error::{MorphError, MorphResult};
