//! wildfire-test - Regression test framework for the wildfire crates
//!
//! This crate provides the shared pieces of the `*_reg` integration tests:
//!
//! - [`RegParams`] - indexed value and grid comparisons that collect
//!   failures instead of stopping at the first one
//! - Fixtures - masks built from ASCII patterns, random masks, checkerboards
//!
//! # Usage
//!
//! ```ignore
//! use wildfire_test::{RegParams, mask_from_pattern};
//!
//! let mut rp = RegParams::new("regioning");
//! rp.compare_values(5.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{checkerboard, mask_from_pattern, random_mask};
pub use params::{RegParams, RegTestMode};
