//! Wildfire - Active-fire detection and sequential regioning
//!
//! Finds actively burning areas in Sentinel-2 scenes and splits them into
//! connected fire regions.
//!
//! # Overview
//!
//! - Grid types: binary masks, spectral bands, RGB images
//! - Binary morphology with brick elements
//! - Sequential regioning: label scan, union-find collision resolution,
//!   seeded per-region coloring
//! - Fire thresholds, composites, and the end-to-end scene pipeline
//!
//! # Example
//!
//! ```
//! use wildfire::Mask;
//! use wildfire::region::{ConnectivityType, label_regions};
//!
//! let mask = Mask::from_rows(&[[1u8, 1, 0], [0, 0, 0], [0, 1, 1]]).unwrap();
//! let regions = label_regions(&mask, ConnectivityType::EightWay, 20).unwrap();
//! assert_eq!(regions.region_count, 2);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use wildfire_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use wildfire_detect as detect;
pub use wildfire_morph as morph;
pub use wildfire_region as region;
