//! wildfire-region - Region labeling for fire masks
//!
//! This crate turns a binary fire-candidate mask into a map of connected
//! regions:
//!
//! - **Sequential regioning** - three-pass labeling that paints every
//!   region in its own deterministic color ([`label_regions`])
//! - **Label maps** - resolved region ids and per-region statistics
//! - **Flood fill** - breadth-first fill and labeling
//!
//! # Examples
//!
//! ## Coloring regions
//!
//! ```
//! use wildfire_core::Mask;
//! use wildfire_region::{ConnectivityType, DEFAULT_SEED, label_regions};
//!
//! let mask = Mask::from_rows(&[[1u8, 1, 0, 0], [0, 0, 0, 1]]).unwrap();
//! let result = label_regions(&mask, ConnectivityType::FourWay, DEFAULT_SEED).unwrap();
//! assert_eq!(result.region_count, 2);
//! assert_eq!(result.image.get_rgb(0, 0), result.image.get_rgb(1, 0));
//! ```
//!
//! ## Region statistics
//!
//! ```
//! use wildfire_core::Mask;
//! use wildfire_region::{ConnectivityType, label_map, region_sizes};
//!
//! let mask = Mask::from_rows(&[[1u8, 1, 0], [0, 0, 1]]).unwrap();
//! let map = label_map(&mask, ConnectivityType::FourWay).unwrap();
//! assert_eq!(region_sizes(&map), vec![2, 1]);
//! ```

pub mod colorize;
pub mod conncomp;
pub mod error;
pub mod label;
pub mod scan;
pub mod seedfill;
pub mod union_find;

// Re-export core types
pub use wildfire_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export sequential regioning
pub use conncomp::{
    ConnectivityType, DEFAULT_SEED, LabeledRegions, RegionOptions, label_regions,
    label_regions_with,
};

// Re-export the individual passes
pub use colorize::{ColorTable, MAX_REGION_COLORS, assign_colors, paint};
pub use scan::{Collision, FIRST_LABEL, Label, ProvisionalLabels, scan_labels};
pub use union_find::{Partition, UnionFind, resolve, resolve_collisions};

// Re-export label maps and statistics
pub use label::{
    LabelMap, RegionBounds, RegionStats, count_regions, label_map, region_sizes, region_stats,
};

// Re-export flood fill
pub use seedfill::{floodfill, floodfill_labels};
