//! Sequential regioning
//!
//! Turns a binary [`Mask`] into a map of maximal connected regions, each
//! painted in its own deterministic color, plus the region count.
//!
//! The work is split into three passes that run strictly in order:
//!
//! 1. [`scan_labels`] - raster scan assigning provisional labels and
//!    recording label collisions
//! 2. [`resolve_collisions`] - union-find merge of collided labels into
//!    regions, each represented by its minimum label
//! 3. [`assign_colors`] + [`paint`] - one seeded color per region, then a
//!    single pass writing every pixel
//!
//! [`scan_labels`]: crate::scan::scan_labels
//! [`resolve_collisions`]: crate::union_find::resolve_collisions
//! [`assign_colors`]: crate::colorize::assign_colors
//! [`paint`]: crate::colorize::paint

use crate::colorize::{assign_colors, paint};
use crate::error::RegionResult;
use crate::scan::scan_labels;
use crate::union_find::resolve_collisions;
use std::time::Instant;
use wildfire_core::{Mask, RgbImage};

/// Seed used when the caller does not pick one
pub const DEFAULT_SEED: u64 = 20;

/// Connectivity type for region analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

impl ConnectivityType {
    /// Offsets of every neighbor under this connectivity
    pub fn neighbor_offsets(self) -> &'static [(i32, i32)] {
        const FOUR: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        const EIGHT: [(i32, i32); 8] = [
            (-1, 0),
            (1, 0),
            (0, -1),
            (0, 1),
            (-1, -1),
            (1, -1),
            (-1, 1),
            (1, 1),
        ];
        match self {
            ConnectivityType::FourWay => &FOUR,
            ConnectivityType::EightWay => &EIGHT,
        }
    }
}

/// Options for [`label_regions_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegionOptions {
    /// Neighborhood used to connect foreground pixels
    pub connectivity: ConnectivityType,
    /// Seed for the region color sequence
    pub seed: u64,
}

impl Default for RegionOptions {
    fn default() -> Self {
        Self {
            connectivity: ConnectivityType::EightWay,
            seed: DEFAULT_SEED,
        }
    }
}

impl RegionOptions {
    /// Create options with the specified connectivity and the default seed
    pub fn new(connectivity: ConnectivityType) -> Self {
        Self {
            connectivity,
            ..Default::default()
        }
    }

    /// Set the color seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Result of sequential regioning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRegions {
    /// Colored grid: one color per region, black background
    pub image: RgbImage,
    /// Number of regions found
    pub region_count: usize,
}

/// Label and color the connected regions of a binary mask
///
/// Two foreground pixels end up with the same color if and only if they
/// are joined by a chain of foreground pixels that are adjacent under
/// `connectivity`. Background pixels are black. The same
/// `(mask, connectivity, seed)` always produces the same image.
///
/// # Arguments
///
/// * `mask` - Binary input (validated when the `Mask` was built)
/// * `connectivity` - 4-way or 8-way adjacency
/// * `seed` - Seed of the color sequence
///
/// # Errors
///
/// Returns [`RegionError::LabelOverflow`] if the mask needs more
/// provisional labels than fit in a `u32`, and
/// [`RegionError::ColorSpaceExhausted`] if there are more regions than
/// distinct non-black colors.
///
/// # Examples
///
/// ```
/// use wildfire_core::Mask;
/// use wildfire_region::{ConnectivityType, label_regions};
///
/// let mask = Mask::from_rows(&[[1u8, 0, 1], [0, 1, 0], [1, 0, 1]]).unwrap();
///
/// let four = label_regions(&mask, ConnectivityType::FourWay, 20).unwrap();
/// assert_eq!(four.region_count, 5);
///
/// let eight = label_regions(&mask, ConnectivityType::EightWay, 20).unwrap();
/// assert_eq!(eight.region_count, 1);
/// ```
///
/// [`RegionError::LabelOverflow`]: crate::RegionError::LabelOverflow
/// [`RegionError::ColorSpaceExhausted`]: crate::RegionError::ColorSpaceExhausted
pub fn label_regions(
    mask: &Mask,
    connectivity: ConnectivityType,
    seed: u64,
) -> RegionResult<LabeledRegions> {
    let start = Instant::now();

    let provisional = scan_labels(mask, connectivity)?;
    let partition = resolve_collisions(&provisional);
    let colors = assign_colors(&partition, seed)?;
    let image = paint(&provisional, &colors)?;
    let region_count = partition.region_count();

    log::info!(
        "sequential regioning: {} regions found in {:.2?} ({}x{}, {:?})",
        region_count,
        start.elapsed(),
        mask.width(),
        mask.height(),
        connectivity
    );

    Ok(LabeledRegions {
        image,
        region_count,
    })
}

/// Label and color regions using an options struct
pub fn label_regions_with(mask: &Mask, options: &RegionOptions) -> RegionResult<LabeledRegions> {
    label_regions(mask, options.connectivity, options.seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildfire_core::Rgb;

    fn mask(rows: &[&[u8]]) -> Mask {
        Mask::from_rows(rows).unwrap()
    }

    #[test]
    fn test_full_block_is_one_region() {
        let m = mask(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]);
        let result = label_regions(&m, ConnectivityType::FourWay, DEFAULT_SEED).unwrap();
        assert_eq!(result.region_count, 1);

        let first = result.image.get_rgb(0, 0).unwrap();
        assert!(!first.is_black());
        assert!(result.image.pixels().all(|c| c == first));
    }

    #[test]
    fn test_x_pattern_depends_on_connectivity() {
        let m = mask(&[&[1, 0, 1], &[0, 1, 0], &[1, 0, 1]]);
        let four = label_regions(&m, ConnectivityType::FourWay, DEFAULT_SEED).unwrap();
        assert_eq!(four.region_count, 5);
        assert_eq!(four.image.distinct_colors().len(), 5);

        let eight = label_regions(&m, ConnectivityType::EightWay, DEFAULT_SEED).unwrap();
        assert_eq!(eight.region_count, 1);
        assert_eq!(eight.image.distinct_colors().len(), 1);
    }

    #[test]
    fn test_empty_mask() {
        let m = Mask::new(4, 4).unwrap();
        let result = label_regions(&m, ConnectivityType::EightWay, DEFAULT_SEED).unwrap();
        assert_eq!(result.region_count, 0);
        assert!(result.image.pixels().all(Rgb::is_black));
    }

    #[test]
    fn test_zero_sized_mask() {
        let m = Mask::new(0, 3).unwrap();
        let result = label_regions(&m, ConnectivityType::FourWay, 1).unwrap();
        assert_eq!(result.region_count, 0);
        assert!(result.image.data().is_empty());
    }

    #[test]
    fn test_background_stays_black() {
        let m = mask(&[&[1, 0, 0, 1], &[1, 0, 1, 1], &[0, 0, 0, 0]]);
        let result = label_regions(&m, ConnectivityType::FourWay, 7).unwrap();
        for y in 0..m.height() {
            for x in 0..m.width() {
                let c = result.image.get_rgb(x, y).unwrap();
                assert_eq!(m.is_foreground(x, y), !c.is_black(), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_same_seed_same_image() {
        let m = mask(&[&[1, 0, 1, 0], &[0, 0, 1, 0], &[1, 1, 0, 1]]);
        let a = label_regions(&m, ConnectivityType::FourWay, 99).unwrap();
        let b = label_regions(&m, ConnectivityType::FourWay, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_options_default() {
        let opts = RegionOptions::default();
        assert_eq!(opts.connectivity, ConnectivityType::EightWay);
        assert_eq!(opts.seed, DEFAULT_SEED);

        let opts = RegionOptions::new(ConnectivityType::FourWay).with_seed(5);
        assert_eq!(opts.connectivity, ConnectivityType::FourWay);
        assert_eq!(opts.seed, 5);

        let m = mask(&[&[1, 0], &[0, 1]]);
        let r = label_regions_with(&m, &opts).unwrap();
        assert_eq!(r.region_count, 2);
    }
}
