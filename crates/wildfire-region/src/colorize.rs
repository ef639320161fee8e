//! Region coloring (pass 3)
//!
//! Gives every region one pseudo-random color drawn from a generator
//! seeded by the caller, then writes the final RGB grid in a single pass
//! over the provisional labels.
//!
//! Colors are drawn in ascending order of region representative, three
//! 0..=255 values per region. A draw that is black or repeats an earlier
//! region's color is discarded and drawn again, so background stays
//! distinguishable and the number of distinct colors equals the number of
//! regions.

use crate::error::{RegionError, RegionResult};
use crate::scan::{FIRST_LABEL, Label, ProvisionalLabels};
use crate::union_find::Partition;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use wildfire_core::{Rgb, RgbImage};

/// Number of distinct non-black 24-bit colors
pub const MAX_REGION_COLORS: usize = (1 << 24) - 1;

/// Color lookup for every provisional label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    /// `by_label[label]` is the color of `label`'s region; black below
    /// `FIRST_LABEL`
    by_label: Vec<Rgb>,
    /// `(representative, color)` in ascending representative order
    regions: Vec<(Label, Rgb)>,
}

impl ColorTable {
    /// Color of the region containing `label`
    #[inline]
    pub fn color(&self, label: Label) -> Option<Rgb> {
        if label < FIRST_LABEL {
            return None;
        }
        self.by_label.get(label as usize).copied()
    }

    /// `(representative, color)` pairs in ascending representative order
    pub fn regions(&self) -> &[(Label, Rgb)] {
        &self.regions
    }

    #[inline]
    fn lookup(&self, label: Label) -> Rgb {
        self.by_label
            .get(label as usize)
            .copied()
            .unwrap_or(Rgb::BLACK)
    }
}

/// Draw one color per region
///
/// Rejected draws are retried, so the expected number of draws grows like
/// `n ln n` and becomes very slow as the region count nears
/// [`MAX_REGION_COLORS`].
///
/// # Errors
///
/// Returns [`RegionError::ColorSpaceExhausted`] if the partition has more
/// regions than there are distinct non-black colors.
pub fn assign_colors(partition: &Partition, seed: u64) -> RegionResult<ColorTable> {
    let region_count = partition.region_count();
    if region_count > MAX_REGION_COLORS {
        return Err(RegionError::ColorSpaceExhausted {
            regions: region_count,
            available: MAX_REGION_COLORS,
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut used: HashSet<Rgb> = HashSet::with_capacity(region_count);
    let table = partition.table();
    let mut by_label = vec![Rgb::BLACK; table.len()];
    let mut regions = Vec::with_capacity(region_count);

    for label in partition.label_range() {
        let rep = table[label as usize];
        by_label[label as usize] = if rep == label {
            let color = loop {
                let candidate = Rgb::new(rng.random(), rng.random(), rng.random());
                if !candidate.is_black() && used.insert(candidate) {
                    break candidate;
                }
            };
            regions.push((label, color));
            color
        } else {
            // rep < label, already colored
            by_label[rep as usize]
        };
    }

    Ok(ColorTable { by_label, regions })
}

/// Write the colored output grid
///
/// Each pixel with a provisional label gets its region's color; every
/// other pixel stays black.
pub fn paint(provisional: &ProvisionalLabels, colors: &ColorTable) -> RegionResult<RgbImage> {
    let mut image = RgbImage::new(provisional.width(), provisional.height())?;
    if image.data().is_empty() {
        return Ok(image);
    }

    let width = provisional.width() as usize;
    let labels = provisional.labels();
    let row_bytes = width * RgbImage::CHANNELS;

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        image
            .data_mut()
            .par_chunks_mut(row_bytes)
            .zip(labels.par_chunks(width))
            .for_each(|(out, row)| paint_row(out, row, colors));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (out, row) in image
            .data_mut()
            .chunks_mut(row_bytes)
            .zip(labels.chunks(width))
        {
            paint_row(out, row, colors);
        }
    }

    Ok(image)
}

#[inline]
fn paint_row(out: &mut [u8], labels: &[Label], colors: &ColorTable) {
    for (px, &label) in out.chunks_exact_mut(RgbImage::CHANNELS).zip(labels) {
        if label >= FIRST_LABEL {
            px.copy_from_slice(&colors.lookup(label).to_array());
        }
    }
}
