//! Region label maps and statistics
//!
//! This module provides functions for turning a mask into a resolved label
//! grid and for measuring the regions in it. Region ids are consecutive,
//! starting at 1, and follow the raster order of each region's first pixel.

use crate::conncomp::ConnectivityType;
use crate::error::RegionResult;
use crate::scan::{FIRST_LABEL, scan_labels};
use crate::union_find::resolve_collisions;
use wildfire_core::Mask;

/// Resolved region label grid
///
/// 0 is background, `1..=region_count` identify regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
    region_count: u32,
}

impl LabelMap {
    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        labels: Vec<u32>,
        region_count: u32,
    ) -> Self {
        Self {
            width,
            height,
            labels,
            region_count,
        }
    }

    /// Grid width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major region ids
    #[inline]
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Number of regions
    #[inline]
    pub fn region_count(&self) -> u32 {
        self.region_count
    }

    /// Region id at (x, y), or `None` out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.labels[y as usize * self.width as usize + x as usize])
    }
}

/// Label the regions of a mask
///
/// Runs the label scan and collision resolution, then rewrites every
/// provisional label as its region id.
pub fn label_map(mask: &Mask, connectivity: ConnectivityType) -> RegionResult<LabelMap> {
    let provisional = scan_labels(mask, connectivity)?;
    let partition = resolve_collisions(&provisional);
    let ids = partition.region_ids();

    let labels = provisional
        .labels()
        .iter()
        .map(|&l| if l >= FIRST_LABEL { ids[l as usize] } else { 0 })
        .collect();

    Ok(LabelMap::from_parts(
        mask.width(),
        mask.height(),
        labels,
        partition.region_count() as u32,
    ))
}

/// Count the regions of a mask
///
/// Skips the coloring pass entirely.
pub fn count_regions(mask: &Mask, connectivity: ConnectivityType) -> RegionResult<usize> {
    let provisional = scan_labels(mask, connectivity)?;
    Ok(resolve_collisions(&provisional).region_count())
}

/// Get pixel count for each region
///
/// The index corresponds to (id - 1).
pub fn region_sizes(map: &LabelMap) -> Vec<u32> {
    let mut counts = vec![0u32; map.region_count as usize];
    for &id in &map.labels {
        if id > 0 {
            counts[id as usize - 1] += 1;
        }
    }
    counts
}

/// Axis-aligned bounding box of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionBounds {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Region statistics
#[derive(Debug, Clone)]
pub struct RegionStats {
    /// Region id
    pub id: u32,
    /// Bounding box
    pub bounds: RegionBounds,
    /// Number of pixels
    pub pixel_count: u32,
    /// Centroid X coordinate
    pub centroid_x: f64,
    /// Centroid Y coordinate
    pub centroid_y: f64,
}

/// Get detailed statistics for all regions, ordered by id
pub fn region_stats(map: &LabelMap) -> Vec<RegionStats> {
    struct Accum {
        count: u32,
        sum_x: u64,
        sum_y: u64,
        min_x: u32,
        min_y: u32,
        max_x: u32,
        max_y: u32,
    }

    let mut acc: Vec<Accum> = (0..map.region_count)
        .map(|_| Accum {
            count: 0,
            sum_x: 0,
            sum_y: 0,
            min_x: u32::MAX,
            min_y: u32::MAX,
            max_x: 0,
            max_y: 0,
        })
        .collect();

    for y in 0..map.height {
        for x in 0..map.width {
            let id = map.labels[y as usize * map.width as usize + x as usize];
            if id == 0 {
                continue;
            }
            let a = &mut acc[id as usize - 1];
            a.count += 1;
            a.sum_x += u64::from(x);
            a.sum_y += u64::from(y);
            a.min_x = a.min_x.min(x);
            a.min_y = a.min_y.min(y);
            a.max_x = a.max_x.max(x);
            a.max_y = a.max_y.max(y);
        }
    }

    acc.into_iter()
        .enumerate()
        .map(|(i, a)| RegionStats {
            id: i as u32 + 1,
            bounds: RegionBounds {
                x: a.min_x,
                y: a.min_y,
                w: a.max_x - a.min_x + 1,
                h: a.max_y - a.min_y + 1,
            },
            pixel_count: a.count,
            centroid_x: a.sum_x as f64 / f64::from(a.count),
            centroid_y: a.sum_y as f64 / f64::from(a.count),
        })
        .collect()
}
