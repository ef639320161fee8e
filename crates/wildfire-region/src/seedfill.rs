//! Flood fill
//!
//! Breadth-first fill and labeling on binary masks. `floodfill_labels`
//! visits regions in raster order of their first pixel, exactly like the
//! ids produced by [`label_map`], which makes it an independent reference
//! for checking sequential regioning.
//!
//! [`label_map`]: crate::label::label_map

use crate::conncomp::ConnectivityType;
use crate::error::{RegionError, RegionResult};
use crate::label::LabelMap;
use std::collections::VecDeque;
use wildfire_core::Mask;

#[inline]
fn step(x: u32, y: u32, dx: i32, dy: i32, width: u32, height: u32) -> Option<(u32, u32)> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    (nx < width && ny < height).then_some((nx, ny))
}

/// Flood fill in a binary mask starting from a seed point
///
/// Fills the connected area of the seed's value with `new_value` and
/// returns the number of pixels changed.
///
/// # Arguments
///
/// * `mask` - Mask to modify in place
/// * `seed_x` - X coordinate of the seed point
/// * `seed_y` - Y coordinate of the seed point
/// * `new_value` - Value to fill with (0 or 1)
/// * `connectivity` - Connectivity type
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if the seed is out of bounds and
/// [`RegionError::InvalidParameters`] if `new_value` is not 0 or 1.
pub fn floodfill(
    mask: &mut Mask,
    seed_x: u32,
    seed_y: u32,
    new_value: u8,
    connectivity: ConnectivityType,
) -> RegionResult<u32> {
    let (width, height) = mask.dimensions();
    let Some(old_value) = mask.get_pixel(seed_x, seed_y) else {
        return Err(RegionError::InvalidSeed {
            x: seed_x,
            y: seed_y,
        });
    };
    if new_value > 1 {
        return Err(RegionError::InvalidParameters(format!(
            "fill value must be 0 or 1, got {new_value}"
        )));
    }

    // If the values are the same, nothing to do
    if old_value == new_value {
        return Ok(0);
    }

    let mut filled = 0u32;
    let mut queue = VecDeque::new();
    mask.set_pixel(seed_x, seed_y, new_value)?;
    queue.push_back((seed_x, seed_y));

    while let Some((x, y)) = queue.pop_front() {
        filled += 1;
        for &(dx, dy) in connectivity.neighbor_offsets() {
            if let Some((nx, ny)) = step(x, y, dx, dy, width, height) {
                if mask.get_pixel(nx, ny) == Some(old_value) {
                    mask.set_pixel(nx, ny, new_value)?;
                    queue.push_back((nx, ny));
                }
            }
        }
    }

    Ok(filled)
}

/// Label every region by breadth-first search
///
/// Region ids start at 1 and follow the raster order of each region's
/// first pixel.
pub fn floodfill_labels(mask: &Mask, connectivity: ConnectivityType) -> RegionResult<LabelMap> {
    let (width, height) = mask.dimensions();
    let w = width as usize;
    let mut labels = vec![0u32; mask.len()];
    let mut next_id = 0u32;
    let mut queue = VecDeque::new();

    for (sx, sy) in mask.foreground() {
        let start = sy as usize * w + sx as usize;
        if labels[start] != 0 {
            continue;
        }

        next_id = next_id.checked_add(1).ok_or(RegionError::LabelOverflow {
            limit: u64::from(u32::MAX),
        })?;
        labels[start] = next_id;
        queue.push_back((sx, sy));

        while let Some((x, y)) = queue.pop_front() {
            for &(dx, dy) in connectivity.neighbor_offsets() {
                if let Some((nx, ny)) = step(x, y, dx, dy, width, height) {
                    let idx = ny as usize * w + nx as usize;
                    if labels[idx] == 0 && mask.is_foreground(nx, ny) {
                        labels[idx] = next_id;
                        queue.push_back((nx, ny));
                    }
                }
            }
        }
    }

    Ok(LabelMap::from_parts(width, height, labels, next_id))
}
