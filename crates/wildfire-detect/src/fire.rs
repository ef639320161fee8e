//! Active fire detection
//!
//! Fire shows up in two flavours on a SWIR/NIR scene:
//!
//! - Outer fire: bright in B12 but dark in B11 and B8A (rules out clouds
//!   and vegetation). Appears red in the infrared composite.
//! - Core fire: bright in both B12 and B11, not white in the visible bands,
//!   and close to outer fire. Appears yellow.
//!
//! The union of both masks is cleaned with a closing and an opening, then
//! split into regions by sequential regioning.

use crate::bands::BandSet;
use crate::error::DetectResult;
use crate::params::DetectionParams;
use std::time::Instant;
use wildfire_core::{Error, Mask, Rgb, RgbImage};
use wildfire_morph::{close_brick, open_brick};
use wildfire_region::{LabeledRegions, label_regions_with};

/// Every intermediate mask of a detection run
#[derive(Debug, Clone)]
pub struct FireDetection {
    /// Outer (red) fire pixels
    pub outer: Mask,
    /// Core (yellow) fire pixels
    pub core: Mask,
    /// `outer | core`
    pub combined: Mask,
    /// Combined mask after closing
    pub closed: Mask,
    /// Closed mask after opening; input of region labeling
    pub opened: Mask,
    /// Colored fire regions
    pub regions: LabeledRegions,
}

impl FireDetection {
    /// Number of fire regions
    pub fn region_count(&self) -> usize {
        self.regions.region_count
    }
}

fn ensure_same_size(expected: (u32, u32), actual: (u32, u32)) -> DetectResult<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch { expected, actual }.into());
    }
    Ok(())
}

/// Outer fire mask: `b12 > outer_b12_min && b11 < outer_b11_max && b8a < outer_b8a_max`
pub fn outer_fire_mask(bands: &BandSet, params: &DetectionParams) -> DetectResult<Mask> {
    let (w, h) = bands.dimensions();
    let (b12, b11, b8a) = (bands.b12.data(), bands.b11.data(), bands.b8a.data());
    let width = w as usize;

    let mask = Mask::from_fn(w, h, |x, y| {
        let i = y as usize * width + x as usize;
        b12[i] > params.outer_b12_min
            && b11[i] < params.outer_b11_max
            && b8a[i] < params.outer_b8a_max
    })?;
    Ok(mask)
}

/// Core fire mask
///
/// A pixel is core fire if B12 and B11 are both bright, all three visible
/// bands stay below `core_visible_max`, and the pixel lies inside
/// `search_area` (the closed outer fire mask).
pub fn core_fire_mask(
    bands: &BandSet,
    search_area: &Mask,
    params: &DetectionParams,
) -> DetectResult<Mask> {
    let (w, h) = bands.dimensions();
    ensure_same_size((w, h), search_area.dimensions())?;

    let (b12, b11) = (bands.b12.data(), bands.b11.data());
    let (b04, b03, b02) = (bands.b04.data(), bands.b03.data(), bands.b02.data());
    let area = search_area.data();
    let width = w as usize;
    let vis = params.core_visible_max;

    let mask = Mask::from_fn(w, h, |x, y| {
        let i = y as usize * width + x as usize;
        b12[i] > params.core_b12_min
            && b11[i] > params.core_b11_min
            && area[i] == 1
            && b04[i] < vis
            && b03[i] < vis
            && b02[i] < vis
    })?;
    Ok(mask)
}

/// Run the full detection pipeline on normalised bands
///
/// 1. Outer fire mask
/// 2. Closing with a `search_brick` square gives the core search area
/// 3. Core fire mask inside the search area
/// 4. `outer | core`, closed with `close_brick`, opened with `open_brick`
/// 5. Sequential regioning of the result
pub fn detect_fire(bands: &BandSet, params: &DetectionParams) -> DetectResult<FireDetection> {
    params.validate()?;
    let start = Instant::now();

    let outer = outer_fire_mask(bands, params)?;
    log::debug!("outer fire: {} pixels", outer.count_foreground());

    let search_area = close_brick(&outer, params.search_brick, params.search_brick)?;
    let core = core_fire_mask(bands, &search_area, params)?;
    log::debug!("core fire: {} pixels", core.count_foreground());

    let combined = outer.union(&core)?;
    let closed = close_brick(&combined, params.close_brick, params.close_brick)?;
    let opened = open_brick(&closed, params.open_brick, params.open_brick)?;
    log::debug!(
        "cleanup: {} combined, {} closed, {} opened pixels",
        combined.count_foreground(),
        closed.count_foreground(),
        opened.count_foreground()
    );

    let regions = label_regions_with(&opened, &params.regions)?;

    log::info!(
        "fire detection: {} regions in {:.2?} ({}x{})",
        regions.region_count,
        start.elapsed(),
        bands.dimensions().0,
        bands.dimensions().1
    );

    Ok(FireDetection {
        outer,
        core,
        combined,
        closed,
        opened,
        regions,
    })
}

/// Mark fire pixels on a color image
///
/// Outer fire is painted red, then core fire yellow on top.
pub fn mark_fire(image: &RgbImage, outer: &Mask, core: &Mask) -> DetectResult<RgbImage> {
    ensure_same_size(image.dimensions(), outer.dimensions())?;
    ensure_same_size(image.dimensions(), core.dimensions())?;

    let mut marked = image.clone();
    for (x, y) in outer.foreground() {
        marked.set_rgb(x, y, Rgb::RED)?;
    }
    for (x, y) in core.foreground() {
        marked.set_rgb(x, y, Rgb::YELLOW)?;
    }
    Ok(marked)
}
