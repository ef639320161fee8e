//! Whole-scene analysis
//!
//! Loads a scene, normalises it, renders the composites and runs the fire
//! detector, returning everything a viewer needs to show side by side.

use crate::bands::{BandSet, BandSource, REFLECTANCE_SCALE};
use crate::composite::{Composite, composite};
use crate::error::DetectResult;
use crate::fire::{FireDetection, detect_fire, mark_fire};
use crate::params::DetectionParams;
use std::time::Instant;
use wildfire_core::RgbImage;

/// Result of [`analyze_scene`]
#[derive(Debug, Clone)]
pub struct SceneAnalysis {
    /// Normalised bands
    pub bands: BandSet,
    /// True color composite (B04, B03, B02)
    pub true_color: RgbImage,
    /// True color with outer fire in red and core fire in yellow
    pub marked: RgbImage,
    /// Infrared composite (B12, B11, B8A)
    pub infrared: RgbImage,
    /// SWIR composite (B12, B8A, B04)
    pub swir: RgbImage,
    /// NIR-SWIR composite (B8A, B11, B04)
    pub nir_swir: RgbImage,
    /// Fire masks and regions
    pub detection: FireDetection,
}

/// Load, normalise and analyse a scene
pub fn analyze_scene<S: BandSource + ?Sized>(
    source: &S,
    params: &DetectionParams,
) -> DetectResult<SceneAnalysis> {
    let start = Instant::now();
    let bands = BandSet::load(source, REFLECTANCE_SCALE)?.normalized();

    let true_color = composite(&bands, Composite::TrueColor)?;
    let infrared = composite(&bands, Composite::Infrared)?;
    let swir = composite(&bands, Composite::Swir)?;
    let nir_swir = composite(&bands, Composite::NirSwir)?;

    let detection = detect_fire(&bands, params)?;
    let marked = mark_fire(&true_color, &detection.outer, &detection.core)?;

    log::info!(
        "scene analysis: {} fire regions, total {:.2?}",
        detection.region_count(),
        start.elapsed()
    );

    Ok(SceneAnalysis {
        bands,
        true_color,
        marked,
        infrared,
        swir,
        nir_swir,
        detection,
    })
}
