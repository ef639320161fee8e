//! wildfire-detect - Active-fire detection on Sentinel-2 scenes
//!
//! This crate turns six spectral bands into fire masks and fire regions:
//!
//! - Band loading through the [`BandSource`] trait, reflectance scaling and
//!   min-max normalisation ([`BandSet`])
//! - Outer and core fire thresholds ([`outer_fire_mask`], [`core_fire_mask`])
//! - Morphological cleanup and sequential regioning ([`detect_fire`])
//! - False-color composites and fire marking ([`stack_composite`],
//!   [`mark_fire`])
//!
//! # Example
//!
//! ```
//! use wildfire_core::Band;
//! use wildfire_detect::{DetectionParams, InMemoryBands, SpectralBand, analyze_scene};
//!
//! let source = SpectralBand::REQUIRED.into_iter().fold(InMemoryBands::new(), |src, band| {
//!     src.with_band(band, Band::new_with_value(16, 16, 1200.0).unwrap())
//! });
//! let analysis = analyze_scene(&source, &DetectionParams::default()).unwrap();
//! assert_eq!(analysis.detection.region_count(), 0);
//! ```

pub mod bands;
pub mod composite;
mod error;
pub mod fire;
pub mod params;
pub mod scene;

pub use bands::{BandSet, BandSource, InMemoryBands, REFLECTANCE_SCALE, SceneLayout, SpectralBand};
pub use composite::{Composite, DEFAULT_PERCENTILE, composite, stack_composite};
pub use error::{DetectError, DetectResult};
pub use fire::{FireDetection, core_fire_mask, detect_fire, mark_fire, outer_fire_mask};
pub use params::DetectionParams;
pub use scene::{SceneAnalysis, analyze_scene};
