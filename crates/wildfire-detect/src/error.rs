//! Error types for wildfire-detect

use crate::bands::SpectralBand;
use thiserror::Error;

/// Errors that can occur while loading bands and detecting fire
#[derive(Debug, Error)]
pub enum DetectError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] wildfire_core::Error),

    /// Region labeling error
    #[error("region error: {0}")]
    Region(#[from] wildfire_region::RegionError),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] wildfire_morph::MorphError),

    /// A required band is not available from the source
    #[error("missing band: {0}")]
    MissingBand(SpectralBand),

    /// A band does not share the scene dimensions
    #[error("band {band} is {}x{}, expected {}x{}", .actual.0, .actual.1, .expected.0, .expected.1)]
    BandSizeMismatch {
        band: SpectralBand,
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for detection operations
pub type DetectResult<T> = Result<T, DetectError>;
