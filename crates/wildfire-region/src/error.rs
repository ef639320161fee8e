//! Error types for wildfire-region

use thiserror::Error;

/// Errors that can occur during region labeling and coloring
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error (invalid mask, dimension mismatch, ...)
    #[error("core error: {0}")]
    Core(#[from] wildfire_core::Error),

    /// The provisional label counter ran past its integer width
    #[error("provisional label counter overflow: more than {limit} labels")]
    LabelOverflow { limit: u64 },

    /// More regions than distinct non-black colors
    #[error("color space exhausted: {regions} regions but only {available} distinct colors")]
    ColorSpaceExhausted { regions: usize, available: usize },

    /// Invalid seed position
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: u32, y: u32 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
