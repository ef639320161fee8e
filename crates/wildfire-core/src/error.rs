//! Error types for wildfire-core
//!
//! Provides a unified error type for grid construction and access.
//! Validation failures carry the offending coordinates or sizes so that
//! callers can report them without re-scanning the input.

use thiserror::Error;

/// Wildfire core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Grid dimensions whose element count does not fit in memory
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw data length does not match the declared dimensions
    #[error("data length {actual} does not match {width}x{height} (expected {expected})")]
    DataLength {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Two grids that must share dimensions do not
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Rows of a nested input have different lengths
    #[error("ragged rows: row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A mask element is neither 0 nor 1
    #[error("non-binary mask value {value} at ({x}, {y})")]
    NonBinaryValue { x: u32, y: u32, value: u64 },

    /// Coordinates out of bounds
    #[error("index out of bounds: ({x}, {y}) in {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Null or empty input
    #[error("null or empty input: {0}")]
    NullInput(&'static str),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for wildfire-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Number of elements in a `width` x `height` grid, or an error if it
/// cannot be addressed.
pub(crate) fn grid_len(width: u32, height: u32, channels: usize) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(Error::InvalidDimension { width, height })
}
