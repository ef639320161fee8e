//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// A pattern string contains an unexpected character
    #[error("invalid pattern at line {line}, column {column}: {found:?}")]
    Pattern {
        line: usize,
        column: usize,
        found: char,
    },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] wildfire_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
