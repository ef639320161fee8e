//! Test fixtures
//!
//! Masks for regression tests, built from ASCII art or from a seeded
//! generator so every run sees the same input.

use crate::error::{TestError, TestResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wildfire_core::Mask;

/// Build a mask from an ASCII pattern
///
/// Each non-blank line is one row. `#` or `1` is foreground, `.` or `0` is
/// background. Leading and trailing whitespace on a line is ignored, so
/// patterns can be indented inside raw string literals.
///
/// # Errors
///
/// Returns [`TestError::Pattern`] for any other character and
/// [`TestError::Core`] if the rows have different lengths.
pub fn mask_from_pattern(pattern: &str) -> TestResult<Mask> {
    let mut rows: Vec<Vec<u8>> = Vec::new();

    for (line_no, line) in pattern
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
    {
        let row = line
            .chars()
            .enumerate()
            .map(|(column, c)| match c {
                '#' | '1' => Ok(1u8),
                '.' | '0' => Ok(0u8),
                found => Err(TestError::Pattern {
                    line: line_no,
                    column,
                    found,
                }),
            })
            .collect::<TestResult<Vec<u8>>>()?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Ok(Mask::new(0, 0)?);
    }
    Ok(Mask::from_rows(&rows)?)
}

/// Generate a random mask
///
/// Each pixel is foreground with probability `density` (clamped to
/// `0.0..=1.0`, NaN counts as 0). The same seed always yields the same mask.
pub fn random_mask(width: u32, height: u32, density: f64, seed: u64) -> TestResult<Mask> {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(Mask::from_fn(width, height, |_, _| rng.random_bool(density))?)
}

/// Checkerboard with foreground where `(x + y)` is even
///
/// Every foreground pixel is its own 4-way region, while the whole
/// foreground is a single 8-way region.
pub fn checkerboard(width: u32, height: u32) -> TestResult<Mask> {
    Ok(Mask::from_fn(width, height, |x, y| (x + y) % 2 == 0)?)
}
