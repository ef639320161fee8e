//! Band - single spectral band
//!
//! `Band` is a 2D array of `f32` reflectance values. Unlike [`Mask`], which
//! only stores 0/1, a band carries the continuous values that thresholding
//! operates on.
//!
//! # Memory Layout
//!
//! Data is stored in row-major order with no padding. The pixel at (x, y)
//! is at index `y * width + x`.
//!
//! # Examples
//!
//! ```
//! use wildfire_core::Band;
//!
//! let band = Band::from_data(2, 2, vec![0.0, 2.0, 4.0, 8.0]).unwrap();
//! let norm = band.normalized();
//! assert_eq!(norm.get_pixel(1, 1), Some(1.0));
//! assert_eq!(band.percentile(50.0).unwrap(), 3.0);
//! ```
//!
//! [`Mask`]: crate::Mask

use crate::error::{Error, Result, grid_len};
use crate::mask::Mask;

/// Floating-point band image
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl Band {
    /// Create a new band with all pixels set to zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0.0)
    }

    /// Create a new band with all pixels set to the specified value
    pub fn new_with_value(width: u32, height: u32, value: f32) -> Result<Self> {
        let len = grid_len(width, height, 1)?;
        Ok(Band {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Create a band from raw data
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if the data length doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        let expected = grid_len(width, height, 1)?;
        if data.len() != expected {
            return Err(Error::DataLength {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Band {
            width,
            height,
            data,
        })
    }

    /// Get the band width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the band height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the band dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get raw row-major data
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get mutable raw row-major data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Get a pixel value, or `None` out of bounds
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Set a pixel value
    pub fn set_pixel(&mut self, x: u32, y: u32, value: f32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[y as usize * self.width as usize + x as usize] = value;
        Ok(())
    }

    /// Minimum value, or `None` for an empty band
    pub fn min(&self) -> Option<f32> {
        self.data.iter().copied().reduce(f32::min)
    }

    /// Maximum value, or `None` for an empty band
    pub fn max(&self) -> Option<f32> {
        self.data.iter().copied().reduce(f32::max)
    }

    /// Apply `f` to every pixel, producing a new band
    pub fn map<F>(&self, f: F) -> Band
    where
        F: Fn(f32) -> f32,
    {
        Band {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Divide every pixel by `scale`.
    ///
    /// Used to turn digital numbers into reflectance (Sentinel-2 L2A
    /// products are stored scaled by 10000).
    pub fn scaled(&self, scale: f32) -> Result<Band> {
        if scale == 0.0 || !scale.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "scale must be finite and non-zero, got {scale}"
            )));
        }
        Ok(self.map(|v| v / scale))
    }

    /// Min-max normalise to [0, 1].
    ///
    /// A constant band is returned unchanged.
    pub fn normalized(&self) -> Band {
        match (self.min(), self.max()) {
            (Some(lo), Some(hi)) if hi - lo > 0.0 => {
                let range = hi - lo;
                self.map(|v| (v - lo) / range)
            }
            _ => self.clone(),
        }
    }

    /// Value at percentile `p` (0..=100) with linear interpolation between
    /// the two nearest ranks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullInput`] for an empty band and
    /// [`Error::InvalidParameter`] if `p` is outside [0, 100].
    pub fn percentile(&self, p: f32) -> Result<f32> {
        percentile_of(&self.data, p)
    }

    /// Mask of pixels for which `pred` holds
    pub fn threshold<F>(&self, pred: F) -> Mask
    where
        F: Fn(f32) -> bool,
    {
        let data = self.data.iter().map(|&v| u8::from(pred(v))).collect();
        Mask::from_raw_parts(self.width, self.height, data)
    }
}

/// Percentile of an arbitrary slice, using linear interpolation between
/// the two nearest ranks.
pub fn percentile_of(values: &[f32], p: f32) -> Result<f32> {
    if values.is_empty() {
        return Err(Error::NullInput("empty band"));
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(Error::InvalidParameter(format!(
            "percentile {p} not in [0.0, 100.0]"
        )));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f32::total_cmp);

    let rank = f64::from(p) / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = (rank - lo as f64) as f32;
    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max() {
        let band = Band::from_data(3, 1, vec![0.5, -1.0, 2.0]).unwrap();
        assert_eq!(band.min(), Some(-1.0));
        assert_eq!(band.max(), Some(2.0));
        assert_eq!(Band::new(0, 0).unwrap().min(), None);
    }

    #[test]
    fn test_normalized_constant_band() {
        let band = Band::new_with_value(2, 2, 0.3).unwrap();
        assert_eq!(band.normalized(), band);
    }

    #[test]
    fn test_normalized_range() {
        let band = Band::from_data(3, 1, vec![10.0, 20.0, 30.0]).unwrap();
        assert_eq!(band.normalized().data(), &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_scaled() {
        let band = Band::from_data(2, 1, vec![5000.0, 10000.0]).unwrap();
        assert_eq!(band.scaled(10000.0).unwrap().data(), &[0.5, 1.0]);
        assert!(band.scaled(0.0).is_err());
    }

    #[test]
    fn test_percentile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile_of(&values, 0.0).unwrap(), 1.0);
        assert_eq!(percentile_of(&values, 100.0).unwrap(), 4.0);
        assert!((percentile_of(&values, 50.0).unwrap() - 2.5).abs() < 1e-6);
        // rank = 0.98 * 3 = 2.94
        assert!((percentile_of(&values, 98.0).unwrap() - 3.94).abs() < 1e-5);
    }

    #[test]
    fn test_percentile_errors() {
        assert!(matches!(percentile_of(&[], 50.0), Err(Error::NullInput(_))));
        assert!(percentile_of(&[1.0], 101.0).is_err());
    }

    #[test]
    fn test_threshold() {
        let band = Band::from_data(3, 1, vec![0.2, 0.7, 0.9]).unwrap();
        let mask = band.threshold(|v| v > 0.6);
        assert_eq!(mask.data(), &[0, 1, 1]);
    }
}
