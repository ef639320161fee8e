//! False-color composites
//!
//! Stacks three bands into an RGB image with a percentile contrast
//! stretch: every value is divided by the chosen percentile of all stacked
//! values, clipped to [0, 1] and quantised to 8 bits.

use crate::bands::{BandSet, SpectralBand};
use crate::error::{DetectError, DetectResult};
use wildfire_core::{Band, Error, RgbImage, percentile_of};

/// Percentile used for the contrast stretch
pub const DEFAULT_PERCENTILE: f32 = 98.0;

/// Named band combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Composite {
    /// B04, B03, B02
    TrueColor,
    /// B12, B11, B8A; outer fire is red, core fire yellow
    Infrared,
    /// B12, B8A, B04
    Swir,
    /// B8A, B11, B04
    NirSwir,
}

impl Composite {
    /// Bands mapped to the red, green and blue channels
    pub fn bands(self) -> [SpectralBand; 3] {
        use SpectralBand::*;
        match self {
            Composite::TrueColor => [B04, B03, B02],
            Composite::Infrared => [B12, B11, B8A],
            Composite::Swir => [B12, B8A, B04],
            Composite::NirSwir => [B8A, B11, B04],
        }
    }
}

/// Stack three bands into a contrast-stretched RGB image
///
/// If the percentile is not positive the values are only clipped.
pub fn stack_composite(r: &Band, g: &Band, b: &Band, percentile: f32) -> DetectResult<RgbImage> {
    let dims = r.dimensions();
    for band in [g, b] {
        if band.dimensions() != dims {
            return Err(Error::DimensionMismatch {
                expected: dims,
                actual: band.dimensions(),
            }
            .into());
        }
    }

    let mut image = RgbImage::new(dims.0, dims.1)?;
    if image.data().is_empty() {
        return Ok(image);
    }

    let stacked: Vec<f32> = [r.data(), g.data(), b.data()].concat();
    let stretch = percentile_of(&stacked, percentile)?;
    let divisor = if stretch > 0.0 && stretch.is_finite() {
        stretch
    } else {
        log::debug!("composite: percentile {percentile} is {stretch}, skipping stretch");
        1.0
    };

    let quantize = |v: f32| ((v / divisor).clamp(0.0, 1.0) * 255.0).round() as u8;
    let channels = [r.data(), g.data(), b.data()];
    for (i, px) in image
        .data_mut()
        .chunks_exact_mut(RgbImage::CHANNELS)
        .enumerate()
    {
        for (c, out) in px.iter_mut().enumerate() {
            *out = quantize(channels[c][i]);
        }
    }
    Ok(image)
}

/// Render a named composite with the default stretch
pub fn composite(bands: &BandSet, kind: Composite) -> DetectResult<RgbImage> {
    let [r, g, b] = kind.bands();
    let pick = |band: SpectralBand| bands.get(band).ok_or(DetectError::MissingBand(band));
    stack_composite(pick(r)?, pick(g)?, pick(b)?, DEFAULT_PERCENTILE)
}
