//! RGB output grid
//!
//! `RgbImage` is the H×W×3 result of region coloring and of band
//! composites. Channels are stored interleaved (`r, g, b`) in row-major
//! order, three bytes per pixel.

use crate::error::{Error, Result, grid_len};
use std::collections::HashSet;

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Background color
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Outer fire marker
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    /// Core fire marker
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);

    /// Create a color from its components
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Components as an array
    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// True for (0, 0, 0)
    #[inline]
    pub fn is_black(self) -> bool {
        self == Self::BLACK
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb { r, g, b }
    }
}

/// Interleaved 8-bit RGB image
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RgbImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbImage {
    /// Number of channels per pixel
    pub const CHANNELS: usize = 3;

    /// Create a black image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the buffer size overflows.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = grid_len(width, height, Self::CHANNELS)?;
        Ok(RgbImage {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Create an image from interleaved row-major data.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = grid_len(width, height, Self::CHANNELS)?;
        if data.len() != expected {
            return Err(Error::DataLength {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(RgbImage {
            width,
            height,
            data,
        })
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the image dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get raw interleaved data
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable raw interleaved data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return its buffer
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the color at (x, y), or `None` out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some(Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Set the color at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgb(&mut self, x: u32, y: u32, color: Rgb) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.offset(x, y);
        self.data[i..i + 3].copy_from_slice(&color.to_array());
        Ok(())
    }

    /// Iterate over every pixel color in raster order
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.data
            .chunks_exact(Self::CHANNELS)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
    }

    /// Set of distinct colors other than black
    pub fn distinct_colors(&self) -> HashSet<Rgb> {
        self.pixels().filter(|c| !c.is_black()).collect()
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * Self::CHANNELS
    }
}
