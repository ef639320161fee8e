//! Mask - binary foreground/background grid
//!
//! A `Mask` is the input of sequential regioning and the currency of the
//! morphology and thresholding stages. Every element is exactly 0
//! (background) or 1 (foreground); constructors that accept arbitrary
//! values reject anything else before any processing happens.
//!
//! # Memory Layout
//!
//! One `u8` per pixel in row-major order with no padding. The pixel at
//! (x, y) is at index `y * width + x`. Zero-sized masks are allowed.
//!
//! # Examples
//!
//! ```
//! use wildfire_core::Mask;
//!
//! let mask = Mask::from_rows(&[[1u8, 0, 1], [0, 1, 0]]).unwrap();
//! assert_eq!(mask.dimensions(), (3, 2));
//! assert_eq!(mask.count_foreground(), 3);
//!
//! assert!(Mask::from_rows(&[[0u8, 2]]).is_err());
//! ```

use crate::error::{Error, Result, grid_len};

/// Binary image grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Mask {
    /// Create a new mask with every pixel set to background.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width * height` overflows.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = grid_len(width, height, 1)?;
        Ok(Mask {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Create a mask by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> bool,
    {
        let mut mask = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                if f(x, y) {
                    mask.data[y as usize * width as usize + x as usize] = 1;
                }
            }
        }
        Ok(mask)
    }

    /// Create a mask from row-major `u8` data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if `data` does not hold exactly
    /// `width * height` elements, or [`Error::NonBinaryValue`] for the first
    /// element that is not 0 or 1.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = grid_len(width, height, 1)?;
        if data.len() != expected {
            return Err(Error::DataLength {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        if let Some(i) = data.iter().position(|&v| v > 1) {
            let (x, y) = index_to_xy(i, width);
            return Err(Error::NonBinaryValue {
                x,
                y,
                value: u64::from(data[i]),
            });
        }

        Ok(Mask {
            width,
            height,
            data,
        })
    }

    /// Create a mask from row-major values of any unsigned integer type.
    ///
    /// This is the entry point for label-width buffers (e.g. `u16` arrays
    /// produced by thresholding) that must be checked for binarity.
    pub fn from_values<T>(width: u32, height: u32, values: &[T]) -> Result<Self>
    where
        T: Copy + Into<u64>,
    {
        let expected = grid_len(width, height, 1)?;
        if values.len() != expected {
            return Err(Error::DataLength {
                width,
                height,
                expected,
                actual: values.len(),
            });
        }

        let mut data = Vec::with_capacity(expected);
        for (i, &v) in values.iter().enumerate() {
            match v.into() {
                0 => data.push(0),
                1 => data.push(1),
                value => {
                    let (x, y) = index_to_xy(i, width);
                    return Err(Error::NonBinaryValue { x, y, value });
                }
            }
        }

        Ok(Mask {
            width,
            height,
            data,
        })
    }

    /// Create a mask from a slice of rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRows`] if rows differ in length and
    /// [`Error::NonBinaryValue`] for any element other than 0 or 1.
    pub fn from_rows<R, T>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: Copy + Into<u64>,
    {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if let Some((row, r)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.as_ref().len() != width)
        {
            return Err(Error::RaggedRows {
                row,
                expected: width,
                actual: r.as_ref().len(),
            });
        }

        let w = u32::try_from(width)
            .map_err(|_| Error::InvalidParameter(format!("row length {width} exceeds u32")))?;
        let h = u32::try_from(rows.len()).map_err(|_| {
            Error::InvalidParameter(format!("row count {} exceeds u32", rows.len()))
        })?;

        let flat: Vec<T> = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().copied())
            .collect();
        Self::from_values(w, h, &flat)
    }

    /// Wrap data that is already binary and `width * height` long.
    pub(crate) fn from_raw_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        debug_assert!(data.iter().all(|&v| v <= 1));
        Mask {
            width,
            height,
            data,
        }
    }

    /// Get the mask width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the mask height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the mask dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the mask has no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get raw row-major data
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get one row of the mask.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// True if (x, y) is inside the mask and foreground.
    #[inline]
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.get_pixel(x, y) == Some(1)
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds
    /// and [`Error::NonBinaryValue`] if `value` is not 0 or 1.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        if value > 1 {
            return Err(Error::NonBinaryValue {
                x,
                y,
                value: u64::from(value),
            });
        }
        self.data[y as usize * self.width as usize + x as usize] = value;
        Ok(())
    }

    /// Number of foreground pixels
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v == 1).count()
    }

    /// Iterate over the coordinates of all foreground pixels in raster order.
    pub fn foreground(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width;
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 1)
            .map(move |(i, _)| index_to_xy(i, width))
    }

    /// Pixel-wise OR of two masks of equal size.
    pub fn union(&self, other: &Mask) -> Result<Mask> {
        self.combine(other, |a, b| a | b)
    }

    /// Pixel-wise AND of two masks of equal size.
    pub fn intersect(&self, other: &Mask) -> Result<Mask> {
        self.combine(other, |a, b| a & b)
    }

    /// Pixel-wise inversion.
    pub fn invert(&self) -> Mask {
        Mask {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| v ^ 1).collect(),
        }
    }

    fn combine<F>(&self, other: &Mask, op: F) -> Result<Mask>
    where
        F: Fn(u8, u8) -> u8,
    {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(Mask {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| op(a, b))
                .collect(),
        })
    }
}

#[inline]
fn index_to_xy(i: usize, width: u32) -> (u32, u32) {
    let w = width as usize;
    ((i % w) as u32, (i / w) as u32)
}
