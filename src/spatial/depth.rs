//! Single-channel depth map
//!
//! Brighter samples are nearer to the viewer and produce larger offsets.

use ndarray::{Array2, ArrayView1, Axis};

use crate::io::error::{Result, StereogramError, invalid_input};
use crate::spatial::buffer::{PixelBuffer, Rgb, validate_dimensions};

/// Read-only grid of 0-255 depth intensities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthMap {
    intensities: Array2<u8>,
}

impl DepthMap {
    /// Build a depth map by evaluating `f(x, y)` for every coordinate
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds the
    /// supported maximum
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> u8,
    {
        validate_dimensions(width, height)?;
        Ok(Self {
            intensities: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        })
    }

    /// Depth map with the same intensity everywhere
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds the
    /// supported maximum
    pub fn uniform(width: usize, height: usize, intensity: u8) -> Result<Self> {
        Self::from_fn(width, height, |_, _| intensity)
    }

    /// Wrap row-major intensity samples
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or `data` does not
    /// hold exactly `width * height` samples
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        validate_dimensions(width, height)?;
        let len = data.len();
        let intensities = Array2::from_shape_vec((height, width), data).map_err(|e| {
            invalid_input(
                "depth data",
                &len,
                &format!("expected {width}x{height} samples: {e}"),
            )
        })?;
        Ok(Self { intensities })
    }

    /// Convert a color buffer using ITU-R 601-2 luma
    pub fn from_rgb(buffer: &PixelBuffer) -> Self {
        Self {
            intensities: buffer.as_array().map(|&pixel| luma(pixel)),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.intensities.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.intensities.nrows()
    }

    /// Intensity at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate lies outside the map
    pub fn get(&self, x: usize, y: usize) -> Result<u8> {
        self.intensities
            .get((y, x))
            .copied()
            .ok_or(StereogramError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
    }

    /// Borrow one row of intensities
    ///
    /// # Errors
    ///
    /// Returns an error if `y` lies outside the map
    pub fn row(&self, y: usize) -> Result<ArrayView1<'_, u8>> {
        if y >= self.height() {
            return Err(StereogramError::OutOfBounds {
                x: 0,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(self.intensities.index_axis(Axis(0), y))
    }

    /// Brightest sample in the map
    pub fn max_intensity(&self) -> u8 {
        self.intensities.iter().copied().max().unwrap_or(0)
    }
}

/// ITU-R 601-2 luma in 16.16 fixed point, rounded to nearest
///
/// Same weights and rounding as Pillow's `L` conversion.
pub const fn luma(pixel: Rgb) -> u8 {
    let [r, g, b] = pixel;
    let weighted = r as u32 * 19_595 + g as u32 * 38_470 + b as u32 * 7_471;
    ((weighted + 0x8000) >> 16) as u8
}
