//! Dense RGB pixel grid shared by every synthesis stage
//!
//! Storage is an `ndarray` matrix indexed `(row, col)`, while the public API
//! speaks in image coordinates `(x, y)`. Every accessor is bounds-checked and
//! reports an error instead of touching a neighbouring row.

use ndarray::iter::AxisIterMut;
use ndarray::{Array2, ArrayView1, ArrayViewMut1, Axis, Ix1};

use crate::io::configuration::MAX_BUFFER_DIMENSION;
use crate::io::error::{Result, StereogramError, invalid_input};

/// A single RGB triple
pub type Rgb = [u8; 3];

/// Fill value for freshly allocated buffers
pub const BLACK: Rgb = [0, 0, 0];

/// Owned, fully initialised grid of RGB pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Array2<Rgb>,
}

impl PixelBuffer {
    /// Allocate a black buffer of the given size
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds the
    /// supported maximum
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::filled(width, height, BLACK)
    }

    /// Allocate a buffer with every pixel set to `color`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds the
    /// supported maximum
    pub fn filled(width: usize, height: usize, color: Rgb) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            pixels: Array2::from_elem((height, width), color),
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every coordinate
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds the
    /// supported maximum
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Rgb,
    {
        validate_dimensions(width, height)?;
        Ok(Self {
            pixels: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        })
    }

    /// Wrap row-major pixel data
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or `data` does not
    /// hold exactly `width * height` pixels
    pub fn from_vec(width: usize, height: usize, data: Vec<Rgb>) -> Result<Self> {
        validate_dimensions(width, height)?;
        let len = data.len();
        let pixels = Array2::from_shape_vec((height, width), data).map_err(|e| {
            invalid_input(
                "pixel data",
                &len,
                &format!("expected {width}x{height} pixels: {e}"),
            )
        })?;
        Ok(Self { pixels })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Read the pixel at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate lies outside the buffer
    pub fn get(&self, x: usize, y: usize) -> Result<Rgb> {
        self.pixels
            .get((y, x))
            .copied()
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Overwrite the pixel at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate lies outside the buffer
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) -> Result<()> {
        let error = self.out_of_bounds(x, y);
        let pixel = self.pixels.get_mut((y, x)).ok_or(error)?;
        *pixel = color;
        Ok(())
    }

    /// Borrow one row
    ///
    /// # Errors
    ///
    /// Returns an error if `y` lies outside the buffer
    pub fn row(&self, y: usize) -> Result<ArrayView1<'_, Rgb>> {
        if y >= self.height() {
            return Err(self.out_of_bounds(0, y));
        }
        Ok(self.pixels.index_axis(Axis(0), y))
    }

    /// Row-major pixels, each row left to right
    pub fn pixels(&self) -> impl Iterator<Item = &Rgb> {
        self.pixels.iter()
    }

    pub(crate) const fn as_array(&self) -> &Array2<Rgb> {
        &self.pixels
    }

    /// Mutable row views, top to bottom
    pub(crate) fn rows_mut(&mut self) -> AxisIterMut<'_, Rgb, Ix1> {
        self.pixels.axis_iter_mut(Axis(0))
    }

    /// Consume the buffer and return row-major pixel data
    pub fn into_vec(self) -> Vec<Rgb> {
        let (data, _offset) = self.pixels.into_raw_vec_and_offset();
        data
    }

    const fn out_of_bounds_error(
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> StereogramError {
        StereogramError::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> StereogramError {
        Self::out_of_bounds_error(x, y, self.width(), self.height())
    }
}

/// Mutable view of one buffer row with bounds-checked column access
pub(crate) struct RowWriter<'a> {
    row: ArrayViewMut1<'a, Rgb>,
    y: usize,
    height: usize,
}

impl<'a> RowWriter<'a> {
    pub(crate) const fn new(row: ArrayViewMut1<'a, Rgb>, y: usize, height: usize) -> Self {
        Self { row, y, height }
    }

    /// Overwrite column `target`
    pub(crate) fn write(&mut self, target: usize, color: Rgb) -> Result<()> {
        let error = self.out_of_bounds(target);
        let pixel = self.row.get_mut(target).ok_or(error)?;
        *pixel = color;
        Ok(())
    }

    /// Copy column `source` into column `target`
    pub(crate) fn copy(&mut self, source: usize, target: usize) -> Result<()> {
        let color = self
            .row
            .get(source)
            .copied()
            .ok_or_else(|| self.out_of_bounds(source))?;
        self.write(target, color)
    }

    fn out_of_bounds(&self, x: usize) -> StereogramError {
        PixelBuffer::out_of_bounds_error(x, self.y, self.row.len(), self.height)
    }
}

/// Reject empty or oversized buffer dimensions
///
/// # Errors
///
/// Returns an error naming the first offending dimension
pub fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    for (parameter, value) in [("width", width), ("height", height)] {
        if value == 0 {
            return Err(invalid_input(parameter, &value, &"must be at least 1"));
        }
        if value > MAX_BUFFER_DIMENSION {
            return Err(invalid_input(
                parameter,
                &value,
                &format!("exceeds maximum of {MAX_BUFFER_DIMENSION}"),
            ));
        }
    }
    Ok(())
}
