//! Strip generators
//!
//! A strip is one period of the background pattern, `strip_width` columns wide
//! and as tall as the depth map. It seeds the left edge of every output row.

use rand::Rng;

use crate::io::error::Result;
use crate::spatial::buffer::PixelBuffer;

/// Source of the background texture
#[derive(Debug, Clone, Copy)]
pub enum Background<'a> {
    /// Independent uniform noise in every channel
    Random,
    /// Repeat a caller-supplied pattern image
    Tiled(&'a PixelBuffer),
}

impl<'a> Background<'a> {
    /// Pick the tiled background when a tile is given, random otherwise
    pub const fn from_tile(tile: Option<&'a PixelBuffer>) -> Self {
        match tile {
            Some(tile) => Self::Tiled(tile),
            None => Self::Random,
        }
    }

    /// Width of the pattern image, if any
    pub fn tile_width(&self) -> Option<usize> {
        match self {
            Self::Random => None,
            Self::Tiled(tile) => Some(tile.width()),
        }
    }

    /// Generate a strip of the requested size
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds the
    /// supported maximum
    pub fn build<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<PixelBuffer> {
        match self {
            Self::Random => random_strip(width, height, rng),
            Self::Tiled(tile) => tiled_strip(tile, width, height),
        }
    }
}

/// Strip of random dots, each channel uniform over 0..=255
///
/// # Errors
///
/// Returns an error if either dimension is zero or exceeds the
/// supported maximum
pub fn random_strip<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<PixelBuffer> {
    PixelBuffer::from_fn(width, height, |_, _| {
        [
            rng.random_range(0..=u8::MAX),
            rng.random_range(0..=u8::MAX),
            rng.random_range(0..=u8::MAX),
        ]
    })
}

/// Strip filled by repeating `tile` horizontally and vertically
///
/// `strip[x, y] == tile[x % tile_width, y % tile_height]`.
///
/// # Errors
///
/// Returns an error if either dimension is zero or exceeds the
/// supported maximum
pub fn tiled_strip(tile: &PixelBuffer, width: usize, height: usize) -> Result<PixelBuffer> {
    let (tile_width, tile_height) = (tile.width(), tile.height());
    let mut strip = PixelBuffer::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            strip.set(x, y, tile.get(x % tile_width, y % tile_height)?)?;
        }
    }
    Ok(strip)
}
