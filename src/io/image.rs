//! Conversion between files, `image` crate buffers and the synthesis types

use std::path::Path;

use image::{DynamicImage, RgbImage};

use crate::io::error::{Result, StereogramError, invalid_input};
use crate::spatial::buffer::{PixelBuffer, Rgb};
use crate::spatial::depth::DepthMap;

/// Decode an image file into an RGB buffer, dropping any alpha channel
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded, or the image
/// has unsupported dimensions
pub fn load_rgb(path: &Path) -> Result<PixelBuffer> {
    buffer_from_image(&open(path)?)
}

/// Decode an image file into a depth map
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded, or the image
/// has unsupported dimensions
pub fn load_depth_map(path: &Path) -> Result<DepthMap> {
    depth_map_from_image(&open(path)?)
}

fn open(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| StereogramError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Convert any decoded image to an RGB buffer
///
/// # Errors
///
/// Returns an error if the image is empty or exceeds the supported size
pub fn buffer_from_image(img: &DynamicImage) -> Result<PixelBuffer> {
    let rgb = img.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    let pixels: Vec<Rgb> = rgb.pixels().map(|pixel| pixel.0).collect();
    PixelBuffer::from_vec(width, height, pixels)
}

/// Convert any decoded image to depth intensities
///
/// Gray images keep their samples (16-bit samples are scaled to 8 bits);
/// color images go through ITU-R 601-2 luma.
///
/// # Errors
///
/// Returns an error if the image is empty or exceeds the supported size
pub fn depth_map_from_image(img: &DynamicImage) -> Result<DepthMap> {
    if img.color().has_color() {
        return Ok(DepthMap::from_rgb(&buffer_from_image(img)?));
    }
    let luma = img.to_luma8();
    let (width, height) = (luma.width() as usize, luma.height() as usize);
    DepthMap::from_vec(width, height, luma.into_raw())
}

/// Convert a buffer into an `image` RGB image
///
/// # Errors
///
/// Returns an error if the buffer dimensions do not fit the encoder
pub fn to_rgb_image(buffer: &PixelBuffer) -> Result<RgbImage> {
    let width = u32::try_from(buffer.width())
        .map_err(|e| invalid_input("width", &buffer.width(), &e))?;
    let height = u32::try_from(buffer.height())
        .map_err(|e| invalid_input("height", &buffer.height(), &e))?;
    let raw: Vec<u8> = buffer.pixels().flatten().copied().collect();
    RgbImage::from_raw(width, height, raw).ok_or_else(|| {
        invalid_input(
            "pixel data",
            &format!("{width}x{height}"),
            &"does not match the image dimensions",
        )
    })
}

/// Encode `buffer` to `output_path`, inferring the format from the extension
///
/// # Errors
///
/// Returns an error if:
/// - The buffer cannot be converted to an RGB image
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_rgb(buffer: &PixelBuffer, output_path: &Path) -> Result<()> {
    let img = to_rgb_image(buffer)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StereogramError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| StereogramError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
