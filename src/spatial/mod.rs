//! Pixel and depth grids
//!
//! This module contains the data model shared by every stage:
//! - RGB pixel buffers with bounds-checked access
//! - Single-channel depth maps and luminance conversion

/// RGB pixel buffer
pub mod buffer;
/// Depth map intensities
pub mod depth;

pub use buffer::{PixelBuffer, Rgb};
pub use depth::DepthMap;
