//! Single-image autostereogram synthesis from grayscale depth maps
//!
//! A background strip seeds the left edge of every row, and each subsequent
//! pixel copies one from a depth-dependent distance to its left. Viewed with
//! diverged eyes, the varying repeat period is perceived as depth.

#![forbid(unsafe_code)]

/// Random-dot and tiled background strips
pub mod background;
/// File adapters, command line, configuration and error handling
pub mod io;
/// Exact integer rounding for depth offsets
pub mod math;
/// Pixel buffers and depth maps
pub mod spatial;
/// Strip layout and the row-wise synthesis pass
pub mod synthesis;

pub use io::error::{Result, StereogramError};
pub use spatial::{DepthMap, PixelBuffer, Rgb};
pub use synthesis::{OffsetPolicy, SynthesisConfig, Synthesizer};
