//! Background texture for the repeating pattern

/// Random-dot and tiled strip generators
pub mod strip;

pub use strip::{Background, random_strip, tiled_strip};
