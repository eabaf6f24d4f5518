//! Exact integer arithmetic for depth offsets

/// Integer division with round-half-to-even
pub mod rounding;
