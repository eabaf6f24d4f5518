//! Integer rounding helpers used to turn depth intensities into offsets
//!
//! Offsets are computed without floating point so that the same intensity
//! always lands on the same column regardless of platform.

use crate::io::configuration::MAX_DEPTH_INTENSITY;

/// Divide `numerator` by `denominator`, rounding to the nearest integer with
/// ties going to the even neighbour
///
/// Returns `None` when `denominator` is zero.
pub const fn div_round_half_even(numerator: usize, denominator: usize) -> Option<usize> {
    if denominator == 0 {
        return None;
    }
    Some(round_half_even(
        numerator / denominator,
        numerator % denominator,
        denominator,
    ))
}

const fn round_half_even(quotient: usize, remainder: usize, denominator: usize) -> usize {
    let twice = remainder * 2;
    if twice > denominator || (twice == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// Depth offset for the scaled policy: `round(intensity * levels / 255)`
///
/// The divisor is odd, so an integer intensity never produces an exact
/// half and the tie rule never fires here.
pub const fn scaled_offset(intensity: u8, levels: usize) -> usize {
    match div_round_half_even(intensity as usize * levels, MAX_DEPTH_INTENSITY as usize) {
        Some(offset) => offset,
        None => 0,
    }
}
