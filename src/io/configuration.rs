//! Synthesis constants and runtime configuration defaults

/// Default number of distinguishable depth steps
pub const DEFAULT_LEVELS: usize = 48;

// Strip count is floor(width * 3/4 / levels); strips stay wider than `levels`
/// Numerator of the fraction of the depth map width divided among strips
pub const STRIP_FRACTION_NUMERATOR: usize = 3;
/// Denominator of the fraction of the depth map width divided among strips
pub const STRIP_FRACTION_DENOMINATOR: usize = 4;

/// Maximum intensity of a depth map sample
pub const MAX_DEPTH_INTENSITY: u8 = u8::MAX;

/// Strip count used by the legacy layout when no tile is supplied
pub const LEGACY_STRIP_COUNT: usize = 8;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed buffer dimension
pub const MAX_BUFFER_DIMENSION: usize = 65_535;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_stereo";
/// Extension used when the depth map path has none
pub const DEFAULT_OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
