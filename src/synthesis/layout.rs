//! Strip geometry and depth offset policies
//!
//! Two layouts are supported behind one configuration:
//!
//! - **Scaled** (default): `floor(width * 3/4 / levels)` strips, offsets
//!   `round(intensity * levels / 255)`, usually padded by one strip on each
//!   side of the depth map.
//! - **Truncated** (legacy): eight strips, or strips as wide as the tile,
//!   offsets `intensity / strip_count`, usually unpadded so the output is as
//!   wide as the depth map.

use std::ops::Range;

use crate::io::configuration::{
    DEFAULT_LEVELS, LEGACY_STRIP_COUNT, STRIP_FRACTION_DENOMINATOR, STRIP_FRACTION_NUMERATOR,
};
use crate::io::error::{Result, invalid_input};
use crate::math::rounding::scaled_offset;
use crate::spatial::depth::DepthMap;

/// How depth intensities map to horizontal offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetPolicy {
    /// `round(intensity * levels / 255)`, at most `levels` columns
    Scaled {
        /// Number of distinguishable depth steps
        levels: usize,
    },
    /// `intensity / strip_count` with integer division
    Truncated,
}

impl Default for OffsetPolicy {
    fn default() -> Self {
        Self::Scaled {
            levels: DEFAULT_LEVELS,
        }
    }
}

/// Runtime options for a synthesis run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Depth to offset mapping
    pub offset_policy: OffsetPolicy,
    /// Surround the depth map with one strip on each side
    pub padding: bool,
    /// Distribute rows across the rayon thread pool
    pub parallel: bool,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            offset_policy: OffsetPolicy::default(),
            padding: true,
            parallel: true,
        }
    }
}

impl SynthesisConfig {
    /// Padded, scaled layout with the given number of depth levels
    pub const fn with_levels(levels: usize) -> Self {
        Self {
            offset_policy: OffsetPolicy::Scaled { levels },
            padding: true,
            parallel: true,
        }
    }

    /// Unpadded, truncated layout kept for compatibility with older output
    pub const fn legacy() -> Self {
        Self {
            offset_policy: OffsetPolicy::Truncated,
            padding: false,
            parallel: true,
        }
    }

    /// Same configuration with row parallelism switched on or off
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Resolved geometry for one depth map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripLayout {
    /// Width of the source depth map
    pub depth_width: usize,
    /// Number of strips the depth map width is divided into
    pub strip_count: usize,
    /// Width of one background strip
    pub strip_width: usize,
    /// Whether the output carries a strip of padding on each side
    pub padding: bool,
    policy: OffsetPolicy,
}

impl StripLayout {
    /// Compute the strip geometry for a depth map of width `depth_width`
    ///
    /// `tile_width` only affects the truncated policy, where strips are as
    /// wide as the tile. Offsets are not checked against the strip width
    /// here; see [`StripLayout::for_depth`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `levels` is zero
    /// - The depth map is too narrow to hold a single strip
    /// - The tile is wider than the depth map (truncated policy)
    pub fn new(
        depth_width: usize,
        policy: OffsetPolicy,
        padding: bool,
        tile_width: Option<usize>,
    ) -> Result<Self> {
        let (strip_count, strip_width) = match policy {
            OffsetPolicy::Scaled { levels } => scaled_geometry(depth_width, levels)?,
            OffsetPolicy::Truncated => truncated_geometry(depth_width, tile_width)?,
        };

        Ok(Self {
            depth_width,
            strip_count,
            strip_width,
            padding,
            policy,
        })
    }

    /// Compute the geometry for `depth` and check its brightest sample
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry is invalid (see [`StripLayout::new`])
    /// or the offset of the brightest sample exceeds the strip width
    pub fn for_depth(
        depth: &DepthMap,
        policy: OffsetPolicy,
        padding: bool,
        tile_width: Option<usize>,
    ) -> Result<Self> {
        let layout = Self::new(depth.width(), policy, padding, tile_width)?;
        layout.check_offsets(depth.max_intensity())?;
        Ok(layout)
    }

    /// Check that no intensity up to `max_intensity` reaches past its strip
    ///
    /// Scaled offsets always fit. Truncated offsets only fit narrow maps
    /// with shallow enough depth.
    ///
    /// # Errors
    ///
    /// Returns an error if the offset for `max_intensity` exceeds the strip
    /// width
    pub fn check_offsets(&self, max_intensity: u8) -> Result<()> {
        let max_offset = self.offset(max_intensity);
        if max_offset > self.strip_width {
            return Err(invalid_input(
                "strip width",
                &self.strip_width,
                &format!(
                    "must be at least the largest depth offset ({max_offset}); \
                     use a wider or shallower depth map"
                ),
            ));
        }
        Ok(())
    }

    /// Offset policy this layout was built for
    pub const fn policy(&self) -> OffsetPolicy {
        self.policy
    }

    /// Width of the synthesized image
    pub const fn output_width(&self) -> usize {
        if self.padding {
            self.depth_width + 2 * self.strip_width
        } else {
            self.depth_width
        }
    }

    /// Horizontal offset for a depth intensity
    pub const fn offset(&self, intensity: u8) -> usize {
        match self.policy {
            OffsetPolicy::Scaled { levels } => scaled_offset(intensity, levels),
            // strip_count is non-zero for every constructed layout
            OffsetPolicy::Truncated => match (intensity as usize).checked_div(self.strip_count) {
                Some(offset) => offset,
                None => 0,
            },
        }
    }

    /// Depth map columns that drive the main pass
    ///
    /// Unpadded layouts overwrite the first strip of the depth map with
    /// background, so those columns carry no depth.
    pub const fn depth_columns(&self) -> Range<usize> {
        if self.padding {
            0..self.depth_width
        } else {
            self.strip_width..self.depth_width
        }
    }

    /// Output column written for depth column `x`
    pub const fn target_column(&self, x: usize) -> usize {
        if self.padding { x + self.strip_width } else { x }
    }

    /// Output column copied into `target` for a given offset
    ///
    /// `target` is never left of the first strip, and a checked layout keeps
    /// the offset within the strip width, so the source is always at or left
    /// of the target.
    pub const fn source_column(&self, target: usize, offset: usize) -> usize {
        target - self.strip_width + offset
    }

    /// Output columns of the right-hand padding strip
    pub const fn right_padding(&self) -> Range<usize> {
        if self.padding {
            let start = self.depth_width + self.strip_width;
            start..start + self.strip_width
        } else {
            0..0
        }
    }
}

fn scaled_geometry(depth_width: usize, levels: usize) -> Result<(usize, usize)> {
    if levels == 0 {
        return Err(invalid_input("levels", &levels, &"must be at least 1"));
    }
    let divisor = STRIP_FRACTION_DENOMINATOR
        .checked_mul(levels)
        .ok_or_else(|| invalid_input("levels", &levels, &"is too large"))?;
    let strip_count = depth_width
        .checked_mul(STRIP_FRACTION_NUMERATOR)
        .ok_or_else(|| invalid_input("depth map width", &depth_width, &"is too large"))?
        / divisor;
    if strip_count == 0 {
        let minimum = divisor.div_ceil(STRIP_FRACTION_NUMERATOR);
        return Err(invalid_input(
            "depth map width",
            &depth_width,
            &format!("too narrow for {levels} levels; needs at least {minimum} columns"),
        ));
    }
    Ok((strip_count, depth_width / strip_count))
}

fn truncated_geometry(depth_width: usize, tile_width: Option<usize>) -> Result<(usize, usize)> {
    let (strip_count, strip_width) = match tile_width {
        Some(tile_width) => {
            let strip_count = depth_width.checked_div(tile_width).unwrap_or(0);
            if strip_count == 0 {
                return Err(invalid_input(
                    "tile width",
                    &tile_width,
                    &format!("must be between 1 and the depth map width ({depth_width})"),
                ));
            }
            (strip_count, tile_width)
        }
        None => (LEGACY_STRIP_COUNT, depth_width / LEGACY_STRIP_COUNT),
    };
    if strip_width == 0 {
        return Err(invalid_input(
            "depth map width",
            &depth_width,
            &format!("too narrow for {strip_count} strips"),
        ));
    }
    Ok((strip_count, strip_width))
}
