//! Row-wise autostereogram synthesis
//!
//! Every output row starts with one strip of background. Each following
//! column copies the pixel `strip_width - offset` columns to its left, so the
//! pattern repeats with a period that shrinks where the depth map is bright.
//! Rows never read each other, which lets the main pass run one row per task.

use log::debug;
use ndarray::parallel::prelude::*;
use ndarray::{ArrayView1, ArrayViewMut1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::background::strip::Background;
use crate::io::error::Result;
use crate::spatial::buffer::{PixelBuffer, Rgb, RowWriter};
use crate::spatial::depth::DepthMap;
use crate::synthesis::layout::{StripLayout, SynthesisConfig};

/// Receives a notification whenever an output row is complete
///
/// Rows may complete out of order and from several threads.
pub trait RowObserver: Sync {
    /// Called once per finished row
    fn row_completed(&self, y: usize);
}

impl RowObserver for () {
    fn row_completed(&self, _y: usize) {}
}

/// Seeded stereogram generator
pub struct Synthesizer {
    config: SynthesisConfig,
    rng: StdRng,
}

impl Synthesizer {
    /// Create a synthesizer whose random backgrounds are reproducible
    pub fn new(config: SynthesisConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a synthesizer seeded from operating system entropy
    pub fn from_entropy(config: SynthesisConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Active configuration
    pub const fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Strip geometry that would be used for `depth`
    ///
    /// # Errors
    ///
    /// Returns an error if the depth map and configuration cannot produce
    /// a valid layout, including legacy offsets too deep for the strips
    pub fn layout(&self, depth: &DepthMap, tile: Option<&PixelBuffer>) -> Result<StripLayout> {
        StripLayout::for_depth(
            depth,
            self.config.offset_policy,
            self.config.padding,
            tile.map(PixelBuffer::width),
        )
    }

    /// Render a stereogram, tiling `tile` as background when given
    ///
    /// # Errors
    ///
    /// Returns an error if the depth map is too narrow for the configured
    /// layout or the tile does not fit it
    pub fn synthesize(
        &mut self,
        depth: &DepthMap,
        tile: Option<&PixelBuffer>,
    ) -> Result<PixelBuffer> {
        self.synthesize_observed(depth, tile, &())
    }

    /// Render a stereogram, reporting each completed row to `observer`
    ///
    /// # Errors
    ///
    /// Returns an error if the depth map is too narrow for the configured
    /// layout or the tile does not fit it
    pub fn synthesize_observed<O: RowObserver + ?Sized>(
        &mut self,
        depth: &DepthMap,
        tile: Option<&PixelBuffer>,
        observer: &O,
    ) -> Result<PixelBuffer> {
        synthesize_observed(
            depth,
            Background::from_tile(tile),
            &self.config,
            &mut self.rng,
            observer,
        )
    }
}

/// Render a stereogram from `depth` over the given background
///
/// # Errors
///
/// Returns an error if the depth map is too narrow for the configured
/// layout or the tile does not fit it
pub fn synthesize<R: Rng + ?Sized>(
    depth: &DepthMap,
    background: Background<'_>,
    config: &SynthesisConfig,
    rng: &mut R,
) -> Result<PixelBuffer> {
    synthesize_observed(depth, background, config, rng, &())
}

/// Render a stereogram, reporting each completed row to `observer`
///
/// # Errors
///
/// Returns an error if the depth map is too narrow for the configured
/// layout or the tile does not fit it
pub fn synthesize_observed<R: Rng + ?Sized, O: RowObserver + ?Sized>(
    depth: &DepthMap,
    background: Background<'_>,
    config: &SynthesisConfig,
    rng: &mut R,
    observer: &O,
) -> Result<PixelBuffer> {
    let layout = StripLayout::for_depth(
        depth,
        config.offset_policy,
        config.padding,
        background.tile_width(),
    )?;
    let height = depth.height();

    debug!(
        "Layout: {} strips of {} px, output {}x{height}, {:?}",
        layout.strip_count,
        layout.strip_width,
        layout.output_width(),
        layout.policy()
    );

    let strip = background.build(layout.strip_width, height, rng)?;
    let mut output = PixelBuffer::new(layout.output_width(), height)?;

    let fill = |(y, row): (usize, ArrayViewMut1<'_, Rgb>)| -> Result<()> {
        let mut writer = RowWriter::new(row, y, height);
        fill_row(&mut writer, &layout, strip.row(y)?, depth.row(y)?)?;
        observer.row_completed(y);
        Ok(())
    };

    if config.parallel {
        output.rows_mut().into_par_iter().enumerate().try_for_each(fill)?;
    } else {
        output.rows_mut().enumerate().try_for_each(fill)?;
    }

    Ok(output)
}

/// Fill one output row strictly left to right
fn fill_row(
    writer: &mut RowWriter<'_>,
    layout: &StripLayout,
    strip_row: ArrayView1<'_, Rgb>,
    depth_row: ArrayView1<'_, u8>,
) -> Result<()> {
    for (x, &color) in strip_row.iter().enumerate() {
        writer.write(x, color)?;
    }

    let columns = layout.depth_columns();
    let skipped = columns.start;
    for (x, &intensity) in columns.zip(depth_row.iter().skip(skipped)) {
        let target = layout.target_column(x);
        writer.copy(layout.source_column(target, layout.offset(intensity)), target)?;
    }

    for target in layout.right_padding() {
        writer.copy(target - layout.strip_width, target)?;
    }

    Ok(())
}
