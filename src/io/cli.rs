//! Command-line interface for turning one depth map into an autostereogram

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use log::info;

use crate::io::configuration::{DEFAULT_LEVELS, DEFAULT_OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::Result;
use crate::io::image::{load_depth_map, load_rgb, save_rgb};
use crate::io::progress::ProgressManager;
use crate::synthesis::layout::{OffsetPolicy, SynthesisConfig};
use crate::synthesis::synthesizer::Synthesizer;

#[derive(Parser, Debug)]
#[command(name = "autostereogram")]
#[command(
    author,
    version,
    about = "Create an autostereogram from a provided depth map"
)]
/// Command-line arguments for the stereogram tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// The depth map from which to compute the autostereogram
    #[arg(value_name = "DEPTHMAP")]
    pub depth_map: PathBuf,

    /// Output path (defaults to <DEPTHMAP>_stereo.<ext> in the current directory)
    #[arg(value_name = "OUTFILE")]
    pub outfile: Option<PathBuf>,

    /// An image to tile as the background for the autostereogram
    #[arg(short, long, value_name = "TILE")]
    pub tile: Option<PathBuf>,

    /// Number of distinguishable depth levels (not used by --legacy)
    #[arg(short, long, default_value_t = DEFAULT_LEVELS, conflicts_with = "legacy")]
    pub levels: usize,

    /// Random seed for a reproducible random-dot background
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Use the legacy layout: truncated offsets and no padding strips
    #[arg(long)]
    pub legacy: bool,

    /// Process rows on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Synthesis options selected by the flags
    pub const fn synthesis_config(&self) -> SynthesisConfig {
        let config = if self.legacy {
            SynthesisConfig::legacy()
        } else {
            SynthesisConfig {
                offset_policy: OffsetPolicy::Scaled {
                    levels: self.levels,
                },
                padding: true,
                parallel: true,
            }
        };
        config.parallel(!self.sequential)
    }

    /// Where the stereogram will be written
    pub fn output_path(&self) -> PathBuf {
        self.outfile
            .clone()
            .unwrap_or_else(|| derive_output_path(&self.depth_map))
    }
}

/// `<stem>_stereo.<extension>` in the current directory
///
/// A depth map without an extension produces a PNG.
pub fn derive_output_path(depth_map: &Path) -> PathBuf {
    let stem = depth_map.file_stem().unwrap_or_default();
    let extension = depth_map
        .extension()
        .map_or_else(|| DEFAULT_OUTPUT_EXTENSION.into(), |ext| ext.to_string_lossy());
    PathBuf::from(format!(
        "{}{OUTPUT_SUFFIX}.{extension}",
        stem.to_string_lossy()
    ))
}

/// Loads the inputs, runs the synthesizer and writes the result
pub struct StereogramProcessor {
    cli: Cli,
}

impl StereogramProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run one depth map through the pipeline and return the output path
    ///
    /// Nothing is written unless synthesis succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be decoded, the depth map is
    /// unsuitable for the selected layout, or the output cannot be written
    pub fn process(&self) -> Result<PathBuf> {
        let start_time = Instant::now();
        let output_path = self.cli.output_path();

        let depth = load_depth_map(&self.cli.depth_map)?;
        let tile = self.cli.tile.as_deref().map(load_rgb).transpose()?;
        info!(
            "Loaded depth map {} ({}x{})",
            self.cli.depth_map.display(),
            depth.width(),
            depth.height()
        );

        let config = self.cli.synthesis_config();
        let mut synthesizer = match self.cli.seed {
            Some(seed) => Synthesizer::new(config, seed),
            None => Synthesizer::from_entropy(config),
        };

        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(&self.cli.depth_map, depth.height())
        } else {
            ProgressManager::hidden()
        };

        let result = synthesizer.synthesize_observed(&depth, tile.as_ref(), &progress);
        progress.finish();
        let stereogram = result?;

        save_rgb(&stereogram, &output_path)?;
        info!(
            "Wrote {} ({}x{}) in {:.2?}",
            output_path.display(),
            stereogram.width(),
            stereogram.height(),
            start_time.elapsed()
        );

        Ok(output_path)
    }
}
