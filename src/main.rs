//! CLI entry point for autostereogram generation

use autostereogram::io::cli::{Cli, StereogramProcessor};
use clap::Parser;

fn main() -> autostereogram::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let processor = StereogramProcessor::new(cli);
    processor.process().map(|_| ())
}
