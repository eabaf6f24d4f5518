//! Autostereogram synthesis
//!
//! - `layout` resolves strip geometry and the depth offset policy
//! - `synthesizer` runs the row-wise pixel-copy pass

/// Strip geometry and offset policies
pub mod layout;
/// Row-parallel pixel-copy pass
pub mod synthesizer;

pub use layout::{OffsetPolicy, StripLayout, SynthesisConfig};
pub use synthesizer::{RowObserver, Synthesizer, synthesize, synthesize_observed};
