#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod segmenter;
pub mod types;

// Expert modules: still public, but considered unstable internals.
pub mod filters;
pub mod halo;
pub mod mask;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::SegmentError;
pub use crate::segmenter::{Segmenter, SegmenterParams};
pub use crate::types::SegmentationResult;

pub use crate::diagnostics::{PipelineTrace, SegmentationReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use cell_segmenter::prelude::*;
///
/// # fn main() {
/// let raw = ImageF32::new(640, 480);
/// let seg = Segmenter::new(SegmenterParams::default());
/// let result = seg.process(&raw).expect("valid input");
/// println!(
///     "confluency={:.3} latency_ms={:.3}",
///     result.confluency, result.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, ImageU8, MaskU8};
    pub use crate::{SegmentationResult, Segmenter, SegmenterParams};
}
