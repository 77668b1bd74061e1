//! Diagnostics data model exposed by the segmenter.
//!
//! `SegmentationReport` is the main entry point returned by
//! `process_with_diagnostics`, bundling the compact result with a
//! `PipelineTrace` describing every stage that executed. All types are
//! serializable so demo tools can dump them as JSON.

pub mod pipeline;
pub mod timing;

pub use pipeline::{
    CleanupStage, ContrastStage, HaloStage, InputDescriptor, PipelineTrace, SegmentationReport,
    ThresholdStage,
};
pub use timing::{StageTiming, TimingBreakdown};
