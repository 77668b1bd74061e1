//! Structured per-stage reports returned by
//! `Segmenter::process_with_diagnostics`.
use super::timing::TimingBreakdown;
use crate::types::SegmentationResult;
use serde::Serialize;

/// Dimensions of the grid the pipeline ran on.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Local-contrast stage report.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastStage {
    pub elapsed_ms: f64,
    pub sigma: f32,
}

/// Threshold stage report.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdStage {
    pub elapsed_ms: f64,
    pub epsilon: f32,
    /// Foreground pixels straight after binarization.
    pub foreground_px: usize,
}

/// Component-cleanup stage report.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupStage {
    pub elapsed_ms: f64,
    pub removed_blobs: usize,
    pub filled_holes: usize,
    pub foreground_px: usize,
}

/// Halo-correction stage report; absent when the stage is disabled.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HaloStage {
    pub elapsed_ms: f64,
    /// Outline pixels seeding the erosion wavefront.
    pub seed_pixels: usize,
    /// Rounds until the wavefront emptied.
    pub rounds: usize,
    /// Foreground pixels eroded away.
    pub removed_px: usize,
}

/// Everything the pipeline observed in one run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub contrast: ContrastStage,
    pub threshold: ThresholdStage,
    pub cleanup: CleanupStage,
    pub halo: Option<HaloStage>,
}

/// Segmentation result bundled with the detailed stage trace.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationReport {
    pub result: SegmentationResult,
    pub trace: PipelineTrace,
}
