use crate::image::MaskU8;
use serde::Serialize;

/// Final output of one segmentation call.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationResult {
    /// Cell/background mask, same dimensions as the input grid.
    #[serde(skip)]
    pub mask: MaskU8,
    /// Foreground area fraction in [0, 1].
    pub confluency: f64,
    /// Foreground pixel count of the final mask.
    pub foreground_px: usize,
    /// Wall-clock time of the whole pipeline.
    pub latency_ms: f64,
}
