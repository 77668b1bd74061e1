//! Confluency: fraction of the image area covered by foreground.
use crate::image::MaskU8;

/// Foreground pixel ratio in [0, 1]. An empty (0-sized) mask reports 0.
pub fn confluency(mask: &MaskU8) -> f64 {
    let total = mask.data.len();
    if total == 0 {
        return 0.0;
    }
    mask.foreground_count() as f64 / total as f64
}
