//! Segmentation pipeline driving all stages end-to-end.
//!
//! The [`Segmenter`] exposes a simple API: feed a float intensity grid
//! and get the binary mask plus confluency, optionally with a detailed
//! per-stage trace.
//!
//! Typical usage:
//! ```no_run
//! use cell_segmenter::{Segmenter, SegmenterParams};
//! use cell_segmenter::image::ImageF32;
//!
//! # fn example(raw: ImageF32) {
//! let seg = Segmenter::new(SegmenterParams::default());
//! let report = seg.process_with_diagnostics(&raw).expect("valid input");
//! println!("confluency: {:.3}", report.result.confluency);
//! # }
//! ```
use super::params::SegmenterParams;
use crate::diagnostics::{
    CleanupStage, ContrastStage, HaloStage, InputDescriptor, PipelineTrace, SegmentationReport,
    ThresholdStage, TimingBreakdown,
};
use crate::error::SegmentError;
use crate::filters::local_contrast;
use crate::halo::halo_correction;
use crate::image::{ImageF32, ImageU8};
use crate::mask::{cleanup, confluency, threshold};
use crate::types::SegmentationResult;
use log::debug;
use std::time::Instant;

/// Minimum grid extent: 3×3 kernels need a one-pixel margin.
const MIN_EXTENT: usize = 3;

/// Local-contrast segmenter for phase-contrast microscopy grids.
#[derive(Clone, Debug)]
pub struct Segmenter {
    params: SegmenterParams,
}

impl Segmenter {
    /// Create a segmenter with the supplied parameters.
    pub fn new(params: SegmenterParams) -> Self {
        Self { params }
    }

    /// Parameters this segmenter runs with.
    pub fn params(&self) -> &SegmenterParams {
        &self.params
    }

    /// Replace the tuning parameters.
    pub fn set_params(&mut self, params: SegmenterParams) {
        self.params = params;
    }

    /// Segment a float intensity grid, returning the compact result.
    pub fn process(&self, raw: &ImageF32) -> Result<SegmentationResult, SegmentError> {
        Ok(self.process_with_diagnostics(raw)?.result)
    }

    /// Segment an 8-bit grayscale view; the input is converted to a
    /// normalized float grid first (local contrast is scale-invariant,
    /// so normalization does not change the mask).
    pub fn process_u8(&self, gray: ImageU8<'_>) -> Result<SegmentationResult, SegmentError> {
        let raw = ImageF32::from_u8(gray);
        self.process(&raw)
    }

    /// Segment a float intensity grid and return both the result and a
    /// detailed per-stage report.
    pub fn process_with_diagnostics(
        &self,
        raw: &ImageF32,
    ) -> Result<SegmentationReport, SegmentError> {
        self.params.validate()?;
        if raw.w < MIN_EXTENT || raw.h < MIN_EXTENT {
            return Err(SegmentError::InvalidDimension {
                width: raw.w,
                height: raw.h,
            });
        }

        let (width, height) = (raw.w, raw.h);
        debug!(
            "Segmenter::process start w={} h={} sigma={} epsilon={} halo={}",
            width, height, self.params.sigma, self.params.epsilon, self.params.halo_correction
        );
        let total_start = Instant::now();

        let contrast_start = Instant::now();
        let contrast = local_contrast(raw, self.params.sigma);
        let contrast_ms = contrast_start.elapsed().as_secs_f64() * 1000.0;

        let threshold_start = Instant::now();
        let raw_mask = threshold(&contrast, self.params.epsilon);
        let threshold_ms = threshold_start.elapsed().as_secs_f64() * 1000.0;
        let threshold_fg = raw_mask.foreground_count();

        let cleanup_start = Instant::now();
        let cleaned = cleanup(&raw_mask);
        let cleanup_ms = cleanup_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "Segmenter::cleanup removed_blobs={} filled_holes={}",
            cleaned.removed_blobs, cleaned.filled_holes
        );

        let mut mask = cleaned.mask;
        let cleanup_fg = mask.foreground_count();

        let mut halo_stage = None;
        if self.params.halo_correction {
            let halo_start = Instant::now();
            let outcome = halo_correction(&mask, raw);
            let halo_ms = halo_start.elapsed().as_secs_f64() * 1000.0;
            debug!(
                "Segmenter::halo seeds={} rounds={} removed={}",
                outcome.seed_pixels, outcome.rounds, outcome.removed_px
            );
            halo_stage = Some(HaloStage {
                elapsed_ms: halo_ms,
                seed_pixels: outcome.seed_pixels,
                rounds: outcome.rounds,
                removed_px: outcome.removed_px,
            });
            mask = outcome.mask;
        }

        let confluency = confluency(&mask);
        let foreground_px = mask.foreground_count();
        let latency = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "Segmenter::process done confluency={:.4} latency_ms={:.3}",
            confluency, latency
        );

        let mut timings = TimingBreakdown::with_total(latency);
        timings.push("contrast", contrast_ms);
        timings.push("threshold", threshold_ms);
        timings.push("cleanup", cleanup_ms);
        if let Some(halo) = &halo_stage {
            timings.push("halo", halo.elapsed_ms);
        }

        let trace = PipelineTrace {
            input: InputDescriptor { width, height },
            timings,
            contrast: ContrastStage {
                elapsed_ms: contrast_ms,
                sigma: self.params.sigma,
            },
            threshold: ThresholdStage {
                elapsed_ms: threshold_ms,
                epsilon: self.params.epsilon,
                foreground_px: threshold_fg,
            },
            cleanup: CleanupStage {
                elapsed_ms: cleanup_ms,
                removed_blobs: cleaned.removed_blobs,
                filled_holes: cleaned.filled_holes,
                foreground_px: cleanup_fg,
            },
            halo: halo_stage,
        };

        Ok(SegmentationReport {
            result: SegmentationResult {
                mask,
                confluency,
                foreground_px,
                latency_ms: latency,
            },
            trace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_undersized_grids() {
        let seg = Segmenter::new(SegmenterParams::default());
        let tiny = ImageF32::new(2, 5);
        assert!(matches!(
            seg.process(&tiny),
            Err(SegmentError::InvalidDimension {
                width: 2,
                height: 5
            })
        ));
    }

    #[test]
    fn rejects_bad_parameters_before_processing() {
        let seg = Segmenter::new(SegmenterParams {
            sigma: -1.0,
            ..Default::default()
        });
        let raw = ImageF32::new(8, 8);
        assert!(matches!(
            seg.process(&raw),
            Err(SegmentError::InvalidParameter { name: "sigma", .. })
        ));
    }

    #[test]
    fn mask_matches_input_dimensions() {
        let seg = Segmenter::new(SegmenterParams::default());
        let raw = ImageF32::from_vec(17, 11, vec![0.5; 17 * 11]);
        let result = seg.process(&raw).expect("valid input");
        assert_eq!(result.mask.w, 17);
        assert_eq!(result.mask.h, 11);
    }

    #[test]
    fn trace_reports_every_enabled_stage() {
        let seg = Segmenter::new(SegmenterParams::default());
        let raw = ImageF32::from_vec(10, 10, vec![0.5; 100]);
        let report = seg.process_with_diagnostics(&raw).expect("valid input");
        assert!(report.trace.halo.is_some());
        assert_eq!(report.trace.timings.stages.len(), 4);

        let seg = Segmenter::new(SegmenterParams {
            halo_correction: false,
            ..Default::default()
        });
        let report = seg.process_with_diagnostics(&raw).expect("valid input");
        assert!(report.trace.halo.is_none());
        assert_eq!(report.trace.timings.stages.len(), 3);
    }
}
