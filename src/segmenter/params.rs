//! Parameters of the segmentation pipeline.
//!
//! Only the two contrast knobs and the halo switch are exposed; the
//! component-cleanup area thresholds are policy constants of the
//! algorithm (see `mask::components`).
use crate::error::SegmentError;
use serde::{Deserialize, Serialize};

/// Tuning parameters for one segmentation call.
///
/// Defaults match the values the algorithm was calibrated with for
/// typical phase-contrast imagery.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmenterParams {
    /// Gaussian sigma of the local-contrast filter (> 0).
    pub sigma: f32,
    /// Contrast threshold separating cell texture from background (> 0).
    pub epsilon: f32,
    /// Enables the wavefront halo correction.
    pub halo_correction: bool,
}

impl Default for SegmenterParams {
    fn default() -> Self {
        Self {
            sigma: 1.2,
            epsilon: 0.03,
            halo_correction: true,
        }
    }
}

impl SegmenterParams {
    /// Reject non-finite or non-positive tuning values before any stage
    /// runs.
    pub fn validate(&self) -> Result<(), SegmentError> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(SegmentError::InvalidParameter {
                name: "sigma",
                value: self.sigma,
            });
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(SegmentError::InvalidParameter {
                name: "epsilon",
                value: self.epsilon,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SegmenterParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let bad = [
            SegmenterParams {
                sigma: 0.0,
                ..Default::default()
            },
            SegmenterParams {
                sigma: f32::NAN,
                ..Default::default()
            },
            SegmenterParams {
                epsilon: -0.1,
                ..Default::default()
            },
            SegmenterParams {
                epsilon: f32::INFINITY,
                ..Default::default()
            },
        ];
        for params in bad {
            assert!(params.validate().is_err(), "{params:?}");
        }
    }
}
