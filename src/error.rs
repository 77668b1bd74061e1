//! Error type for the segmentation pipeline.
use std::fmt;

/// Input validation failure; checked before any pipeline stage runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentError {
    /// The grid is smaller than the 3×3 minimum the kernels require.
    InvalidDimension { width: usize, height: usize },
    /// A tuning parameter is non-finite or non-positive.
    InvalidParameter { name: &'static str, value: f32 },
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentError::InvalidDimension { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}, minimum is 3x3")
            }
            SegmentError::InvalidParameter { name, value } => {
                write!(f, "invalid parameter {name}={value}, must be finite and positive")
            }
        }
    }
}

impl std::error::Error for SegmentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = SegmentError::InvalidDimension {
            width: 2,
            height: 5,
        };
        assert!(err.to_string().contains("2x5"));

        let err = SegmentError::InvalidParameter {
            name: "sigma",
            value: -1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("sigma") && msg.contains("-1"));
    }
}
