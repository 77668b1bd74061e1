//! Binary-mask stages: thresholding, connected-component cleanup,
//! outline extraction and the confluency measurement.

pub mod components;
pub mod confluency;
pub mod outline;
pub mod threshold;

pub use components::{cleanup, CleanupOutcome, MIN_BLOB_AREA, MIN_HOLE_AREA};
pub use confluency::confluency;
pub use outline::outline_pixels;
pub use threshold::threshold;
