//! Halo correction: removes the bright/dark rings phase-contrast optics
//! draw around cell edges.
//!
//! The direction estimator reads the *raw* intensity grid, not the
//! mask: halo pixels sit on strong intensity gradients, and the
//! wavefront is only allowed to continue through a pixel along the cone
//! of directions consistent with that gradient.

pub mod direction;
pub mod wavefront;

pub use direction::{direction_map, DirectionMap, DIRECTION_OFFSETS, PROJECTION_CONES};
pub use wavefront::{erode_halo, HaloOutcome};

use crate::image::{ImageF32, MaskU8};

/// Run the full halo correction: estimate directions on `raw`, seed the
/// wavefront from the outline of `mask`, erode.
pub fn halo_correction(mask: &MaskU8, raw: &ImageF32) -> HaloOutcome {
    let directions = direction_map(raw);
    erode_halo(mask, &directions)
}
