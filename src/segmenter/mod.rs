//! Segmenter orchestrating the local-contrast segmentation pipeline.
//!
//! Overview
//! - Transforms the raw grid into a local coefficient-of-variation map
//!   (Gaussian-smoothed mean and variance).
//! - Binarizes against epsilon, then size-filters connected components
//!   twice: small blobs become background, small holes become
//!   foreground.
//! - Optionally erodes halo rings with a direction-guided wavefront
//!   seeded at the mask outline.
//! - Reports the foreground ratio as confluency.
//!
//! Modules
//! - [`params`] – tuning parameters and their validation.
//! - `pipeline` – the [`Segmenter`] implementation.

pub mod params;
mod pipeline;

pub use params::SegmenterParams;
pub use pipeline::Segmenter;
