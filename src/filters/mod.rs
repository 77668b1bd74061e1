//! Float-grid filtering stages: Gaussian smoothing and the
//! local-contrast transform built on top of it.

pub mod contrast;
pub mod gaussian;

pub use contrast::local_contrast;
pub use gaussian::{gaussian_blur, gaussian_taps};
