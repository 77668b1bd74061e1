//! Local-contrast transform of an intensity grid.
//!
//! Computes the local coefficient of variation
//! `C = sqrt(B(I²) − B(I)²) / B(I)` where `B` is a Gaussian blur at the
//! given sigma. The numerator approximates local variance, the
//! denominator the local mean, so cell texture stands out regardless of
//! absolute brightness. The variance is clamped at 0 before the root
//! and the division outputs 0 wherever the local mean is non-positive.
use super::gaussian::gaussian_blur;
use crate::image::{ops, ImageF32};

/// Per-pixel local coefficient of variation at the given sigma.
pub fn local_contrast(raw: &ImageF32, sigma: f32) -> ImageF32 {
    let mean = gaussian_blur(raw, sigma);
    let mean_of_squares = gaussian_blur(&ops::square(raw), sigma);
    let variance = ops::subtract(&mean_of_squares, &ops::square(&mean));
    ops::divide_guarded(&ops::sqrt_clamped(&variance), &mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_grid_has_zero_contrast() {
        let img = ImageF32::from_vec(9, 9, vec![100.0; 81]);
        let out = local_contrast(&img, 1.2);
        for &v in &out.data {
            assert!(v.abs() < 1e-3, "v={v}");
        }
    }

    #[test]
    fn output_is_finite_on_zero_background() {
        // Local mean is 0 near the dark border; the divide guard must
        // keep the output finite.
        let mut img = ImageF32::new(9, 9);
        img.set(4, 4, 50.0);
        let out = local_contrast(&img, 1.0);
        assert!(out.data.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn textured_region_scores_higher_than_flat() {
        let mut img = ImageF32::from_vec(16, 16, vec![50.0; 256]);
        // checker texture in a central patch
        for y in 5..11 {
            for x in 5..11 {
                let v = if (x + y) % 2 == 0 { 200.0 } else { 20.0 };
                img.set(x, y, v);
            }
        }
        let out = local_contrast(&img, 1.2);
        assert!(out.get(8, 8) > 10.0 * out.get(1, 1).max(1e-6));
    }

    #[test]
    fn contrast_is_intensity_scale_invariant() {
        let mut a = ImageF32::from_vec(12, 12, vec![50.0; 144]);
        for y in 4..8 {
            for x in 4..8 {
                a.set(x, y, 200.0);
            }
        }
        let mut b = a.clone();
        for v in &mut b.data {
            *v /= 255.0;
        }
        let ca = local_contrast(&a, 1.2);
        let cb = local_contrast(&b, 1.2);
        for (&va, &vb) in ca.data.iter().zip(&cb.data) {
            assert!((va - vb).abs() < 1e-4, "{va} vs {vb}");
        }
    }
}
