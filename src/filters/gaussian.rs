//! Separable Gaussian convolution with a runtime sigma.
//!
//! The kernel is truncated at three sigma and normalized; borders are
//! handled by index clamping (replicate). Both passes are row-parallel:
//! each output row depends only on the immutable pass input.
use crate::image::{ImageF32, ImageView};
use rayon::prelude::*;

/// Normalized 1D Gaussian taps for `sigma`, radius `ceil(3 * sigma)`.
pub fn gaussian_taps(sigma: f32) -> Vec<f32> {
    assert!(sigma > 0.0, "sigma must be positive");
    let radius = (3.0 * sigma).ceil() as usize;
    let inv_two_sigma_sq = 1.0 / (2.0 * sigma * sigma);
    let mut taps = Vec::with_capacity(2 * radius + 1);
    let mut sum = 0.0f32;
    for k in 0..=2 * radius {
        let d = k as f32 - radius as f32;
        let v = (-d * d * inv_two_sigma_sq).exp();
        taps.push(v);
        sum += v;
    }
    for tap in &mut taps {
        *tap /= sum;
    }
    taps
}

/// Blur a float grid with an isotropic Gaussian of the given sigma.
pub fn gaussian_blur(src: &ImageF32, sigma: f32) -> ImageF32 {
    let taps = gaussian_taps(sigma);
    let radius = taps.len() / 2;
    let (w, h) = (src.w, src.h);
    if w == 0 || h == 0 {
        return ImageF32::new(w, h);
    }

    // Horizontal pass
    let mut horiz = ImageF32::new(w, h);
    horiz
        .data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, dst)| filter_row(src.row(y), dst, &taps, radius));

    // Vertical pass
    let mut out = ImageF32::new(w, h);
    out.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, dst)| {
            for (k, &tap) in taps.iter().enumerate() {
                let sy = clamp_index(y as isize + k as isize - radius as isize, h);
                let src_row = horiz.row(sy);
                for (d, &s) in dst.iter_mut().zip(src_row) {
                    *d += tap * s;
                }
            }
        });

    out
}

fn filter_row(row: &[f32], out: &mut [f32], taps: &[f32], radius: usize) {
    let len = row.len();
    for (x, dst_px) in out.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for (k, &tap) in taps.iter().enumerate() {
            let idx = clamp_index(x as isize + k as isize - radius as isize, len);
            acc += tap * row[idx];
        }
        *dst_px = acc;
    }
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 {
        return 0;
    }
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
