//! Binarization of a contrast grid against a scalar threshold.
use crate::image::{ImageF32, ImageView, ImageViewMut, MaskU8, BACKGROUND, FOREGROUND};

/// Binarize `contrast` with a strict `> epsilon` test; ties go to
/// background. The output contains only 0 and 255.
pub fn threshold(contrast: &ImageF32, epsilon: f32) -> MaskU8 {
    let mut out = MaskU8::new(contrast.w, contrast.h);
    for y in 0..contrast.h {
        let src = contrast.row(y);
        let dst = out.row_mut(y);
        for (d, &v) in dst.iter_mut().zip(src) {
            *d = if v > epsilon { FOREGROUND } else { BACKGROUND };
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_strictly_binary() {
        let img = ImageF32::from_vec(3, 2, vec![0.0, 0.02, 0.03, 0.031, 0.5, -1.0]);
        let mask = threshold(&img, 0.03);
        assert!(mask.data.iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn ties_go_to_background() {
        let img = ImageF32::from_vec(2, 1, vec![0.03, 0.030001]);
        let mask = threshold(&img, 0.03);
        assert_eq!(mask.data, vec![BACKGROUND, FOREGROUND]);
    }
}
