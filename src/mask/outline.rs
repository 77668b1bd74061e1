//! Boundary-pixel extraction from a binary mask.
use crate::image::MaskU8;

/// Coordinates of every foreground pixel with at least one background
/// 8-neighbor. Pixels on the image border count their missing
/// neighbors as background, so a mask touching the border contributes
/// its border pixels to the outline.
pub fn outline_pixels(mask: &MaskU8) -> Vec<(usize, usize)> {
    let (w, h) = (mask.w, mask.h);
    let mut outline = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if mask.is_foreground(x, y) && has_background_neighbor(mask, x, y) {
                outline.push((x, y));
            }
        }
    }
    outline
}

fn has_background_neighbor(mask: &MaskU8, x: usize, y: usize) -> bool {
    for dy in -1isize..=1 {
        for dx in -1isize..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || ny < 0 || nx as usize >= mask.w || ny as usize >= mask.h {
                return true;
            }
            if !mask.is_foreground(nx as usize, ny as usize) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::FOREGROUND;

    #[test]
    fn filled_rectangle_yields_exactly_its_perimeter() {
        let mut mask = MaskU8::new(12, 10);
        for y in 2..8 {
            for x in 3..9 {
                mask.set(x, y, FOREGROUND);
            }
        }
        let outline = outline_pixels(&mask);
        // 6x6 rectangle: perimeter is 6*4 - 4 = 20 pixels
        assert_eq!(outline.len(), 20);
        for &(x, y) in &outline {
            let on_edge = x == 3 || x == 8 || y == 2 || y == 7;
            assert!(on_edge, "({x},{y}) is interior");
        }
    }

    #[test]
    fn empty_mask_has_no_outline() {
        let mask = MaskU8::new(8, 8);
        assert!(outline_pixels(&mask).is_empty());
    }

    #[test]
    fn full_mask_outline_is_the_border_frame() {
        let mask = MaskU8::from_vec(5, 4, vec![FOREGROUND; 20]);
        let outline = outline_pixels(&mask);
        assert_eq!(outline.len(), 2 * 5 + 2 * 4 - 4);
        assert!(!outline.contains(&(2, 1)));
    }
}
