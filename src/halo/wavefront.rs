//! Direction-guided wavefront erosion of halo rings.
//!
//! The mask outline seeds a wavefront that advances one connectivity
//! layer per round. A front pixel whose projection cone finds a
//! foreground continuation is halo, not true boundary: it is queued for
//! removal and its continuations join the next front. Removals are
//! applied only after the whole front has been scanned, so the result
//! does not depend on the order the front is walked in. Visited flags
//! are monotone, which bounds the loop by the grid diameter.
use super::direction::{DirectionMap, DIRECTION_OFFSETS, PROJECTION_CONES};
use crate::image::{MaskU8, BACKGROUND};
use crate::mask::outline_pixels;

/// Eroded mask plus wavefront statistics for diagnostics.
#[derive(Clone, Debug)]
pub struct HaloOutcome {
    pub mask: MaskU8,
    /// Outline pixels seeding the first round.
    pub seed_pixels: usize,
    /// Rounds until the front emptied.
    pub rounds: usize,
    /// Foreground pixels turned to background.
    pub removed_px: usize,
}

/// Erode halo pixels from `mask` along gradient-consistent paths.
///
/// Only ever removes foreground pixels; pixels on the image border are
/// never removed because their 3×3 neighborhood is incomplete.
pub fn erode_halo(mask: &MaskU8, directions: &DirectionMap) -> HaloOutcome {
    debug_assert_eq!((mask.w, mask.h), (directions.w, directions.h));
    let (w, h) = (mask.w, mask.h);
    let mut out = mask.clone();
    let mut visited = vec![false; w * h];

    let mut front = outline_pixels(mask);
    let seed_pixels = front.len();
    let mut rounds = 0usize;
    let mut removed_px = 0usize;

    while !front.is_empty() {
        let mut next_front: Vec<(usize, usize)> = Vec::new();
        let mut removals: Vec<(usize, usize)> = Vec::new();

        for &(x, y) in &front {
            let i = y * w + x;
            if visited[i] {
                continue;
            }
            if x == 0 || y == 0 || x + 1 == w || y + 1 == h {
                continue;
            }
            visited[i] = true;

            let cone = &PROJECTION_CONES[directions.get(x, y) as usize];
            let mut valid_path = false;
            for &dir in cone {
                let (dx, dy) = DIRECTION_OFFSETS[dir];
                // p is strictly interior, so every cone neighbor is in
                // bounds.
                let nx = (x as isize + dx) as usize;
                let ny = (y as isize + dy) as usize;
                if out.is_foreground(nx, ny) {
                    valid_path = true;
                    next_front.push((nx, ny));
                }
            }
            if valid_path {
                removals.push((x, y));
            }
        }

        // Deferred mutation: the front above was scanned against the
        // mask state at the start of the round.
        for &(x, y) in &removals {
            out.set(x, y, BACKGROUND);
        }
        removed_px += removals.len();
        front = next_front;
        rounds += 1;
    }

    HaloOutcome {
        mask: out,
        seed_pixels,
        rounds,
        removed_px,
    }
}
