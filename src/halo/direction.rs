//! Kirsch compass-kernel direction estimation.
//!
//! Convolves the raw intensity grid with eight 3×3 Kirsch kernels and
//! records, per pixel, the index of the strongest response. The index
//! is a compass code 0–7, 45° apart starting East and proceeding
//! counter-clockwise in image coordinates (y grows downward). Border
//! handling clamps indices (replicate).
//!
//! The halo corrector uses the code to decide which way its erosion
//! wavefront may travel through a pixel: the projection cone of a code
//! is the code itself plus its two 45° neighbors.
use crate::image::{ImageF32, ImageView};
use rayon::prelude::*;

type Kernel3 = [[f32; 3]; 3];

/// The eight Kirsch compass kernels, indexed by direction code.
/// Code 0 = East, 1 = North-East, …, 7 = South-East.
const KIRSCH_KERNELS: [Kernel3; 8] = [
    // East
    [[-3.0, -3.0, 5.0], [-3.0, 0.0, 5.0], [-3.0, -3.0, 5.0]],
    // North-East
    [[-3.0, 5.0, 5.0], [-3.0, 0.0, 5.0], [-3.0, -3.0, -3.0]],
    // North
    [[5.0, 5.0, 5.0], [-3.0, 0.0, -3.0], [-3.0, -3.0, -3.0]],
    // North-West
    [[5.0, 5.0, -3.0], [5.0, 0.0, -3.0], [-3.0, -3.0, -3.0]],
    // West
    [[5.0, -3.0, -3.0], [5.0, 0.0, -3.0], [5.0, -3.0, -3.0]],
    // South-West
    [[-3.0, -3.0, -3.0], [5.0, 0.0, -3.0], [5.0, 5.0, -3.0]],
    // South
    [[-3.0, -3.0, -3.0], [-3.0, 0.0, -3.0], [5.0, 5.0, 5.0]],
    // South-East
    [[-3.0, -3.0, -3.0], [-3.0, 0.0, 5.0], [-3.0, 5.0, 5.0]],
];

/// Cone of directions consistent with a code: {self, self−1, self+1} mod 8.
pub const PROJECTION_CONES: [[usize; 3]; 8] = [
    [0, 1, 7],
    [1, 0, 2],
    [2, 1, 3],
    [3, 2, 4],
    [4, 3, 5],
    [5, 4, 6],
    [6, 5, 7],
    [7, 0, 6],
];

/// Neighbor offset (dx, dy) for each direction code, East first,
/// counter-clockwise with y growing downward.
pub const DIRECTION_OFFSETS: [(isize, isize); 8] = [
    (1, 0),   // East
    (1, -1),  // North-East
    (0, -1),  // North
    (-1, -1), // North-West
    (-1, 0),  // West
    (-1, 1),  // South-West
    (0, 1),   // South
    (1, 1),   // South-East
];

/// Per-pixel compass direction codes, one byte per raw-image pixel.
#[derive(Clone, Debug)]
pub struct DirectionMap {
    pub w: usize,
    pub h: usize,
    pub codes: Vec<u8>,
}

impl DirectionMap {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.codes[y * self.w + x]
    }
}

/// Estimate the dominant gradient direction at every pixel of `raw`.
///
/// Ties resolve to the lowest kernel index: a response must be strictly
/// greater than the running best to replace it, so a uniform grid maps
/// to all-East deterministically.
pub fn direction_map(raw: &ImageF32) -> DirectionMap {
    let (w, h) = (raw.w, raw.h);
    let mut codes = vec![0u8; w * h];
    if w == 0 || h == 0 {
        return DirectionMap { w, h, codes };
    }

    codes.par_chunks_mut(w).enumerate().for_each(|(y, out_row)| {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [raw.row(y_idx[0]), raw.row(y_idx[1]), raw.row(y_idx[2])];
        for (x, out_px) in out_row.iter_mut().enumerate() {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut best = f32::NEG_INFINITY;
            let mut best_code = 0u8;
            for (code, kernel) in KIRSCH_KERNELS.iter().enumerate() {
                let mut response = 0.0f32;
                for (ky, row) in rows.iter().enumerate() {
                    let taps = &kernel[ky];
                    response += row[x_idx[0]] * taps[0]
                        + row[x_idx[1]] * taps[1]
                        + row[x_idx[2]] * taps[2];
                }
                if response > best {
                    best = response;
                    best_code = code as u8;
                }
            }
            *out_px = best_code;
        }
    });

    DirectionMap { w, h, codes }
}
