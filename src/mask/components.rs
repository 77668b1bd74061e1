//! Connected-component size filtering for binary masks.
//!
//! One labeling primitive (8-connected flood fill) runs twice with
//! swapped polarity: first to drop small foreground blobs, then to fill
//! small background holes. The two area thresholds are fixed policy
//! constants of the segmentation, not user-tunable knobs.
use crate::image::{MaskU8, BACKGROUND, FOREGROUND};

/// Foreground components smaller than this are segmentation noise.
pub const MIN_BLOB_AREA: usize = 100;
/// Background components smaller than this are holes inside cells.
pub const MIN_HOLE_AREA: usize = 25;

/// Cleaned mask plus counters for diagnostics.
#[derive(Clone, Debug)]
pub struct CleanupOutcome {
    pub mask: MaskU8,
    /// Foreground components removed in the first pass.
    pub removed_blobs: usize,
    /// Background components filled in the second pass.
    pub filled_holes: usize,
}

/// Remove foreground blobs under [`MIN_BLOB_AREA`] pixels, then fill
/// background holes under [`MIN_HOLE_AREA`] pixels. Idempotent.
pub fn cleanup(mask: &MaskU8) -> CleanupOutcome {
    let mut out = mask.clone();
    let removed_blobs =
        reclassify_small_components(&mut out, FOREGROUND, MIN_BLOB_AREA, BACKGROUND);
    let filled_holes = reclassify_small_components(&mut out, BACKGROUND, MIN_HOLE_AREA, FOREGROUND);
    CleanupOutcome {
        mask: out,
        removed_blobs,
        filled_holes,
    }
}

/// Flood-fill every 8-connected component of `target`-valued pixels and
/// rewrite components whose area is below `min_area` to `replacement`.
/// Returns the number of rewritten components.
pub fn reclassify_small_components(
    mask: &mut MaskU8,
    target: u8,
    min_area: usize,
    replacement: u8,
) -> usize {
    let (w, h) = (mask.w, mask.h);
    if w == 0 || h == 0 {
        return 0;
    }

    let mut visited = vec![false; w * h];
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut component: Vec<usize> = Vec::new();
    let mut reclassified = 0usize;

    for y in 0..h {
        for x in 0..w {
            let seed = mask.idx(x, y);
            if visited[seed] || mask.data[seed] != target {
                continue;
            }

            component.clear();
            stack.push((x, y));
            visited[seed] = true;
            while let Some((cx, cy)) = stack.pop() {
                component.push(cy * w + cx);
                for (nx, ny) in neighbors8(cx, cy, w, h) {
                    let ni = ny * w + nx;
                    if !visited[ni] && mask.data[ni] == target {
                        visited[ni] = true;
                        stack.push((nx, ny));
                    }
                }
            }

            if component.len() < min_area {
                for &i in &component {
                    mask.data[i] = replacement;
                }
                reclassified += 1;
            }
        }
    }

    reclassified
}

#[inline]
fn neighbors8(
    x: usize,
    y: usize,
    w: usize,
    h: usize,
) -> impl Iterator<Item = (usize, usize)> {
    const OFFSETS: [(isize, isize); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];
    OFFSETS.iter().filter_map(move |&(dx, dy)| {
        let nx = x as isize + dx;
        let ny = y as isize + dy;
        (nx >= 0 && ny >= 0 && (nx as usize) < w && (ny as usize) < h)
            .then(|| (nx as usize, ny as usize))
    })
}
