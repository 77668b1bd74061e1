mod common;

use common::synthetic_image::{centered_square_f32, centered_square_origin, uniform_f32};
use cell_segmenter::{Segmenter, SegmenterParams};

#[test]
fn bright_square_segments_into_expected_confluency_band() {
    // An 8x8 square of 200 on a 50 background. With sigma 1.2 the blur
    // support has radius 4, so every square pixel sees the intensity
    // step and the contrast fringe extends at most 4 pixels outward:
    // the mask is a solid blob between 64 and 256 pixels.
    let width = 32usize;
    let height = 32usize;
    let side = 8usize;
    let raw = centered_square_f32(width, height, side, 50.0, 200.0);

    let seg = Segmenter::new(SegmenterParams {
        sigma: 1.2,
        epsilon: 0.03,
        halo_correction: false,
    });
    let result = seg.process(&raw).expect("valid input");

    let (x0, y0) = centered_square_origin(width, height, side);
    for y in y0..y0 + side {
        for x in x0..x0 + side {
            assert!(
                result.mask.is_foreground(x, y),
                "square pixel ({x}, {y}) should be foreground"
            );
        }
    }

    assert!(
        (0.16..=0.25).contains(&result.confluency),
        "confluency out of band: {:.4}",
        result.confluency
    );
    assert_eq!(
        result.foreground_px,
        result.mask.foreground_count(),
        "reported count must match the mask"
    );
}

#[test]
fn tiny_grid_keeps_bright_square_foreground() {
    // On a 10x10 grid the blur window of every pixel overlaps the
    // central 4x4 square, so thresholding cannot lose the square.
    let raw = centered_square_f32(10, 10, 4, 50.0, 200.0);

    let seg = Segmenter::new(SegmenterParams {
        sigma: 1.2,
        epsilon: 0.03,
        halo_correction: false,
    });
    let result = seg.process(&raw).expect("valid input");

    let (x0, y0) = centered_square_origin(10, 10, 4);
    for y in y0..y0 + 4 {
        for x in x0..x0 + 4 {
            assert!(
                result.mask.is_foreground(x, y),
                "square pixel ({x}, {y}) should be foreground"
            );
        }
    }
    assert!(
        result.confluency >= 0.16,
        "confluency below square coverage: {:.4}",
        result.confluency
    );
}

#[test]
fn constant_grid_yields_zero_confluency() {
    let raw = uniform_f32(24, 24, 100.0);
    let seg = Segmenter::new(SegmenterParams::default());
    let result = seg.process(&raw).expect("valid input");

    assert_eq!(result.foreground_px, 0);
    assert_eq!(result.confluency, 0.0);
}

#[test]
fn halo_correction_never_grows_the_mask() {
    let raw = centered_square_f32(32, 32, 8, 50.0, 200.0);

    let base = SegmenterParams {
        sigma: 1.2,
        epsilon: 0.03,
        halo_correction: false,
    };
    let plain = Segmenter::new(base)
        .process(&raw)
        .expect("valid input");
    let corrected = Segmenter::new(SegmenterParams {
        halo_correction: true,
        ..base
    })
    .process(&raw)
    .expect("valid input");

    assert!(
        corrected.foreground_px <= plain.foreground_px,
        "halo correction must only remove pixels: {} > {}",
        corrected.foreground_px,
        plain.foreground_px
    );
    for y in 0..32 {
        for x in 0..32 {
            if corrected.mask.is_foreground(x, y) {
                assert!(
                    plain.mask.is_foreground(x, y),
                    "halo correction added foreground at ({x}, {y})"
                );
            }
        }
    }
}

#[test]
fn report_trace_is_consistent_and_serializable() {
    let raw = centered_square_f32(32, 32, 8, 50.0, 200.0);
    let seg = Segmenter::new(SegmenterParams::default());
    let report = seg.process_with_diagnostics(&raw).expect("valid input");

    assert_eq!(report.trace.input.width, 32);
    assert_eq!(report.trace.input.height, 32);
    assert!(
        report.result.foreground_px <= report.trace.cleanup.foreground_px,
        "halo correction cannot grow the cleaned mask"
    );

    let json = serde_json::to_string(&report).expect("report serializes");
    assert!(json.contains("\"confluency\""));
    assert!(json.contains("\"foregroundPx\""));
}
