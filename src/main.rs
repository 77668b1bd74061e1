use cell_segmenter::image::ImageF32;
use cell_segmenter::{Segmenter, SegmenterParams};

fn main() {
    // Demo stub: segments a synthetic grid with a bright central patch
    let w = 320usize;
    let h = 240usize;
    let mut raw = ImageF32::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let inside = (100..220).contains(&x) && (80..160).contains(&y);
            let v = if inside {
                if (x + y) % 2 == 0 {
                    0.8
                } else {
                    0.2
                }
            } else {
                0.3
            };
            raw.set(x, y, v);
        }
    }

    let seg = Segmenter::new(SegmenterParams::default());
    match seg.process(&raw) {
        Ok(result) => println!(
            "confluency={:.3} foreground_px={} latency_ms={:.3}",
            result.confluency, result.foreground_px, result.latency_ms
        ),
        Err(err) => eprintln!("segmentation failed: {err}"),
    }
}
