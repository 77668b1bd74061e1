use cell_segmenter::image::io::{load_grayscale_image, save_mask_png, write_json_file};
use cell_segmenter::image::ImageF32;
use cell_segmenter::{Segmenter, SegmenterParams};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SegmentToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: SegmenterParams,
    pub output: SegmentOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct SegmentOutputConfig {
    pub mask_png: PathBuf,
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<SegmentToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let raw = ImageF32::from_u8(gray.as_view());

    let seg = Segmenter::new(config.params);
    let report = seg
        .process_with_diagnostics(&raw)
        .map_err(|e| format!("Segmentation failed: {e}"))?;

    save_mask_png(&report.result.mask, &config.output.mask_png)?;
    write_json_file(&config.output.report_json, &report)?;

    println!(
        "Saved mask ({}x{}) to {}",
        report.result.mask.w,
        report.result.mask.h,
        config.output.mask_png.display()
    );
    println!(
        "confluency={:.4} foreground_px={} latency_ms={:.3}",
        report.result.confluency, report.result.foreground_px, report.result.latency_ms
    );
    println!("Saved report to {}", config.output.report_json.display());

    Ok(())
}

fn usage() -> String {
    "Usage: segment_demo <config.json>".to_string()
}
