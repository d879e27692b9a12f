use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use roimark_core::crop::crop_image;
use roimark_core::roi::RoiRect;

#[derive(Args)]
pub struct CropArgs {
    /// Input image file
    pub file: PathBuf,

    /// Output image file (derived from the input name if not provided)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Region left edge in native pixels
    #[arg(long)]
    pub x: u32,

    /// Region top edge in native pixels
    #[arg(long)]
    pub y: u32,

    /// Region width in native pixels
    #[arg(long)]
    pub width: u32,

    /// Region height in native pixels
    #[arg(long)]
    pub height: u32,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let img = image::open(&args.file)
        .with_context(|| format!("failed to open {}", args.file.display()))?;

    tracing::debug!(
        width = img.width(),
        height = img.height(),
        "loaded source image"
    );

    let roi = RoiRect {
        x: args.x,
        y: args.y,
        width: args.width,
        height: args.height,
    };
    let cropped = crop_image(&img, &roi)
        .with_context(|| format!("failed to crop {}", args.file.display()))?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.file));
    cropped
        .save(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "{} {}x{} at ({}, {}) -> {}",
        style("Cropped").green().bold(),
        roi.width,
        roi.height,
        roi.x,
        roi.y,
        output.display()
    );

    Ok(())
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("cropped");
    let ext = input
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");
    input.with_file_name(format!("{stem}_crop.{ext}"))
}
