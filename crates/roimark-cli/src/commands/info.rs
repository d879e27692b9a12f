use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let img = image::open(&args.file)
        .with_context(|| format!("failed to open {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", img.width(), img.height());
    println!("Color type:  {:?}", img.color());
    println!(
        "Pixel bits:  {}",
        img.color().bits_per_pixel()
    );

    Ok(())
}
