use image::DynamicImage;

use crate::error::Result;
use crate::roi::RoiRect;

/// Crop `img` to `roi`, validating the region against the image first.
pub fn crop_image(img: &DynamicImage, roi: &RoiRect) -> Result<DynamicImage> {
    let validated = roi.validated(img.width(), img.height())?;
    tracing::debug!(
        x = validated.x,
        y = validated.y,
        width = validated.width,
        height = validated.height,
        "cropping image"
    );
    Ok(img.crop_imm(validated.x, validated.y, validated.width, validated.height))
}
