use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoimarkError {
    #[error("Invalid region: {0}")]
    InvalidRoi(String),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RoimarkError>;
