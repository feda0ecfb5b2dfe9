use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FigprepError {
    #[error("Failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("Invalid image dimensions {width}x{height} for {path}")]
    InvalidDimensions {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error("Failed to load font: {0}")]
    FontLoad(String),

    #[error("Raw directory does not exist: {0}")]
    MissingRawDirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FigprepError>;
