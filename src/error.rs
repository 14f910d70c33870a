use thiserror::Error;

/// Errors that can occur while exporting the pad or building a surface
#[derive(Error, Debug)]
pub enum PadError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("Browser download failed: {0}")]
    Web(String),
    #[error("Invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

pub type PadResult<T> = Result<T, PadError>;
