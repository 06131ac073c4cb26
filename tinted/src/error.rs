use crate::tint::HsvError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("texture must have a non-zero size, got {width}x{height}")]
    EmptyTexture { width: u32, height: u32 },
    #[error("texture expects {expected} texels, got {actual}")]
    TexelCount { expected: usize, actual: usize },
    #[error("tint components must be finite, got ({r}, {g}, {b})")]
    NonFiniteTint { r: f32, g: f32, b: f32 },
    #[error("hsv conversion error {0}")]
    Hsv(#[from] HsvError),
    #[error("invalid hex color {0:?}")]
    InvalidHex(String),
    #[error("image error {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
