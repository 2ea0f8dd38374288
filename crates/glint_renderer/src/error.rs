//! Error types for scene construction, settings and image output.

use thiserror::Error;

/// Errors reported by the renderer core.
///
/// None of these occur while tracing: intersection and shading always produce
/// a color. They surface from setup paths (building the BVH, validating or
/// loading settings) and from writing the final image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot build a BVH over an empty object span")]
    EmptySpan,

    #[error("invalid render settings: {0}")]
    InvalidSettings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Settings parse error: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
