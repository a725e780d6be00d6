//! Image cache for mKast
//!
//! Decodes cover art on demand and keeps it for the lifetime of the process.
//! Animated GIFs are decoded once into frames and played back by pulling the
//! current frame during rendering; nothing advances while an image is not
//! being drawn.

mod cache;
mod decode;
mod placeholder;

pub use cache::{Animation, ImageCache};
pub use decode::{DEFAULT_FRAME_DURATION, Frame, decode_frames, decode_scaled, is_animated_path};
pub use placeholder::placeholder;

/// Decoded RGBA bitmap handed to the renderer
pub use image::RgbaImage;

use std::path::PathBuf;
use thiserror::Error;

/// Bitmap size in pixels, `(width, height)`
pub type Size = (u32, u32);

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Image not found: {0}")]
    NotFound(PathBuf),

    #[error("Animation has no frames: {0}")]
    NoFrames(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
