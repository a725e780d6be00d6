//! External collaborators of the launcher
//!
//! Starting game processes, finding an icon for an executable, and asking the
//! user for a file without blocking the render loop.

mod chooser;
mod icon;
mod launcher;
mod picker;

pub use chooser::{FileChooser, FileKind};
#[cfg(feature = "file-dialog")]
pub use chooser::NativeFileChooser;
pub use icon::{CachedIconExtractor, IconExtractor};
pub use launcher::{Launch, LaunchResult, ProcessLauncher};
pub use picker::{PickerHandle, PickerStatus};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Executable not found: {0}")]
    NotFound(PathBuf),

    #[error("Launch failed: {0}")]
    LaunchFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
