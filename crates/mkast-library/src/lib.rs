//! Game catalog storage for mKast
//!
//! The catalog is an ordered list of launchable games mirrored 1:1 to a JSON
//! document of shape `{"games": [...]}`. Position in the list is the identity
//! used by the admin screens for edit and delete.

mod catalog;
mod import;
mod record;

pub use catalog::{Catalog, DEFAULT_CATALOG_FILE};
pub use import::import_image;
pub use record::{DEFAULT_DESCRIPTION, GameRecord};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Game index {index} out of range (catalog has {len} games)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid game record: {0}")]
    InvalidRecord(String),

    #[error("Catalog path has no file name: {0}")]
    BadPath(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
