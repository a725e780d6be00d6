//! Copying user-chosen cover art into the asset tree

use std::path::{Path, PathBuf};

/// Copy `source` into `images_dir` under its file name and return the new path.
///
/// Returns `None` for an empty source or when the copy fails; failures are
/// logged and the caller keeps the original path.
pub fn import_image(source: &str, images_dir: &Path) -> Option<PathBuf> {
    if source.is_empty() {
        return None;
    }

    let source = Path::new(source);
    let file_name = source.file_name()?;
    let dest = images_dir.join(file_name);

    if is_same_file(source, &dest) {
        return Some(dest);
    }

    if let Err(e) = std::fs::create_dir_all(images_dir) {
        tracing::warn!("Failed to create {}: {}", images_dir.display(), e);
        return None;
    }

    match std::fs::copy(source, &dest) {
        Ok(_) => {
            tracing::info!("Imported image {} -> {}", source.display(), dest.display());
            Some(dest)
        }
        Err(e) => {
            tracing::warn!("Failed to import image {}: {}", source.display(), e);
            None
        }
    }
}

/// Both paths name one file on disk, however they are spelled
fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_import_copies_file() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("cover.png");
        std::fs::write(&source, b"png").unwrap();
        let images = dir.path().join("assets").join("game_images");

        let imported = import_image(source.to_str().unwrap(), &images).unwrap();
        assert_eq!(imported, images.join("cover.png"));
        assert_eq!(std::fs::read(&imported).unwrap(), b"png");
    }

    #[test]
    fn test_import_file_already_in_images_dir() {
        let dir = TempDir::new().unwrap();
        let images = dir.path().join("assets").join("game_images");
        std::fs::create_dir_all(&images).unwrap();
        std::fs::write(images.join("cover.png"), b"twelve bytes").unwrap();

        let spelled = dir
            .path()
            .join("assets")
            .join("..")
            .join("assets")
            .join("game_images")
            .join("cover.png");
        let imported = import_image(spelled.to_str().unwrap(), &images).unwrap();

        assert_eq!(imported, images.join("cover.png"));
        assert_eq!(std::fs::read(&imported).unwrap(), b"twelve bytes");
    }

    #[test]
    fn test_import_empty_and_missing() {
        let dir = TempDir::new().unwrap();
        assert!(import_image("", dir.path()).is_none());

        let missing = dir.path().join("missing.png");
        assert!(import_image(missing.to_str().unwrap(), &dir.path().join("out")).is_none());
    }
}
