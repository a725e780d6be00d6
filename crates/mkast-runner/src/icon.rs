//! Icons for executables without cover art

use image::ImageFormat;
use std::path::{Path, PathBuf};

const SIBLING_EXTENSIONS: &[&str] = &["png", "ico", "bmp", "jpg", "jpeg", "gif"];
const GENERIC_ICONS: &[&str] = &["icon.png", "icon.ico"];

/// Given an executable, produce an image that can stand in for its cover
pub trait IconExtractor {
    fn extract(&self, executable: &Path) -> Option<PathBuf>;
}

/// Finds an icon shipped next to the executable and caches it as PNG.
///
/// Results are cached at `<icon_dir>/<stem>_icon.png`; a cached icon is
/// returned without touching the executable's directory again.
#[derive(Debug, Clone)]
pub struct CachedIconExtractor {
    icon_dir: PathBuf,
}

impl CachedIconExtractor {
    pub fn new(icon_dir: impl Into<PathBuf>) -> Self {
        Self {
            icon_dir: icon_dir.into(),
        }
    }

    pub fn icon_dir(&self) -> &Path {
        &self.icon_dir
    }

    /// Where the icon for `executable` is (or would be) cached
    pub fn cache_path(&self, executable: &Path) -> Option<PathBuf> {
        let stem = executable.file_stem()?.to_string_lossy();
        Some(self.icon_dir.join(format!("{}_icon.png", stem)))
    }

    fn find_source(executable: &Path) -> Option<PathBuf> {
        let dir = executable.parent()?;
        let stem = executable.file_stem()?;

        let siblings = SIBLING_EXTENSIONS.iter().map(|ext| {
            let mut name = stem.to_os_string();
            name.push(".");
            name.push(ext);
            dir.join(name)
        });
        let generic = GENERIC_ICONS.iter().map(|name| dir.join(name));

        siblings
            .chain(generic)
            .find(|candidate| candidate.is_file() && candidate != executable)
    }

    fn convert(source: &Path, dest: &Path) -> Result<(), crate::RunnerError> {
        let img = image::open(source)?;
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        img.save_with_format(dest, ImageFormat::Png)?;
        Ok(())
    }
}

impl IconExtractor for CachedIconExtractor {
    fn extract(&self, executable: &Path) -> Option<PathBuf> {
        let cached = self.cache_path(executable)?;
        if cached.exists() {
            return Some(cached);
        }

        let source = Self::find_source(executable)?;
        match Self::convert(&source, &cached) {
            Ok(()) => {
                tracing::info!(
                    "Extracted icon for {} from {}",
                    executable.display(),
                    source.display()
                );
                Some(cached)
            }
            Err(e) => {
                tracing::warn!("Failed to extract icon from {}: {}", source.display(), e);
                None
            }
        }
    }
}
