//! Asset directory layout

use std::path::{Path, PathBuf};

/// Directories the launcher reads fonts and images from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    root: PathBuf,
}

impl AssetLayout {
    /// Layout rooted at `base` (`<base>/assets/...`)
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            root: base.into().join("assets"),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn fonts_dir(&self) -> PathBuf {
        self.root.join("fonts")
    }

    /// Imported cover art and extracted icons
    pub fn game_images_dir(&self) -> PathBuf {
        self.root.join("game_images")
    }

    /// Create every directory of the layout
    pub fn ensure(&self) -> std::io::Result<()> {
        for dir in [self.root.clone(), self.fonts_dir(), self.game_images_dir()] {
            std::fs::create_dir_all(&dir)?;
        }
        tracing::debug!("Asset directories ready under {}", self.root.display());
        Ok(())
    }

    /// First `.ttf` or `.otf` file in the fonts directory, in name order
    pub fn find_font(&self) -> Option<PathBuf> {
        let mut fonts: Vec<PathBuf> = std::fs::read_dir(self.fonts_dir())
            .ok()?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.eq_ignore_ascii_case("ttf") || e.eq_ignore_ascii_case("otf"))
                    .unwrap_or(false)
            })
            .collect();
        fonts.sort();
        fonts.into_iter().next()
    }
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self::new(".")
    }
}
