//! Configuration management for mKast
//!
//! Handles the launcher configuration file (passwords, window mode, theme colors)
//! and the on-disk asset directory layout. The configuration is a JSON document
//! read once at startup; a missing file is replaced by the defaults.

mod assets;
mod theme;

pub use assets::AssetLayout;
pub use theme::{Rgb, ThemeConfig};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Default configuration file name, relative to the working directory
pub const CONFIG_FILE: &str = "config.json";

/// Resolution the layout constants are designed for
pub const DESIGN_RESOLUTION: (u32, u32) = (1920, 1080);

/// Main launcher configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Password that unlocks the admin panel
    pub admin_password: String,

    /// Password required to close the launcher
    pub exit_password: String,

    /// Borderless fullscreen window
    pub fullscreen: bool,

    /// Window size in pixels, `[width, height]`
    pub resolution: [u32; 2],

    /// Theme colors
    pub theme: ThemeConfig,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            admin_password: "admin123".to_string(),
            exit_password: "exit123".to_string(),
            fullscreen: true,
            resolution: [1920, 1080],
            theme: ThemeConfig::default(),
        }
    }
}

impl LauncherConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, writing the defaults first when the file is missing
    pub fn load_or_init(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => {
                tracing::info!(
                    "Config file not found, creating default at {}",
                    path.display()
                );
                let config = Self::default();
                config.save(path)?;
                Ok(config)
            }
            other => other,
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = to_pretty_json(self)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, contents)?;
        tracing::info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Reject values the window layer cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        let [width, height] = self.resolution;
        if width == 0 || height == 0 {
            return Err(ConfigError::Invalid(format!(
                "resolution must be non-zero, got {}x{}",
                width, height
            )));
        }
        Ok(())
    }

    /// Scale factors relative to the design resolution: `(x, y, min)`
    pub fn scale(&self) -> (f32, f32, f32) {
        let x = self.resolution[0] as f32 / DESIGN_RESOLUTION.0 as f32;
        let y = self.resolution[1] as f32 / DESIGN_RESOLUTION.1 as f32;
        (x, y, x.min(y))
    }
}

/// Serialize with the 4-space indentation used for every launcher document
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
