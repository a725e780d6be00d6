//! JSON-backed catalog

use crate::{GameRecord, LibraryError};
use mkast_config::to_pretty_json;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Catalog file used when none is given on the command line
pub const DEFAULT_CATALOG_FILE: &str = "games.json";

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    games: Vec<GameRecord>,
}

#[derive(Serialize)]
struct CatalogDocumentRef<'a> {
    games: &'a [GameRecord],
}

/// In-memory catalog mirrored to a JSON file
#[derive(Debug)]
pub struct Catalog {
    path: PathBuf,
    games: Vec<GameRecord>,
}

impl Catalog {
    /// Open the catalog at `path`, creating an empty one if the file is missing
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
        let path = path.as_ref().to_path_buf();
        if path.file_name().is_none() {
            return Err(LibraryError::BadPath(path));
        }

        if !path.exists() {
            tracing::info!("Catalog not found, creating {}", path.display());
            let catalog = Self {
                path,
                games: Vec::new(),
            };
            catalog.save()?;
            return Ok(catalog);
        }

        let contents = std::fs::read_to_string(&path)?;
        let document: CatalogDocument = serde_json::from_str(&contents)?;
        tracing::info!(
            "Loaded {} games from {}",
            document.games.len(),
            path.display()
        );

        Ok(Self {
            path,
            games: document.games,
        })
    }

    /// Catalog that lives only in memory until `save` is called with a real path
    pub fn in_memory(path: impl Into<PathBuf>, games: Vec<GameRecord>) -> Self {
        Self {
            path: path.into(),
            games,
        }
    }

    /// Rewrite the whole document through a sibling temporary file
    pub fn save(&self) -> Result<(), LibraryError> {
        let contents = to_pretty_json(&CatalogDocumentRef { games: &self.games })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.temp_path();
        std::fs::write(&tmp, contents)?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }

        tracing::debug!(
            "Saved {} games to {}",
            self.games.len(),
            self.path.display()
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn get(&self, index: usize) -> Option<&GameRecord> {
        self.games.get(index)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Append a record in memory
    pub fn push(&mut self, record: GameRecord) -> Result<(), LibraryError> {
        Self::check(&record)?;
        self.games.push(record);
        Ok(())
    }

    /// Overwrite the record at `index` in memory
    pub fn replace(&mut self, index: usize, record: GameRecord) -> Result<(), LibraryError> {
        Self::check(&record)?;
        let len = self.games.len();
        let slot = self
            .games
            .get_mut(index)
            .ok_or(LibraryError::IndexOutOfRange { index, len })?;
        *slot = record;
        Ok(())
    }

    /// Remove the record at `index` in memory, returning it
    pub fn remove(&mut self, index: usize) -> Result<GameRecord, LibraryError> {
        if index >= self.games.len() {
            return Err(LibraryError::IndexOutOfRange {
                index,
                len: self.games.len(),
            });
        }
        Ok(self.games.remove(index))
    }

    /// Append and persist
    pub fn add(&mut self, record: GameRecord) -> Result<(), LibraryError> {
        tracing::info!("Adding game: {}", record.name);
        self.push(record)?;
        self.save()
    }

    /// Replace and persist
    pub fn update(&mut self, index: usize, record: GameRecord) -> Result<(), LibraryError> {
        tracing::info!("Updating game {}: {}", index, record.name);
        self.replace(index, record)?;
        self.save()
    }

    /// Remove and persist
    pub fn delete(&mut self, index: usize) -> Result<GameRecord, LibraryError> {
        let removed = self.remove(index)?;
        tracing::info!("Deleted game {}: {}", index, removed.name);
        self.save()?;
        Ok(removed)
    }

    fn check(record: &GameRecord) -> Result<(), LibraryError> {
        if record.is_valid() {
            Ok(())
        } else {
            Err(LibraryError::InvalidRecord(
                "name and executable path are required".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(name: &str) -> GameRecord {
        GameRecord::new(name, "", format!("/games/{name}"), "")
    }

    #[test]
    fn test_open_creates_empty_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("games.json");

        let catalog = Catalog::open(&path).unwrap();
        assert!(catalog.is_empty());

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({ "games": [] }));
    }

    #[test]
    fn test_document_without_games_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("games.json");
        std::fs::write(&path, "{}").unwrap();

        let catalog = Catalog::open(&path).unwrap();
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_bad_index() {
        let mut catalog = Catalog::in_memory("games.json", vec![record("a")]);

        let err = catalog.replace(3, record("b")).unwrap_err();
        assert!(matches!(
            err,
            LibraryError::IndexOutOfRange { index: 3, len: 1 }
        ));
        assert!(catalog.remove(1).is_err());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_invalid_record_rejected() {
        let mut catalog = Catalog::in_memory("games.json", Vec::new());
        let err = catalog.push(GameRecord::new("", "", "/x", "")).unwrap_err();
        assert!(matches!(err, LibraryError::InvalidRecord(_)));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("games.json");

        let mut catalog = Catalog::open(&path).unwrap();
        catalog.add(record("a")).unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("games.json")]);
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("games.json");

        let mut catalog = Catalog::open(&path).unwrap();
        catalog.add(record("a")).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("{\n    \"games\": ["));
        assert!(raw.contains("\n            \"name\": \"a\""));
    }
}
