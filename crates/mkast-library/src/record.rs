//! A single catalog entry

use serde::{Deserialize, Deserializer, Serialize};

/// Description stored when the user leaves the field empty
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// A launchable game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub executable_path: String,

    /// Cover image; empty when neither an image nor an icon is available
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_path: String,
}

impl GameRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        executable_path: impl Into<String>,
        image_path: impl Into<String>,
    ) -> Self {
        let description = description.into();
        Self {
            name: name.into(),
            description: if description.is_empty() {
                DEFAULT_DESCRIPTION.to_string()
            } else {
                description
            },
            executable_path: executable_path.into(),
            image_path: image_path.into(),
        }
    }

    /// Every persisted record needs a name and something to run
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.executable_path.is_empty()
    }

    pub fn has_image(&self) -> bool {
        !self.image_path.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_description() {
        let record = GameRecord::new("Doom", "", "/games/doom", "");
        assert_eq!(record.description, DEFAULT_DESCRIPTION);
        assert!(record.is_valid());
        assert!(!record.has_image());
    }

    #[test]
    fn test_invalid_without_executable() {
        let record = GameRecord::new("Doom", "demo", "", "");
        assert!(!record.is_valid());
    }

    #[test]
    fn test_null_and_missing_image_path() {
        let with_null: GameRecord = serde_json::from_str(
            r#"{"name": "A", "description": "d", "executable_path": "/a", "image_path": null}"#,
        )
        .unwrap();
        assert_eq!(with_null.image_path, "");

        let without: GameRecord =
            serde_json::from_str(r#"{"name": "B", "executable_path": "/b"}"#).unwrap();
        assert_eq!(without.image_path, "");
        assert_eq!(without.description, "");
    }
}
