use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "PokerOrganizer";

/// Directory holding layouts, settings and config.
pub fn default_data_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserSettings {
    pub language: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
        }
    }
}

impl UserSettings {
    pub fn default_path() -> PathBuf {
        default_data_dir().join("settings.json")
    }

    /// Never fails; unreadable or malformed files give the defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                warn!("Ignoring malformed settings {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = UserSettings {
            language: "pt-BR".to_string(),
        };
        settings.save(&path).unwrap();
        assert_eq!(UserSettings::load(&path), settings);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ broken").unwrap();
        assert_eq!(UserSettings::load(&path), UserSettings::default());
        assert_eq!(
            UserSettings::load(&dir.path().join("missing.json")).language,
            "en-US"
        );
    }
}
