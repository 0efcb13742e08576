//! Settings structures for search-selector configuration

use crate::selection::SELECTION_KEY;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings structure, loaded from settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub storage: StorageSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (SEARCH_SELECTOR_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|name| std::env::var(name).ok());
    }

    fn merge_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SEARCH_SELECTOR_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Some(val) = var("SEARCH_SELECTOR_STORAGE_PATH") {
            self.storage.path = PathBuf::from(val);
        }
        if let Some(val) = var("SEARCH_SELECTOR_STORAGE_KEY") {
            if !val.is_empty() {
                self.storage.key = val;
            }
        }
    }
}

/// General settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
}

/// Preference storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Preference file location
    pub path: PathBuf,
    /// Key the selected engine index is stored under
    pub key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            key: SELECTION_KEY.to_string(),
        }
    }
}

fn default_storage_path() -> PathBuf {
    dirs::data_dir()
        .map(|p| p.join("search-selector"))
        .unwrap_or_default()
        .join("preferences.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.general.debug);
        assert_eq!(settings.storage.key, "selectedSearchEngineIndex");
        assert!(settings.storage.path.ends_with("preferences.json"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yml");
        std::fs::write(&path, "general:\n  debug: true\nstorage:\n  path: /tmp/prefs.json\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert!(settings.general.debug);
        assert_eq!(settings.storage.path, PathBuf::from("/tmp/prefs.json"));
        assert_eq!(settings.storage.key, SELECTION_KEY);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SEARCH_SELECTOR_DEBUG", "true"),
            ("SEARCH_SELECTOR_STORAGE_PATH", "/var/lib/prefs.json"),
            ("SEARCH_SELECTOR_STORAGE_KEY", ""),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.merge_vars(|name| vars.get(name).map(|v| v.to_string()));

        assert!(settings.general.debug);
        assert_eq!(settings.storage.path, PathBuf::from("/var/lib/prefs.json"));
        assert_eq!(settings.storage.key, SELECTION_KEY);
    }
}
