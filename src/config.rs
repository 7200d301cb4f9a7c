//! Application configuration.

use crate::consts::cli_consts::display::RECENT_ACTIVITY_FETCH_LIMIT;
use crate::environment::Environment;
use crate::query::QueryKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Environment name (`local`, `staging`, `production`) or API base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    /// Sent as a bearer token on every request when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// Per-query refresh interval overrides, in milliseconds.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub refresh_interval_ms: BTreeMap<QueryKey, u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_background_color: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_activity_limit: Option<u32>,
}

/// Location of the config file: `~/.chainwatch/config.json`.
pub fn get_config_path() -> Result<PathBuf, io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Could not determine home directory")
    })?;
    Ok(home.join(".chainwatch").join("config.json"))
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Like [`Config::load_from_file`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, io::Error> {
        match Self::load_from_file(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the config file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), io::Error> {
        match fs::remove_file(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }

    /// The configured environment, if it names a known one or a URL.
    pub fn environment(&self) -> Option<Environment> {
        self.environment.as_deref()?.parse().ok()
    }

    pub fn refresh_overrides(&self) -> BTreeMap<QueryKey, Duration> {
        self.refresh_interval_ms
            .iter()
            .map(|(key, ms)| (*key, Duration::from_millis(*ms)))
            .collect()
    }

    pub fn recent_activity_limit(&self) -> u32 {
        self.recent_activity_limit
            .unwrap_or(RECENT_ACTIVITY_FETCH_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn sample() -> Config {
        Config {
            environment: Some("staging".to_string()),
            api_token: Some("secret".to_string()),
            refresh_interval_ms: BTreeMap::from([(QueryKey::Overview, 5_000)]),
            with_background_color: Some(false),
            recent_activity_limit: Some(25),
        }
    }

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = sample();
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = Config::new().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(path.exists(), "Config file was not written");
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let error = Config::load_from_file(&path).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
        assert!(Config::load_or_default(&path).is_err());
    }

    #[test]
    // A missing file falls back to defaults, and clearing twice is fine.
    fn test_missing_file_defaults_and_clear() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());

        sample().save(&path).unwrap();
        Config::clear(&path).unwrap();
        assert!(!path.exists());
        Config::clear(&path).unwrap();
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"environment": "http://127.0.0.1:9000/", "refresh_interval_ms": {"devices_overview": 1500}}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(
            config.environment(),
            Some(Environment::Custom {
                api_url: "http://127.0.0.1:9000".to_string()
            })
        );
        assert_eq!(
            config.refresh_overrides().get(&QueryKey::DevicesOverview),
            Some(&Duration::from_millis(1500))
        );
        assert_eq!(config.recent_activity_limit(), RECENT_ACTIVITY_FETCH_LIMIT);
        assert_eq!(config.api_token, None);
    }
}
