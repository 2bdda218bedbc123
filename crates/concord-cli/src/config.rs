//! Configuration for the concord binary
//!
//! Read from `concord.json` or `concord.yaml`; the format follows the file
//! extension. Every field has a default, and a missing file means "all
//! defaults".

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use concord_adapter::FileMedium;
use concord_domain::{MediumError, RecordStore, SequentialIds, UuidIds, DEFAULT_KEY_PREFIX};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "concord.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported config format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
}

/// How new record ids are chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUID v4
    #[default]
    Uuid,
    /// Next integer after the largest numeric id
    Sequential,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcordConfig {
    /// Directory holding one JSON file per collection
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Prefix of every storage key
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Seed default accounts into an empty store on startup
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

fn default_seed_defaults() -> bool {
    true
}

impl Default for ConcordConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key_prefix: default_key_prefix(),
            id_strategy: IdStrategy::default(),
            seed_defaults: default_seed_defaults(),
        }
    }
}

enum Format {
    Json,
    Yaml,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}

impl ConcordConfig {
    /// Parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;
        let config = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Yaml => serde_yaml::from_str(&content)?,
        };
        Ok(config)
    }

    /// Load the configuration the binary runs with
    ///
    /// A missing file yields the defaults. A relative `dataDir` is taken
    /// relative to the directory of the configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            format_of(path)?;
            Self::default()
        };

        if let Some(base) = path.parent() {
            config.data_dir = base.join(&config.data_dir);
        }
        Ok(config)
    }

    /// Write the configuration in the format matching the file extension
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Yaml => serde_yaml::to_string(self)?,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the record store this configuration describes
    pub fn open_store(&self) -> Result<RecordStore, MediumError> {
        let medium = FileMedium::open(&self.data_dir)?;
        let store = RecordStore::new(medium).with_key_prefix(self.key_prefix.clone());
        Ok(match self.id_strategy {
            IdStrategy::Uuid => store.with_id_generator(UuidIds),
            IdStrategy::Sequential => store.with_id_generator(SequentialIds),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("concord.json");
        std::fs::write(&path, r#"{ "idStrategy": "sequential" }"#).unwrap();

        let config = ConcordConfig::from_file(&path).unwrap();
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert_eq!(config.key_prefix, "concord.");
        assert!(config.seed_defaults);
    }

    #[test]
    fn test_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("concord.yaml");
        std::fs::write(&path, "dataDir: /var/lib/concord\nseedDefaults: false\n").unwrap();

        let config = ConcordConfig::from_file(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/concord"));
        assert!(!config.seed_defaults);
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = ConcordConfig::load(Path::new("concord.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "toml"));
    }

    #[test]
    fn test_missing_file_resolves_data_dir_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConcordConfig::load(&dir.path().join("concord.json")).unwrap();
        assert_eq!(config.data_dir, dir.path().join("data"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("etc/concord.yml");
        let config = ConcordConfig {
            data_dir: PathBuf::from("/srv/concord"),
            key_prefix: "cms.".to_string(),
            id_strategy: IdStrategy::Sequential,
            seed_defaults: false,
        };

        config.save(&path).unwrap();
        assert_eq!(ConcordConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_open_store_uses_prefix_and_strategy() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConcordConfig {
            data_dir: dir.path().to_path_buf(),
            key_prefix: "cms.".to_string(),
            id_strategy: IdStrategy::Sequential,
            seed_defaults: true,
        };

        let mut store = config.open_store().unwrap();
        let created = store
            .create("works", serde_json::Map::new())
            .unwrap();

        assert_eq!(created["id"], "1");
        assert!(dir.path().join("cms.works.json").is_file());
    }
}
