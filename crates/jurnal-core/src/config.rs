//! Configuration loading and typed config structures for the journal.
//!
//! Configuration lives in a YAML file (conventionally `jurnal-config.yaml`).
//! Every field has a default, so an empty file, or no file at all, yields
//! a working configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Storage key used by every released version of the journal.
pub const DEFAULT_STORAGE_KEY: &str = "app3-jurnal-ganduri-automate-v1";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level journal configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JournalConfig {
    /// Where and under which key the entry list is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Form defaults.
    #[serde(default)]
    pub form: FormConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl JournalConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override file values:
    /// - `JURNAL_DATA_DIR` overrides `storage.data_dir`
    /// - `JURNAL_STORAGE_KEY` overrides `storage.key`
    /// - `JURNAL_LOG_LEVEL` overrides `logging.level`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse_yaml(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::parse_yaml(yaml)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn parse_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yml reads an empty document as a unit value, not a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Override values with environment variables when set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Override values from `lookup`, which maps a variable name to its
    /// value when set.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("JURNAL_DATA_DIR") {
            self.storage.data_dir = PathBuf::from(dir);
        }
        if let Some(key) = lookup("JURNAL_STORAGE_KEY") {
            self.storage.key = key;
        }
        if let Some(level) = lookup("JURNAL_LOG_LEVEL") {
            self.logging.level = level;
        }
    }
}

/// Durable storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the journal document.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Namespace key of the storage slot.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: default_storage_key(),
        }
    }
}

/// Form configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormConfig {
    /// Where the intensity slider starts, and returns to after a submit.
    /// Clamped to 0..=100 when the form is built.
    #[serde(default = "default_intensity")]
    pub default_intensity: i64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_intensity: default_intensity(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_owned()
}

const fn default_intensity() -> i64 {
    50
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = JournalConfig::default();
        assert_eq!(config.storage.key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
        assert_eq!(config.form.default_intensity, 50);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
storage:
  data_dir: "/var/lib/jurnal"
  key: "jurnal-test"

form:
  default_intensity: 30

logging:
  level: "debug"
  json: true
"#;

        let config = JournalConfig::parse_yaml(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/jurnal"));
        assert_eq!(config.storage.key, "jurnal-test");
        assert_eq!(config.form.default_intensity, 30);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn parse_minimal_yaml() {
        let config = JournalConfig::parse_yaml("form:\n  default_intensity: 70\n");
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.form.default_intensity, 70);
        // Everything else uses defaults
        assert_eq!(config.storage.key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_empty_yaml() {
        let config = JournalConfig::parse_yaml("");
        assert_eq!(config.ok(), Some(JournalConfig::default()));
    }

    #[test]
    fn parse_invalid_yaml() {
        let config = JournalConfig::parse_yaml("storage: [unterminated");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn overrides_replace_file_values() {
        let vars: BTreeMap<&str, &str> = [
            ("JURNAL_DATA_DIR", "/tmp/jurnal"),
            ("JURNAL_STORAGE_KEY", "alt-key"),
        ]
        .into_iter()
        .collect();

        let mut config = JournalConfig::default();
        config.apply_overrides(|name| vars.get(name).map(|v| (*v).to_owned()));

        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/jurnal"));
        assert_eq!(config.storage.key, "alt-key");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = JournalConfig::from_file(Path::new("/nonexistent/jurnal-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
