//! Configuration for pin-notes.
//!
//! Read once at startup and never written back, so the theme and the note
//! counter always start from their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "pin-notes";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory `note_<N>.txt` files are written to.
    #[serde(default = "default_dir")]
    pub notes_dir: PathBuf,
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_dir: default_dir(),
            picker: PickerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .map(|s| Self::parse(&s))
            .unwrap_or_default()
    }

    /// Parse a config file, falling back to defaults when malformed.
    pub fn parse(content: &str) -> Self {
        toml::from_str(content).unwrap_or_default()
    }

    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|d| d.config_dir().join("config.toml"))
    }

    pub fn log_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|d| d.data_dir().join(format!("{APP_NAME}.log")))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerConfig {
    #[serde(default = "default_dir")]
    pub start_dir: PathBuf,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub show_hidden: bool,
}

fn default_extension() -> String {
    "txt".to_string()
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            start_dir: default_dir(),
            extension: default_extension(),
            show_hidden: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.notes_dir, PathBuf::from("."));
        assert_eq!(config.picker.extension, "txt");
        assert!(!config.picker.show_hidden);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse(
            r#"
            notes_dir = "/tmp/notes"

            [logging]
            level = "debug"
            "#,
        );
        assert_eq!(config.notes_dir, PathBuf::from("/tmp/notes"));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.enabled);
        assert_eq!(config.picker.start_dir, PathBuf::from("."));
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let config = Config::parse("notes_dir = [not toml");
        assert_eq!(config.notes_dir, PathBuf::from("."));
    }
}
