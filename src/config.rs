//! Configuration for tagger: defaults, then a TOML file, then environment.

use crate::form::{AnswerForm, OutputFormat};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "tagger.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Answer form settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Name of the output field (default "answer")
    pub field: String,
    /// Accept an empty answer on submit (default false)
    pub allow_empty: bool,
    pub format: OutputFormat,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            field: "answer".to_string(),
            allow_empty: false,
            format: OutputFormat::Plain,
        }
    }
}

impl FormConfig {
    pub fn answer_form(&self) -> AnswerForm {
        AnswerForm::new(self.field.clone(), self.allow_empty)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll interval in milliseconds
    pub tick_ms: u64,
    /// Capture the mouse for click and drag-and-drop
    pub mouse: bool,
    /// Longest chip, in terminal cells, before the label is truncated
    pub max_chip_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            mouse: true,
            max_chip_width: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// tracing filter directive, overridden by RUST_LOG
    pub filter: String,
    /// Log destination; the terminal itself belongs to the UI
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: PathBuf::from("tagger.log"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub form: FormConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

impl Config {
    pub fn from_toml(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `TAGGER_*` overrides. Unparseable values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TAGGER_FIELD") {
            if !v.trim().is_empty() {
                self.form.field = v.trim().to_string();
            }
        }
        if let Some(v) = lookup("TAGGER_FORMAT") {
            if let Ok(format) = v.parse() {
                self.form.format = format;
            }
        }
        if let Some(v) = lookup("TAGGER_LOG") {
            self.log.filter = v;
        }
        if let Some(v) = lookup("TAGGER_LOG_FILE") {
            self.log.file = PathBuf::from(v);
        }
    }
}

/// Resolves the configuration.
///
/// An explicit path must exist and parse. Without one, `tagger.toml` in the
/// working directory is used if present.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = match explicit {
        Some(path) => read_config(path)?,
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                read_config(path)?
            } else {
                Config::default()
            }
        }
    };

    config.apply_env(|key| std::env::var(key).ok());
    Ok(config)
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_toml(&raw, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.form.field, "answer");
        assert!(!config.form.allow_empty);
        assert_eq!(config.form.format, OutputFormat::Plain);
        assert_eq!(config.ui.tick_ms, 100);
        assert!(config.ui.mouse);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let raw = "[form]\nfield = \"sentence\"\nformat = \"json\"\n";
        let config = Config::from_toml(raw, Path::new("t.toml")).unwrap();
        assert_eq!(config.form.field, "sentence");
        assert_eq!(config.form.format, OutputFormat::Json);
        assert!(!config.form.allow_empty);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml("[form\nfield = 1", Path::new("bad.toml"));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = Config::from_toml("[form]\nformat = \"xml\"\n", Path::new("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("TAGGER_FIELD", "tags"),
            ("TAGGER_FORMAT", "form"),
            ("TAGGER_LOG", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.form.field, "tags");
        assert_eq!(config.form.format, OutputFormat::Form);
        assert_eq!(config.log.filter, "debug");
        assert_eq!(config.log.file, PathBuf::from("tagger.log"));
    }

    #[test]
    fn test_env_bad_format_ignored() {
        let mut config = Config::default();
        config.apply_env(|key| (key == "TAGGER_FORMAT").then(|| "yaml".to_string()));
        assert_eq!(config.form.format, OutputFormat::Plain);
    }

    #[test]
    fn test_missing_explicit_config() {
        let result = load_config(Some(Path::new("/nonexistent/tagger.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_answer_form_from_config() {
        let config = FormConfig {
            field: "sentence".to_string(),
            allow_empty: true,
            format: OutputFormat::Plain,
        };
        assert_eq!(config.answer_form(), AnswerForm::new("sentence", true));
    }
}
