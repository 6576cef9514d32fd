// src/config.rs
//! User settings: heading to summarize, heading to insert the summary under,
//! and how to reach the summarization API.
//!
//! Values are layered: built-in defaults, then the TOML config file, then the
//! `OPENAI_API_KEY` environment variable, then command-line flags (applied by `main`).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::extractors::{HeadingMatch, HeadingSpec};
use crate::utils::error::{ConfigError, ExtractError};

pub const DEFAULT_CONFIG_FILE: &str = "heading-summarizer.toml";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const DEFAULT_PROMPT: &str = "Fasse diesen Text zusammen in ein bis drei Sätzen: \n\n\n";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_key: Option<String>,
    pub heading_level: u8,
    pub heading_name: String,
    pub summary_level: u8,
    pub summary_name: String,
    pub heading_match: HeadingMatch,
    pub model: String,
    pub prompt: String,
    pub api_base_url: String,
    pub poll_interval_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            heading_level: 1,
            heading_name: "Dokumentation".to_string(),
            summary_level: 1,
            summary_name: "Summary".to_string(),
            heading_match: HeadingMatch::Exact,
            model: "gpt-4o".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            api_base_url: "https://api.openai.com/v1".to_string(),
            poll_interval_ms: 1000,
            request_timeout_secs: 60,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists.
    /// An explicitly given path must exist; a missing default file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    tracing::debug!("No {} found, using default settings", DEFAULT_CONFIG_FILE);
                    Self::default()
                }
            }
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                tracing::debug!("Using API key from {}", API_KEY_ENV);
                settings.api_key = Some(key);
            }
        }

        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Levels follow markdown's 1..=6 range; names must not be blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("heading_level", self.heading_level),
            ("summary_level", self.summary_level),
        ] {
            if !(1..=6).contains(&value) {
                return Err(ConfigError::LevelOutOfRange { field, value });
            }
        }
        if self.heading_name.trim().is_empty() {
            return Err(ConfigError::EmptyField("heading_name"));
        }
        if self.summary_name.trim().is_empty() {
            return Err(ConfigError::EmptyField("summary_name"));
        }
        Ok(())
    }

    pub fn heading_spec(&self) -> Result<HeadingSpec, ExtractError> {
        HeadingSpec::new(self.heading_level, self.heading_name.as_str())
    }

    pub fn summary_spec(&self) -> Result<HeadingSpec, ExtractError> {
        HeadingSpec::new(self.summary_level, self.summary_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_plugin_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.heading_level, 1);
        assert_eq!(settings.heading_name, "Dokumentation");
        assert_eq!(settings.summary_name, "Summary");
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.heading_match, HeadingMatch::Exact);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings = Settings::from_toml(
            r#"
            heading_level = 2
            heading_name = "Log"
            heading_match = "prefix"
            "#,
        )
        .unwrap();
        assert_eq!(settings.heading_level, 2);
        assert_eq!(settings.heading_name, "Log");
        assert_eq!(settings.heading_match, HeadingMatch::Prefix);
        assert_eq!(settings.summary_name, "Summary");
        assert_eq!(settings.poll_interval_ms, 1000);
    }

    #[test]
    fn test_toml_roundtrip_keeps_api_key() {
        let settings = Settings { api_key: Some("sk-test".to_string()), ..Settings::default() };
        let parsed = Settings::from_toml(&settings.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_validate_rejects_bad_levels_and_names() {
        let zero = Settings { heading_level: 0, ..Settings::default() };
        assert!(matches!(
            zero.validate(),
            Err(ConfigError::LevelOutOfRange { field: "heading_level", value: 0 })
        ));

        let seven = Settings { summary_level: 7, ..Settings::default() };
        assert!(matches!(
            seven.validate(),
            Err(ConfigError::LevelOutOfRange { field: "summary_level", value: 7 })
        ));

        let blank = Settings { heading_name: " ".to_string(), ..Settings::default() };
        assert!(matches!(blank.validate(), Err(ConfigError::EmptyField("heading_name"))));
    }

    #[test]
    fn test_from_file_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "heading_level = \"one\"").unwrap();
        assert!(matches!(Settings::from_file(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(Settings::from_file(&path), Err(ConfigError::Read { .. })));
    }
}
