// Engine settings, loaded from an optional JSON file and overridden by CLI flags
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub output: OutputFormat,
    pub csv_delimiter: String,
    pub log_level: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            output: OutputFormat::Text,
            csv_delimiter: ",".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl EngineSettings {
    /// Reads settings from `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> EngineResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)?;
        let settings: EngineSettings = serde_json::from_str(&content)?;
        settings.csv_delimiter_byte()?;
        tracing::debug!(path = %path.display(), ?settings, "Loaded settings");
        Ok(settings)
    }

    /// The delimiter must be exactly one ASCII character.
    pub fn csv_delimiter_byte(&self) -> EngineResult<u8> {
        parse_delimiter(&self.csv_delimiter)
    }
}

pub fn parse_delimiter(text: &str) -> EngineResult<u8> {
    match text.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(EngineError::ConfigError(format!(
            "CSV delimiter must be a single ASCII character, got '{}'",
            text
        ))),
    }
}
