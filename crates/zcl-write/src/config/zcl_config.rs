//! Configuration file structure

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZclConfig {
    /// Serializer settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writer: Option<WriterConfiguration>,
}

/// Serializer settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WriterConfiguration {
    /// Size of the scratch buffer used to emit leading spaces; at least 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_chunk_size: Option<usize>,
}

impl ZclConfig {
    /// Load configuration from file
    ///
    /// The format is chosen by extension: `.json`, `.yaml`/`.yml` or `.toml`.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let content = fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str());

        match ext {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some("toml") => Ok(toml::from_str(&content)?),
            _ => Err("Unsupported file extension (expected .json, .yaml, .yml, or .toml)".into()),
        }
    }

    /// Writer configuration with defaults
    pub fn writer_config(&self) -> WriterConfiguration {
        self.writer.clone().unwrap_or_default()
    }
}
