//! Configuration file discovery and loading

use super::zcl_config::ZclConfig;
use crate::error::ZclError;
use crate::result::Result;
use std::path::{Path, PathBuf};

/// Config file names in discovery priority order
const CONFIG_FILE_NAMES: &[&str] = &[".zclrc.json", ".zclrc.toml", "zcl.yaml", "zcl.yml", "zcl.json"];

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover a config file by traversing upward from `start_path`
    ///
    /// Returns the first match, checking each directory for the supported
    /// names in priority order before moving to its parent.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| ZclError::config_error(format!("Invalid path: {e}")))?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
        }

        Ok(None)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<ZclConfig> {
        tracing::debug!("Loading config: {}", path.display());
        ZclConfig::load(path).map_err(|e| {
            ZclError::config_error(format!(
                "Failed to load config from '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Load config from an explicit path or by discovery
    ///
    /// Discovery starts at `start_dir` (or the current directory). When no
    /// file is found the default configuration is returned.
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<ZclConfig> {
        if let Some(path) = custom_path {
            if !path.exists() {
                return Err(ZclError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from_file(path);
        }

        let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
        match Self::auto_discover(search_dir)? {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(ZclConfig::default())
            }
        }
    }
}
