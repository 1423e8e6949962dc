//! Configuration management

use crate::domain::tags::DEFAULT_TAG_PREFIX;
use crate::error::{Result, RevtagError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_tag_prefix() -> String {
    DEFAULT_TAG_PREFIX.to_string()
}

fn default_include_subdirectories() -> bool {
    true
}

/// Vault configuration stored at `.revtag/config.toml`.
///
/// Field defaults are applied during deserialization, so a sparse config
/// file merges deterministically and downstream code never needs fallback
/// logic for missing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    #[serde(default = "default_include_subdirectories")]
    pub include_subdirectories: bool,

    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            tag_prefix: default_tag_prefix(),
            include_subdirectories: default_include_subdirectories(),
            created: Utc::now(),
        }
    }

    /// Load config from .revtag/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".revtag").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RevtagError::NotVaultDirectory(path.to_path_buf())
            } else {
                RevtagError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| RevtagError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .revtag/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let revtag_dir = path.join(".revtag");
        let config_path = revtag_dir.join("config.toml");

        // Ensure .revtag directory exists
        if !revtag_dir.exists() {
            fs::create_dir(&revtag_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| RevtagError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
