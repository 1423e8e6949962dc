//! Config management use case

use crate::error::{Result, RevtagError};
use crate::infrastructure::{Config, FileSystemRepository, VaultRepository};

/// Service for managing vault configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "tag_prefix" => Ok(config.tag_prefix.clone()),
            "include_subdirectories" => Ok(config.include_subdirectories.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(RevtagError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: tag_prefix, include_subdirectories, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "tag_prefix" => {
                if value.is_empty() {
                    return Err(RevtagError::Config(
                        "tag_prefix must not be empty".to_string(),
                    ));
                }
                config.tag_prefix = value.to_string();
            }
            "include_subdirectories" => {
                let flag = value.parse::<bool>().map_err(|_| {
                    RevtagError::Config(format!(
                        "Invalid value for include_subdirectories: '{}' (expected true or false)",
                        value
                    ))
                })?;
                config.include_subdirectories = flag;
            }
            "created" => {
                return Err(RevtagError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(RevtagError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: tag_prefix, include_subdirectories",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
