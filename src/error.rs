//! Error types for revtag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the revtag application
#[derive(Debug, Error)]
pub enum RevtagError {
    #[error("Not a revtag vault: {0}")]
    NotVaultDirectory(PathBuf),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl RevtagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RevtagError::NotVaultDirectory(_) => 2,
            RevtagError::InvalidDate(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RevtagError::NotVaultDirectory(path) => {
                format!(
                    "Not a revtag vault: {}\n\n\
                    Suggestions:\n\
                    • Run 'revtag init' in this directory to create a new vault\n\
                    • Navigate to an existing revtag vault\n\
                    • Set REVTAG_ROOT environment variable to your vault path",
                    path.display()
                )
            }
            RevtagError::InvalidDate(date_str) => {
                format!(
                    "Invalid date format: '{}'\n\n\
                    Expected format: DD-MM-YYYY\n\
                    Example: revtag pending --on 20-01-2026",
                    date_str
                )
            }
            RevtagError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: tag_prefix, include_subdirectories, created\n\
                        Example: revtag config tag_prefix review",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RevtagError
pub type Result<T> = std::result::Result<T, RevtagError>;
