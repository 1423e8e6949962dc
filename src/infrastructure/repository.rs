//! File system repository

use crate::error::{Result, RevtagError};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract repository for vault-level operations
pub trait VaultRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .revtag/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .revtag/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .revtag directory exists
    fn is_initialized(&self) -> bool;

    /// Create .revtag directory structure
    fn initialize(&self) -> Result<()>;
}

/// Read-only corpus access used by catalog rebuilds.
///
/// Documents are identified by their vault-relative path; the text of each
/// document is fetched on demand.
pub trait DocumentSource {
    /// Identities of every markdown document, in a stable order
    fn list_documents(&self, include_subdirectories: bool) -> Result<Vec<String>>;

    /// Full current text of one document
    fn read_document(&self, filename: &str) -> Result<String>;
}

/// File system implementation of the vault repository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover vault root by walking up from current directory
    /// First checks REVTAG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check REVTAG_ROOT environment variable first
        if let Ok(root_path) = std::env::var("REVTAG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_revtag_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(RevtagError::Config(format!(
                    "REVTAG_ROOT is set to '{}' but no .revtag directory found. \
                    Run 'revtag init' in that directory or unset REVTAG_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover vault root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_revtag_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .revtag
                    return Err(RevtagError::NotVaultDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .revtag directory
    fn has_revtag_dir(path: &Path) -> bool {
        path.join(".revtag").is_dir()
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    fn is_markdown_file(rel: &Path) -> bool {
        rel.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(".md"))
    }

    fn collect_root_documents(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root)?;
        let mut documents = Vec::new();

        for entry in entries {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Ok(rel) = path.strip_prefix(&self.root) else {
                continue;
            };
            if !Self::is_markdown_file(rel) {
                continue;
            }
            if let Some(filename) = Self::normalize_relative_path(rel) {
                documents.push(filename);
            }
        }

        Ok(documents)
    }

    fn collect_recursive_documents(&self) -> Vec<String> {
        let mut documents = Vec::new();

        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if !Self::is_markdown_file(rel) {
                continue;
            }
            if let Some(filename) = Self::normalize_relative_path(rel) {
                documents.push(filename);
            }
        }

        documents
    }
}

impl VaultRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_revtag_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let revtag_dir = self.root.join(".revtag");

        if revtag_dir.exists() {
            return Err(RevtagError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&revtag_dir)?;
        Ok(())
    }
}

impl DocumentSource for FileSystemRepository {
    /// List markdown documents under the vault root.
    ///
    /// With `include_subdirectories`, nested directories are walked but
    /// dot-directories (including .revtag itself) are skipped. Paths are
    /// sorted so the corpus order is stable across rebuilds.
    fn list_documents(&self, include_subdirectories: bool) -> Result<Vec<String>> {
        let mut documents = if include_subdirectories {
            self.collect_recursive_documents()
        } else {
            self.collect_root_documents()?
        };

        documents.sort();
        Ok(documents)
    }

    fn read_document(&self, filename: &str) -> Result<String> {
        fs::read_to_string(self.root.join(filename)).map_err(RevtagError::Io)
    }
}
