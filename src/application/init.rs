//! Initialize vault use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, VaultRepository};
use std::fs;
use std::path::Path;

/// Initialize a new vault at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .revtag directory
    repo.initialize()?;

    // Create and save default config
    let config = Config::new();
    repo.save_config(&config)?;

    println!("Initialized revtag vault at {}", path.display());
    println!(
        "Tag format: #{}/<year>/<month>/<day>",
        config.tag_prefix
    );

    Ok(())
}
