//! Initialize work log use case

use crate::error::Result;
use crate::infrastructure::config::validate_user;
use crate::infrastructure::{Config, FileSystemRepository, WorklogRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new work log at the specified path for `user`.
pub fn init(path: &Path, user: &str) -> Result<()> {
    validate_user(user)?;

    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new(user))?;
    info!(path = %path.display(), user, "initialized work log");

    println!("Initialized workxlog at {}", path.display());
    println!("User: {}", user);

    Ok(())
}
