//! Config management use case

use crate::error::{Result, WorklogError};
use crate::infrastructure::config::validate_user;
use crate::infrastructure::{Config, FileSystemRepository, WorklogRepository};

/// Service for managing work log configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

fn parse_count(key: &str, value: &str, allow_zero: bool) -> Result<usize> {
    let parsed = value.trim().parse::<usize>().map_err(|_| {
        WorklogError::Config(format!("Invalid value for '{}': '{}' is not a number", key, value))
    })?;
    if parsed == 0 && !allow_zero {
        return Err(WorklogError::Config(format!(
            "Invalid value for '{}': must be at least 1",
            key
        )));
    }
    Ok(parsed)
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
            "user" => Ok(config.user.clone()),
            "window" => Ok(config.window_weeks.to_string()),
            "top" => Ok(config.top_skills.to_string()),
            "highlights" => Ok(config.highlight_limit.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(WorklogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: user, window, top, highlights, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "user" => {
                validate_user(value)?;
                config.user = value.to_string();
            }
            "window" => config.window_weeks = parse_count(key, value, false)?,
            "top" => config.top_skills = parse_count(key, value, true)?,
            "highlights" => config.highlight_limit = parse_count(key, value, true)?,
            "created" => {
                return Err(WorklogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(WorklogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: user, window, top, highlights",
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new("sam")).unwrap();
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_get_and_set_window() {
        let (_temp, service) = service();
        assert_eq!(service.get("window").unwrap(), "8");
        service.set("window", "12").unwrap();
        assert_eq!(service.get("window").unwrap(), "12");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let (_temp, service) = service();
        assert!(service.set("window", "0").is_err());
        assert!(service.set("top", "many").is_err());
        assert!(service.set("user", "a/b").is_err());
        assert!(service.set("created", "now").is_err());
        assert!(service.set("colour", "blue").is_err());
    }

    #[test]
    fn test_set_user() {
        let (_temp, service) = service();
        service.set("user", "alex").unwrap();
        assert_eq!(service.get("user").unwrap(), "alex");
    }
}
