//! Configuration management

use crate::domain::insights::DEFAULT_TOP_SKILLS;
use crate::domain::KeywordTables;
use crate::error::{Result, WorklogError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const WORKXLOG_DIR: &str = ".workxlog";
pub const DEFAULT_USER: &str = "default";
pub const DEFAULT_WINDOW_WEEKS: usize = 8;
pub const DEFAULT_HIGHLIGHT_LIMIT: usize = 10;

fn default_user() -> String {
    DEFAULT_USER.to_string()
}

fn default_window_weeks() -> usize {
    DEFAULT_WINDOW_WEEKS
}

fn default_top_skills() -> usize {
    DEFAULT_TOP_SKILLS
}

fn default_highlight_limit() -> usize {
    DEFAULT_HIGHLIGHT_LIMIT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_window_weeks")]
    pub window_weeks: usize,
    #[serde(default = "default_top_skills")]
    pub top_skills: usize,
    #[serde(default = "default_highlight_limit")]
    pub highlight_limit: usize,
    pub created: DateTime<Utc>,
    /// Overrides for the classifier keyword tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<KeywordTables>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(user: &str) -> Self {
        Config {
            user: user.to_string(),
            window_weeks: DEFAULT_WINDOW_WEEKS,
            top_skills: DEFAULT_TOP_SKILLS,
            highlight_limit: DEFAULT_HIGHLIGHT_LIMIT,
            created: Utc::now(),
            keywords: None,
        }
    }

    /// Load config from .workxlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKXLOG_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WorklogError::NotWorklogDirectory(path.to_path_buf())
            } else {
                WorklogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| WorklogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .workxlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let dir = path.join(WORKXLOG_DIR);
        let config_path = dir.join("config.toml");

        if !dir.exists() {
            fs::create_dir(&dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| WorklogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Keyword tables in effect: overrides if present, else the defaults
    pub fn keyword_tables(&self) -> KeywordTables {
        self.keywords.clone().unwrap_or_default()
    }
}

/// User names become file names, so only a safe character set is allowed.
pub fn validate_user(user: &str) -> Result<()> {
    let valid = !user.is_empty()
        && !user.starts_with('.')
        && user
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(WorklogError::Config(format!("Invalid user name: '{}'", user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new("sam");
        assert_eq!(config.user, "sam");
        assert_eq!(config.window_weeks, 8);
        assert_eq!(config.top_skills, 6);
        assert_eq!(config.highlight_limit, 10);
        assert!(config.keywords.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new("sam");
        config.window_weeks = 12;

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".workxlog/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.user, "sam");
        assert_eq!(loaded.window_weeks, 12);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from_dir(temp.path());
        match result.unwrap_err() {
            WorklogError::NotWorklogDirectory(_) => {}
            other => panic!("Expected NotWorklogDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: Config = toml::from_str(r#"created = "2025-01-13T09:00:00Z""#).unwrap();
        assert_eq!(config.user, DEFAULT_USER);
        assert_eq!(config.window_weeks, DEFAULT_WINDOW_WEEKS);
        assert_eq!(config.keyword_tables(), KeywordTables::default());
    }

    #[test]
    fn test_keyword_override_section() {
        let config: Config = toml::from_str(
            r#"
created = "2025-01-13T09:00:00Z"

[keywords]
leadership_verbs = ["chaired"]
"#,
        )
        .unwrap();
        let tables = config.keyword_tables();
        assert!(tables.leadership_verbs.contains("chaired"));
        assert!(!tables.leadership_verbs.contains("led"));
        assert!(tables.technical.contains("sql"));
    }

    #[test]
    fn test_validate_user() {
        assert!(validate_user("sam.patel-2").is_ok());
        assert!(validate_user("").is_err());
        assert!(validate_user("../etc").is_err());
        assert!(validate_user("a/b").is_err());
        assert!(validate_user(".hidden").is_err());
    }
}
