//! File system repository

use crate::domain::entry::{entries_from_records, EntryRecord};
use crate::domain::{WeeklyEntry, WorkLog};
use crate::error::{Result, WorklogError};
use crate::infrastructure::config::{validate_user, Config, WORKXLOG_DIR};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const LOGS_DIR: &str = "logs";

/// On-disk layout of one user's log file.
///
/// Records stay as raw TOML values so that one damaged record neither fails
/// the whole file nor gets lost when the file is rewritten.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LogFile {
    #[serde(default, rename = "entry")]
    entries: Vec<toml::Value>,
}

fn decode_record(value: &toml::Value) -> Option<EntryRecord> {
    value.clone().try_into::<EntryRecord>().ok()
}

/// Week a raw record is keyed by, if it can be read at all
fn record_week(value: &toml::Value) -> Option<NaiveDate> {
    decode_record(value)
        .and_then(|record| record.to_entry())
        .map(|entry| entry.week_start)
}

/// Abstract repository for work log operations
pub trait WorklogRepository {
    /// Load configuration from .workxlog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .workxlog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .workxlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .workxlog directory structure
    fn initialize(&self) -> Result<()>;

    /// Load every well-formed entry of a user
    fn load_log(&self, user: &str) -> Result<WorkLog>;

    /// Upsert entries by week. Returns how many existing weeks were replaced.
    fn save_entries(&self, user: &str, entries: &[WeeklyEntry]) -> Result<usize>;
}

/// File system implementation of WorklogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the log root by walking up from current directory
    /// First checks WORKXLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("WORKXLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_workxlog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(WorklogError::Config(format!(
                    "WORKXLOG_ROOT is set to '{}' but no .workxlog directory found. \
                    Run 'workxlog init' in that directory or unset WORKXLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the log root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workxlog_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(WorklogError::NotWorklogDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_workxlog_dir(path: &Path) -> bool {
        path.join(WORKXLOG_DIR).is_dir()
    }

    fn log_path(&self, user: &str) -> Result<PathBuf> {
        validate_user(user)?;
        Ok(self
            .root
            .join(WORKXLOG_DIR)
            .join(LOGS_DIR)
            .join(format!("{}.toml", user)))
    }

    fn read_log_file(&self, path: &Path) -> Result<LogFile> {
        if !path.exists() {
            return Ok(LogFile::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    fn write_log_file(&self, path: &Path, file: &LogFile) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = toml::to_string_pretty(file)?;
        fs::write(path, contents).map_err(WorklogError::Io)
    }
}

impl WorklogRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_workxlog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let dir = self.root.join(WORKXLOG_DIR);

        if dir.exists() {
            return Err(WorklogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(dir.join(LOGS_DIR))?;
        Ok(())
    }

    fn load_log(&self, user: &str) -> Result<WorkLog> {
        let path = self.log_path(user)?;
        let file = self.read_log_file(&path)?;
        let records: Vec<EntryRecord> = file
            .entries
            .iter()
            .filter_map(|value| {
                let record = decode_record(value);
                if record.is_none() {
                    warn!(user, "skipping unreadable entry record");
                }
                record
            })
            .collect();
        let entries = entries_from_records(&records);
        debug!(
            user,
            records = file.entries.len(),
            entries = entries.len(),
            "loaded work log"
        );
        Ok(WorkLog::new(entries))
    }

    fn save_entries(&self, user: &str, entries: &[WeeklyEntry]) -> Result<usize> {
        let path = self.log_path(user)?;
        let mut file = self.read_log_file(&path)?;
        let mut replaced = 0;
        let mut dropped = 0;

        for entry in entries {
            let record = toml::Value::try_from(EntryRecord::from(entry))?;
            let matching: Vec<usize> = file
                .entries
                .iter()
                .enumerate()
                .filter(|(_, value)| record_week(value) == Some(entry.week_start))
                .map(|(i, _)| i)
                .collect();

            match matching.split_first() {
                Some((&first, rest)) => {
                    file.entries[first] = record;
                    // Other records aligned to the same week would shadow this one on load
                    for &i in rest.iter().rev() {
                        file.entries.remove(i);
                    }
                    dropped += rest.len();
                    replaced += 1;
                }
                None => file.entries.push(record),
            }
        }

        self.write_log_file(&path, &file)?;
        debug!(
            user,
            saved = entries.len(),
            replaced,
            dropped,
            "saved work log"
        );
        Ok(replaced)
    }
}
