//! Error types for workxlog

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for workxlog application
#[derive(Debug, Error)]
pub enum WorklogError {
    #[error("Not a workxlog directory: {0}")]
    NotWorklogDirectory(PathBuf),

    #[error("Invalid week reference: {0}")]
    InvalidWeekReference(String),

    #[error("Week of {0} is in the future")]
    FutureWeek(NaiveDate),

    #[error("No entry logged for week of {0}")]
    EntryNotFound(NaiveDate),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl WorklogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WorklogError::NotWorklogDirectory(_) => 2,
            WorklogError::InvalidWeekReference(_) | WorklogError::FutureWeek(_) => 3,
            WorklogError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            WorklogError::NotWorklogDirectory(path) => {
                format!(
                    "Not a workxlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'workxlog init' in this directory to start a work log\n\
                    • Navigate to an existing workxlog directory\n\
                    • Set WORKXLOG_ROOT environment variable to your log path",
                    path.display()
                )
            }
            WorklogError::InvalidWeekReference(ref_str) => {
                format!(
                    "Invalid week reference: '{}'\n\n\
                    Valid week references:\n\
                    • this, current, today\n\
                    • last, previous\n\
                    • 3 weeks ago\n\
                    • Any date inside the week: DD-MM-YYYY or YYYY-MM-DD\n\n\
                    Examples:\n\
                    workxlog show last\n\
                    workxlog log --week 13-01-2025 --mood 7",
                    ref_str
                )
            }
            WorklogError::FutureWeek(date) => {
                format!(
                    "Week of {} has not started yet\n\n\
                    Suggestions:\n\
                    • Log the current week with 'workxlog log'\n\
                    • Use 'workxlog weeks' to see logged weeks",
                    date.format("%d-%m-%Y")
                )
            }
            WorklogError::EntryNotFound(date) => {
                format!(
                    "No entry logged for week of {}\n\n\
                    Suggestions:\n\
                    • Use 'workxlog weeks' to see logged weeks\n\
                    • Log it with 'workxlog log --week {}'",
                    date.format("%d-%m-%Y"),
                    date.format("%d-%m-%Y")
                )
            }
            WorklogError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: user, window, top, highlights\n\
                        Example: workxlog config window 12",
                        msg
                    )
                } else if msg.contains("user name") {
                    format!(
                        "{}\n\n\
                        User names may contain letters, digits, '.', '_' and '-'\n\
                        Example: workxlog --user sam.patel insights",
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

/// Result type using WorklogError
pub type Result<T> = std::result::Result<T, WorklogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_worklog_directory_suggestion() {
        let err = WorklogError::NotWorklogDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("workxlog init"));
        assert!(msg.contains("WORKXLOG_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_week_reference_examples() {
        let err = WorklogError::InvalidWeekReference("someday".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'someday'"));
        assert!(msg.contains("weeks ago"));
        assert!(msg.contains("DD-MM-YYYY"));
        assert!(msg.contains("Examples"));
    }

    #[test]
    fn test_future_week_message() {
        let date = NaiveDate::from_ymd_opt(2031, 3, 3).unwrap();
        let err = WorklogError::FutureWeek(date);
        assert!(err.display_with_suggestions().contains("03-03-2031"));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_entry_not_found_suggestions() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 13).unwrap();
        let err = WorklogError::EntryNotFound(date);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("workxlog weeks"));
        assert!(msg.contains("--week 13-01-2025"));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_config_unknown_key_suggestions() {
        let err = WorklogError::Config("Unknown config key: 'colour'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("user, window, top, highlights"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = WorklogError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(err.display_with_suggestions(), "IO error: disk");
        assert_eq!(err.exit_code(), 1);
    }
}
