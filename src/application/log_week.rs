//! Log week use case

use crate::domain::WeeklyEntry;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, WorklogRepository};
use chrono::{NaiveDate, Utc};
use tracing::info;

/// What the user entered for one week
#[derive(Debug, Clone)]
pub struct WeekInput {
    pub week: NaiveDate,
    pub lines: Vec<String>,
    pub skills: Vec<String>,
    pub mood: i32,
}

/// Result of saving a week
#[derive(Debug, Clone, PartialEq)]
pub struct LogOutcome {
    pub entry: WeeklyEntry,
    /// An entry for the same week existed and was replaced
    pub replaced: bool,
}

/// Service for saving a week's entry
pub struct LogWeekService {
    repository: FileSystemRepository,
}

impl LogWeekService {
    pub fn new(repository: FileSystemRepository) -> Self {
        LogWeekService { repository }
    }

    /// Save the entry, replacing any existing entry for the same week.
    pub fn execute(&self, user: &str, input: WeekInput) -> Result<LogOutcome> {
        let entry = WeeklyEntry::new(input.week, input.lines, input.skills, input.mood)
            .saved_at(Utc::now());
        let replaced = self.repository.save_entries(user, &[entry.clone()])? > 0;
        info!(
            user,
            week = %entry.week_start,
            lines = entry.lines.len(),
            replaced,
            "saved week"
        );
        Ok(LogOutcome { entry, replaced })
    }
}
