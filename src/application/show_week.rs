//! Show week use case

use crate::domain::WeeklyEntry;
use crate::error::{Result, WorklogError};
use crate::infrastructure::{FileSystemRepository, WorklogRepository};
use chrono::NaiveDate;

/// Load the entry logged for `week_start`.
pub fn show_week(
    repository: &FileSystemRepository,
    user: &str,
    week_start: NaiveDate,
) -> Result<WeeklyEntry> {
    repository
        .load_log(user)?
        .get(week_start)
        .cloned()
        .ok_or(WorklogError::EntryNotFound(week_start))
}
