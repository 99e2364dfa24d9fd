//! List weeks use case

use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, WorklogRepository};
use chrono::NaiveDate;

/// Logged weeks, most recent first, optionally limited.
pub fn list_weeks(
    repository: &FileSystemRepository,
    user: &str,
    limit: Option<usize>,
) -> Result<Vec<NaiveDate>> {
    let mut weeks = repository.load_log(user)?.weeks_desc();
    if let Some(n) = limit {
        weeks.truncate(n);
    }
    Ok(weeks)
}
