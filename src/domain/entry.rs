//! Weekly entries and the per-user work log

use crate::domain::week::align_to_week_start;
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One user's logged record for a single aligned week
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyEntry {
    /// Monday of the logged week; the entry's key
    pub week_start: NaiveDate,
    /// Raw statements in authoring order
    pub lines: Vec<String>,
    /// Skill tags, no duplicates
    pub skills: Vec<String>,
    pub mood: i32,
    pub saved_at: Option<DateTime<Utc>>,
}

impl WeeklyEntry {
    /// Build an entry, aligning the week and cleaning lines and skills.
    pub fn new(week: NaiveDate, lines: Vec<String>, skills: Vec<String>, mood: i32) -> Self {
        WeeklyEntry {
            week_start: align_to_week_start(week),
            lines: clean_lines(lines),
            skills: unique_skills(skills),
            mood,
            saved_at: None,
        }
    }

    pub fn saved_at(mut self, at: DateTime<Utc>) -> Self {
        self.saved_at = Some(at);
        self
    }
}

/// Split free text into lines, trimming each and dropping blanks.
pub fn lines_from_text(text: &str) -> Vec<String> {
    clean_lines(text.lines().map(str::to_string))
}

fn clean_lines(lines: impl IntoIterator<Item = String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

fn unique_skills(skills: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for skill in skills {
        let skill = skill.trim();
        if !skill.is_empty() && !unique.iter().any(|s| s == skill) {
            unique.push(skill.to_string());
        }
    }
    unique
}

/// Serialized form of an entry as kept by a store.
///
/// `week_start` stays textual so that a damaged record can be skipped on
/// load instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    #[serde(default)]
    pub week_start: String,
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub mood: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl From<&WeeklyEntry> for EntryRecord {
    fn from(entry: &WeeklyEntry) -> Self {
        EntryRecord {
            week_start: entry.week_start.format("%Y-%m-%d").to_string(),
            lines: entry.lines.clone(),
            skills: entry.skills.clone(),
            mood: entry.mood,
            saved_at: entry.saved_at,
        }
    }
}

impl EntryRecord {
    /// Convert to an entry; `None` if the week start is missing or unparseable.
    pub fn to_entry(&self) -> Option<WeeklyEntry> {
        let week = parse_week_start(&self.week_start)?;
        Some(WeeklyEntry {
            week_start: week,
            lines: self.lines.clone(),
            skills: self.skills.clone(),
            mood: self.mood,
            saved_at: self.saved_at,
        })
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (read in local time).
fn parse_week_start(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Local).date_naive())
        })
        .map(align_to_week_start)
}

/// Convert stored records, skipping any that cannot be keyed by week.
pub fn entries_from_records(records: &[EntryRecord]) -> Vec<WeeklyEntry> {
    records
        .iter()
        .filter_map(|record| {
            let entry = record.to_entry();
            if entry.is_none() {
                warn!(week_start = %record.week_start, "skipping entry with invalid week start");
            }
            entry
        })
        .collect()
}

/// All entries of one user, at most one per week
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkLog {
    entries: Vec<WeeklyEntry>,
}

impl WorkLog {
    pub fn new(entries: Vec<WeeklyEntry>) -> Self {
        let mut log = WorkLog::default();
        for entry in entries {
            log.upsert(entry);
        }
        log
    }

    /// Replace the entry for the same week in place, else append.
    /// Returns true when an existing entry was replaced.
    pub fn upsert(&mut self, entry: WeeklyEntry) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|e| e.week_start == entry.week_start)
        {
            Some(existing) => {
                *existing = entry;
                true
            }
            None => {
                self.entries.push(entry);
                false
            }
        }
    }

    pub fn get(&self, week_start: NaiveDate) -> Option<&WeeklyEntry> {
        self.entries.iter().find(|e| e.week_start == week_start)
    }

    pub fn contains(&self, week_start: NaiveDate) -> bool {
        self.get(week_start).is_some()
    }

    pub fn entries(&self) -> &[WeeklyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Logged weeks, most recent first
    pub fn weeks_desc(&self) -> Vec<NaiveDate> {
        let mut weeks: Vec<NaiveDate> = self.entries.iter().map(|e| e.week_start).collect();
        weeks.sort_by(|a, b| b.cmp(a));
        weeks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_aligns_and_cleans() {
        let entry = WeeklyEntry::new(
            date(2025, 1, 16),
            strings(&["  Led sync ", "", "Led sync"]),
            strings(&["SQL", " SQL", "sql", ""]),
            7,
        );
        assert_eq!(entry.week_start, date(2025, 1, 13));
        assert_eq!(entry.lines, strings(&["Led sync", "Led sync"]));
        assert_eq!(entry.skills, strings(&["SQL", "sql"]));
    }

    #[test]
    fn test_lines_from_text() {
        let lines = lines_from_text("• Led review\n\n  Wrote docs  \r\n\n");
        assert_eq!(lines, strings(&["• Led review", "Wrote docs"]));
    }

    #[test]
    fn test_upsert_replaces_same_week() {
        let mut log = WorkLog::default();
        assert!(!log.upsert(WeeklyEntry::new(date(2025, 1, 13), strings(&["a"]), vec![], 5)));
        assert!(!log.upsert(WeeklyEntry::new(date(2025, 1, 20), strings(&["b"]), vec![], 6)));
        assert!(log.upsert(WeeklyEntry::new(date(2025, 1, 15), strings(&["c"]), vec![], 9)));

        assert_eq!(log.len(), 2);
        let replaced = log.get(date(2025, 1, 13)).unwrap();
        assert_eq!(replaced.lines, strings(&["c"]));
        assert_eq!(replaced.mood, 9);
        // Replaced in place, not moved to the end
        assert_eq!(log.entries()[0].week_start, date(2025, 1, 13));
    }

    #[test]
    fn test_weeks_desc() {
        let log = WorkLog::new(vec![
            WeeklyEntry::new(date(2025, 1, 6), vec![], vec![], 5),
            WeeklyEntry::new(date(2025, 1, 20), vec![], vec![], 5),
            WeeklyEntry::new(date(2025, 1, 13), vec![], vec![], 5),
        ]);
        assert_eq!(
            log.weeks_desc(),
            vec![date(2025, 1, 20), date(2025, 1, 13), date(2025, 1, 6)]
        );
    }

    #[test]
    fn test_record_conversion() {
        let entry = WeeklyEntry::new(date(2025, 1, 13), strings(&["x"]), strings(&["Git"]), 4);
        let record = EntryRecord::from(&entry);
        assert_eq!(record.week_start, "2025-01-13");
        assert_eq!(record.to_entry().unwrap(), entry);
    }

    #[test]
    fn test_record_week_start_is_aligned() {
        let record = EntryRecord {
            week_start: "2025-01-17".to_string(),
            lines: vec![],
            skills: vec![],
            mood: 5,
            saved_at: None,
        };
        assert_eq!(record.to_entry().unwrap().week_start, date(2025, 1, 13));
    }

    #[test]
    fn test_invalid_records_are_skipped() {
        let good = EntryRecord {
            week_start: "2025-01-13".to_string(),
            lines: vec![],
            skills: vec![],
            mood: 5,
            saved_at: None,
        };
        let missing = EntryRecord {
            week_start: String::new(),
            ..good.clone()
        };
        let garbage = EntryRecord {
            week_start: "not a date".to_string(),
            ..good.clone()
        };
        let entries = entries_from_records(&[missing, good, garbage]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].week_start, date(2025, 1, 13));
    }
}
