//! Demo data use case

use crate::domain::week::shift_week;
use crate::domain::WeeklyEntry;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, WorklogRepository};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

pub const DEMO_WEEKS: usize = 10;

const DEMO_SKILLS: [&str; 12] = [
    "Design Controls",
    "Leadership",
    "Communication",
    "Testing",
    "Project Management",
    "Python",
    "Data Analysis",
    "Stakeholder Management",
    "Presentation",
    "React",
    "SQL",
    "AWS",
];

/// Demo entry for the week `w` weeks before `current_week`
pub fn demo_entry(current_week: NaiveDate, w: usize, saved_at: DateTime<Utc>) -> WeeklyEntry {
    let n = w + 1;
    let lines = vec![
        format!("Led roadmap sync with cross-functional teams (wk {})", n),
        format!("Completed DV report redlines (wk {})", n),
        format!("Coordinated packaging validation with supplier (wk {})", n),
        format!("Mentored intern on test protocol and data review (wk {})", n),
    ];
    let skills = DEMO_SKILLS[..3 + (w % 7)]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mood = (4 + ((w * 2) % 7) as i32).min(10);

    WeeklyEntry::new(shift_week(current_week, -(w as i64)), lines, skills, mood).saved_at(saved_at)
}

/// Service that fills the last weeks with sample entries
pub struct SeedDemoService {
    repository: FileSystemRepository,
}

impl SeedDemoService {
    pub fn new(repository: FileSystemRepository) -> Self {
        SeedDemoService { repository }
    }

    /// Seed weeks ending at `current_week`, leaving logged weeks untouched.
    /// Returns the number of weeks added.
    pub fn execute(&self, user: &str, current_week: NaiveDate) -> Result<usize> {
        let log = self.repository.load_log(user)?;
        let now = Utc::now();
        let missing: Vec<WeeklyEntry> = (0..DEMO_WEEKS)
            .map(|w| demo_entry(current_week, w, now))
            .filter(|e| !log.contains(e.week_start))
            .collect();

        if !missing.is_empty() {
            self.repository.save_entries(user, &missing)?;
        }
        info!(user, added = missing.len(), "seeded demo data");
        Ok(missing.len())
    }
}
