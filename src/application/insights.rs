//! Insights dashboard use case
//!
//! Loads the user's entries and runs the aggregation engine with the keyword
//! tables from config.

use crate::domain::{AggregationEngine, AnalysisResult};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, WorklogRepository};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct InsightsOptions {
    /// Trailing window size; config default when `None`
    pub window_weeks: Option<usize>,
    /// Number of top skills; config default when `None`
    pub top_skills: Option<usize>,
}

/// Everything the dashboard renders
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// All-time number of logged weeks
    pub weeks_logged: usize,
    pub window_weeks: usize,
    pub highlight_limit: usize,
    pub analysis: AnalysisResult,
}

pub struct InsightsService {
    repository: FileSystemRepository,
}

impl InsightsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        InsightsService { repository }
    }

    pub fn execute(&self, user: &str, options: InsightsOptions) -> Result<Dashboard> {
        let config = self.repository.load_config()?;
        let window_weeks = options.window_weeks.unwrap_or(config.window_weeks);
        let top_skills = options.top_skills.unwrap_or(config.top_skills);

        let log = self.repository.load_log(user)?;
        let engine = AggregationEngine::new(&config.keyword_tables()).with_top_n(top_skills);
        let analysis = engine.aggregate(log.entries(), window_weeks);
        debug!(
            user,
            window_weeks,
            window_entries = analysis.window_entries,
            "aggregated insights"
        );

        Ok(Dashboard {
            weeks_logged: log.len(),
            window_weeks,
            highlight_limit: config.highlight_limit,
            analysis,
        })
    }
}
