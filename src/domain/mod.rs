//! Domain layer - Classification, paraphrasing, and aggregation rules
//!
//! Everything here is pure and performs no I/O.

pub mod classify;
pub mod entry;
pub mod insights;
pub mod skills;
pub mod text;
pub mod week;

pub use classify::{Category, KeywordTables};
pub use entry::{EntryRecord, WeeklyEntry, WorkLog};
pub use insights::{AggregationEngine, AnalysisResult, Trend};
pub use week::{align_to_week_start, WeekReference};
