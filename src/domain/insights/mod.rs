//! Windowed aggregation of weekly entries into insights

pub mod aggregate;

pub use aggregate::{
    AggregationEngine, AnalysisResult, Highlight, MoodPoint, SkillCount, Trend,
    DEFAULT_TOP_SKILLS,
};
