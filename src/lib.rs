//! workxlog - Weekly work log with skill and mood insights
//!
//! Records short weekly work logs tagged with skills and a mood score, and
//! derives categorized highlights, top skills, and a mood trend from the most
//! recent weeks.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::WorklogError;
