//! Application layer - Use cases and orchestration

pub mod init;
pub mod insights;
pub mod list_weeks;
pub mod log_week;
pub mod manage_config;
pub mod seed_demo;
pub mod show_week;

pub use insights::{Dashboard, InsightsOptions, InsightsService};
pub use list_weeks::list_weeks;
pub use log_week::{LogOutcome, LogWeekService, WeekInput};
pub use manage_config::ConfigService;
pub use seed_demo::SeedDemoService;
pub use show_week::show_week;

use crate::error::Result;
use crate::infrastructure::config::{validate_user, Config};

/// User for this invocation: the explicit override, else the configured one.
pub fn active_user(config: &Config, requested: Option<&str>) -> Result<String> {
    let user = requested.unwrap_or(config.user.as_str()).trim().to_string();
    validate_user(&user)?;
    Ok(user)
}
