//! Output formatting utilities

use crate::application::Dashboard;
use crate::domain::{Category, WeeklyEntry};
use chrono::NaiveDate;

/// Format a list of logged weeks for display
pub fn format_week_list(weeks: &[NaiveDate]) -> String {
    if weeks.is_empty() {
        return "No weeks logged".to_string();
    }

    let mut output = String::new();
    for week in weeks {
        output.push_str(&format!("{}\n", week.format("%d-%m-%Y")));
    }
    output
}

/// Format one week's entry
pub fn format_entry(entry: &WeeklyEntry) -> String {
    let mut output = format!("Week of {}\n", entry.week_start.format("%d-%m-%Y"));
    output.push_str(&format!("Mood: {}/10\n", entry.mood));

    if entry.skills.is_empty() {
        output.push_str("Skills: -\n");
    } else {
        output.push_str(&format!("Skills: {}\n", entry.skills.join(", ")));
    }

    output.push_str("Responsibilities:\n");
    if entry.lines.is_empty() {
        output.push_str("  (none)\n");
    }
    for line in &entry.lines {
        output.push_str(&format!("  - {}\n", line));
    }
    output
}

/// Format skill suggestions, one per line
pub fn format_suggestions(suggestions: &[&str]) -> String {
    if suggestions.is_empty() {
        return "No suggestions".to_string();
    }

    let mut output = String::new();
    for s in suggestions {
        output.push_str(&format!("{}\n", s));
    }
    output
}

/// Bar on the fixed 1-10 mood scale
fn mood_bar(mood: i32) -> String {
    "#".repeat(mood.clamp(0, 10) as usize)
}

/// Format the insights dashboard
pub fn format_dashboard(dashboard: &Dashboard) -> String {
    let analysis = &dashboard.analysis;
    let mut output = String::new();

    output.push_str(&format!(
        "Insights (last {} weeks, {} in window)\n\n",
        dashboard.window_weeks, analysis.window_entries
    ));
    output.push_str(&format!("Weeks logged: {}\n", dashboard.weeks_logged));
    output.push_str(&format!("Skills: {}\n", analysis.distinct_skills));

    let average = analysis
        .average_mood
        .map(|m| m.to_string())
        .unwrap_or_else(|| "—".to_string());
    let trend = analysis
        .trend
        .map(|t| format!("Trend: {}", t))
        .unwrap_or_else(|| "Need more data".to_string());
    output.push_str(&format!("Avg mood: {} ({})\n", average, trend));

    if analysis.is_empty() {
        output.push_str("\nNo entries in this window yet. Log a week to see insights.\n");
        return output;
    }

    output.push_str("\nMood trend\n");
    for point in &analysis.mood_series {
        output.push_str(&format!(
            "  {}  {:>2}  {}\n",
            point.label,
            point.mood,
            mood_bar(point.mood)
        ));
    }

    output.push_str("\nStrengths (Top skills)\n");
    if analysis.top_skills.is_empty() {
        output.push_str("  No skills tagged yet\n");
    }
    for skill in &analysis.top_skills {
        output.push_str(&format!(
            "  {} ({}) x{}\n",
            skill.skill, skill.category, skill.count
        ));
    }

    for category in Category::ALL {
        output.push_str(&format!("\n{}\n", category.title()));
        let items = analysis.recent_highlights(category, dashboard.highlight_limit);
        if items.is_empty() {
            output.push_str("  No items yet\n");
        }
        for item in items {
            output.push_str(&format!(
                "  - {} ({})\n",
                item.text,
                item.week_start.format("%d-%m-%Y")
            ));
        }
    }

    output
}
