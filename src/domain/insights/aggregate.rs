//! Aggregation engine
//!
//! Turns a user's weekly entries into the analytics view for the trailing
//! window of the most recent `window_weeks` entries:
//! - category buckets of paraphrased highlights, most recent first
//! - skill frequency ranking
//! - mood series, average mood, and trend
//!
//! The engine is pure. It never mutates its input and never fails; an empty
//! window produces empty collections and `None` for average and trend.

use crate::domain::classify::{Category, KeywordTables, LineClassifier, SkillClassifier};
use crate::domain::entry::WeeklyEntry;
use crate::domain::text::Paraphraser;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Number of top skills reported unless configured otherwise
pub const DEFAULT_TOP_SKILLS: usize = 6;

/// A paraphrased line and the week it was logged in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub text: String,
    pub week_start: NaiveDate,
}

/// One point of the mood series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodPoint {
    pub week_start: NaiveDate,
    /// Week formatted for display (DD-MM-YYYY)
    pub label: String,
    pub mood: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCount {
    /// Tag as written; differently cased spellings are counted separately
    pub skill: String,
    pub count: usize,
    pub category: Category,
}

/// Direction of mood between the first and last week of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improving,
    Declining,
    Steady,
}

impl Trend {
    /// Compare first and last mood; a swing of exactly one point is steady.
    pub fn between(first: i32, last: i32) -> Trend {
        let (first, last) = (first as i64, last as i64);
        if last > first + 1 {
            Trend::Improving
        } else if last < first - 1 {
            Trend::Declining
        } else {
            Trend::Steady
        }
    }

    /// Needs at least two points
    pub fn from_series(series: &[MoodPoint]) -> Option<Trend> {
        match series {
            [first, .., last] => Some(Trend::between(first.mood, last.mood)),
            _ => None,
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Steady => "steady",
        })
    }
}

/// Derived analytics for one window; recomputed on every call
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    highlights: BTreeMap<Category, Vec<Highlight>>,
    pub mood_series: Vec<MoodPoint>,
    pub top_skills: Vec<SkillCount>,
    pub average_mood: Option<f64>,
    pub trend: Option<Trend>,
    pub distinct_skills: usize,
    /// Entries that fell inside the window
    pub window_entries: usize,
}

impl AnalysisResult {
    /// All highlights of a category, most recent first
    pub fn highlights(&self, category: Category) -> &[Highlight] {
        self.highlights
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// At most `limit` most recent highlights of a category
    pub fn recent_highlights(&self, category: Category, limit: usize) -> &[Highlight] {
        let all = self.highlights(category);
        &all[..all.len().min(limit)]
    }

    pub fn is_empty(&self) -> bool {
        self.window_entries == 0
    }
}

/// Composition root of the classification and aggregation rules
#[derive(Debug, Clone)]
pub struct AggregationEngine {
    lines: LineClassifier,
    skills: SkillClassifier,
    paraphraser: Paraphraser,
    top_n: usize,
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new(&KeywordTables::default())
    }
}

impl AggregationEngine {
    pub fn new(tables: &KeywordTables) -> Self {
        AggregationEngine {
            lines: LineClassifier::new(tables),
            skills: SkillClassifier::new(tables),
            paraphraser: Paraphraser::default(),
            top_n: DEFAULT_TOP_SKILLS,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_paraphraser(mut self, paraphraser: Paraphraser) -> Self {
        self.paraphraser = paraphraser;
        self
    }

    pub fn aggregate(&self, entries: &[WeeklyEntry], window_weeks: usize) -> AnalysisResult {
        let mut sorted: Vec<&WeeklyEntry> = entries.iter().collect();
        sorted.sort_by_key(|e| e.week_start);
        let start = sorted.len().saturating_sub(window_weeks);
        let window = &sorted[start..];

        let mut highlights: BTreeMap<Category, Vec<Highlight>> =
            Category::ALL.iter().map(|c| (*c, Vec::new())).collect();
        let mut skill_index: HashMap<&str, usize> = HashMap::new();
        let mut skill_counts: Vec<(&str, usize)> = Vec::new();

        for entry in window {
            for skill in &entry.skills {
                match skill_index.get(skill.as_str()) {
                    Some(&i) => skill_counts[i].1 += 1,
                    None => {
                        skill_index.insert(skill.as_str(), skill_counts.len());
                        skill_counts.push((skill.as_str(), 1));
                    }
                }
            }
            for line in &entry.lines {
                let category = self.lines.classify(line);
                highlights.entry(category).or_default().push(Highlight {
                    text: self.paraphraser.rewrite(line),
                    week_start: entry.week_start,
                });
            }
        }

        for bucket in highlights.values_mut() {
            bucket.reverse();
        }

        let mood_series: Vec<MoodPoint> = window
            .iter()
            .map(|e| MoodPoint {
                week_start: e.week_start,
                label: e.week_start.format("%d-%m-%Y").to_string(),
                mood: e.mood,
            })
            .collect();

        let distinct_skills = skill_counts.len();
        // Stable: ties keep first-seen order
        skill_counts.sort_by(|a, b| b.1.cmp(&a.1));
        let top_skills = skill_counts
            .into_iter()
            .take(self.top_n)
            .map(|(skill, count)| SkillCount {
                skill: skill.to_string(),
                count,
                category: self.skills.classify(skill),
            })
            .collect();

        AnalysisResult {
            highlights,
            average_mood: average_mood(&mood_series),
            trend: Trend::from_series(&mood_series),
            mood_series,
            top_skills,
            distinct_skills,
            window_entries: window.len(),
        }
    }
}

/// Mean rounded to two decimals, ties toward positive infinity; `None` for an
/// empty series
fn average_mood(series: &[MoodPoint]) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    let sum: f64 = series.iter().map(|p| p.mood as f64).sum();
    let mean = sum / series.len() as f64;
    Some((mean * 100.0 + 0.5).floor() / 100.0)
}
