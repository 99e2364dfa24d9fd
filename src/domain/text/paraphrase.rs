//! Deterministic rewrite of raw log lines into highlight statements
//!
//! A line passes once through an ordered list of rewrite steps. Each step is a
//! pure `&str -> String` function, so the order of the list is the whole
//! policy: "I led the sync" becomes "Led the sync." because the pronoun is
//! stripped before the leading verb is capitalized.

use regex::{Captures, Regex};
use std::sync::OnceLock;

macro_rules! cached_regex {
    ($name:ident, $pattern:expr) => {
        fn $name() -> &'static Regex {
            static REGEX: OnceLock<Regex> = OnceLock::new();
            REGEX.get_or_init(|| Regex::new($pattern).unwrap())
        }
    };
}

cached_regex!(whitespace_run, r"\s+");
cached_regex!(leading_pronoun, r"(?i)^i\s+");
cached_regex!(leading_ownership_verb, r"(?i)^(led|managed|owned|drove|spearheaded)");
cached_regex!(leading_completed, r"(?i)^completed");
cached_regex!(leading_worked_on, r"(?i)^worked\s+on");
cached_regex!(leading_helped, r"(?i)^helped\s+");
cached_regex!(double_space, r"\s{2,}");

/// A single named rewrite applied to the output of the previous step
#[derive(Clone, Copy)]
pub struct RewriteStep {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

impl RewriteStep {
    pub const fn new(name: &'static str, apply: fn(&str) -> String) -> Self {
        RewriteStep { name, apply }
    }
}

impl std::fmt::Debug for RewriteStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("RewriteStep").field(&self.name).finish()
    }
}

fn collapse_whitespace(text: &str) -> String {
    whitespace_run().replace_all(text.trim(), " ").into_owned()
}

fn strip_pronoun(text: &str) -> String {
    leading_pronoun().replace(text, "").into_owned()
}

fn capitalize_ownership_verb(text: &str) -> String {
    leading_ownership_verb()
        .replace(text, |caps: &Captures| {
            let verb = &caps[0];
            let mut chars = verb.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .into_owned()
}

fn normalize_completed(text: &str) -> String {
    leading_completed().replace(text, "Completed").into_owned()
}

fn worked_on_to_contributed(text: &str) -> String {
    leading_worked_on().replace(text, "Contributed to").into_owned()
}

fn helped_to_supported(text: &str) -> String {
    leading_helped().replace(text, "Supported ").into_owned()
}

fn squeeze_spaces(text: &str) -> String {
    double_space().replace_all(text, " ").into_owned()
}

fn terminate_sentence(text: &str) -> String {
    if text.ends_with('.') {
        text.to_string()
    } else {
        format!("{}.", text)
    }
}

/// Ordered rewrite pipeline
#[derive(Debug, Clone)]
pub struct Paraphraser {
    steps: Vec<RewriteStep>,
}

impl Default for Paraphraser {
    fn default() -> Self {
        Self::new(vec![
            RewriteStep::new("collapse-whitespace", collapse_whitespace),
            RewriteStep::new("strip-pronoun", strip_pronoun),
            RewriteStep::new("capitalize-ownership-verb", capitalize_ownership_verb),
            RewriteStep::new("normalize-completed", normalize_completed),
            RewriteStep::new("worked-on", worked_on_to_contributed),
            RewriteStep::new("helped", helped_to_supported),
            RewriteStep::new("squeeze-spaces", squeeze_spaces),
            RewriteStep::new("terminate-sentence", terminate_sentence),
        ])
    }
}

impl Paraphraser {
    pub fn new(steps: Vec<RewriteStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[RewriteStep] {
        &self.steps
    }

    /// Rewrite a line in a single pass. Blank input yields an empty string.
    pub fn rewrite(&self, line: &str) -> String {
        if line.trim().is_empty() {
            return String::new();
        }
        self.steps
            .iter()
            .fold(line.to_string(), |text, step| (step.apply)(&text))
    }
}

/// Rewrite a line with the default pipeline
pub fn paraphrase(line: &str) -> String {
    static DEFAULT: OnceLock<Paraphraser> = OnceLock::new();
    DEFAULT.get_or_init(Paraphraser::default).rewrite(line)
}
