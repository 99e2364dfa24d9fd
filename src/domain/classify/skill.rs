//! Skill tag classification

use super::{Category, KeywordTables};
use std::collections::BTreeSet;

fn contains_any(text: &str, fragments: &[String]) -> bool {
    fragments.iter().any(|f| text.contains(f.as_str()))
}

/// Maps a short skill tag to a category. Every tag is classifiable.
#[derive(Debug, Clone)]
pub struct SkillClassifier {
    technical: BTreeSet<String>,
    technical_fragments: Vec<String>,
    leadership_fragments: Vec<String>,
}

impl Default for SkillClassifier {
    fn default() -> Self {
        Self::new(&KeywordTables::default())
    }
}

impl SkillClassifier {
    pub fn new(tables: &KeywordTables) -> Self {
        SkillClassifier {
            technical: tables.technical.clone(),
            technical_fragments: tables.technical_fragments.clone(),
            leadership_fragments: tables.leadership_fragments.clone(),
        }
    }

    /// First match wins: technical, then leadership, else soft.
    pub fn classify(&self, tag: &str) -> Category {
        let lowered = tag.to_lowercase();

        if self.technical.contains(&lowered) || contains_any(&lowered, &self.technical_fragments) {
            Category::Technical
        } else if contains_any(&lowered, &self.leadership_fragments) {
            Category::Leadership
        } else {
            Category::Soft
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_examples() {
        let classifier = SkillClassifier::default();
        assert_eq!(classifier.classify("Python"), Category::Technical);
        assert_eq!(classifier.classify("Leadership"), Category::Leadership);
        assert_eq!(classifier.classify("Empathy"), Category::Soft);
    }

    #[test]
    fn test_technical_fragment_match() {
        let classifier = SkillClassifier::default();
        assert_eq!(classifier.classify("API Design"), Category::Technical);
        assert_eq!(classifier.classify("Data Analysis"), Category::Technical);
        // "ml" inside "HTML"
        assert_eq!(classifier.classify("HTML"), Category::Technical);
    }

    #[test]
    fn test_technical_outranks_leadership() {
        let classifier = SkillClassifier::default();
        // contains both "data" and "lead"
        assert_eq!(classifier.classify("Data Lead"), Category::Technical);
    }

    #[test]
    fn test_leadership_fragments() {
        let classifier = SkillClassifier::default();
        assert_eq!(classifier.classify("Project Management"), Category::Leadership);
        assert_eq!(classifier.classify("Prioritization"), Category::Leadership);
        assert_eq!(classifier.classify("Mentoring"), Category::Leadership);
    }

    #[test]
    fn test_soft_default() {
        let classifier = SkillClassifier::default();
        assert_eq!(classifier.classify("Communication"), Category::Soft);
        assert_eq!(classifier.classify(""), Category::Soft);
    }

    #[test]
    fn test_injected_tables() {
        let tables = KeywordTables {
            technical_fragments: vec!["rust".to_string()],
            ..KeywordTables::default()
        };
        let classifier = SkillClassifier::new(&tables);
        assert_eq!(classifier.classify("Rustacean"), Category::Technical);
        // "cloud" is no longer a fragment, and not an exact keyword with suffix
        assert_eq!(classifier.classify("Cloud Ops"), Category::Soft);
    }
}
