//! Keyword tables driving both classifiers

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

fn set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Immutable keyword configuration.
///
/// Token tables (`technical`, `leadership_verbs`, `soft`) are matched against
/// whole tokens of a line. Fragment lists are matched as substrings of a
/// lowercased skill tag. All entries are expected in lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTables {
    pub technical: BTreeSet<String>,
    pub leadership_verbs: BTreeSet<String>,
    pub soft: BTreeSet<String>,
    pub technical_fragments: Vec<String>,
    pub leadership_fragments: Vec<String>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        KeywordTables {
            technical: set(&[
                "python", "sql", "r", "javascript", "typescript", "react", "node", "node.js",
                "api", "data", "analysis", "statistics", "ml", "machine", "testing",
                "automation", "cloud", "aws", "gcp", "azure", "ci", "cd", "git", "fem", "cad",
                "medtech", "design", "controls", "risk", "validation", "packaging",
                "sterilization",
            ]),
            leadership_verbs: set(&[
                "led", "managed", "facilitated", "mentored", "coordinated", "organized",
                "owned", "drove", "spearheaded", "delegated", "presented",
            ]),
            soft: set(&[
                "communication", "presented", "wrote", "explained", "collaborated", "resolved",
                "negotiated", "adapted", "learned", "teamwork", "ownership", "proactive",
                "time", "conflict",
            ]),
            technical_fragments: list(&[
                "api", "cloud", "data", "ml", "validation", "testing", "git", "cad", "fem",
            ]),
            leadership_fragments: list(&[
                "lead", "mentor", "manage", "program", "project", "roadmap", "stakeholder",
                "strategy", "facilitate", "priorit",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_are_lowercase() {
        let tables = KeywordTables::default();
        let all = tables
            .technical
            .iter()
            .chain(&tables.leadership_verbs)
            .chain(&tables.soft)
            .chain(&tables.technical_fragments)
            .chain(&tables.leadership_fragments);
        for word in all {
            assert_eq!(word, &word.to_lowercase());
        }
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tables: KeywordTables = toml::from_str(r#"soft = ["listened"]"#).unwrap();
        assert_eq!(tables.soft.len(), 1);
        assert!(tables.soft.contains("listened"));
        assert!(tables.technical.contains("python"));
    }
}
