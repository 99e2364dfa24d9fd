//! Log line classification
//!
//! Lines are tokenized and tested for whole-token membership against an
//! ordered list of rules. The first rule with a matching token decides the
//! category; a line matching no rule falls back to the default category.

use super::{Category, KeywordTables};
use crate::domain::text::tokenize;
use std::collections::BTreeSet;

/// A keyword table paired with the category it selects
#[derive(Debug, Clone)]
pub struct LineRule {
    pub category: Category,
    pub keywords: BTreeSet<String>,
}

impl LineRule {
    pub fn new(category: Category, keywords: BTreeSet<String>) -> Self {
        LineRule { category, keywords }
    }

    pub fn matches(&self, tokens: &[String]) -> bool {
        tokens.iter().any(|t| self.keywords.contains(t))
    }
}

#[derive(Debug, Clone)]
pub struct LineClassifier {
    rules: Vec<LineRule>,
    fallback: Category,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(&KeywordTables::default())
    }
}

impl LineClassifier {
    /// Technical keywords, then leadership verbs, then soft keywords.
    pub fn new(tables: &KeywordTables) -> Self {
        Self::with_rules(
            vec![
                LineRule::new(Category::Technical, tables.technical.clone()),
                LineRule::new(Category::Leadership, tables.leadership_verbs.clone()),
                LineRule::new(Category::Soft, tables.soft.clone()),
            ],
            Category::Soft,
        )
    }

    pub fn with_rules(rules: Vec<LineRule>, fallback: Category) -> Self {
        LineClassifier { rules, fallback }
    }

    pub fn rules(&self) -> &[LineRule] {
        &self.rules
    }

    pub fn classify(&self, line: &str) -> Category {
        let tokens = tokenize(line);
        self.rules
            .iter()
            .find(|rule| rule.matches(&tokens))
            .map(|rule| rule.category)
            .unwrap_or(self.fallback)
    }
}
