//! Rule-based classification of skill tags and log lines

pub mod keywords;
pub mod line;
pub mod skill;

pub use keywords::KeywordTables;
pub use line::{LineClassifier, LineRule};
pub use skill::SkillClassifier;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification target shared by skill tags and log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technical,
    Leadership,
    Soft,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Technical, Category::Leadership, Category::Soft];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Leadership => "leadership",
            Category::Soft => "soft",
        }
    }

    /// Heading used when rendering highlight buckets
    pub fn title(&self) -> &'static str {
        match self {
            Category::Technical => "Technical Skills",
            Category::Leadership => "Leadership Skills",
            Category::Soft => "Soft Skills",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
