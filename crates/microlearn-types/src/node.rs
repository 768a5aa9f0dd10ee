//! Knowledge nodes and categories.
//!
//! A knowledge node records one completed learning screen, tagged with a
//! category so the progress view can group and color it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed category set a screen can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Math,
    Data,
    Code,
    History,
    Science,
    Business,
    Default,
}

impl Category {
    /// Every category the backend is allowed to answer with (excludes
    /// `Default`, which is the fold-to value for anything else).
    pub const ANSWERABLE: [Category; 6] = [
        Category::Math,
        Category::Data,
        Category::Code,
        Category::History,
        Category::Science,
        Category::Business,
    ];

    /// Parse a label, folding anything outside the fixed set to `Default`.
    pub fn from_label_or_default(label: &str) -> Self {
        label.trim().parse().unwrap_or(Category::Default)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Math => write!(f, "Math"),
            Category::Data => write!(f, "Data"),
            Category::Code => write!(f, "Code"),
            Category::History => write!(f, "History"),
            Category::Science => write!(f, "Science"),
            Category::Business => write!(f, "Business"),
            Category::Default => write!(f, "Default"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Math" => Ok(Category::Math),
            "Data" => Ok(Category::Data),
            "Code" => Ok(Category::Code),
            "History" => Ok(Category::History),
            "Science" => Ok(Category::Science),
            "Business" => Ok(Category::Business),
            "Default" => Ok(Category::Default),
            other => Err(format!("unknown category: '{other}'")),
        }
    }
}

/// A persisted record of one completed learning screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeNode {
    pub id: Uuid,
    pub topic: String,
    pub headline: String,
    pub body: String,
    pub category: Category,
    pub completed_at: DateTime<Utc>,
}

/// Per-topic completion count for the progress view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicTrend {
    pub topic: String,
    pub nodes: i64,
}
