//! Todo data model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric todo ID, assigned by the store from a monotonic counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TodoId)
    }
}

/// Todo priority. Ordering is Low < Medium < High so sorting descending
/// puts the most urgent items first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Parse priority from text
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Get the text label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Todo category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Work,
    Personal,
    Shopping,
    Health,
}

impl Category {
    /// Parse category from text
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "general" => Some(Self::General),
            "work" => Some(Self::Work),
            "personal" => Some(Self::Personal),
            "shopping" => Some(Self::Shopping),
            "health" => Some(Self::Health),
            _ => None,
        }
    }

    /// Get the text label
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Shopping => "shopping",
            Self::Health => "health",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single todo record. Mutated only through [`TodoStore`](crate::todo::TodoStore)
/// methods so the collection invariants hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique within the collection
    pub id: TodoId,

    /// Never empty or whitespace-only
    pub text: String,

    /// Due date, calendar-day granularity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub category: Category,

    #[serde(default)]
    pub completed: bool,

    /// When the todo was created. Immutable once set.
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Create a new pending todo. The caller (the store) is responsible for
    /// rejecting empty text and handing out a fresh id.
    pub fn new(
        id: TodoId,
        text: impl Into<String>,
        due: Option<NaiveDate>,
        priority: Priority,
        category: Category,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            due,
            priority,
            category,
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// A todo is overdue when it is still pending and its due date is
    /// strictly before today. Same-day due dates are never overdue.
    pub fn is_overdue(&self) -> bool {
        match self.due {
            Some(due) => !self.completed && due < Utc::now().date_naive(),
            None => false,
        }
    }

    /// Check if the todo is due today
    pub fn is_due_today(&self) -> bool {
        self.due == Some(Utc::now().date_naive())
    }
}
