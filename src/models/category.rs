//! Expense category model
//!
//! Categories are created by a [`CategoryRegistry`](crate::services::CategoryRegistry)
//! and shared between the records that reference them.

use std::fmt;

use super::ids::CategoryId;

/// A named expense category (e.g., "Food", "Transport")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier
    id: CategoryId,

    /// Category name, compared exactly (case-sensitive)
    name: String,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
