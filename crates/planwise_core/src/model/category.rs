//! Category domain model.
//!
//! Categories are referenced by id from tasks, goals, habits and events,
//! never owned by them.

use crate::dates::iso_timestamp_now;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for categories.
pub type CategoryId = Uuid;

/// Display color assigned when the caller supplies none.
pub const DEFAULT_COLOR: &str = "#808080";

/// Validation error for category records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    /// Name is blank after trim.
    BlankName,
}

impl Display for CategoryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "category name must not be blank"),
        }
    }
}

impl Error for CategoryValidationError {}

/// Named, colored grouping for planner entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Hex display color, e.g. `#4CAF50`.
    pub color: String,
    pub created_at: String,
}

impl Category {
    /// Creates a category with a generated stable ID and default color.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a category with a caller-provided stable ID.
    pub fn with_id(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: DEFAULT_COLOR.to_string(),
            created_at: iso_timestamp_now(),
        }
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::BlankName);
        }
        Ok(())
    }
}
