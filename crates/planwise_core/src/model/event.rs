//! Calendar event domain model.
//!
//! Events created through the store are validated to carry parseable,
//! ordered time windows. Externally supplied events may still hold malformed
//! times; the slot suggester skips those defensively.

use crate::dates::{iso_timestamp_now, parse_datetime};
use crate::model::category::CategoryId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for calendar events.
pub type EventId = Uuid;

/// Validation error for event records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// Title is blank after trim.
    BlankTitle,
    /// A time field does not parse as a wire-format datetime.
    UnparseableTime { field: &'static str, value: String },
    /// End precedes start.
    InvalidWindow { start: String, end: String },
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "event title must not be blank"),
            Self::UnparseableTime { field, value } => {
                write!(f, "event {field} is not a valid datetime: `{value}`")
            }
            Self::InvalidWindow { start, end } => {
                write!(f, "event end `{end}` must not precede start `{start}`")
            }
        }
    }
}

impl Error for EventValidationError {}

/// Scheduled calendar entry, consumed as conflict data by slot suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category_id: Option<CategoryId>,
    /// Wire-format start datetime.
    pub start_time: String,
    /// Wire-format end datetime; not before `start_time` for validated events.
    pub end_time: String,
    pub created_at: String,
}

impl CalendarEvent {
    /// Creates an event with a generated stable ID.
    pub fn new(
        title: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, start_time, end_time)
    }

    /// Creates an event with a caller-provided stable ID.
    pub fn with_id(
        id: EventId,
        title: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            location: String::new(),
            category_id: None,
            start_time: start_time.into(),
            end_time: end_time.into(),
            created_at: iso_timestamp_now(),
        }
    }

    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `BlankTitle` when the title is empty after trim.
    /// - `UnparseableTime` when either timestamp fails to parse.
    /// - `InvalidWindow` when the end precedes the start.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::BlankTitle);
        }
        let start = parse_datetime(&self.start_time).ok_or_else(|| {
            EventValidationError::UnparseableTime {
                field: "start_time",
                value: self.start_time.clone(),
            }
        })?;
        let end = parse_datetime(&self.end_time).ok_or_else(|| {
            EventValidationError::UnparseableTime {
                field: "end_time",
                value: self.end_time.clone(),
            }
        })?;
        if end < start {
            return Err(EventValidationError::InvalidWindow {
                start: self.start_time.clone(),
                end: self.end_time.clone(),
            });
        }
        Ok(())
    }
}
