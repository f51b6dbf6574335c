//! User profile domain model.
//!
//! The profile is read-only input to the heuristics; only the productivity
//! peak influences scheduling.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Self-declared time of day the user works best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductivityPeak {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl ProductivityPeak {
    /// Returns the half-open hour-of-day range biased by this peak.
    pub fn peak_hours(self) -> Range<u32> {
        match self {
            Self::Morning => 8..12,
            Self::Afternoon => 12..17,
            Self::Evening => 17..22,
            Self::Night => 20..24,
        }
    }
}

/// Planner owner preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub productivity_peak: Option<ProductivityPeak>,
}

impl UserProfile {
    /// Creates a profile with the given display name and no declared peak.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            productivity_peak: None,
        }
    }
}
