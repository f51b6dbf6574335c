//! Importance/urgency estimation from task text.
//!
//! # Responsibility
//! - Derive 1..=5 importance and urgency ratings from title plus
//!   description.
//!
//! # Invariants
//! - Estimation is pure and total; unrecognized text yields the default
//!   medium rating.
//! - Date references never lower urgency, only raise it to at least 4.

use crate::model::task::DEFAULT_RATING;
use once_cell::sync::Lazy;
use regex::Regex;

/// Urgency floor applied when the text references a date.
const DATE_REFERENCE_URGENCY: u8 = 4;

/// Keyword tiers scanned in priority order; the first tier with a match
/// decides the rating.
const IMPORTANCE_TIERS: [(&[&str], u8); 3] = [
    (
        &[
            "important",
            "critical",
            "crucial",
            "essential",
            "key",
            "major",
            "significant",
            "vital",
            "priority",
        ],
        5,
    ),
    (&["necessary", "needed", "required", "should", "useful"], 3),
    (
        &[
            "optional",
            "minor",
            "trivial",
            "if time",
            "sometime",
            "eventually",
            "when possible",
        ],
        1,
    ),
];

const URGENCY_TIERS: [(&[&str], u8); 3] = [
    (
        &[
            "urgent",
            "asap",
            "immediately",
            "now",
            "today",
            "tonight",
            "deadline",
            "due",
            "overdue",
            "soon",
            "quickly",
            "fast",
        ],
        5,
    ),
    (&["this week", "next few days", "tomorrow", "upcoming"], 3),
    (
        &[
            "when convenient",
            "sometime",
            "later",
            "eventually",
            "no rush",
            "take time",
            "next month",
        ],
        1,
    ),
];

static DATE_REFERENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)due (?:on|by)? \d{1,2}(?:st|nd|rd|th)? (?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)",
        r"(?i)due (?:on|by)? \d{1,2}/\d{1,2}(?:/\d{2,4})?",
        r"(?i)by (?:this|next) (?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)",
        r"(?i)(?:this|next) (?:week|month)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid date-reference regex"))
    .collect()
});

/// Estimates `(importance, urgency)` ratings for a task.
///
/// Title and description are concatenated and lower-cased; each rating comes
/// from its first matching keyword tier (default 3), and any date reference
/// raises urgency to at least [`DATE_REFERENCE_URGENCY`].
pub fn estimate(title: &str, description: &str) -> (u8, u8) {
    let text = format!("{title} {description}").to_lowercase();

    let importance = tier_rating(&text, &IMPORTANCE_TIERS);
    let mut urgency = tier_rating(&text, &URGENCY_TIERS);

    if DATE_REFERENCE_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(&text))
    {
        urgency = urgency.max(DATE_REFERENCE_URGENCY);
    }

    (importance, urgency)
}

fn tier_rating(text: &str, tiers: &[(&[&str], u8)]) -> u8 {
    for (keywords, rating) in tiers {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            return *rating;
        }
    }
    DEFAULT_RATING
}
