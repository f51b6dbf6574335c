//! ISO-8601 date and timestamp helpers.
//!
//! # Responsibility
//! - Stamp creation/completion timestamps in the collaborator wire format.
//! - Parse wire-format dates and datetimes defensively.
//!
//! # Invariants
//! - Parsing never fails loudly: malformed input yields `None` and callers
//!   skip the value.

use chrono::{Local, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Returns the current local timestamp in wire format.
pub fn iso_timestamp_now() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Returns today's local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Formats a calendar date in the check-in wire format (`YYYY-MM-DD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a wire-format calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Parses a wire-format datetime.
///
/// Accepts `T` and space separators with optional fractional seconds; a
/// date-only value maps to midnight.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    parse_date(trimmed).and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::{format_date, parse_date, parse_datetime};
    use chrono::NaiveDate;

    #[test]
    fn date_roundtrip_uses_wire_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let formatted = format_date(date);
        assert_eq!(formatted, "2026-03-14");
        assert_eq!(parse_date(&formatted), Some(date));
    }

    #[test]
    fn parse_datetime_accepts_both_separators_and_fractions() {
        assert!(parse_datetime("2026-03-14T09:30:00").is_some());
        assert!(parse_datetime("2026-03-14 09:30:00.250").is_some());
    }

    #[test]
    fn parse_datetime_maps_date_only_to_midnight() {
        let parsed = parse_datetime("2026-03-14").unwrap();
        assert_eq!(parsed.time(), chrono::NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn malformed_input_yields_none() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_datetime("14/03/2026 9am"), None);
        assert_eq!(parse_date(""), None);
    }
}
