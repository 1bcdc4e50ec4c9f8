//! Accepted-date formatting.

use chrono::{DateTime, NaiveDate};

use tugas_common::types::{MISSING_VALUE, UNKNOWN_DATE};

/// Render an ISO-8601 timestamp as `DD/MM/YYYY HH:MM` in its own offset.
///
/// Accepts a trailing `Z` UTC marker (RFC 3339) and bare `YYYY-MM-DD` dates,
/// which Notion emits for date columns without a time component. Empty input,
/// the missing-value sentinel, and anything unparsable all resolve to
/// [`UNKNOWN_DATE`].
pub fn format_datetime(raw: &str) -> String {
    if raw.is_empty() || raw == MISSING_VALUE {
        return UNKNOWN_DATE.to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y 00:00").to_string();
    }

    tracing::error!(input = raw, "Date format error");
    UNKNOWN_DATE.to_string()
}
