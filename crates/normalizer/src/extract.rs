//! Per-shape property extractors.
//!
//! Notion property objects are a loosely-typed bag: each slot may be absent,
//! null, or carry one of several shapes depending on the column type. Each
//! extractor here is a total function — any input it cannot make sense of
//! resolves to [`MISSING_VALUE`] rather than an error.

use serde_json::Value;

use tugas_common::types::MISSING_VALUE;

/// Expected shape of one property slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// A bare JSON string
    Plain,
    /// A single-choice label (`select.name`)
    Select,
    /// A date object (`date.start`)
    Date,
    /// A list of rich-text runs (`rich_text[].plain_text`)
    RichTextRuns,
    /// A list of title runs (`title[].plain_text`)
    TitleRuns,
}

/// Extract a display string from one property slot according to its shape.
pub fn extract(prop: Option<&Value>, kind: PropertyKind) -> String {
    match kind {
        PropertyKind::Plain => extract_plain(prop),
        PropertyKind::Select => extract_select(prop),
        PropertyKind::Date => extract_date(prop),
        PropertyKind::RichTextRuns => extract_runs(prop, "rich_text"),
        PropertyKind::TitleRuns => extract_runs(prop, "title"),
    }
}

/// Concatenate the `plain_text` of every run with single spaces.
/// An absent or empty run list yields the sentinel.
pub fn extract_runs(prop: Option<&Value>, key: &str) -> String {
    let runs = match prop.and_then(|p| p.get(key)).and_then(Value::as_array) {
        Some(runs) if !runs.is_empty() => runs,
        _ => return MISSING_VALUE.to_string(),
    };

    runs.iter()
        .filter_map(|run| run.get("plain_text").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read the nested label name of a single-choice slot.
pub fn extract_select(prop: Option<&Value>) -> String {
    prop.and_then(|p| p.get("select"))
        .and_then(|s| s.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

/// Read the nested start-date string of a date slot (raw, unformatted).
pub fn extract_date(prop: Option<&Value>) -> String {
    prop.and_then(|p| p.get("date"))
        .and_then(|d| d.get("start"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

/// Read a slot that is expected to be a bare JSON string.
pub fn extract_plain(prop: Option<&Value>) -> String {
    prop.and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}
