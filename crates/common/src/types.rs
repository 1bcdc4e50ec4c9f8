use serde::{Deserialize, Serialize};

/// Sentinel substituted for any absent or malformed source field.
pub const MISSING_VALUE: &str = "Tidak ada data";

/// Placeholder rendered when an accepted-date is absent or unparsable.
pub const UNKNOWN_DATE: &str = "-";

/// One row fetched from the Notion database.
///
/// `properties` is kept loosely typed: Notion property objects vary in shape
/// per column type, and rows routinely carry absent, null, or half-filled
/// slots. The normalizer is responsible for taming them.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskPage {
    pub id: String,
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// Response body of a Notion database query (first page only).
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<TaskPage>,
}

/// Flat, display-ready view of one approval row.
///
/// Every field is a plain string; slots that were absent or malformed in the
/// source hold [`MISSING_VALUE`] (the accepted date holds [`UNKNOWN_DATE`]
/// when unparsable). Built from exactly one [`TaskPage`] and discarded after
/// dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedNotification {
    pub project_name: String,
    pub work_package: String,
    pub id_activities: String,
    pub activities_name: String,
    pub assignee_name: String,
    pub user_name: String,
    /// Telegram chat id the notification is routed to (slot "ID Telegram (Us)")
    pub chat_id: String,
    /// External correlation id (slot "ID Kirim FB Tugas")
    pub delivery_ref: String,
    /// Accepted date, formatted as DD/MM/YYYY HH:MM
    pub accepted_date: String,
    pub accept_reject: String,
}
