pub mod datetime;
pub mod extract;


use serde_json::Value;

use tugas_common::types::{NormalizedNotification, TaskPage};

use crate::extract::PropertyKind;

/// Fixed lookup table of property-slot name → expected shape.
///
/// Listed here in one place so the schema the courier depends on is visible
/// at a glance. `normalize` is the only consumer.
pub const SLOT_TABLE: &[(&str, PropertyKind)] = &[
    ("Project Name", PropertyKind::RichTextRuns),
    ("Work Package Name", PropertyKind::RichTextRuns),
    ("ID Activities", PropertyKind::RichTextRuns),
    ("Activities Name", PropertyKind::TitleRuns),
    ("Assignee Name", PropertyKind::RichTextRuns),
    ("User Name", PropertyKind::RichTextRuns),
    ("Accept / Reject", PropertyKind::Select),
    ("Accepted Date", PropertyKind::Date),
    ("ID Kirim FB Tugas", PropertyKind::RichTextRuns),
    ("ID Telegram (Us)", PropertyKind::RichTextRuns),
];

/// Flatten one fetched page into a display-ready notification.
///
/// Total over every input page: absent, null, or malformed slots come back as
/// the missing-value sentinel and the accepted date falls back to its
/// placeholder. Never panics, never errors.
pub fn normalize(page: &TaskPage) -> NormalizedNotification {
    let accepted_raw = slot(page, "Accepted Date");

    NormalizedNotification {
        project_name: slot(page, "Project Name"),
        work_package: slot(page, "Work Package Name"),
        id_activities: slot(page, "ID Activities"),
        activities_name: slot(page, "Activities Name"),
        assignee_name: slot(page, "Assignee Name"),
        user_name: slot(page, "User Name"),
        chat_id: slot(page, "ID Telegram (Us)"),
        delivery_ref: slot(page, "ID Kirim FB Tugas"),
        accepted_date: datetime::format_datetime(&accepted_raw),
        accept_reject: slot(page, "Accept / Reject"),
    }
}

/// Extract one named slot using its shape from [`SLOT_TABLE`].
fn slot(page: &TaskPage, name: &str) -> String {
    let kind = SLOT_TABLE
        .iter()
        .find(|(slot_name, _)| *slot_name == name)
        .map(|(_, kind)| *kind)
        .unwrap_or(PropertyKind::Plain);

    let prop: Option<&Value> = page.properties.get(name);
    extract::extract(prop, kind)
}
