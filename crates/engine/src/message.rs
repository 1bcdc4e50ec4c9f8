//! The fixed notification template.

use tugas_common::types::NormalizedNotification;

/// Render one notification as the Markdown message body sent to Telegram.
pub fn render(n: &NormalizedNotification) -> String {
    format!(
        "*HASIL TUGAS*\n\n\
         🆔 *ID Activity:* {}\n\
         📄 *Nama Activity:* {}\n\
         👤 *Assignee:* {}\n\
         👥 *User:* {}\n\
         🏗 *Project:* {}\n\
         📦 *Work Package:* {}\n\
         📅 *Tanggal Diterima:* {}\n\
         ✅ *Status:* {}",
        n.id_activities,
        n.activities_name,
        n.assignee_name,
        n.user_name,
        n.project_name,
        n.work_package,
        n.accepted_date,
        n.accept_reject,
    )
}
