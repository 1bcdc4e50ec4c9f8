use serde::Deserialize;

/// Default path of the persisted sent-id file, relative to the working directory.
pub const DEFAULT_SENT_IDS_FILE: &str = "id_sent.json";

/// Global application configuration loaded from environment variables.
///
/// Constructed once in `main` and passed into each component as an argument —
/// core logic never reads the process environment directly.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Notion database to query for approval rows
    pub notion_database_id: String,

    /// Notion integration token (bearer auth)
    pub notion_api_key: String,

    /// Telegram bot token
    pub telegram_bot_token: String,

    /// Path of the persisted sent-id file (default: id_sent.json)
    pub sent_ids_file: String,

    /// Notion API base URL (default: https://api.notion.com)
    pub notion_api_url: String,

    /// Telegram API base URL (default: https://api.telegram.org)
    pub telegram_api_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            notion_database_id: std::env::var("NOTION_DATABASE_ID").map_err(|_| {
                anyhow::anyhow!("NOTION_DATABASE_ID environment variable is required")
            })?,
            notion_api_key: std::env::var("NOTION_API_KEY")
                .map_err(|_| anyhow::anyhow!("NOTION_API_KEY environment variable is required"))?,
            telegram_bot_token: std::env::var("TELEGRAM_BOT_TOKEN").map_err(|_| {
                anyhow::anyhow!("TELEGRAM_BOT_TOKEN environment variable is required")
            })?,
            sent_ids_file: std::env::var("SENT_IDS_FILE")
                .unwrap_or_else(|_| DEFAULT_SENT_IDS_FILE.to_string()),
            notion_api_url: std::env::var("NOTION_API_URL")
                .unwrap_or_else(|_| "https://api.notion.com".to_string()),
            telegram_api_url: std::env::var("TELEGRAM_API_URL")
                .unwrap_or_else(|_| "https://api.telegram.org".to_string()),
        })
    }
}
