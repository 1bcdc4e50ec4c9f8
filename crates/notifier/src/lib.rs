//! Notification delivery via the Telegram Bot API.
//!
//! One message per recipient, one attempt per run. Delivery failures are
//! returned to the dispatch engine, which leaves the record unmarked so the
//! next scheduled run retries it.

use reqwest::Client;
use serde::Serialize;

use tugas_common::error::AppError;

/// Seam between the dispatch engine and the delivery transport.
///
/// The engine is generic over this trait so its tests can record or fail
/// sends without a network.
pub trait Notify {
    /// Send one text message to one recipient id.
    fn send(&self, chat_id: &str, text: &str) -> impl Future<Output = Result<(), AppError>>;
}

/// Telegram Bot API client.
pub struct TelegramNotifier {
    http: Client,
    base_url: String,
    bot_token: String,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

impl TelegramNotifier {
    pub fn new(base_url: impl Into<String>, bot_token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            bot_token: bot_token.into(),
        }
    }
}

impl Notify for TelegramNotifier {
    /// POST `/bot{token}/sendMessage` with Markdown parse mode enabled.
    /// No internal retry; any transport or non-2xx failure is the caller's
    /// to log and absorb.
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), AppError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let body = SendMessageRequest {
            chat_id,
            text,
            parse_mode: "Markdown",
        };

        self.http
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        tracing::info!(chat_id, "Message sent to Telegram");
        Ok(())
    }
}
