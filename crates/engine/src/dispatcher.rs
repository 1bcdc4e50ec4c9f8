//! Delivery filter and dispatch loop.
//!
//! For each fetched page, in result order:
//! 1. Normalize the property bag into a flat notification
//! 2. Decide whether it qualifies for delivery (never sent, routable)
//! 3. Render the template and send via the `Notify` seam
//! 4. On success, append the page id and persist the sent-id state
//!
//! A failed send leaves the page unmarked so the next scheduled run retries
//! it. No failure stops the loop; every page is evaluated each run.

use tugas_common::error::AppError;
use tugas_common::types::{MISSING_VALUE, NormalizedNotification, TaskPage};
use tugas_notifier::Notify;

use crate::message;
use crate::sent_set::SentIdStore;

/// Dispatch engine owning the in-memory sent-id sequence and its store.
pub struct DispatchEngine {
    store: SentIdStore,
    sent_ids: Vec<String>,
}

impl DispatchEngine {
    /// Create the engine, loading persisted state (empty on first run).
    pub fn new(store: SentIdStore) -> Result<Self, AppError> {
        let sent_ids = store.load()?;
        tracing::debug!(count = sent_ids.len(), "Loaded sent-id state");
        Ok(Self { store, sent_ids })
    }

    /// Ids marked as delivered, in dispatch order.
    pub fn sent_ids(&self) -> &[String] {
        &self.sent_ids
    }

    /// A page qualifies iff it has never been marked sent and both the
    /// Telegram routing id and the correlation id were present in the source.
    fn qualifies(&self, page_id: &str, n: &NormalizedNotification) -> bool {
        !self.sent_ids.iter().any(|id| id == page_id)
            && n.chat_id != MISSING_VALUE
            && n.delivery_ref != MISSING_VALUE
    }

    /// Evaluate every page in result order, dispatching the qualifying ones.
    ///
    /// Returns the number of messages successfully handed to the notifier.
    /// Non-qualifying pages are skipped silently; delivery and persist
    /// failures are logged and the loop continues.
    pub async fn dispatch_all<N: Notify>(&mut self, pages: &[TaskPage], notifier: &N) -> u32 {
        let mut dispatched = 0u32;

        for page in pages {
            let notification = tugas_normalizer::normalize(page);
            if !self.qualifies(&page.id, &notification) {
                continue;
            }

            let text = message::render(&notification);
            match notifier.send(&notification.chat_id, &text).await {
                Ok(()) => {
                    self.sent_ids.push(page.id.clone());
                    dispatched += 1;
                    if let Err(e) = self.store.save(&self.sent_ids) {
                        // The id stays in the in-memory set for this run;
                        // a resend after restart is the accepted trade-off.
                        tracing::error!(
                            page_id = %page.id,
                            error = %e,
                            "Failed to persist sent-id state"
                        );
                    }
                }
                Err(e) => {
                    tracing::error!(
                        chat_id = %notification.chat_id,
                        error = %e,
                        "Error sending message"
                    );
                }
            }
        }

        dispatched
    }
}
