//! TugasCourier binary entrypoint.
//!
//! One process run = one Notion fetch followed by a strictly sequential
//! dispatch loop. Scheduling is external (cron or similar); the process
//! always exits 0, so failures are visible only in the logs.

mod notion;

use tracing_subscriber::EnvFilter;

use tugas_common::config::AppConfig;
use tugas_engine::dispatcher::DispatchEngine;
use tugas_engine::sent_set::SentIdStore;
use tugas_notifier::TelegramNotifier;

use crate::notion::NotionClient;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("tugas_courier=info,tugas_engine=info,tugas_notifier=info")
        }))
        .init();

    tracing::info!("TugasCourier starting...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Configuration error");
            return;
        }
    };

    if let Err(e) = run(&config).await {
        tracing::error!(error = %e, "Run failed");
    }
}

/// One scheduled run: fetch, filter, dispatch, persist.
async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let client = NotionClient::new(config);

    let response = match client.query_database().await {
        Ok(response) => response,
        Err(e) => {
            // Nothing to do this run; the next scheduled run starts fresh.
            tracing::error!(error = %e, "Error fetching Notion data");
            return Ok(());
        }
    };

    if response.results.is_empty() {
        tracing::info!("No data found.");
        return Ok(());
    }

    let store = SentIdStore::new(&config.sent_ids_file);
    let mut engine = DispatchEngine::new(store)?;
    let notifier = TelegramNotifier::new(&config.telegram_api_url, &config.telegram_bot_token);

    let dispatched = engine.dispatch_all(&response.results, &notifier).await;
    tracing::info!(dispatched, "Processing completed.");

    Ok(())
}
