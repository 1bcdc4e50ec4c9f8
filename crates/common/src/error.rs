use thiserror::Error;

/// Common error types used across the application.
///
/// None of these are ever fatal to a run: the orchestration layer logs them
/// and continues (or ends the run cleanly). The process always exits 0.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("State file error: {0}")]
    StateIo(#[from] std::io::Error),

    #[error("State decode error: {0}")]
    StateDecode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Delivery error: {0}")]
    Delivery(String),
}
