use thiserror::Error;
use uuid::Uuid;

/// Error type that captures common tracker failures.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("expense `{0}` not found")]
    ExpenseNotFound(Uuid),
    #[error("expense book `{0}` not found")]
    BookNotFound(String),
}
