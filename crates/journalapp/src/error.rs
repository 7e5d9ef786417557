use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Entry not found: {0}")]
    EntryNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api error: {0}")]
    Api(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, JournalError>;
