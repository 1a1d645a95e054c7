//! Error types for Lifeline

use thiserror::Error;

/// Main error type for Lifeline operations
#[derive(Error, Debug)]
pub enum LifelineError {
    /// Error during preference storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Content document could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Content document request failed in transport
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Content document request answered with a non-success status
    #[error("Unexpected status {status} from {location}")]
    Status { status: u16, location: String },

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted or configured theme value is not `light` or `dark`
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    /// A content location could not be turned into a path or URL
    #[error("Invalid content location: {0}")]
    InvalidLocation(String),
}

/// Result type alias using LifelineError
pub type LifelineResult<T> = Result<T, LifelineError>;
