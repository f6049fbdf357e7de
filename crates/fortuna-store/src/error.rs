//! Error types for fortuna-store.

use std::path::PathBuf;

use uuid::Uuid;

/// Result type for fortuna-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fortuna-store.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Failed to create the data directory.
    #[error("Failed to create data directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A blob or metadata write failed. No reading record is created when
    /// the blob write fails.
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Image blob missing on read, e.g. externally deleted. Recoverable;
    /// callers should render a placeholder.
    #[error("Image blob not found: {0}")]
    NotFound(String),

    /// No reading with the given id in the history.
    #[error("Reading not found: {0}")]
    ReadingNotFound(Uuid),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
