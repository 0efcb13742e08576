//! Error types

use thiserror::Error;

/// Failures of the key-value backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode storage contents: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Backend refuses access (disabled, quota exceeded)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Rejected selection requests
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("engine index {index} out of range (catalog has {len} engines)")]
    InvalidIndex { index: usize, len: usize },

    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    #[error("engine catalog is empty")]
    EmptyCatalog,
}
