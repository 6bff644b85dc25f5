use thiserror::Error;

/// Result type for protocol-level operations.
pub type Result<T> = std::result::Result<T, ShortenerError>;

/// Result type for repository operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Errors surfaced by the shortening protocol.
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("invalid source url: {0}")]
    InvalidUrl(String),
    #[error("invalid id: {0}")]
    InvalidId(String),
    /// The message carries only the contested code. The existing
    /// mapping's target URL is deliberately withheld so the error cannot
    /// be used to enumerate stored URLs.
    #[error("short code '{0}' is already bound to a different url")]
    CodeConflict(String),
    #[error("could not generate a free short code after {attempts} attempts")]
    CapacityExhausted { attempts: u32 },
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("id already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}
