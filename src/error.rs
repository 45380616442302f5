//! Error types for PageKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Unified error type for PageKV operations
#[derive(Debug, Error)]
pub enum KvError {
    // -------------------------------------------------------------------------
    // Client Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    Validation(String),

    #[error("Only {0} method is allowed")]
    MethodNotAllowed(&'static str),

    #[error("Key not found")]
    KeyNotFound,

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Store error: {0}")]
    Store(#[from] redb::Error),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Runtime Errors
    // -------------------------------------------------------------------------
    #[error("Internal error: {0}")]
    Internal(String),
}

impl KvError {
    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        KvError::Validation(message.into())
    }

    /// True for errors caused by the caller's input rather than the store
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            KvError::Validation(_) | KvError::MethodNotAllowed(_) | KvError::KeyNotFound
        )
    }
}

// redb reports failures through one error type per operation kind; funnel them
// all into the umbrella `redb::Error` so `?` works on every store call.
macro_rules! store_error_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for KvError {
                fn from(err: $ty) -> Self {
                    KvError::Store(redb::Error::from(err))
                }
            }
        )*
    };
}

store_error_from!(
    redb::DatabaseError,
    redb::TransactionError,
    redb::TableError,
    redb::StorageError,
    redb::CommitError,
);
