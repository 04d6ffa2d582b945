use crate::domain::{errors::ValidationError, value_objects::ObjectKey};

/// Errors that can occur while talking to the metadata table or the bucket
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// Malformed input, the caller's fault
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Referenced file is absent from the bucket
    #[error("File does not exist.")]
    FileNotFound { key: ObjectKey },

    /// Backend unreachable or returned an unexpected failure
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl StoreError {
    /// Shorthand for wrapping a backend failure message
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend {
            message: message.into(),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
