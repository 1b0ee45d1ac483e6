//! Sink Errors

/// Errors that can occur while writing records
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SinkError {
    /// A replay of the same receipt may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, SinkError::Io(_))
    }
}
