//! Error handling module
//!
//! Errors that reach the host. Extraction problems never show up here:
//! they are contained per record and reported as diagnostics.

/// Crate-wide Result type
pub type IngestResult<T> = Result<T, IngestError>;

/// Ingest error types
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Invalid receipt: {0}")]
    InvalidReceipt(#[from] serde_json::Error),

    #[error("Sink error: {0}")]
    Sink(#[from] crate::sink::SinkError),

    #[error("Input error: {0}")]
    Input(#[from] std::io::Error),
}

impl IngestError {
    /// Replaying the receipt may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            IngestError::Sink(e) => e.is_retryable(),
            IngestError::InvalidReceipt(_) | IngestError::Input(_) => false,
        }
    }
}
