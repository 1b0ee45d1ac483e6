//! Extraction Error Types
//!
//! Failures while reading typed fields out of a contract log line.

use thiserror::Error;

use super::amount::AmountError;

/// Errors raised by a field extractor.
///
/// These are contained to the record under construction: the walker
/// downgrades them to a context-only record plus a diagnostic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Log line has fewer tokens than the positional contract references
    #[error("Token index {index} out of range: log line has {len} tokens")]
    OutOfRange { index: usize, len: usize },

    /// Token at an amount position is not an unsigned integer
    #[error("Invalid amount at token {index}: {source}")]
    InvalidAmount {
        index: usize,
        #[source]
        source: AmountError,
    },
}

impl ExtractError {
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    pub fn invalid_amount(index: usize, source: AmountError) -> Self {
        Self::InvalidAmount { index, source }
    }
}
