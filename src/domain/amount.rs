//! Token amount type
//!
//! Integer amounts pulled out of contract log lines. Token balances are
//! denominated in the smallest unit (yocto scale), so values routinely
//! exceed 64 bits and are held as `u128`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// TokenAmount represents a non-negative integer amount.
///
/// # Invariants
/// - Parsed from base-10 digits only (no sign, no decimal point)
/// - Fits in 128 bits
///
/// Serialized as a decimal string so JSON consumers never lose precision.
///
/// # Example
/// ```
/// use receipt_indexer::domain::TokenAmount;
///
/// let amount: TokenAmount = "500".parse().unwrap();
/// assert_eq!(amount.value(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenAmount(u128);

/// Errors that can occur when parsing a TokenAmount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Amount is empty")]
    Empty,

    #[error("Amount must contain only decimal digits (got {0:?})")]
    NotAnInteger(String),

    #[error("Amount exceeds 128 bits ({0})")]
    Overflow(String),
}

impl TokenAmount {
    pub fn new(value: u128) -> Self {
        Self(value)
    }

    /// Get the underlying integer value.
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TokenAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AmountError::Empty);
        }

        // u128::from_str tolerates a leading '+', contract logs never carry one
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::NotAnInteger(s.to_string()));
        }

        s.parse::<u128>()
            .map(Self)
            .map_err(|_| AmountError::Overflow(s.to_string()))
    }
}

impl TryFrom<String> for TokenAmount {
    type Error = AmountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TokenAmount::from_str(&value)
    }
}

impl From<TokenAmount> for String {
    fn from(amount: TokenAmount) -> Self {
        amount.0.to_string()
    }
}

impl From<u128> for TokenAmount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}
