//! Identity encoding
//!
//! Record identities and hashes are rendered as text with a per-deployment
//! encoding. Deployments have used both raw hex and base58, so the choice is
//! configuration rather than code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::receipt::CryptoHash;

/// How hashes are rendered into record fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityEncoding {
    /// Lowercase hex, no `0x` prefix
    #[default]
    Hex,
    Base58,
}

impl IdentityEncoding {
    pub fn encode(&self, hash: &CryptoHash) -> String {
        match self {
            IdentityEncoding::Hex => hex::encode(hash.as_bytes()),
            IdentityEncoding::Base58 => bs58::encode(hash.as_bytes()).into_string(),
        }
    }
}

impl fmt::Display for IdentityEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityEncoding::Hex => write!(f, "hex"),
            IdentityEncoding::Base58 => write!(f, "base58"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown identity encoding: {0} (expected `hex` or `base58`)")]
pub struct UnknownEncoding(pub String);

impl FromStr for IdentityEncoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(IdentityEncoding::Hex),
            "base58" => Ok(IdentityEncoding::Base58),
            other => Err(UnknownEncoding(other.to_string())),
        }
    }
}
