//! Receipt model
//!
//! The shape of a receipt as delivered by the indexing host: the action
//! receipt itself, the header of the block it was included in and the
//! execution outcome. Everything here is input; nothing is mutated.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 32-byte hash used for receipt ids, block hashes and outcome ids.
///
/// On the wire it travels as a base58 string, which is how the chain
/// itself renders hashes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CryptoHash(pub [u8; 32]);

/// Errors when decoding a [`CryptoHash`] from its base58 form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoHashError {
    #[error("Invalid base58 hash: {0}")]
    Base58(String),

    #[error("Hash must be 32 bytes (got {0})")]
    Length(usize),
}

impl CryptoHash {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for CryptoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for CryptoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CryptoHash({})", self)
    }
}

impl FromStr for CryptoHash {
    type Err = CryptoHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| CryptoHashError::Base58(e.to_string()))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|v: Vec<u8>| CryptoHashError::Length(v.len()))?;
        Ok(Self(bytes))
    }
}

impl Serialize for CryptoHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CryptoHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A receipt together with its block header and execution outcome.
/// This is the unit the host hands over for processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptWithOutcome {
    pub receipt: ActionReceipt,
    pub block: BlockHeader,
    pub outcome: ExecutionOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionReceipt {
    pub id: CryptoHash,
    pub predecessor_id: String,
    pub receiver_id: String,
    pub signer_id: String,
    pub signer_public_key: String,
    /// Actions in execution order
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockHeader {
    pub height: u64,
    pub timestamp_nanosec: u64,
    pub hash: CryptoHash,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    pub id: CryptoHash,
    pub block_hash: CryptoHash,
    #[serde(default)]
    pub logs: Vec<String>,
    pub gas_burnt: u64,
    /// Decimal string, yocto-denominated
    pub tokens_burnt: String,
    pub executor_id: String,
}

/// A single action within a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    CreateAccount,
    DeployContract {
        #[serde(default)]
        code_hash: Option<CryptoHash>,
    },
    FunctionCall(FunctionCall),
    Transfer {
        deposit: String,
    },
    Stake {
        stake: String,
        public_key: String,
    },
    AddKey {
        public_key: String,
    },
    DeleteKey {
        public_key: String,
    },
    DeleteAccount {
        beneficiary_id: String,
    },
}

/// Contract method invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub method_name: String,
    #[serde(default)]
    pub args: String,
    #[serde(default)]
    pub gas: u64,
    #[serde(default)]
    pub deposit: String,
}

impl FunctionCall {
    pub fn new(method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            args: String::new(),
            gas: 0,
            deposit: "0".to_string(),
        }
    }
}

impl Action {
    /// Get the action kind as a string
    pub fn kind(&self) -> &'static str {
        match self {
            Action::CreateAccount => "create_account",
            Action::DeployContract { .. } => "deploy_contract",
            Action::FunctionCall(_) => "function_call",
            Action::Transfer { .. } => "transfer",
            Action::Stake { .. } => "stake",
            Action::AddKey { .. } => "add_key",
            Action::DeleteKey { .. } => "delete_key",
            Action::DeleteAccount { .. } => "delete_account",
        }
    }

    pub fn as_function_call(&self) -> Option<&FunctionCall> {
        match self {
            Action::FunctionCall(call) => Some(call),
            _ => None,
        }
    }
}
