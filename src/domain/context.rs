//! Receipt Context
//!
//! Metadata shared by every record produced from one receipt action.

use serde::{Deserialize, Serialize};

use super::encoding::IdentityEncoding;
use super::receipt::{ActionReceipt, BlockHeader, ExecutionOutcome, ReceiptWithOutcome};

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Block, outcome and signer fields copied verbatim into each record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptContext {
    pub block_height: u64,

    /// Milliseconds since epoch (nanosecond source, integer division)
    pub block_timestamp: u64,

    pub block_hash: String,
    pub outcome_id: String,
    pub executor_id: String,
    pub predecessor_id: String,
    pub receiver_id: String,
    pub signer_id: String,
    pub signer_public_key: String,
    pub gas_burnt: u64,

    /// Decimal string, yocto-denominated
    pub tokens_burnt: String,
}

impl ReceiptContext {
    /// Build the context for a receipt, rendering hashes with `encoding`
    pub fn new(
        receipt: &ActionReceipt,
        block: &BlockHeader,
        outcome: &ExecutionOutcome,
        encoding: IdentityEncoding,
    ) -> Self {
        Self {
            block_height: block.height,
            block_timestamp: block.timestamp_nanosec / NANOS_PER_MILLI,
            block_hash: encoding.encode(&block.hash),
            outcome_id: encoding.encode(&outcome.id),
            executor_id: outcome.executor_id.clone(),
            predecessor_id: receipt.predecessor_id.clone(),
            receiver_id: receipt.receiver_id.clone(),
            signer_id: receipt.signer_id.clone(),
            signer_public_key: receipt.signer_public_key.clone(),
            gas_burnt: outcome.gas_burnt,
            tokens_burnt: outcome.tokens_burnt.clone(),
        }
    }

    pub fn from_receipt(receipt: &ReceiptWithOutcome, encoding: IdentityEncoding) -> Self {
        Self::new(&receipt.receipt, &receipt.block, &receipt.outcome, encoding)
    }
}
