//! Ingest module
//!
//! Receipt Walker and Method Router: turns receipts into event records.
//! Replay drives the walker over newline-delimited receipt input.

mod replay;
mod report;
mod router;
mod walker;

pub use replay::{replay, ReplaySummary};
pub use report::{Diagnostic, IngestReport};
pub use router::{ActionScope, MethodRouter, TriggerTable};
pub use walker::ReceiptWalker;

use crate::domain::ReceiptWithOutcome;
use crate::error::IngestResult;

/// Decode one receipt from its JSON form
pub fn decode_receipt(json: &str) -> IngestResult<ReceiptWithOutcome> {
    Ok(serde_json::from_str(json)?)
}
