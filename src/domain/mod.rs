//! Domain module
//!
//! Receipt input model and the typed records decoded from it.

pub mod amount;
pub mod context;
pub mod encoding;
pub mod error;
pub mod events;
pub mod receipt;

pub use amount::{AmountError, TokenAmount};
pub use context::ReceiptContext;
pub use encoding::{IdentityEncoding, UnknownEncoding};
pub use error::ExtractError;
pub use events::{EventDetails, EventKind, EventRecord, Purchase, RecordBuilder};
pub use receipt::{
    Action, ActionReceipt, BlockHeader, CryptoHash, CryptoHashError, ExecutionOutcome,
    FunctionCall, ReceiptWithOutcome,
};
