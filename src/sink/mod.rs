//! Record Sink module
//!
//! Where decoded records end up. Every write is an upsert by identity, so
//! replaying a receipt overwrites rather than duplicates.

mod error;
mod jsonl;
mod memory;

pub use error::SinkError;
pub use jsonl::JsonLinesSink;
pub use memory::MemorySink;

use crate::aggregate::AccountAggregate;
use crate::domain::EventRecord;

/// Persistence boundary for the walker
pub trait RecordSink {
    /// Upsert an event record by `(kind, id)`
    fn save_event(&mut self, record: &EventRecord) -> Result<(), SinkError>;

    /// Load the account aggregate for a signer, if one was saved before
    fn load_account(&self, id: &str) -> Result<Option<AccountAggregate>, SinkError>;

    /// Upsert an account aggregate by id
    fn save_account(&mut self, account: &AccountAggregate) -> Result<(), SinkError>;
}
