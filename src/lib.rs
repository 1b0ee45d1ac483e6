//! receipt-indexer Library
//!
//! Decodes contract execution receipts into typed event records.
//! Re-exports modules for integration testing and for embedding in a host.

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod extract;
pub mod ingest;
pub mod sink;

mod error;

pub use config::{Config, ConfigError};
pub use error::{IngestError, IngestResult};
pub use domain::{EventDetails, EventKind, EventRecord, IdentityEncoding, ReceiptWithOutcome};
pub use ingest::{Diagnostic, IngestReport, ReceiptWalker, TriggerTable};
pub use sink::{JsonLinesSink, MemorySink, RecordSink};
