//! Account Aggregate
//!
//! Per-signer index of the event records an account took part in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{EventKind, EventRecord};

use super::Aggregate;

/// Pointer from an account to one event record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventReference {
    pub kind: EventKind,
    pub record_id: String,
}

impl From<&EventRecord> for EventReference {
    fn from(record: &EventRecord) -> Self {
        Self {
            kind: record.kind,
            record_id: record.id.clone(),
        }
    }
}

/// Account Aggregate
///
/// Keyed by signer account id. Reference lists are append-only and keep
/// their insertion order; replaying a receipt appends its ids again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAggregate {
    /// Signer account id
    pub id: String,

    pub references: BTreeMap<EventKind, Vec<String>>,
}

impl AccountAggregate {
    pub fn new(signer_id: impl Into<String>) -> Self {
        Self {
            id: signer_id.into(),
            references: BTreeMap::new(),
        }
    }

    /// Record ids of one kind, in the order they were appended
    pub fn references_of(&self, kind: EventKind) -> &[String] {
        self.references
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn total_references(&self) -> usize {
        self.references.values().map(Vec::len).sum()
    }
}

impl Aggregate for AccountAggregate {
    type Event = EventReference;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(mut self, event: EventReference) -> Self {
        self.references
            .entry(event.kind)
            .or_default()
            .push(event.record_id);
        self
    }
}
