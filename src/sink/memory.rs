//! In-memory sink
//!
//! Keeps the latest version of every record, for embedding hosts that
//! persist on their own schedule and for tests.

use std::collections::BTreeMap;

use crate::aggregate::AccountAggregate;
use crate::domain::{EventKind, EventRecord};

use super::{RecordSink, SinkError};

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: BTreeMap<(EventKind, String), EventRecord>,
    accounts: BTreeMap<String, AccountAggregate>,
    writes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event(&self, kind: EventKind, id: &str) -> Option<&EventRecord> {
        self.events.get(&(kind, id.to_string()))
    }

    pub fn events(&self) -> impl Iterator<Item = &EventRecord> {
        self.events.values()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn account(&self, id: &str) -> Option<&AccountAggregate> {
        self.accounts.get(id)
    }

    /// Total writes, including overwrites
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RecordSink for MemorySink {
    fn save_event(&mut self, record: &EventRecord) -> Result<(), SinkError> {
        self.events
            .insert((record.kind, record.id.clone()), record.clone());
        self.writes += 1;
        Ok(())
    }

    fn load_account(&self, id: &str) -> Result<Option<AccountAggregate>, SinkError> {
        Ok(self.accounts.get(id).cloned())
    }

    fn save_account(&mut self, account: &AccountAggregate) -> Result<(), SinkError> {
        self.accounts.insert(account.id.clone(), account.clone());
        self.writes += 1;
        Ok(())
    }
}
