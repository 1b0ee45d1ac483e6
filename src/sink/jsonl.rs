//! JSON-lines sink
//!
//! Streams every upsert as one JSON object per line. Consumers apply the
//! lines in order and keep the last one per `(entity, kind, id)`.

use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

use crate::aggregate::AccountAggregate;
use crate::domain::EventRecord;

use super::{RecordSink, SinkError};

#[derive(Serialize)]
#[serde(tag = "entity", rename_all = "snake_case")]
enum Line<'a> {
    Event(&'a EventRecord),
    Account(&'a AccountAggregate),
}

/// Writes upserts to `writer`, caching accounts so they can be reloaded
pub struct JsonLinesSink<W: Write> {
    writer: W,
    accounts: HashMap<String, AccountAggregate>,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            accounts: HashMap::new(),
        }
    }

    fn write_line(&mut self, line: &Line<'_>) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, line)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn save_event(&mut self, record: &EventRecord) -> Result<(), SinkError> {
        self.write_line(&Line::Event(record))
    }

    fn load_account(&self, id: &str) -> Result<Option<AccountAggregate>, SinkError> {
        Ok(self.accounts.get(id).cloned())
    }

    fn save_account(&mut self, account: &AccountAggregate) -> Result<(), SinkError> {
        self.write_line(&Line::Account(account))?;
        self.accounts.insert(account.id.clone(), account.clone());
        Ok(())
    }
}
