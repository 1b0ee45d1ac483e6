//! Per-receipt report
//!
//! What the walker did with each action. None of the diagnostics here is an
//! error for the host; they are surfaced for operator triage.

use serde::Serialize;

use crate::aggregate::EventReference;
use crate::domain::{EventKind, ExtractError};

/// Non-fatal findings, one per affected action or record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Action is not a contract method invocation
    NonInvocationAction {
        action_index: usize,
        action_kind: &'static str,
    },

    /// Method name bound to no event kind
    UnrecognizedMethod {
        action_index: usize,
        method_name: String,
    },

    /// Outcome carried no log line; the record holds context fields only
    EmptyLogOutcome {
        action_index: usize,
        kind: EventKind,
        record_id: String,
    },

    /// Log line did not fit the positional contract; the record holds
    /// context fields only
    MalformedLogLine {
        action_index: usize,
        method_name: String,
        kind: EventKind,
        raw_line: String,
        #[serde(serialize_with = "serialize_display")]
        error: ExtractError,
    },
}

fn serialize_display<S: serde::Serializer>(
    error: &ExtractError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Result of walking one receipt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Encoded receipt id
    pub receipt_id: String,

    /// Records written, in action order
    pub saved: Vec<EventReference>,

    pub diagnostics: Vec<Diagnostic>,
}

impl IngestReport {
    pub fn new(receipt_id: impl Into<String>) -> Self {
        Self {
            receipt_id: receipt_id.into(),
            ..Default::default()
        }
    }

    pub fn record_count(&self) -> usize {
        self.saved.len()
    }

    pub fn malformed_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::MalformedLogLine { .. }))
            .count()
    }

    pub fn saved_kinds(&self) -> Vec<EventKind> {
        self.saved.iter().map(|r| r.kind).collect()
    }
}
