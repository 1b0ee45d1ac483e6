//! Method Router
//!
//! Decides which extractors run for one action and hands the resulting
//! records to the sink.

use crate::aggregate::{AccountAggregate, Aggregate, EventReference};
use crate::domain::{Action, EventKind, EventRecord, ReceiptContext};
use crate::error::IngestResult;
use crate::extract::{self, LogLine};
use crate::sink::RecordSink;

use super::report::{Diagnostic, IngestReport};

/// Default method name bound to each event kind
const DEFAULT_TRIGGERS: [(&str, EventKind); 8] = [
    ("ft_mint", EventKind::MintWithdraw),
    ("ft_transfer_call", EventKind::Transfer),
    ("draw", EventKind::Draw),
    ("mint_callback", EventKind::MintCallback),
    ("buy_with_near", EventKind::PurchaseAltCurrency),
    ("buy_with_token", EventKind::PurchaseToken),
    ("join_guild", EventKind::GuildJoin),
    ("create_guild", EventKind::GuildCreate),
];

/// Binding of method names to event kinds.
///
/// Each kind has exactly one trigger. Several kinds may share a method name,
/// in which case every one of them fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerTable {
    bindings: Vec<(String, EventKind)>,
}

impl Default for TriggerTable {
    fn default() -> Self {
        Self {
            bindings: DEFAULT_TRIGGERS
                .iter()
                .map(|(method, kind)| (method.to_string(), *kind))
                .collect(),
        }
    }
}

impl TriggerTable {
    /// Rebind `kind` to a different method name
    pub fn with_trigger(mut self, kind: EventKind, method_name: impl Into<String>) -> Self {
        let method_name = method_name.into();
        match self.bindings.iter_mut().find(|(_, k)| *k == kind) {
            Some(binding) => binding.0 = method_name,
            None => self.bindings.push((method_name, kind)),
        }
        self
    }

    pub fn trigger_for(&self, kind: EventKind) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(_, k)| *k == kind)
            .map(|(method, _)| method.as_str())
    }

    /// Every kind whose trigger equals `method_name` (exact, case-sensitive).
    /// Each binding is checked on its own; a match does not stop the scan.
    pub fn kinds_for(&self, method_name: &str) -> Vec<EventKind> {
        self.bindings
            .iter()
            .filter(|(method, _)| method == method_name)
            .map(|(_, kind)| *kind)
            .collect()
    }
}

/// Shared inputs for every action of one receipt
#[derive(Debug, Clone)]
pub struct ActionScope<'a> {
    /// Encoded receipt id, the identity of every record produced
    pub record_id: &'a str,
    pub context: &'a ReceiptContext,
    pub logs: &'a [String],
}

#[derive(Debug, Clone, Default)]
pub struct MethodRouter {
    triggers: TriggerTable,
}

impl MethodRouter {
    pub fn new(triggers: TriggerTable) -> Self {
        Self { triggers }
    }

    pub fn triggers(&self) -> &TriggerTable {
        &self.triggers
    }

    /// Route one action. Only sink failures are returned as errors;
    /// everything else ends up in `report`.
    pub fn route<S: RecordSink + ?Sized>(
        &self,
        action_index: usize,
        action: &Action,
        scope: &ActionScope<'_>,
        sink: &mut S,
        report: &mut IngestReport,
    ) -> IngestResult<()> {
        let Some(call) = action.as_function_call() else {
            tracing::info!(
                "Early return: action {} is {}, not a function call",
                action_index,
                action.kind()
            );
            report.diagnostics.push(Diagnostic::NonInvocationAction {
                action_index,
                action_kind: action.kind(),
            });
            return Ok(());
        };

        let kinds = self.triggers.kinds_for(&call.method_name);
        if kinds.is_empty() {
            tracing::info!("Not processed - FunctionCall is: {}", call.method_name);
            report.diagnostics.push(Diagnostic::UnrecognizedMethod {
                action_index,
                method_name: call.method_name.clone(),
            });
            return Ok(());
        }

        let mut produced = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let record = self.build_record(action_index, &call.method_name, kind, scope, report);
            sink.save_event(&record)?;
            produced.push(EventReference::from(&record));
        }

        self.update_account(&scope.context.signer_id, &produced, sink)?;
        report.saved.extend(produced);

        Ok(())
    }

    fn build_record(
        &self,
        action_index: usize,
        method_name: &str,
        kind: EventKind,
        scope: &ActionScope<'_>,
        report: &mut IngestReport,
    ) -> EventRecord {
        let builder = EventRecord::builder(kind, scope.record_id, scope.context.clone());

        // Only the first line is decoded
        let Some(raw) = scope.logs.first() else {
            tracing::debug!(
                "{} for receipt {} has no logs, saving context only",
                kind,
                scope.record_id
            );
            report.diagnostics.push(Diagnostic::EmptyLogOutcome {
                action_index,
                kind,
                record_id: scope.record_id.to_string(),
            });
            return builder.build();
        };

        if scope.logs.len() > 1 {
            tracing::debug!(
                "Ignoring {} trailing log lines of receipt {}",
                scope.logs.len() - 1,
                scope.record_id
            );
        }

        let line = LogLine::new(raw);
        let builder = builder.with_output(line.raw());
        match extract::extract(kind, &line) {
            Ok(details) => builder.with_details(details).build(),
            Err(error) => {
                tracing::warn!(
                    method_name,
                    %kind,
                    raw_line = line.raw(),
                    "Malformed log line, saving context only: {}",
                    error
                );
                report.diagnostics.push(Diagnostic::MalformedLogLine {
                    action_index,
                    method_name: method_name.to_string(),
                    kind,
                    raw_line: line.raw().to_string(),
                    error,
                });
                builder.build()
            }
        }
    }

    fn update_account<S: RecordSink + ?Sized>(
        &self,
        signer_id: &str,
        produced: &[EventReference],
        sink: &mut S,
    ) -> IngestResult<()> {
        let account = sink
            .load_account(signer_id)?
            .unwrap_or_else(|| AccountAggregate::new(signer_id));

        let account = produced
            .iter()
            .cloned()
            .fold(account, |account, reference| account.apply(reference));

        sink.save_account(&account)?;
        Ok(())
    }
}
