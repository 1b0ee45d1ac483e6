//! Receipt Walker
//!
//! Runs the router over every action of a receipt, in delivery order.

use crate::domain::{IdentityEncoding, ReceiptContext, ReceiptWithOutcome};
use crate::error::IngestResult;
use crate::sink::RecordSink;

use super::report::IngestReport;
use super::router::{ActionScope, MethodRouter, TriggerTable};

#[derive(Debug, Clone, Default)]
pub struct ReceiptWalker {
    router: MethodRouter,
    encoding: IdentityEncoding,
}

impl ReceiptWalker {
    pub fn new(triggers: TriggerTable, encoding: IdentityEncoding) -> Self {
        Self {
            router: MethodRouter::new(triggers),
            encoding,
        }
    }

    pub fn encoding(&self) -> IdentityEncoding {
        self.encoding
    }

    pub fn router(&self) -> &MethodRouter {
        &self.router
    }

    /// Process every action of `receipt`.
    ///
    /// A malformed log line degrades one record and never stops the walk.
    /// A sink failure aborts the receipt; the host may replay it since all
    /// writes are upserts.
    pub fn handle_receipt<S: RecordSink + ?Sized>(
        &self,
        receipt: &ReceiptWithOutcome,
        sink: &mut S,
    ) -> IngestResult<IngestReport> {
        let record_id = self.encoding.encode(&receipt.receipt.id);
        let context = ReceiptContext::from_receipt(receipt, self.encoding);
        let scope = ActionScope {
            record_id: &record_id,
            context: &context,
            logs: &receipt.outcome.logs,
        };

        let span = tracing::debug_span!("receipt", id = %record_id, height = context.block_height);
        let _guard = span.enter();

        let mut report = IngestReport::new(record_id.as_str());
        for (action_index, action) in receipt.receipt.actions.iter().enumerate() {
            self.router
                .route(action_index, action, &scope, sink, &mut report)?;
        }

        tracing::debug!(
            "Receipt {}: {} actions, {} records, {} diagnostics",
            record_id,
            receipt.receipt.actions.len(),
            report.record_count(),
            report.diagnostics.len()
        );

        Ok(report)
    }
}
