//! Replay
//!
//! Feeds newline-delimited JSON receipts through the walker. A line that is
//! not UTF-8 or not a receipt is logged and skipped; only input I/O and sink
//! failures stop the replay.

use std::io::BufRead;

use crate::error::IngestResult;
use crate::sink::RecordSink;

use super::decode_receipt;
use super::walker::ReceiptWalker;

/// Totals for one replay run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub receipts: usize,
    pub skipped_lines: usize,
    pub records: usize,
    pub malformed: usize,
}

pub fn replay<R: BufRead, S: RecordSink + ?Sized>(
    walker: &ReceiptWalker,
    mut input: R,
    sink: &mut S,
) -> IngestResult<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    let mut buf = Vec::new();
    let mut line_number = 0usize;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                tracing::error!("Skipping line {}: {}", line_number, e);
                summary.skipped_lines += 1;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        let receipt = match decode_receipt(line) {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::error!("Skipping line {}: {}", line_number, e);
                summary.skipped_lines += 1;
                continue;
            }
        };

        let report = walker.handle_receipt(&receipt, sink)?;
        tracing::info!(
            "Receipt {}: RECORDS: {} | DIAGNOSTICS: {}",
            report.receipt_id,
            report.record_count(),
            report.diagnostics.len()
        );

        summary.receipts += 1;
        summary.records += report.record_count();
        summary.malformed += report.malformed_count();
    }

    Ok(summary)
}
