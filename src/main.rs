//! receipt-indexer - replay receipts through the decoder
//!
//! Reads one JSON receipt per line, decodes every recognized contract
//! invocation and writes the resulting records as JSON lines.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use receipt_indexer::ingest::replay;
use receipt_indexer::{Config, JsonLinesSink, ReceiptWalker};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "receipt_indexer=info".into());

    // Stdout may carry records, so logs always go to stderr
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn open_input(config: &Config) -> anyhow::Result<Box<dyn BufRead>> {
    Ok(match &config.receipts_path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    })
}

fn open_output(config: &Config) -> anyhow::Result<Box<dyn Write>> {
    Ok(match &config.output_path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    })
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config);

    tracing::info!(
        "Starting receipt replay with {} identity encoding",
        config.identity_encoding
    );

    let walker = ReceiptWalker::new(config.triggers.clone(), config.identity_encoding);
    let mut sink = JsonLinesSink::new(open_output(&config)?);

    let summary = replay(&walker, open_input(&config)?, &mut sink)?;

    sink.flush()?;

    tracing::info!(
        "Replay finished: {} receipts, {} records, {} malformed log lines",
        summary.receipts,
        summary.records,
        summary.malformed
    );
    if summary.skipped_lines > 0 {
        tracing::warn!("Skipped {} undecodable input lines", summary.skipped_lines);
    }

    Ok(())
}
