//! Field Extractors
//!
//! One extractor per event kind, each reading fields by fixed position from
//! the first log line of an outcome.
//!
//! The log formats are informal conventions owned by the emitting contracts,
//! not a schema. Each extractor is a versioned contract with the method it
//! is bound to: when a contract changes what it logs, the extractor has to
//! change with it. Every extractor checks the token count before reading
//! any position and returns [`ExtractError`] instead of indexing past the end.

mod guild;
mod purchase;
mod token;
pub mod tokenizer;


pub use tokenizer::{strip, LogLine};

use crate::domain::{EventDetails, EventKind, ExtractError};

/// Read the details for `kind` out of a log line
pub fn extract(kind: EventKind, line: &LogLine<'_>) -> Result<EventDetails, ExtractError> {
    match kind {
        EventKind::MintWithdraw => token::mint_withdraw(line),
        EventKind::Transfer => token::transfer(line),
        EventKind::Draw => token::draw(line),
        EventKind::MintCallback => token::mint_callback(line),
        EventKind::PurchaseAltCurrency => purchase::alt_currency(line),
        EventKind::PurchaseToken => purchase::token(line),
        EventKind::GuildJoin => guild::join(line),
        EventKind::GuildCreate => guild::create(line),
    }
}
