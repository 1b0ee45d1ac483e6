//! Event Records
//!
//! Typed records decoded from contract invocations. A record always carries
//! its receipt context; the event-specific details are layered on only when
//! the outcome produced a log line that matched the positional contract.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::TokenAmount;
use super::context::ReceiptContext;

/// Recognized event kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    MintWithdraw,
    Transfer,
    Draw,
    MintCallback,
    PurchaseAltCurrency,
    PurchaseToken,
    GuildJoin,
    GuildCreate,
}

impl EventKind {
    pub const ALL: [EventKind; 8] = [
        EventKind::MintWithdraw,
        EventKind::Transfer,
        EventKind::Draw,
        EventKind::MintCallback,
        EventKind::PurchaseAltCurrency,
        EventKind::PurchaseToken,
        EventKind::GuildJoin,
        EventKind::GuildCreate,
    ];

    /// Get the event kind as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::MintWithdraw => "mint_withdraw",
            EventKind::Transfer => "transfer",
            EventKind::Draw => "draw",
            EventKind::MintCallback => "mint_callback",
            EventKind::PurchaseAltCurrency => "purchase_alt_currency",
            EventKind::PurchaseToken => "purchase_token",
            EventKind::GuildJoin => "guild_join",
            EventKind::GuildCreate => "guild_create",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields derived from the first log line, one variant per event kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventDetails {
    MintWithdraw {
        action: String,
        amount: TokenAmount,
        token: String,
        receiver_id: String,
        memo: String,
    },

    Transfer {
        action: String,
        amount: TokenAmount,
        transfer_from: String,
        transfer_to: String,
        memo: String,
    },

    Draw {
        action: String,
        amount: TokenAmount,
        memo: String,
    },

    MintCallback {
        memo: String,
        amount: TokenAmount,
    },

    PurchaseAltCurrency(Purchase),

    PurchaseToken(Purchase),

    GuildJoin {
        member: String,
        guild: String,
    },

    GuildCreate {
        guild: String,
    },
}

/// Shared shape of both purchase events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub action: String,
    /// Kept verbatim; purchase logs may render fractional amounts here
    pub purchase_amount: String,
    pub purchased_token: String,
    pub spent_amount: TokenAmount,
    pub spending_token: String,
    pub memo: String,
}

impl EventDetails {
    pub fn kind(&self) -> EventKind {
        match self {
            EventDetails::MintWithdraw { .. } => EventKind::MintWithdraw,
            EventDetails::Transfer { .. } => EventKind::Transfer,
            EventDetails::Draw { .. } => EventKind::Draw,
            EventDetails::MintCallback { .. } => EventKind::MintCallback,
            EventDetails::PurchaseAltCurrency(_) => EventKind::PurchaseAltCurrency,
            EventDetails::PurchaseToken(_) => EventKind::PurchaseToken,
            EventDetails::GuildJoin { .. } => EventKind::GuildJoin,
            EventDetails::GuildCreate { .. } => EventKind::GuildCreate,
        }
    }

    /// Memo carried by the event, empty when the event has none
    pub fn memo(&self) -> &str {
        match self {
            EventDetails::MintWithdraw { memo, .. }
            | EventDetails::Transfer { memo, .. }
            | EventDetails::Draw { memo, .. }
            | EventDetails::MintCallback { memo, .. } => memo,
            EventDetails::PurchaseAltCurrency(p) | EventDetails::PurchaseToken(p) => &p.memo,
            EventDetails::GuildJoin { .. } | EventDetails::GuildCreate { .. } => "",
        }
    }
}

/// A decoded event, keyed by `(kind, id)` in the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Encoded receipt id
    pub id: String,
    pub kind: EventKind,
    #[serde(flatten)]
    pub context: ReceiptContext,
    /// Raw first log line, if the outcome produced one
    pub output: Option<String>,
    pub details: Option<EventDetails>,
}

impl EventRecord {
    pub fn builder(
        kind: EventKind,
        id: impl Into<String>,
        context: ReceiptContext,
    ) -> RecordBuilder {
        RecordBuilder {
            record: EventRecord {
                id: id.into(),
                kind,
                context,
                output: None,
                details: None,
            },
        }
    }

    /// True when only the receipt context is populated
    pub fn is_context_only(&self) -> bool {
        self.details.is_none()
    }
}

/// Starts from the mandatory context and layers optional fields on top.
/// `build` always yields a valid record.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: EventRecord,
}

impl RecordBuilder {
    pub fn with_output(mut self, line: impl Into<String>) -> Self {
        self.record.output = Some(line.into());
        self
    }

    /// Attach details. Details of another kind are ignored.
    pub fn with_details(mut self, details: EventDetails) -> Self {
        if details.kind() == self.record.kind {
            self.record.details = Some(details);
        } else {
            tracing::error!(
                expected = %self.record.kind,
                found = %details.kind(),
                "Discarding details of mismatched kind"
            );
        }
        self
    }

    pub fn build(self) -> EventRecord {
        self.record
    }
}
