//! Integration tests for the receipt walker

use receipt_indexer::aggregate::AccountAggregate;
use receipt_indexer::domain::{
    Action, CryptoHash, EventDetails, EventKind, EventRecord, IdentityEncoding, TokenAmount,
};
use receipt_indexer::ingest::{
    decode_receipt, replay, Diagnostic, ReceiptWalker, ReplaySummary, TriggerTable,
};
use receipt_indexer::sink::{MemorySink, RecordSink, SinkError};

mod common;

use common::{call, receipt, receipt_id_hex, SIGNER};

#[test]
fn test_non_invocation_actions_produce_nothing() {
    let walker = ReceiptWalker::default();
    let mut sink = MemorySink::new();
    let receipt = receipt(
        vec![
            Action::Transfer { deposit: "1".to_string() },
            Action::CreateAccount,
            Action::AddKey { public_key: "ed25519:k".to_string() },
        ],
        &["mint 500 TOKEN to alice.near: thanks"],
    );

    let report = walker.handle_receipt(&receipt, &mut sink).unwrap();

    assert_eq!(sink.event_count(), 0);
    assert!(sink.account(SIGNER).is_none());
    assert_eq!(report.diagnostics.len(), 3);
    assert!(report
        .diagnostics
        .iter()
        .all(|d| matches!(d, Diagnostic::NonInvocationAction { .. })));
}

#[test]
fn test_unrecognized_method_has_no_side_effects() {
    let walker = ReceiptWalker::default();
    let mut sink = MemorySink::new();
    let receipt = receipt(vec![call("ft_mint_v2"), call("FT_MINT")], &["mint 1 T to a.near,"]);

    let report = walker.handle_receipt(&receipt, &mut sink).unwrap();

    assert_eq!(sink.writes(), 0);
    assert_eq!(report.record_count(), 0);
    assert_eq!(
        report.diagnostics[0],
        Diagnostic::UnrecognizedMethod {
            action_index: 0,
            method_name: "ft_mint_v2".to_string(),
        }
    );
}

#[test]
fn test_mint_record_fields() {
    let walker = ReceiptWalker::default();
    let mut sink = MemorySink::new();
    let receipt = receipt(vec![call("ft_mint")], &["mint 500 TOKEN to alice.near: thanks"]);

    let report = walker.handle_receipt(&receipt, &mut sink).unwrap();
    assert!(report.diagnostics.is_empty());

    let record = sink.event(EventKind::MintWithdraw, &receipt_id_hex()).unwrap();
    assert_eq!(record.output.as_deref(), Some("mint 500 TOKEN to alice.near: thanks"));
    assert_eq!(
        record.details,
        Some(EventDetails::MintWithdraw {
            action: "mint".to_string(),
            amount: TokenAmount::new(500),
            token: "TOKEN".to_string(),
            receiver_id: "alice.near".to_string(),
            memo: " thanks".to_string(),
        })
    );

    assert_eq!(record.context.block_height, 95_000_000);
    assert_eq!(record.context.block_timestamp, 1_688_000_000_987);
    assert_eq!(record.context.signer_id, SIGNER);
    assert_eq!(record.context.block_hash, "22".repeat(32));
}

#[test]
fn test_transfer_without_colon_has_empty_memo() {
    let walker = ReceiptWalker::default();
    let mut sink = MemorySink::new();
    let receipt = receipt(
        vec![call("ft_transfer_call")],
        &["Transfer 25 from alice.near to bob.near"],
    );

    walker.handle_receipt(&receipt, &mut sink).unwrap();

    let record = sink.event(EventKind::Transfer, &receipt_id_hex()).unwrap();
    let details = record.details.as_ref().unwrap();
    assert_eq!(details.memo(), "");

    let json = serde_json::to_value(record).unwrap();
    assert_eq!(json["details"]["memo"], "");
}

#[test]
fn test_empty_logs_save_context_only() {
    let walker = ReceiptWalker::default();
    let mut sink = MemorySink::new();
    let receipt = receipt(vec![call("ft_mint")], &[]);

    let report = walker.handle_receipt(&receipt, &mut sink).unwrap();

    let record = sink.event(EventKind::MintWithdraw, &receipt_id_hex()).unwrap();
    assert!(record.is_context_only());
    assert!(record.output.is_none());
    assert_eq!(record.context.gas_burnt, 2_428_135_649_664);
    assert_eq!(record.context.tokens_burnt, "242813564966400000000");
    assert_eq!(record.context.outcome_id, receipt_id_hex());
    assert!(matches!(
        report.diagnostics.as_slice(),
        [Diagnostic::EmptyLogOutcome { kind: EventKind::MintWithdraw, .. }]
    ));
}

#[test]
fn test_short_log_line_falls_back_to_context_only() {
    let walker = ReceiptWalker::default();
    let mut sink = MemorySink::new();
    let receipt = receipt(vec![call("ft_transfer_call")], &["Transfer 25"]);

    let report = walker.handle_receipt(&receipt, &mut sink).unwrap();

    let record = sink.event(EventKind::Transfer, &receipt_id_hex()).unwrap();
    assert!(record.is_context_only());
    assert_eq!(record.output.as_deref(), Some("Transfer 25"));

    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.malformed_count(), 1);
    match &report.diagnostics[0] {
        Diagnostic::MalformedLogLine { method_name, raw_line, .. } => {
            assert_eq!(method_name, "ft_transfer_call");
            assert_eq!(raw_line, "Transfer 25");
        }
        other => panic!("Expected MalformedLogLine, got: {:?}", other),
    }
}

#[test]
fn test_failed_action_does_not_stop_siblings() {
    let walker = ReceiptWalker::default();
    let mut sink = MemorySink::new();
    // the shared log line fits the mint layout but not the purchase layout
    let receipt = receipt(
        vec![call("buy_with_token"), Action::CreateAccount, call("ft_mint")],
        &["mint 500 TOKEN to alice.near,"],
    );

    let report = walker.handle_receipt(&receipt, &mut sink).unwrap();

    assert_eq!(
        report.saved_kinds(),
        vec![EventKind::PurchaseToken, EventKind::MintWithdraw]
    );
    assert!(sink
        .event(EventKind::PurchaseToken, &receipt_id_hex())
        .unwrap()
        .is_context_only());
    assert!(!sink
        .event(EventKind::MintWithdraw, &receipt_id_hex())
        .unwrap()
        .is_context_only());
    assert_eq!(report.malformed_count(), 1);
}

#[test]
fn test_replay_is_idempotent_for_records() {
    let walker = ReceiptWalker::default();
    let mut sink = MemorySink::new();
    let receipt = receipt(vec![call("join_guild")], &["(bob) has joined (guildA)."]);

    walker.handle_receipt(&receipt, &mut sink).unwrap();
    let first: Vec<EventRecord> = sink.events().cloned().collect();

    walker.handle_receipt(&receipt, &mut sink).unwrap();
    let second: Vec<EventRecord> = sink.events().cloned().collect();

    assert_eq!(first, second);
    assert_eq!(sink.event_count(), 1);

    // account references are append-only, so the id shows up twice
    let account = sink.account(SIGNER).unwrap();
    assert_eq!(
        account.references_of(EventKind::GuildJoin),
        [receipt_id_hex(), receipt_id_hex()]
    );
}

#[test]
fn test_guild_join_single_char_names() {
    let walker = ReceiptWalker::default();
    let mut sink = MemorySink::new();
    let receipt = receipt(vec![call("join_guild")], &["(b) has joined (g)."]);

    walker.handle_receipt(&receipt, &mut sink).unwrap();

    let record = sink.event(EventKind::GuildJoin, &receipt_id_hex()).unwrap();
    assert_eq!(
        record.details,
        Some(EventDetails::GuildJoin {
            member: "b".to_string(),
            guild: "g".to_string(),
        })
    );
}

#[test]
fn test_shared_trigger_produces_one_record_per_kind() {
    let triggers = TriggerTable::default().with_trigger(EventKind::Draw, "ft_mint");
    let walker = ReceiptWalker::new(triggers, IdentityEncoding::Hex);
    let mut sink = MemorySink::new();
    let receipt = receipt(vec![call("ft_mint")], &["mint 500 TOKEN to alice.near,"]);

    let report = walker.handle_receipt(&receipt, &mut sink).unwrap();

    assert_eq!(report.saved_kinds(), vec![EventKind::MintWithdraw, EventKind::Draw]);
    assert_eq!(sink.event_count(), 2);
    assert!(matches!(
        sink.event(EventKind::Draw, &receipt_id_hex()).unwrap().details,
        Some(EventDetails::Draw { .. })
    ));
}

#[test]
fn test_same_kind_twice_in_one_receipt_overwrites() {
    let walker = ReceiptWalker::default();
    let mut sink = MemorySink::new();
    let receipt = receipt(vec![call("draw"), call("draw")], &["draw 3"]);

    let report = walker.handle_receipt(&receipt, &mut sink).unwrap();

    assert_eq!(report.record_count(), 2);
    assert_eq!(sink.event_count(), 1);
    assert_eq!(sink.account(SIGNER).unwrap().references_of(EventKind::Draw).len(), 2);
}

#[test]
fn test_base58_identity() {
    let walker = ReceiptWalker::new(TriggerTable::default(), IdentityEncoding::Base58);
    let mut sink = MemorySink::new();
    let receipt = receipt(vec![call("create_guild")], &["Guild named (guildA) created"]);

    let report = walker.handle_receipt(&receipt, &mut sink).unwrap();

    let expected = CryptoHash(common::RECEIPT_ID).to_string();
    assert_eq!(report.receipt_id, expected);
    let record = sink.event(EventKind::GuildCreate, &expected).unwrap();
    assert_eq!(record.context.block_hash, CryptoHash([0x22; 32]).to_string());
}

#[test]
fn test_only_first_log_line_is_decoded() {
    let walker = ReceiptWalker::default();
    let mut sink = MemorySink::new();
    let receipt = receipt(
        vec![call("draw")],
        &["draw 3", "draw 99 extra:ignored"],
    );

    walker.handle_receipt(&receipt, &mut sink).unwrap();

    let record = sink.event(EventKind::Draw, &receipt_id_hex()).unwrap();
    assert_eq!(record.output.as_deref(), Some("draw 3"));
    assert_eq!(
        record.details,
        Some(EventDetails::Draw {
            action: "draw".to_string(),
            amount: TokenAmount::new(3),
            memo: String::new(),
        })
    );
}

#[test]
fn test_decode_receipt_from_json() {
    let hash = CryptoHash(common::RECEIPT_ID).to_string();
    let json = serde_json::json!({
        "receipt": {
            "id": hash,
            "predecessor_id": "alice.near",
            "receiver_id": "game.near",
            "signer_id": "alice.near",
            "signer_public_key": "ed25519:key",
            "actions": [
                {
                    "kind": "function_call",
                    "method_name": "mint_callback",
                    "gas": 30000000000000u64,
                    "deposit": "0"
                }
            ]
        },
        "block": { "height": 7, "timestamp_nanosec": 5000000, "hash": hash },
        "outcome": {
            "id": hash,
            "block_hash": hash,
            "logs": ["Minted via callback 1000"],
            "gas_burnt": 1,
            "tokens_burnt": "0",
            "executor_id": "game.near"
        }
    });

    let receipt = decode_receipt(&json.to_string()).unwrap();
    let mut sink = MemorySink::new();
    ReceiptWalker::default().handle_receipt(&receipt, &mut sink).unwrap();

    let record = sink.event(EventKind::MintCallback, &receipt_id_hex()).unwrap();
    assert_eq!(record.context.block_timestamp, 5);
    assert_eq!(
        record.details,
        Some(EventDetails::MintCallback {
            memo: "Minted via callback".to_string(),
            amount: TokenAmount::new(1000),
        })
    );
}

/// Sink that fails every event write
struct FailingSink;

impl RecordSink for FailingSink {
    fn save_event(&mut self, _record: &EventRecord) -> Result<(), SinkError> {
        Err(SinkError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "unavailable",
        )))
    }

    fn load_account(&self, _id: &str) -> Result<Option<AccountAggregate>, SinkError> {
        Ok(None)
    }

    fn save_account(&mut self, _account: &AccountAggregate) -> Result<(), SinkError> {
        Ok(())
    }
}

#[test]
fn test_sink_failure_is_returned_to_host() {
    let receipt = receipt(vec![call("draw")], &["draw 3"]);
    let result = ReceiptWalker::default().handle_receipt(&receipt, &mut FailingSink);

    let err = result.unwrap_err();
    assert!(err.is_retryable());
}

#[test]
fn test_replay_skips_non_utf8_and_keeps_going() {
    let json = serde_json::to_string(&receipt(vec![call("draw")], &["draw 3"])).unwrap();
    let mut input = b"\xff\xfe\x00 not a receipt\n".to_vec();
    input.extend_from_slice(json.as_bytes());
    input.extend_from_slice(b"\r\n{\"truncated\":\n");

    let mut sink = MemorySink::new();
    let summary = replay(
        &ReceiptWalker::default(),
        std::io::Cursor::new(input),
        &mut sink,
    )
    .unwrap();

    assert_eq!(
        summary,
        ReplaySummary {
            receipts: 1,
            skipped_lines: 2,
            records: 1,
            malformed: 0,
        }
    );
    assert!(sink.event(EventKind::Draw, &receipt_id_hex()).is_some());
}

#[test]
fn test_replay_stops_on_sink_failure() {
    let json = serde_json::to_string(&receipt(vec![call("draw")], &["draw 3"])).unwrap();

    let err = replay(&ReceiptWalker::default(), json.as_bytes(), &mut FailingSink).unwrap_err();
    assert!(err.is_retryable());
}
