//! Common test utilities

#![allow(dead_code)]

use receipt_indexer::domain::{
    Action, ActionReceipt, BlockHeader, CryptoHash, ExecutionOutcome, FunctionCall,
    ReceiptWithOutcome,
};

pub const RECEIPT_ID: [u8; 32] = [0x11; 32];
pub const SIGNER: &str = "alice.near";

/// Receipt with the given actions and outcome logs
pub fn receipt(actions: Vec<Action>, logs: &[&str]) -> ReceiptWithOutcome {
    ReceiptWithOutcome {
        receipt: ActionReceipt {
            id: CryptoHash(RECEIPT_ID),
            predecessor_id: SIGNER.to_string(),
            receiver_id: "game.near".to_string(),
            signer_id: SIGNER.to_string(),
            signer_public_key: "ed25519:6E8sCci9badyRkXb3JoRpBj5p8C6Tw41ELDZoiihKEtp".to_string(),
            actions,
        },
        block: BlockHeader {
            height: 95_000_000,
            timestamp_nanosec: 1_688_000_000_987_654_321,
            hash: CryptoHash([0x22; 32]),
        },
        outcome: ExecutionOutcome {
            id: CryptoHash(RECEIPT_ID),
            block_hash: CryptoHash([0x22; 32]),
            logs: logs.iter().map(|l| l.to_string()).collect(),
            gas_burnt: 2_428_135_649_664,
            tokens_burnt: "242813564966400000000".to_string(),
            executor_id: "game.near".to_string(),
        },
    }
}

pub fn call(method_name: &str) -> Action {
    Action::FunctionCall(FunctionCall::new(method_name))
}

pub fn receipt_id_hex() -> String {
    "11".repeat(32)
}
