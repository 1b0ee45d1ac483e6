//! Token movement extractors: mint/withdraw, transfer, draw, mint-callback.

use crate::domain::{EventDetails, ExtractError};

use super::tokenizer::LogLine;

/// `<action> <amount> <token> _ <receiver>,`
///
/// The receiver token carries one trailing punctuation char.
pub fn mint_withdraw(line: &LogLine<'_>) -> Result<EventDetails, ExtractError> {
    line.require(4)?;

    Ok(EventDetails::MintWithdraw {
        action: line.token(0)?.to_string(),
        amount: line.amount(1)?,
        token: line.token(2)?.to_string(),
        receiver_id: line.stripped(4, 0, 1)?,
        memo: line.memo(),
    })
}

/// `<action> <amount> from <from> to <to>`
pub fn transfer(line: &LogLine<'_>) -> Result<EventDetails, ExtractError> {
    line.require(5)?;

    Ok(EventDetails::Transfer {
        action: line.token(0)?.to_string(),
        amount: line.amount(1)?,
        transfer_from: line.token(3)?.to_string(),
        transfer_to: line.token(5)?.to_string(),
        memo: line.memo(),
    })
}

/// `<action> <amount> ...`
pub fn draw(line: &LogLine<'_>) -> Result<EventDetails, ExtractError> {
    line.require(1)?;

    Ok(EventDetails::Draw {
        action: line.token(0)?.to_string(),
        amount: line.amount(1)?,
        memo: line.memo(),
    })
}

/// `<w0> <w1> <w2> <amount>`: the first three words form the memo
pub fn mint_callback(line: &LogLine<'_>) -> Result<EventDetails, ExtractError> {
    line.require(3)?;

    Ok(EventDetails::MintCallback {
        memo: line.joined(0..=2)?,
        amount: line.amount(3)?,
    })
}
