//! Purchase extractors
//!
//! Both purchase methods emit the same line shape:
//! `<action> <purchase_amount> <purchased_token> _ _ <spent_amount> <spending_token>`

use crate::domain::{EventDetails, ExtractError, Purchase};

use super::tokenizer::LogLine;

fn purchase(line: &LogLine<'_>) -> Result<Purchase, ExtractError> {
    line.require(6)?;

    Ok(Purchase {
        action: line.token(0)?.to_string(),
        purchase_amount: line.token(1)?.to_string(),
        purchased_token: line.token(2)?.to_string(),
        spent_amount: line.amount(5)?,
        spending_token: line.token(6)?.to_string(),
        memo: line.memo(),
    })
}

/// Purchase paid in the chain's native currency
pub fn alt_currency(line: &LogLine<'_>) -> Result<EventDetails, ExtractError> {
    purchase(line).map(EventDetails::PurchaseAltCurrency)
}

/// Purchase paid with a fungible token
pub fn token(line: &LogLine<'_>) -> Result<EventDetails, ExtractError> {
    purchase(line).map(EventDetails::PurchaseToken)
}
