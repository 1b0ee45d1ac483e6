//! Log Tokenizer
//!
//! Splits a contract log line into positional tokens and isolates the
//! trailing memo segment.

use crate::domain::{ExtractError, TokenAmount};

const TOKEN_DELIMITER: char = ' ';
const MEMO_DELIMITER: char = ':';

/// A tokenized log line.
///
/// Tokens come from splitting on single spaces, so consecutive spaces yield
/// empty tokens and shift every later position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine<'a> {
    raw: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> LogLine<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            tokens: raw.split(TOKEN_DELIMITER).collect(),
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Fail unless the line has a token at `max_index`.
    /// Extractors call this once, before reading any field.
    pub fn require(&self, max_index: usize) -> Result<(), ExtractError> {
        if max_index >= self.tokens.len() {
            return Err(ExtractError::out_of_range(max_index, self.tokens.len()));
        }
        Ok(())
    }

    pub fn token(&self, index: usize) -> Result<&'a str, ExtractError> {
        self.tokens
            .get(index)
            .copied()
            .ok_or_else(|| ExtractError::out_of_range(index, self.tokens.len()))
    }

    pub fn amount(&self, index: usize) -> Result<TokenAmount, ExtractError> {
        self.token(index)?
            .parse()
            .map_err(|e| ExtractError::invalid_amount(index, e))
    }

    /// Token with `leading` chars dropped from the front and `trailing`
    /// chars dropped from the back
    pub fn stripped(
        &self,
        index: usize,
        leading: usize,
        trailing: usize,
    ) -> Result<String, ExtractError> {
        Ok(strip(self.token(index)?, leading, trailing))
    }

    /// Tokens `range` joined back with single spaces
    pub fn joined(&self, range: std::ops::RangeInclusive<usize>) -> Result<String, ExtractError> {
        self.require(*range.end())?;
        Ok(self.tokens[range].join(" "))
    }

    /// Second `:`-separated segment of the raw line, untrimmed, or empty.
    /// Later segments are not included.
    pub fn memo(&self) -> String {
        self.raw
            .split(MEMO_DELIMITER)
            .nth(1)
            .unwrap_or_default()
            .to_string()
    }
}

/// Drop chars from both ends; too-short input yields the empty string
pub fn strip(token: &str, leading: usize, trailing: usize) -> String {
    let count = token.chars().count();
    if count <= leading + trailing {
        return String::new();
    }
    token
        .chars()
        .skip(leading)
        .take(count - leading - trailing)
        .collect()
}
