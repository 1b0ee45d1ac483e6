//! Guild extractors
//!
//! Names are wrapped in brackets in the log line, e.g.
//! `(bob) has joined (guildA).` and `Guild named (guildA) created`.

use crate::domain::{EventDetails, ExtractError};

use super::tokenizer::LogLine;

/// `(<member>) _ _ (<guild>).`
pub fn join(line: &LogLine<'_>) -> Result<EventDetails, ExtractError> {
    line.require(3)?;

    Ok(EventDetails::GuildJoin {
        member: line.stripped(0, 1, 1)?,
        guild: line.stripped(3, 1, 2)?,
    })
}

/// `_ _ (<guild>) ...`
pub fn create(line: &LogLine<'_>) -> Result<EventDetails, ExtractError> {
    line.require(2)?;

    Ok(EventDetails::GuildCreate {
        guild: line.stripped(2, 1, 1)?,
    })
}
