//! Scripted input for the headless driver.
//!
//! A key script is a comma separated list of `<timestamp>:<command>` entries,
//! e.g. `"0:left,400:up,3000:kill"`, where a command is a direction name or one
//! of `kill`, `revive` and `stop`.

use std::str::FromStr;

use crate::error::{GameError, ScriptError};

pub mod commands;

use self::commands::GameCommand;

/// A timeline of commands, ordered by timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyScript {
    entries: Vec<(u64, GameCommand)>,
}

impl KeyScript {
    pub fn parse(script: &str) -> Result<Self, ScriptError> {
        let mut entries = script
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(parse_entry)
            .collect::<Result<Vec<_>, _>>()?;
        // Stable, so commands sharing a timestamp keep their written order
        entries.sort_by_key(|&(timestamp, _)| timestamp);
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The commands scheduled after `previous` (exclusive, `None` for the
    /// start of time) and up to `now` (inclusive), in order.
    pub fn due(&self, previous: Option<u64>, now: u64) -> impl Iterator<Item = GameCommand> + '_ {
        self.entries
            .iter()
            .filter(move |&&(timestamp, _)| previous.is_none_or(|p| timestamp > p) && timestamp <= now)
            .map(|&(_, command)| command)
    }
}

impl FromStr for KeyScript {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s)?)
    }
}

fn parse_entry(entry: &str) -> Result<(u64, GameCommand), ScriptError> {
    let (timestamp, command) = entry
        .split_once(':')
        .ok_or_else(|| ScriptError::MissingSeparator(entry.to_string()))?;
    let timestamp = timestamp
        .trim()
        .parse::<u64>()
        .map_err(|_| ScriptError::InvalidTimestamp(timestamp.trim().to_string()))?;
    Ok((timestamp, command.trim().parse()?))
}
