//! Event Scripts
//!
//! A script is a comma-separated list of `TICK:EVENT` entries:
//!
//! ```text
//! 10:select:Systems,200:back
//! ```
//!
//! Each event is queued just before frame `TICK` runs, so it is applied at
//! the end of that frame.

use std::str::FromStr;

use omnipository_core::{ShellError, ShellEvent, ThemeId};
use thiserror::Error;

/// Errors from parsing a script
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    /// Entry is not `TICK:EVENT`
    #[error("malformed script entry {0:?}, expected TICK:select:THEME or TICK:back")]
    Malformed(String),

    /// Tick is not a number
    #[error("invalid tick {0:?}")]
    InvalidTick(String),

    /// Event name is not `select` or `back`
    #[error("unknown event {0:?}")]
    UnknownEvent(String),

    /// Theme id not in the catalog
    #[error(transparent)]
    Theme(#[from] ShellError),
}

/// One scheduled event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptEntry {
    /// Frame index the event is queued before
    pub tick: u64,
    /// Event to queue
    pub event: ShellEvent,
}

/// Events ordered by tick
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script {
    entries: Vec<ScriptEntry>,
}

impl Script {
    /// Events to queue before frame `tick`, in script order
    pub fn events_at(&self, tick: u64) -> impl Iterator<Item = ShellEvent> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.tick == tick)
            .map(|e| e.event)
    }

    /// Last tick with an event
    #[must_use]
    pub fn last_tick(&self) -> Option<u64> {
        self.entries.last().map(|e| e.tick)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the script has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut entries = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(parse_entry)
            .collect::<Result<Vec<_>, _>>()?;

        // Stable, so same-tick entries keep their written order
        entries.sort_by_key(|e| e.tick);
        Ok(Self { entries })
    }
}

fn parse_entry(entry: &str) -> Result<ScriptEntry, ScriptError> {
    let mut parts = entry.splitn(3, ':');
    let (Some(tick), Some(name)) = (parts.next(), parts.next()) else {
        return Err(ScriptError::Malformed(entry.to_string()));
    };
    let tick = tick
        .trim()
        .parse::<u64>()
        .map_err(|_| ScriptError::InvalidTick(tick.to_string()))?;

    let event = match (name.trim(), parts.next()) {
        ("select", Some(theme)) => ShellEvent::Select(theme.trim().parse::<ThemeId>()?),
        ("select", None) | ("back", Some(_)) => {
            return Err(ScriptError::Malformed(entry.to_string()));
        }
        ("back", None) => ShellEvent::Back,
        (other, _) => return Err(ScriptError::UnknownEvent(other.to_string())),
    };

    Ok(ScriptEntry { tick, event })
}
