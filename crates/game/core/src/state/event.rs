//! Append-only record of notable world events.
//!
//! Events are structured so tests and renderers can match on them, and
//! implement [`Display`](fmt::Display) to produce the classic log lines.

use std::fmt;

use super::{EntityId, PropKind};

/// What happened, without the who and when.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A forward move was blocked by a wall.
    HitWall,
    /// The agent walked into a lethal prop and died.
    Died { cause: PropKind, penalty: i64 },
    /// The agent picked up gold.
    GrabbedGold { reward: i64 },
    /// The agent fired an arrow.
    ShotArrow { cost: i64 },
    /// An arrow killed a wumpus.
    KilledWumpus,
}

/// A single log entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldEvent {
    /// Step counter at the time the event happened.
    pub step: u64,
    pub actor: EntityId,
    pub actor_name: String,
    pub kind: EventKind,
}

impl fmt::Display for WorldEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " #{:03}: {} ", self.step, self.actor_name)?;
        match self.kind {
            EventKind::HitWall => write!(f, "hit the wall"),
            EventKind::Died { cause, penalty } => {
                write!(f, "meets {} and dies(-{} points)", cause, penalty)
            }
            EventKind::GrabbedGold { reward } => {
                write!(f, "grabbed the Gold(+{} points)", reward)
            }
            EventKind::ShotArrow { cost } => write!(f, "shoots an arrow(-{} points)", cost),
            EventKind::KilledWumpus => write!(f, "killed the Wumpus"),
        }
    }
}

/// Event log that only ever grows within an episode.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLog {
    entries: Vec<WorldEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: WorldEvent) {
        self.entries.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorldEvent> + '_ {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&WorldEvent> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[WorldEvent] {
        &self.entries
    }
}

impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}
