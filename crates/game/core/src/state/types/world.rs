use super::MapDimensions;
use crate::state::event::EventLog;

/// World-level bookkeeping layered over the entity roster.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    pub dimensions: MapDimensions,

    /// Running score, only ever changed by fixed per-action deltas.
    pub score: i64,

    /// Completed ticks. Used to annotate log lines, never for termination.
    pub steps: u64,

    /// One-shot scream flag, readable by exactly one perception cycle.
    pub scream: bool,

    /// True when `scream` was raised during the current tick, so the
    /// spontaneous-change phase of that same tick keeps it alive.
    pub scream_fresh: bool,

    pub log: EventLog,
}

impl WorldState {
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            ..Self::default()
        }
    }

    /// Raises the scream for the next perception cycle.
    pub fn raise_scream(&mut self) {
        self.scream = true;
        self.scream_fresh = true;
    }

    /// Ages the scream by one tick.
    ///
    /// A scream raised this tick survives so the next tick's percepts carry
    /// it; a scream that was already heard is cleared.
    pub fn age_scream(&mut self) {
        if self.scream_fresh {
            self.scream_fresh = false;
        } else {
            self.scream = false;
        }
    }
}
