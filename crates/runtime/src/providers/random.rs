//! Program that ignores its percepts and picks actions at random.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use wumpus_core::{Action, Percept};

use crate::api::AgentProgram;

/// Uniform random choice among a fixed action list.
///
/// The generator is seeded, so the same seed replays the same episode.
pub struct RandomProgram {
    name: String,
    actions: Vec<Action>,
    rng: StdRng,
}

impl RandomProgram {
    /// An empty `actions` list makes the program idle.
    pub fn new(name: impl Into<String>, actions: Vec<Action>, seed: u64) -> Self {
        Self {
            name: name.into(),
            actions,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Chooses among every action token.
    pub fn with_all_actions(name: impl Into<String>, seed: u64) -> Self {
        Self::new(name, Action::ALL.to_vec(), seed)
    }
}

impl AgentProgram for RandomProgram {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, _percept: &Percept) -> Action {
        self.actions
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Action::NoOp)
    }
}
