//! Reflex policy that hunts the wumpus while looking for gold.

use wumpus_core::{Action, Percept};

use crate::api::AgentProgram;

/// Reflex agent whose only memory is the last action and whether it has
/// heard a scream.
///
/// Rules, first match wins:
/// 1. glitter: grab
/// 2. bump: turn right
/// 3. breeze right after moving forward: turn right
/// 4. stench: shoot until a scream has been heard, then turn right
/// 5. otherwise move forward
#[derive(Clone, Debug)]
pub struct WumpusHunter {
    name: String,
    heard_scream: bool,
    previous: Action,
}

impl WumpusHunter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            heard_scream: false,
            previous: Action::Forward,
        }
    }

    pub fn heard_scream(&self) -> bool {
        self.heard_scream
    }
}

impl Default for WumpusHunter {
    fn default() -> Self {
        Self::new("Explorer")
    }
}

impl AgentProgram for WumpusHunter {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, percept: &Percept) -> Action {
        if percept.scream {
            self.heard_scream = true;
        }

        let action = if percept.glitter {
            Action::Grab
        } else if percept.bump {
            Action::TurnRight
        } else if percept.breeze && self.previous == Action::Forward {
            Action::TurnRight
        } else if percept.stench {
            if self.heard_scream {
                Action::TurnRight
            } else {
                Action::Shoot
            }
        } else {
            Action::Forward
        };

        self.previous = action;
        action
    }
}
