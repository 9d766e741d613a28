//! Program that replays a fixed list of actions.

use std::collections::VecDeque;

use wumpus_core::{Action, Percept};

use crate::api::AgentProgram;

/// Replays actions in order, then idles with [`Action::NoOp`].
///
/// Used by tests and to replay a recorded action trace.
pub struct ScriptedProgram {
    name: String,
    script: VecDeque<Action>,
}

impl ScriptedProgram {
    pub fn new(name: impl Into<String>, actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            name: name.into(),
            script: actions.into_iter().collect(),
        }
    }

    /// Actions not yet played.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl AgentProgram for ScriptedProgram {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, _percept: &Percept) -> Action {
        self.script.pop_front().unwrap_or_default()
    }
}
