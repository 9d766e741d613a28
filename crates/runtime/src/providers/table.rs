//! Program that looks up the whole percept history in a table.

use std::collections::HashMap;

use wumpus_core::{Action, Percept};

use crate::api::AgentProgram;

/// Maps complete percept sequences to actions.
///
/// Every call appends the percept to the history and looks up the full
/// sequence, so the table only works for very short episodes. A missing
/// entry yields [`Action::NoOp`].
pub struct TableDrivenProgram {
    name: String,
    table: HashMap<Vec<Percept>, Action>,
    history: Vec<Percept>,
}

impl TableDrivenProgram {
    pub fn new(name: impl Into<String>, table: HashMap<Vec<Percept>, Action>) -> Self {
        Self {
            name: name.into(),
            table,
            history: Vec::new(),
        }
    }

    /// Percepts received so far.
    pub fn history(&self) -> &[Percept] {
        &self.history
    }
}

impl AgentProgram for TableDrivenProgram {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, percept: &Percept) -> Action {
        self.history.push(*percept);
        self.table.get(&self.history).copied().unwrap_or_default()
    }
}
