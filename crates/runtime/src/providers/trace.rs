//! Wrapper that logs what a program perceives and does.

use tracing::info;
use wumpus_core::{Action, Percept};

use crate::api::AgentProgram;

/// Forwards to an inner program and logs every percept/action pair.
pub struct TraceProgram<P> {
    inner: P,
}

impl<P: AgentProgram> TraceProgram<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: AgentProgram> AgentProgram for TraceProgram<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn decide(&mut self, percept: &Percept) -> Action {
        let action = self.inner.decide(percept);
        info!(
            target: "runtime::trace",
            agent = self.inner.name(),
            location = %percept.location,
            heading = ?percept.heading,
            stench = percept.stench,
            breeze = percept.breeze,
            glitter = percept.glitter,
            bump = percept.bump,
            scream = percept.scream,
            %action,
            "{} perceives and does {}",
            self.inner.name(),
            action
        );
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ScriptedProgram;
    use wumpus_core::{Heading, Position};

    #[test]
    fn tracing_does_not_change_decisions() {
        let percept = Percept {
            location: Position::new(1, 1),
            heading: Heading::North,
            stench: true,
            breeze: false,
            glitter: false,
            bump: false,
            scream: false,
        };
        let mut traced = TraceProgram::new(ScriptedProgram::new(
            "Script",
            vec![Action::Shoot, Action::TurnLeft],
        ));

        assert_eq!(traced.name(), "Script");
        assert_eq!(traced.decide(&percept), Action::Shoot);
        assert_eq!(traced.decide(&percept), Action::TurnLeft);
        assert_eq!(traced.into_inner().remaining(), 0);
    }
}
