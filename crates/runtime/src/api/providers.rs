//! Synchronous abstraction for sourcing agent intent.
//!
//! Runtime users plug in [`AgentProgram`] implementations so the simulation
//! can run with reflex policies, scripted fixtures, or random walkers. The
//! simulation only ever sees the percept-to-action signature.
use wumpus_core::{Action, Percept};

/// Decision function owned by one agent.
///
/// Any memory a program needs across ticks lives in the implementing type
/// and is updated through `&mut self`.
pub trait AgentProgram {
    /// Name written into the event log for the agent running this program.
    fn name(&self) -> &str;

    /// Chooses one action for the current tick.
    fn decide(&mut self, percept: &Percept) -> Action;
}

impl<P: AgentProgram + ?Sized> AgentProgram for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn decide(&mut self, percept: &Percept) -> Action {
        (**self).decide(percept)
    }
}

/// Adapts a closure into an [`AgentProgram`].
pub struct FnProgram<F> {
    name: String,
    decide: F,
}

impl<F> FnProgram<F>
where
    F: FnMut(&Percept) -> Action,
{
    pub fn new(name: impl Into<String>, decide: F) -> Self {
        Self {
            name: name.into(),
            decide,
        }
    }
}

impl<F> AgentProgram for FnProgram<F>
where
    F: FnMut(&Percept) -> Action,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, percept: &Percept) -> Action {
        (self.decide)(percept)
    }
}

/// A program that always returns [`Action::NoOp`].
/// Useful for testing or as a placeholder.
pub struct IdleProgram {
    name: String,
}

impl IdleProgram {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl AgentProgram for IdleProgram {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, _percept: &Percept) -> Action {
        Action::NoOp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wumpus_core::{Heading, Position};

    fn percept() -> Percept {
        Percept {
            location: Position::new(1, 1),
            heading: Heading::East,
            stench: false,
            breeze: false,
            glitter: true,
            bump: false,
            scream: false,
        }
    }

    #[test]
    fn closure_state_lives_in_the_adapter() {
        let mut calls = 0;
        let mut program = FnProgram::new("Counter", move |p: &Percept| {
            calls += 1;
            if p.glitter && calls > 1 {
                Action::Grab
            } else {
                Action::Forward
            }
        });

        assert_eq!(program.decide(&percept()), Action::Forward);
        assert_eq!(program.decide(&percept()), Action::Grab);
        assert_eq!(program.name(), "Counter");
    }

    #[test]
    fn boxed_programs_delegate() {
        let mut boxed: Box<dyn AgentProgram> = Box::new(IdleProgram::new("Idle"));
        assert_eq!(boxed.name(), "Idle");
        assert_eq!(boxed.decide(&percept()), Action::NoOp);
    }
}
