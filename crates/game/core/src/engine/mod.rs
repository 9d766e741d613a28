//! Per-tick world mutation primitives.
//!
//! The [`GameEngine`] is the only writer of [`GameState`] during an episode.
//! It executes one agent action at a time through the transition pipeline and
//! exposes the tick phases the episode driver sequences:
//!
//! 1. [`GameEngine::perceive_all`] - percepts from the pre-tick snapshot
//! 2. [`GameEngine::begin_tick`] - clear bump flags already reported
//! 3. [`GameEngine::execute`] - once per agent, in roster order
//! 4. [`GameEngine::spontaneous_change`] - age the scream
//! 5. [`GameEngine::finish_tick`] - advance the step counter

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionOutcome};
use crate::config::GameConfig;
use crate::perception::{Percept, perceive};
use crate::state::{EntityId, GameState};

/// Complete outcome of one agent's action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    pub actor: EntityId,
    pub action: Action,
    /// Score delta and logged events.
    pub outcome: ActionOutcome,
}

/// Game engine that applies actions and tick phases to a borrowed state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given state.
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// The episode is over once no live agent remains.
    pub fn is_done(&self) -> bool {
        !self.state.has_live_agents()
    }

    /// Percepts of every live agent, in roster order.
    ///
    /// Must be called before any action of the tick executes so every agent
    /// sees the same pre-tick world.
    pub fn perceive_all(&self) -> Vec<(EntityId, Percept)> {
        self.state
            .entities
            .agents
            .iter()
            .filter(|agent| agent.is_alive())
            .filter_map(|agent| perceive(self.state, agent.id).map(|percept| (agent.id, percept)))
            .collect()
    }

    /// Clears bump flags once they have been reported in this tick's percepts.
    pub fn begin_tick(&mut self) {
        for agent in &mut self.state.entities.agents {
            agent.bump = false;
        }
    }

    /// Executes one action for `actor` against the shared state.
    ///
    /// Later calls within the same tick observe the effects of earlier ones.
    pub fn execute(
        &mut self,
        actor: EntityId,
        action: Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.validate_actor(actor)?;

        let outcome = transition::execute_transition(actor, action, self.state, self.config)?;

        Ok(ExecutionOutcome {
            actor,
            action,
            outcome,
        })
    }

    /// World-driven change that happens after all agents acted.
    pub fn spontaneous_change(&mut self) {
        self.state.world.age_scream();
    }

    /// Marks the tick as completed.
    pub fn finish_tick(&mut self) {
        self.state.world.steps += 1;
    }

    fn validate_actor(&self, actor: EntityId) -> Result<(), ExecuteError> {
        match self.state.entities.agent(actor) {
            Some(agent) if agent.is_alive() => Ok(()),
            _ => Err(ExecuteError::ActorNotLive { actor }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EntitySpec, EventKind, Heading, Position, PropKind};

    fn two_agent_world() -> (GameState, EntityId, EntityId) {
        let mut state = GameState::default();
        let a = state
            .add_entity(EntitySpec::agent("A"), Position::new(1, 1), Heading::West)
            .unwrap();
        let b = state
            .add_entity(EntitySpec::agent("B"), Position::new(4, 1), Heading::North)
            .unwrap();
        (state, a, b)
    }

    #[test]
    fn percepts_cover_live_agents_in_roster_order() {
        let (mut state, a, b) = two_agent_world();
        let config = GameConfig::default();
        let engine = GameEngine::new(&mut state, &config);

        let ids: Vec<_> = engine.perceive_all().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn bump_is_visible_for_exactly_one_percept() {
        let (mut state, a, _) = two_agent_world();
        let config = GameConfig::default();
        let mut engine = GameEngine::new(&mut state, &config);

        engine.begin_tick();
        engine.execute(a, Action::Forward).unwrap();
        engine.finish_tick();

        let percepts = engine.perceive_all();
        assert!(percepts[0].1.bump);

        engine.begin_tick();
        engine.execute(a, Action::TurnLeft).unwrap();
        engine.finish_tick();

        let percepts = engine.perceive_all();
        assert!(!percepts[0].1.bump);
    }

    #[test]
    fn dead_agents_cannot_act() {
        let (mut state, a, _) = two_agent_world();
        state.add_prop(PropKind::Pit, Position::new(1, 2)).unwrap();
        state.entities.agent_mut(a).unwrap().heading = Heading::North;
        let config = GameConfig::default();
        let mut engine = GameEngine::new(&mut state, &config);

        let died = engine.execute(a, Action::Forward).unwrap();
        assert!(died.outcome.agent_died());

        let err = engine.execute(a, Action::NoOp).unwrap_err();
        assert_eq!(err, ExecuteError::ActorNotLive { actor: a });
        assert_eq!(engine.perceive_all().len(), 1);
        assert!(!engine.is_done());
    }

    #[test]
    fn scream_is_heard_on_the_following_tick_only() {
        let (mut state, _, b) = two_agent_world();
        state.add_prop(PropKind::Wumpus, Position::new(4, 6)).unwrap();
        let config = GameConfig::default();
        let mut engine = GameEngine::new(&mut state, &config);

        engine.begin_tick();
        let shot = engine.execute(b, Action::Shoot).unwrap();
        assert_eq!(
            shot.outcome.events,
            vec![EventKind::ShotArrow { cost: 10 }, EventKind::KilledWumpus]
        );
        engine.spontaneous_change();
        engine.finish_tick();
        assert!(engine.perceive_all()[1].1.scream);

        engine.begin_tick();
        engine.execute(b, Action::NoOp).unwrap();
        engine.spontaneous_change();
        engine.finish_tick();
        assert!(!engine.perceive_all()[1].1.scream);
    }

    #[test]
    fn events_are_stamped_with_the_current_step() {
        let (mut state, a, _) = two_agent_world();
        let config = GameConfig::default();
        let mut engine = GameEngine::new(&mut state, &config);

        engine.finish_tick();
        engine.finish_tick();
        engine.execute(a, Action::Forward).unwrap();

        let last = engine.state().world.log.last().unwrap();
        assert_eq!(last.step, 2);
        assert_eq!(last.to_string(), " #002: A hit the wall");
    }
}
