use crate::action::{ActionOutcome, ActionTransition, Actor, live_agent};
use crate::config::GameConfig;
use crate::state::{EntityId, EventKind, GameState, PropKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShootError {
    #[error("agent {0} not found")]
    ActorNotFound(EntityId),

    #[error("wumpus {0} survived a killing shot")]
    WumpusNotRemoved(EntityId),
}

/// Fires an arrow along the agent's heading.
///
/// Every shot costs the arrow price and is logged, hit or miss. The arrow is
/// a ray cast, not an entity: it visits up to `max(width, height)` cells and
/// kills the first wumpus it meets, raising the scream. With a bounded quiver
/// an agent that has run out of arrows shoots nothing and pays nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShootAction {
    pub actor: EntityId,
}

impl ShootAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }

    /// First wumpus on the arrow's path, if any.
    fn target(&self, state: &GameState) -> Option<EntityId> {
        let agent = state.entities.agent(self.actor)?;
        let range = state.dimensions().longest_side();

        let mut cell = agent.position;
        for _ in 0..range {
            cell = cell.advance(agent.heading);
            if let Some(wumpus) = state.entities.find_at(PropKind::Wumpus, cell) {
                return Some(wumpus.id);
            }
        }
        None
    }
}

impl ActionTransition for ShootAction {
    type Error = ShootError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        live_agent(state, self.actor, ShootError::ActorNotFound).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<ActionOutcome, Self::Error> {
        let agent = state
            .entities
            .agent_mut(self.actor)
            .ok_or(ShootError::ActorNotFound(self.actor))?;

        let mut outcome = ActionOutcome::none();
        match agent.arrows {
            Some(0) => return Ok(outcome),
            Some(remaining) => agent.arrows = Some(remaining - 1),
            None => {}
        }
        let actor = Actor::from(&*agent);

        outcome.adjust_score(state, -config.arrow_cost);
        outcome.record(
            state,
            &actor,
            EventKind::ShotArrow {
                cost: config.arrow_cost,
            },
        );

        if let Some(wumpus) = self.target(state) {
            state
                .entities
                .remove_prop(wumpus)
                .ok_or(ShootError::WumpusNotRemoved(wumpus))?;
            state.world.raise_scream();
            outcome.record(state, &actor, EventKind::KilledWumpus);
        }

        Ok(outcome)
    }
}
