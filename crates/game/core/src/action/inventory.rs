use crate::action::{ActionOutcome, ActionTransition, Actor, live_agent};
use crate::config::GameConfig;
use crate::state::{EntityId, EventKind, GameState, ItemKind, PropKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    #[error("agent {0} not found")]
    ActorNotFound(EntityId),

    #[error("agent {0} grabbed gold but its held slot is empty")]
    HeldSlotEmpty(EntityId),
}

/// Picks up the gold lying in the agent's cell, if any.
///
/// Only the first gold in the cell is taken per action. The held slot keeps a
/// single item, so grabbing while already holding replaces what was held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrabAction {
    pub actor: EntityId,
}

impl GrabAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }

    /// The gold this grab would take.
    fn target(&self, state: &GameState) -> Option<EntityId> {
        let agent = state.entities.agent(self.actor)?;
        state
            .entities
            .find_at(PropKind::Gold, agent.position)
            .map(|gold| gold.id)
    }
}

impl ActionTransition for GrabAction {
    type Error = InventoryError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        live_agent(state, self.actor, InventoryError::ActorNotFound).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<ActionOutcome, Self::Error> {
        let actor = Actor::from(live_agent(
            state,
            self.actor,
            InventoryError::ActorNotFound,
        )?);

        let mut outcome = ActionOutcome::none();
        let Some(gold) = self.target(state) else {
            return Ok(outcome);
        };

        state.entities.remove_prop(gold);
        let agent = state
            .entities
            .agent_mut(self.actor)
            .ok_or(InventoryError::ActorNotFound(self.actor))?;
        agent.holding = Some(ItemKind::Gold);

        outcome.adjust_score(state, config.gold_reward);
        outcome.record(
            state,
            &actor,
            EventKind::GrabbedGold {
                reward: config.gold_reward,
            },
        );
        Ok(outcome)
    }

    fn post_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        let grabbed_now = state.world.log.last().is_some_and(|event| {
            event.actor == self.actor
                && event.step == state.world.steps
                && matches!(event.kind, EventKind::GrabbedGold { .. })
        });
        let holding = state
            .entities
            .agent(self.actor)
            .is_some_and(|agent| agent.holding.is_some());

        if grabbed_now && !holding {
            return Err(InventoryError::HeldSlotEmpty(self.actor));
        }
        Ok(())
    }
}

/// Empties the held slot. The item is consumed, not dropped back into the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReleaseAction {
    pub actor: EntityId,
}

impl ReleaseAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for ReleaseAction {
    type Error = InventoryError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        live_agent(state, self.actor, InventoryError::ActorNotFound).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<ActionOutcome, Self::Error> {
        let agent = state
            .entities
            .agent_mut(self.actor)
            .ok_or(InventoryError::ActorNotFound(self.actor))?;
        agent.holding = None;
        Ok(ActionOutcome::none())
    }
}
