use crate::action::{ActionOutcome, ActionTransition, live_agent};
use crate::config::GameConfig;
use crate::state::{EntityId, GameState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoOpError {
    #[error("agent {0} not found")]
    ActorNotFound(EntityId),
}

/// Explicit "do nothing" action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoOpAction {
    pub actor: EntityId,
}

impl NoOpAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for NoOpAction {
    type Error = NoOpError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        live_agent(state, self.actor, NoOpError::ActorNotFound).map(|_| ())
    }

    fn apply(
        &self,
        _state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<ActionOutcome, Self::Error> {
        Ok(ActionOutcome::none())
    }
}
