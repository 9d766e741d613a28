use crate::action::{ActionOutcome, ActionTransition, Actor, live_agent};
use crate::config::GameConfig;
use crate::state::{EntityId, EventKind, GameState, Position, PropKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("agent {0} not found")]
    ActorNotFound(EntityId),

    #[error("agent {actor} ended its move inside a wall at {position}")]
    InsideWall { actor: EntityId, position: Position },
}

/// Rotation direction for [`TurnAction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnDirection {
    Left,
    Right,
}

impl TurnDirection {
    /// Step through the heading cycle; left is positive.
    pub const fn increment(self) -> i32 {
        match self {
            TurnDirection::Left => 1,
            TurnDirection::Right => -1,
        }
    }
}

/// Rotates the agent in place. Never changes the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnAction {
    pub actor: EntityId,
    pub direction: TurnDirection,
}

impl TurnAction {
    pub fn new(actor: EntityId, direction: TurnDirection) -> Self {
        Self { actor, direction }
    }
}

impl ActionTransition for TurnAction {
    type Error = MoveError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        live_agent(state, self.actor, MoveError::ActorNotFound).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<ActionOutcome, Self::Error> {
        let agent = state
            .entities
            .agent_mut(self.actor)
            .ok_or(MoveError::ActorNotFound(self.actor))?;
        agent.heading = agent.heading.turn(self.direction.increment());
        Ok(ActionOutcome::none())
    }
}

/// Steps one cell along the agent's heading.
///
/// The candidate cell decides the outcome:
/// - wall: the agent stays, its bump flag is set, no score change
/// - pit or wumpus: the agent dies in place and leaves the roster
/// - anything else: the agent moves and pays the movement cost
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForwardAction {
    pub actor: EntityId,
}

impl ForwardAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

enum Obstacle {
    Wall,
    Lethal(PropKind),
}

fn obstacle_at(state: &GameState, position: Position) -> Option<Obstacle> {
    let mut lethal = None;
    for prop in state.entities.props_at(position) {
        if prop.kind == PropKind::Wall {
            return Some(Obstacle::Wall);
        }
        if lethal.is_none() && prop.kind.is_lethal() {
            lethal = Some(prop.kind);
        }
    }
    lethal.map(Obstacle::Lethal)
}

impl ActionTransition for ForwardAction {
    type Error = MoveError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        live_agent(state, self.actor, MoveError::ActorNotFound).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<ActionOutcome, Self::Error> {
        let agent = live_agent(state, self.actor, MoveError::ActorNotFound)?;
        let actor = Actor::from(agent);
        let destination = agent.position.advance(agent.heading);

        let mut outcome = ActionOutcome::none();
        match obstacle_at(state, destination) {
            Some(Obstacle::Wall) => {
                let agent = state
                    .entities
                    .agent_mut(self.actor)
                    .ok_or(MoveError::ActorNotFound(self.actor))?;
                agent.bump = true;
                outcome.record(state, &actor, EventKind::HitWall);
            }
            Some(Obstacle::Lethal(cause)) => {
                outcome.adjust_score(state, -config.death_penalty);
                outcome.record(
                    state,
                    &actor,
                    EventKind::Died {
                        cause,
                        penalty: config.death_penalty,
                    },
                );
                if let Some(agent) = state.entities.agent_mut(self.actor) {
                    agent.alive = false;
                }
                state
                    .entities
                    .remove_agent(self.actor)
                    .ok_or(MoveError::ActorNotFound(self.actor))?;
            }
            None => {
                let agent = state
                    .entities
                    .agent_mut(self.actor)
                    .ok_or(MoveError::ActorNotFound(self.actor))?;
                agent.position = destination;
                outcome.adjust_score(state, -config.move_cost);
            }
        }

        Ok(outcome)
    }

    fn post_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        // A dead agent has already left the roster; nothing to check.
        let Some(agent) = state.entities.agent(self.actor) else {
            return Ok(());
        };

        if state
            .entities
            .find_at(PropKind::Wall, agent.position)
            .is_some()
        {
            return Err(MoveError::InsideWall {
                actor: self.actor,
                position: agent.position,
            });
        }
        Ok(())
    }
}
