//! Action domain.
//!
//! [`Action`] is the closed vocabulary agent programs choose from. The engine
//! turns each chosen action into a transition struct implementing
//! [`ActionTransition`] and drives it through the three-phase pipeline.
//!
//! # Module Structure
//!
//! - `movement`: turning and forward moves (bump, death, move cost)
//! - `inventory`: grabbing and releasing gold
//! - `combat`: shooting arrows along the heading
//! - `wait`: the explicit no-op

pub mod combat;
pub mod inventory;
pub mod movement;
pub mod wait;

use std::str::FromStr;

pub use combat::{ShootAction, ShootError};
pub use inventory::{GrabAction, InventoryError, ReleaseAction};
pub use movement::{ForwardAction, MoveError, TurnAction, TurnDirection};
pub use wait::{NoOpAction, NoOpError};

use crate::config::GameConfig;
use crate::state::{AgentState, EntityId, EventKind, GameState, WorldEvent};

/// One action chosen by an agent program for the current tick.
///
/// Tokens parse case-insensitively from their variant names
/// (`"TurnLeft"`, `"forward"`, ...). Serialized data accepts the variant
/// name or its all-lowercase form; other casings only go through
/// [`Action::parse`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Action {
    #[cfg_attr(feature = "serde", serde(alias = "turnleft"))]
    TurnLeft,
    #[cfg_attr(feature = "serde", serde(alias = "turnright"))]
    TurnRight,
    #[cfg_attr(feature = "serde", serde(alias = "forward"))]
    Forward,
    #[cfg_attr(feature = "serde", serde(alias = "grab"))]
    Grab,
    #[cfg_attr(feature = "serde", serde(alias = "release"))]
    Release,
    #[cfg_attr(feature = "serde", serde(alias = "shoot"))]
    Shoot,
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "noop"))]
    NoOp,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 7] = [
        Action::TurnLeft,
        Action::TurnRight,
        Action::Forward,
        Action::Grab,
        Action::Release,
        Action::Shoot,
        Action::NoOp,
    ];

    /// Parses an action token.
    ///
    /// Unknown tokens are rejected rather than silently treated as a no-op, so
    /// a typo in a table or script surfaces where it is loaded.
    pub fn parse(token: &str) -> Result<Self, ActionParseError> {
        Self::from_str(token.trim()).map_err(|_| ActionParseError::Unknown(token.to_string()))
    }
}

/// Errors raised while turning external tokens into [`Action`] values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionParseError {
    #[error("unknown action token {0:?}")]
    Unknown(String),
}

/// Defines how a concrete action variant mutates world state.
pub trait ActionTransition {
    type Error;

    /// Returns the agent performing this action.
    fn actor(&self) -> EntityId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the world state directly.
    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<ActionOutcome, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// What a single action did to the world.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    /// Net score change caused by the action.
    pub score_delta: i64,
    /// Events appended to the world log, in order.
    pub events: Vec<EventKind>,
}

impl ActionOutcome {
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether the acting agent died during this action.
    pub fn agent_died(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, EventKind::Died { .. }))
    }

    /// Whether a wumpus was killed during this action.
    pub fn killed_wumpus(&self) -> bool {
        self.events.contains(&EventKind::KilledWumpus)
    }

    pub(crate) fn adjust_score(&mut self, state: &mut GameState, delta: i64) {
        state.world.score += delta;
        self.score_delta += delta;
    }

    pub(crate) fn record(&mut self, state: &mut GameState, actor: &Actor, kind: EventKind) {
        state.world.log.push(WorldEvent {
            step: state.world.steps,
            actor: actor.id,
            actor_name: actor.name.clone(),
            kind,
        });
        self.events.push(kind);
    }
}

/// Identity of the acting agent, captured before mutation so events can be
/// attributed even after the agent left the roster.
#[derive(Clone, Debug)]
pub(crate) struct Actor {
    pub id: EntityId,
    pub name: String,
}

impl From<&AgentState> for Actor {
    fn from(agent: &AgentState) -> Self {
        Self {
            id: agent.id,
            name: agent.name.clone(),
        }
    }
}

/// Looks up a live agent or reports it missing.
pub(crate) fn live_agent<E>(
    state: &GameState,
    id: EntityId,
    missing: impl FnOnce(EntityId) -> E,
) -> Result<&AgentState, E> {
    state
        .entities
        .agent(id)
        .filter(|agent| agent.is_alive())
        .ok_or_else(|| missing(id))
}
