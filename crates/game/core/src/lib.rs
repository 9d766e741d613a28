//! Deterministic Wumpus World rules and data types.
//!
//! `wumpus-core` defines the canonical rules (grid geometry, entities, world
//! state, perception, action execution) and exposes pure APIs reused by the
//! runtime and the content loaders. All state mutation during an episode flows
//! through [`engine::GameEngine`].
pub mod action;
pub mod config;
pub mod engine;
pub mod perception;
pub mod state;

pub use action::{
    Action, ActionOutcome, ActionParseError, ActionTransition, ForwardAction, GrabAction,
    InventoryError, MoveError, NoOpAction, ReleaseAction, ShootAction, ShootError, TurnAction,
    TurnDirection,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase, TransitionPhaseError};
pub use perception::{Percept, perceive};
pub use state::{
    AgentState, EntitiesState, EntityId, EntitySpec, EventKind, EventLog, GameState, Heading,
    ItemKind, MapDimensions, Position, PropKind, PropState, StateError, WorldEvent, WorldState,
};
