//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from world setup and action execution so clients can bubble
//! them up with consistent context. Agent death is never an error.
use thiserror::Error;
use wumpus_core::{EntityId, ExecuteError, StateError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("cannot step a world that never had an entity placed")]
    EmptyWorld,

    #[error("agents must be added with a program; use add_agent")]
    AgentWithoutProgram,

    #[error("no program registered for live agent {agent}")]
    ProgramMissing { agent: EntityId },

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error("failed to compute state root")]
    StateRoot(#[source] bincode::Error),
}
