//! Error types for action execution pipeline.

use crate::action::{
    ActionTransition, ForwardAction, GrabAction, NoOpAction, ReleaseAction, ShootAction,
    TurnAction,
};
use crate::state::EntityId;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
///
/// Every variant indicates a caller bug (acting for an agent that is not in
/// the live roster) or a broken invariant; legal play never produces one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("turn action failed: {0}")]
    Turn(TransitionPhaseError<<TurnAction as ActionTransition>::Error>),

    #[error("forward action failed: {0}")]
    Forward(TransitionPhaseError<<ForwardAction as ActionTransition>::Error>),

    #[error("grab action failed: {0}")]
    Grab(TransitionPhaseError<<GrabAction as ActionTransition>::Error>),

    #[error("release action failed: {0}")]
    Release(TransitionPhaseError<<ReleaseAction as ActionTransition>::Error>),

    #[error("shoot action failed: {0}")]
    Shoot(TransitionPhaseError<<ShootAction as ActionTransition>::Error>),

    #[error("no-op action failed: {0}")]
    NoOp(TransitionPhaseError<<NoOpAction as ActionTransition>::Error>),

    #[error("invalid actor: agent {actor} is not in the live roster")]
    ActorNotLive { actor: EntityId },
}

impl ExecuteError {
    /// Pipeline phase that failed, if the error came from a transition.
    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            ExecuteError::Turn(e) => Some(e.phase),
            ExecuteError::Forward(e) => Some(e.phase),
            ExecuteError::Grab(e) => Some(e.phase),
            ExecuteError::Release(e) => Some(e.phase),
            ExecuteError::Shoot(e) => Some(e.phase),
            ExecuteError::NoOp(e) => Some(e.phase),
            ExecuteError::ActorNotLive { .. } => None,
        }
    }
}
