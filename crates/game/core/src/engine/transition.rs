//! Action transition dispatch and execution logic.

use crate::action::{
    Action, ActionOutcome, ActionTransition, ForwardAction, GrabAction, NoOpAction, ReleaseAction,
    ShootAction, TurnAction, TurnDirection,
};
use crate::config::GameConfig;
use crate::state::{EntityId, GameState};

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the world state and return the outcome
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    config: &GameConfig,
) -> Result<ActionOutcome, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let outcome = transition
        .apply(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(outcome)
}

/// Routes an action token to its transition for `actor`.
pub(super) fn execute_transition(
    actor: EntityId,
    action: Action,
    state: &mut GameState,
    config: &GameConfig,
) -> Result<ActionOutcome, ExecuteError> {
    match action {
        Action::TurnLeft => {
            drive_transition(&TurnAction::new(actor, TurnDirection::Left), state, config)
                .map_err(ExecuteError::Turn)
        }
        Action::TurnRight => {
            drive_transition(&TurnAction::new(actor, TurnDirection::Right), state, config)
                .map_err(ExecuteError::Turn)
        }
        Action::Forward => drive_transition(&ForwardAction::new(actor), state, config)
            .map_err(ExecuteError::Forward),
        Action::Grab => {
            drive_transition(&GrabAction::new(actor), state, config).map_err(ExecuteError::Grab)
        }
        Action::Release => drive_transition(&ReleaseAction::new(actor), state, config)
            .map_err(ExecuteError::Release),
        Action::Shoot => {
            drive_transition(&ShootAction::new(actor), state, config).map_err(ExecuteError::Shoot)
        }
        Action::NoOp => {
            drive_transition(&NoOpAction::new(actor), state, config).map_err(ExecuteError::NoOp)
        }
    }
}
