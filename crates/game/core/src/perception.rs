//! Sensory snapshot handed to agent programs once per tick.
//!
//! Percepts are computed from a read-only view of the world. The engine
//! collects them for every live agent before any action of the tick runs.

use crate::config::GameConfig;
use crate::state::{EntityId, GameState, Heading, Position, PropKind};

/// Everything an agent is allowed to know about the world this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Percept {
    pub location: Position,
    pub heading: Heading,
    /// A wumpus is in this cell or an orthogonally adjacent one.
    pub stench: bool,
    /// A pit is in this cell or an orthogonally adjacent one.
    pub breeze: bool,
    /// Gold lies in this exact cell.
    pub glitter: bool,
    /// The previous tick's forward move was blocked by a wall.
    pub bump: bool,
    /// A wumpus died during the previous tick.
    pub scream: bool,
}

/// Builds the percept of a live agent.
///
/// Returns `None` when `agent` is not in the live roster; dead agents are
/// perceived by no one and perceive nothing.
pub fn perceive(state: &GameState, agent: EntityId) -> Option<Percept> {
    let agent = state.entities.agent(agent).filter(|a| a.is_alive())?;
    let location = agent.position;

    let mut stench = false;
    let mut breeze = false;
    for prop in state
        .entities
        .props_near(location, GameConfig::SENSE_RADIUS)
    {
        match prop.kind {
            PropKind::Wumpus => stench = true,
            PropKind::Pit => breeze = true,
            PropKind::Wall | PropKind::Gold => {}
        }
    }

    let glitter = state.entities.find_at(PropKind::Gold, location).is_some();

    Some(Percept {
        location,
        heading: agent.heading,
        stench,
        breeze,
        glitter,
        bump: agent.bump,
        scream: state.world.scream,
    })
}
