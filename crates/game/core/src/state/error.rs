//! State management errors.
//!
//! Errors related to entity placement and id allocation. These are programmer
//! errors in scenario setup; the engine never produces them mid-episode.

use crate::state::Position;

/// Errors that occur while building a world.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Position is outside the map bounds.
    #[error("Position {position:?} is out of bounds (map size: {map_width}x{map_height})")]
    PositionOutOfBounds {
        /// The invalid position.
        position: Position,
        /// Map width.
        map_width: u32,
        /// Map height.
        map_height: u32,
    },

    /// Entity ID allocation overflow (all IDs exhausted).
    #[error("Entity ID overflow (current: {current})")]
    EntityIdOverflow {
        /// Current ID value when overflow occurred.
        current: u32,
    },
}
