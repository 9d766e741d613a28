//! Authoritative world state representation.
//!
//! This module owns the data structures that describe entities, world
//! bookkeeping, and the event log. Runtime layers clone or query this state but
//! mutate it exclusively through the engine.
pub mod error;
pub mod event;
pub mod types;

pub use error::StateError;
pub use event::{EventKind, EventLog, WorldEvent};
pub use types::{
    AgentState, EntitiesState, EntityId, EntitySpec, Heading, ItemKind, MapDimensions, Position,
    PropKind, PropState, WorldState,
};

use crate::config::GameConfig;

/// Canonical snapshot of the deterministic world.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Sequential entity ID allocator (monotonically increasing).
    ///
    /// Starts at 1 and is never reused, so `next_entity_id > 1` means at
    /// least one entity was placed during this episode.
    next_entity_id: u32,

    /// Arrows handed to each agent on placement, `None` for unlimited.
    arrows_per_agent: Option<u32>,

    /// Every entity in the world: props and live agents.
    pub entities: EntitiesState,
    /// Score, step counter, scream flag and event log.
    pub world: WorldState,
}

impl GameState {
    /// Creates an empty world with no entities, not even walls.
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            next_entity_id: 1,
            arrows_per_agent: None,
            entities: EntitiesState::empty(),
            world: WorldState::new(dimensions),
        }
    }

    /// Creates a world whose perimeter is already lined with walls.
    pub fn with_walls(dimensions: MapDimensions) -> Self {
        let mut state = Self::new(dimensions);
        state.add_walls();
        state
    }

    /// Creates a walled world sized and provisioned from `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        let mut state = Self::with_walls(config.dimensions);
        state.arrows_per_agent = config.arrows_per_agent;
        state
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.world.dimensions
    }

    pub fn arrows_per_agent(&self) -> Option<u32> {
        self.arrows_per_agent
    }

    pub fn set_arrows_per_agent(&mut self, arrows: Option<u32>) {
        self.arrows_per_agent = arrows;
    }

    /// Whether any entity was ever placed in this world.
    pub fn entities_ever_added(&self) -> bool {
        self.next_entity_id > 1
    }

    /// Allocates a new unique EntityId.
    pub fn allocate_entity_id(&mut self) -> Result<EntityId, StateError> {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id =
            self.next_entity_id
                .checked_add(1)
                .ok_or(StateError::EntityIdOverflow {
                    current: self.next_entity_id,
                })?;
        Ok(id)
    }

    /// Places an entity at `position`.
    ///
    /// Agents additionally receive `heading`, an empty held slot, a cleared
    /// bump flag and the configured arrow allowance. Static props ignore the
    /// heading.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::PositionOutOfBounds`] when `position` lies
    /// outside the grid.
    pub fn add_entity(
        &mut self,
        spec: EntitySpec,
        position: Position,
        heading: Heading,
    ) -> Result<EntityId, StateError> {
        let dims = self.world.dimensions;
        if !dims.contains(position) {
            return Err(StateError::PositionOutOfBounds {
                position,
                map_width: dims.width,
                map_height: dims.height,
            });
        }

        let id = self.allocate_entity_id()?;
        match spec {
            EntitySpec::Agent { name } => {
                let agent = AgentState::new(id, name, position, heading)
                    .with_arrows(self.arrows_per_agent);
                self.entities.agents.push(agent);
            }
            EntitySpec::Wall => self.push_prop(id, position, PropKind::Wall),
            EntitySpec::Pit => self.push_prop(id, position, PropKind::Pit),
            EntitySpec::Gold => self.push_prop(id, position, PropKind::Gold),
            EntitySpec::Wumpus => self.push_prop(id, position, PropKind::Wumpus),
        }

        Ok(id)
    }

    /// Places a static prop; shorthand for [`GameState::add_entity`].
    pub fn add_prop(&mut self, kind: PropKind, position: Position) -> Result<EntityId, StateError> {
        self.add_entity(kind.into(), position, Heading::default())
    }

    fn push_prop(&mut self, id: EntityId, position: Position, kind: PropKind) {
        self.entities.props.push(PropState::new(id, position, kind));
    }

    /// Puts walls on every cell of the outer ring, each cell exactly once.
    ///
    /// A grid with no cells has no ring and gets no walls.
    pub fn add_walls(&mut self) {
        let MapDimensions { width, height } = self.world.dimensions;
        if width == 0 || height == 0 {
            return;
        }
        let (width, height) = (width as i32, height as i32);

        let mut ring = Vec::new();
        for x in 1..width - 1 {
            ring.push(Position::new(x, 0));
            if height > 1 {
                ring.push(Position::new(x, height - 1));
            }
        }
        for y in 0..height {
            ring.push(Position::new(0, y));
            if width > 1 {
                ring.push(Position::new(width - 1, y));
            }
        }

        for position in ring {
            // Ring cells are inside the grid by construction; the id space
            // cannot be exhausted by a perimeter.
            if let Ok(id) = self.allocate_entity_id() {
                self.push_prop(id, position, PropKind::Wall);
            }
        }
    }

    /// Whether any live agent remains.
    pub fn has_live_agents(&self) -> bool {
        self.entities.agents.iter().any(AgentState::is_alive)
    }

    /// Computes a SHA-256 commitment to the complete state.
    ///
    /// Two episodes started from the same placements and driven by the same
    /// deterministic programs produce identical roots at every tick.
    #[cfg(feature = "serde")]
    pub fn state_root(&self) -> Result<[u8; 32], bincode::Error> {
        use sha2::{Digest, Sha256};

        let bytes = bincode::serialize(self)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(hasher.finalize().into())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
