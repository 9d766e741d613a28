pub mod common;
pub mod entities;
pub mod world;

// Re-export common types
pub use common::{EntityId, Heading, MapDimensions, Position};

// Re-export entity roster and entity kinds
pub use entities::{AgentState, EntitiesState, EntitySpec, ItemKind, PropKind, PropState};

// Re-export world types
pub use world::WorldState;
