//! Data-driven content definitions and loaders.
//!
//! This crate describes Wumpus World scenarios and loads them from data files:
//! - Scenarios (grid size, walls, prop and agent placements) from RON
//! - Scoring configuration from TOML
//!
//! Content is turned into [`wumpus_core::GameState`] before an episode starts
//! and never changes afterwards.

pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::{AgentPlacement, Placement, ProgramSpec, Scenario};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ScenarioLoader};
