//! Runtime orchestration for the Wumpus World simulation.
//!
//! This crate wires agent programs to the deterministic rules in
//! `wumpus-core` and drives episodes tick by tick.
//!
//! Modules are organized by responsibility:
//! - [`simulation`] hosts the episode driver
//! - [`api`] exposes the program interface and error types
//! - [`providers`] bundles ready-made agent programs
//! - [`scenario`] spawns simulations from `wumpus-content` scenarios
//! - [`render`] draws the grid as text
//! - [`harness`] compares programs across many worlds
pub mod api;
pub mod harness;
pub mod providers;
pub mod render;
pub mod scenario;
pub mod simulation;

pub use api::{AgentProgram, FnProgram, IdleProgram, Result, RuntimeError};
pub use harness::{Arena, Comparison, Contender, compare_programs};
pub use providers::{
    RandomProgram, ScriptedProgram, TableDrivenProgram, TraceProgram, WumpusHunter,
};
pub use render::GridRenderer;
pub use scenario::{build_simulation, program_for};
pub use simulation::{ActionRecord, EpisodeSummary, Simulation, Termination, TickOutcome};
