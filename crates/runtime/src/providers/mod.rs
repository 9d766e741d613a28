//! Agent program implementations for different behaviors.

pub mod hunter;
pub mod random;
pub mod scripted;
pub mod table;
pub mod trace;

pub use hunter::WumpusHunter;
pub use random::RandomProgram;
pub use scripted::ScriptedProgram;
pub use table::TableDrivenProgram;
pub use trace::TraceProgram;
