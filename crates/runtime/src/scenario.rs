//! Turns content scenarios into ready-to-run simulations.

use tracing::info;
use wumpus_content::{AgentPlacement, ProgramSpec, Scenario};
use wumpus_core::GameConfig;

use crate::api::{AgentProgram, IdleProgram, Result};
use crate::providers::{RandomProgram, ScriptedProgram, WumpusHunter};
use crate::simulation::Simulation;

/// Instantiates the program an agent placement asks for.
pub fn program_for(placement: &AgentPlacement) -> Box<dyn AgentProgram> {
    let name = placement.name.clone();
    match &placement.program {
        ProgramSpec::Hunter => Box::new(WumpusHunter::new(name)),
        ProgramSpec::Random { seed, actions } => {
            Box::new(RandomProgram::new(name, actions.clone(), *seed))
        }
        ProgramSpec::Scripted { actions } => {
            Box::new(ScriptedProgram::new(name, actions.iter().copied()))
        }
        ProgramSpec::Idle => Box::new(IdleProgram::new(name)),
    }
}

/// Builds the world of `scenario` and spawns its agents in listed order.
///
/// The grid size comes from the scenario; everything else from `config`.
pub fn build_simulation(scenario: &Scenario, config: &GameConfig) -> Result<Simulation> {
    let config = scenario.config(config);
    let state = scenario.create_initial_state(&config)?;
    let mut sim = Simulation::new(state, config);

    for placement in &scenario.agents {
        sim.add_agent(program_for(placement), placement.position, placement.heading)?;
    }

    info!(
        target: "runtime::scenario",
        width = scenario.dimensions.width,
        height = scenario.dimensions.height,
        placements = scenario.placements.len(),
        agents = scenario.agents.len(),
        "simulation built from scenario"
    );
    Ok(sim)
}
