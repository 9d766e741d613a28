//! Episode driver that owns the authoritative [`GameState`].
//!
//! Each tick collects percepts for every live agent, asks their programs for
//! an action, executes the actions in roster order through
//! [`wumpus_core::GameEngine`], then applies world-driven change and advances
//! the step counter.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use wumpus_core::{
    Action, EntityId, EntitySpec, ExecuteError, ExecutionOutcome, GameConfig, GameEngine,
    GameState, Heading, Position, TransitionPhase, WorldEvent,
};

use crate::api::{AgentProgram, Result, RuntimeError};

/// One executed decision, kept for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub step: u64,
    pub actor: EntityId,
    pub action: Action,
}

/// Result of a single [`Simulation::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// Step counter value the tick ran under.
    pub step: u64,
    /// Executed actions in roster order. Empty when the episode was already done.
    pub executions: Vec<ExecutionOutcome>,
    /// Events appended to the world log during the tick.
    pub events: Vec<WorldEvent>,
    pub score: i64,
    /// No live agent remains after this tick.
    pub done: bool,
}

/// Why [`Simulation::run`] stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Every agent died.
    NoLiveAgents,
    /// The step budget ran out with at least one agent alive.
    BudgetExhausted,
}

/// Summary of a finished [`Simulation::run`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub termination: Termination,
    /// Ticks executed by this call.
    pub ticks: u64,
    /// Step counter after the run.
    pub steps: u64,
    pub score: i64,
    /// Names of agents still alive.
    pub survivors: Vec<String>,
    pub events: usize,
    /// Hex SHA-256 commitment to the final state.
    pub state_root: String,
}

struct AgentSlot {
    id: EntityId,
    program: Box<dyn AgentProgram>,
}

/// Single-threaded episode driver.
///
/// One simulation owns one world; nothing else mutates it while an episode
/// runs.
pub struct Simulation {
    state: GameState,
    config: GameConfig,
    programs: Vec<AgentSlot>,
    trace: Vec<ActionRecord>,
}

impl Simulation {
    /// Creates a driver over `state`, scored by `config`.
    pub fn new(state: GameState, config: GameConfig) -> Self {
        Self {
            state,
            config,
            programs: Vec::new(),
            trace: Vec::new(),
        }
    }

    /// Places an agent driven by `program`.
    ///
    /// The agent is named after [`AgentProgram::name`] and joins the end of
    /// the roster, so it acts after every agent added before it.
    pub fn add_agent<P>(
        &mut self,
        program: P,
        position: Position,
        heading: Heading,
    ) -> Result<EntityId>
    where
        P: AgentProgram + 'static,
    {
        let spec = EntitySpec::agent(program.name());
        let id = self.state.add_entity(spec, position, heading)?;
        debug!(
            target: "runtime::simulation",
            agent = %id,
            name = program.name(),
            %position,
            ?heading,
            "agent added"
        );
        self.programs.push(AgentSlot {
            id,
            program: Box::new(program),
        });
        Ok(id)
    }

    /// Places a static prop.
    ///
    /// Agents need a program and must go through [`Simulation::add_agent`].
    pub fn add_entity(&mut self, spec: EntitySpec, position: Position) -> Result<EntityId> {
        if matches!(spec, EntitySpec::Agent { .. }) {
            return Err(RuntimeError::AgentWithoutProgram);
        }
        Ok(self.state.add_entity(spec, position, Heading::default())?)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Every decision executed so far, in execution order.
    pub fn action_trace(&self) -> &[ActionRecord] {
        &self.trace
    }

    /// The episode is over once no live agent remains.
    pub fn is_done(&self) -> bool {
        !self.state.has_live_agents()
    }

    /// Advances the world by exactly one tick.
    ///
    /// A finished episode is left untouched and reported with `done` set.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::EmptyWorld`] when nothing was ever placed, and
    /// [`RuntimeError::Execute`] if the engine rejects an action, which only
    /// happens when the roster and the registered programs disagree.
    pub fn step(&mut self) -> Result<TickOutcome> {
        if !self.state.entities_ever_added() {
            return Err(RuntimeError::EmptyWorld);
        }

        let step = self.state.world.steps;
        if self.is_done() {
            return Ok(TickOutcome {
                step,
                executions: Vec::new(),
                events: Vec::new(),
                score: self.state.world.score,
                done: true,
            });
        }

        let log_start = self.state.world.log.len();
        let mut engine = GameEngine::new(&mut self.state, &self.config);

        let percepts = engine.perceive_all();
        engine.begin_tick();

        let mut decisions = Vec::with_capacity(percepts.len());
        for (actor, percept) in &percepts {
            let slot = self
                .programs
                .iter_mut()
                .find(|slot| slot.id == *actor)
                .ok_or(RuntimeError::ProgramMissing { agent: *actor })?;
            let action = slot.program.decide(percept);
            decisions.push((*actor, action));
        }

        let mut executions = Vec::with_capacity(decisions.len());
        for (actor, action) in decisions {
            match engine.execute(actor, action) {
                Ok(outcome) => {
                    debug!(
                        target: "runtime::simulation",
                        step,
                        actor = %actor,
                        action = %action,
                        score_delta = outcome.outcome.score_delta,
                        "action executed"
                    );
                    self.trace.push(ActionRecord {
                        step,
                        actor,
                        action,
                    });
                    executions.push(outcome);
                }
                Err(err) => {
                    report_execute_error(step, actor, action, &err);
                    return Err(err.into());
                }
            }
        }

        engine.spontaneous_change();
        engine.finish_tick();

        let state = &self.state;
        self.programs
            .retain(|slot| state.entities.agent(slot.id).is_some());

        let events = self.state.world.log.as_slice()[log_start..].to_vec();
        for event in &events {
            info!(target: "runtime::simulation", "{}", event);
        }

        Ok(TickOutcome {
            step,
            executions,
            events,
            score: self.state.world.score,
            done: self.is_done(),
        })
    }

    /// Runs ticks until no live agent remains or `max_steps` ticks ran.
    pub fn run(&mut self, max_steps: u64) -> Result<EpisodeSummary> {
        let mut ticks = 0;
        while ticks < max_steps && !self.is_done() {
            self.step()?;
            ticks += 1;
        }

        if ticks == 0 && !self.state.entities_ever_added() {
            return Err(RuntimeError::EmptyWorld);
        }

        let summary = self.summary(ticks)?;
        info!(
            target: "runtime::simulation",
            termination = ?summary.termination,
            ticks = summary.ticks,
            steps = summary.steps,
            score = summary.score,
            state_root = %summary.state_root,
            "episode finished"
        );
        Ok(summary)
    }

    /// Snapshot summary of the episode so far.
    pub fn summary(&self, ticks: u64) -> Result<EpisodeSummary> {
        let root = self.state.state_root().map_err(RuntimeError::StateRoot)?;
        let termination = if self.is_done() {
            Termination::NoLiveAgents
        } else {
            Termination::BudgetExhausted
        };

        Ok(EpisodeSummary {
            termination,
            ticks,
            steps: self.state.world.steps,
            score: self.state.world.score,
            survivors: self
                .state
                .entities
                .agents
                .iter()
                .filter(|agent| agent.is_alive())
                .map(|agent| agent.name.clone())
                .collect(),
            events: self.state.world.log.len(),
            state_root: hex::encode(root),
        })
    }
}

fn report_execute_error(step: u64, actor: EntityId, action: Action, err: &ExecuteError) {
    let phase = err.phase();
    if phase == Some(TransitionPhase::PreValidate) {
        debug!(
            target: "runtime::simulation",
            step,
            actor = %actor,
            action = %action,
            error = %err,
            "action rejected during pre-validate"
        );
    } else {
        error!(
            target: "runtime::simulation",
            step,
            actor = %actor,
            action = %action,
            phase = phase.map(|p| p.as_str()).unwrap_or("roster"),
            error = %err,
            "action execution failed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FnProgram, IdleProgram};
    use crate::providers::ScriptedProgram;
    use wumpus_core::{MapDimensions, PropKind};

    fn open_world() -> Simulation {
        Simulation::new(
            GameState::new(MapDimensions::new(6, 6)),
            GameConfig::default(),
        )
    }

    #[test]
    fn stepping_an_empty_world_is_an_error() {
        let mut sim = open_world();
        assert!(matches!(sim.step(), Err(RuntimeError::EmptyWorld)));
        assert!(matches!(sim.run(5), Err(RuntimeError::EmptyWorld)));
    }

    #[test]
    fn world_with_only_props_is_done_immediately() {
        let mut sim = open_world();
        sim.add_entity(EntitySpec::Gold, Position::new(2, 2)).unwrap();

        let tick = sim.step().unwrap();
        assert!(tick.done);
        assert!(tick.executions.is_empty());
        assert_eq!(sim.state().world.steps, 0);
    }

    #[test]
    fn agents_cannot_be_added_without_programs() {
        let mut sim = open_world();
        let err = sim
            .add_entity(EntitySpec::agent("Ghost"), Position::new(1, 1))
            .unwrap_err();
        assert!(matches!(err, RuntimeError::AgentWithoutProgram));
    }

    #[test]
    fn out_of_bounds_agent_is_rejected() {
        let mut sim = open_world();
        let err = sim
            .add_agent(IdleProgram::new("Idle"), Position::new(6, 0), Heading::East)
            .unwrap_err();
        assert!(matches!(err, RuntimeError::State(_)));
    }

    #[test]
    fn step_counter_advances_once_per_tick() {
        let mut sim = open_world();
        sim.add_agent(IdleProgram::new("Idle"), Position::new(1, 1), Heading::East)
            .unwrap();

        let summary = sim.run(7).unwrap();
        assert_eq!(summary.ticks, 7);
        assert_eq!(summary.steps, 7);
        assert_eq!(summary.termination, Termination::BudgetExhausted);
        assert_eq!(sim.action_trace().len(), 7);
    }

    #[test]
    fn dead_agents_are_never_asked_again() {
        let mut sim = open_world();
        sim.add_entity(EntitySpec::Pit, Position::new(2, 1)).unwrap();

        let calls = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = calls.clone();
        sim.add_agent(
            FnProgram::new("Doomed", move |_| {
                counter.set(counter.get() + 1);
                Action::Forward
            }),
            Position::new(1, 1),
            Heading::East,
        )
        .unwrap();
        sim.add_agent(IdleProgram::new("Bystander"), Position::new(4, 4), Heading::North)
            .unwrap();

        let first = sim.step().unwrap();
        assert_eq!(first.score, -1000);
        assert!(!first.done);

        sim.run(5).unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(sim.state().world.score, -1000);
    }

    #[test]
    fn later_agents_see_earlier_effects_within_a_tick() {
        let mut sim = open_world();
        sim.add_entity(EntitySpec::Gold, Position::new(2, 2)).unwrap();
        sim.add_agent(
            ScriptedProgram::new("First", vec![Action::Grab]),
            Position::new(2, 2),
            Heading::East,
        )
        .unwrap();
        sim.add_agent(
            ScriptedProgram::new("Second", vec![Action::Grab]),
            Position::new(2, 2),
            Heading::East,
        )
        .unwrap();

        let tick = sim.step().unwrap();
        assert_eq!(tick.score, 1000);
        assert_eq!(tick.events.len(), 1);
        assert_eq!(tick.events[0].actor_name, "First");
        assert!(sim.state().entities.find_at(PropKind::Gold, Position::new(2, 2)).is_none());
    }

    #[test]
    fn summary_serializes_to_json() {
        let mut sim = open_world();
        sim.add_agent(IdleProgram::new("Idle"), Position::new(1, 1), Heading::East)
            .unwrap();
        let summary = sim.run(1).unwrap();

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["termination"], "BudgetExhausted");
        assert_eq!(json["survivors"][0], "Idle");
        assert_eq!(summary.state_root.len(), 64);
    }
}
