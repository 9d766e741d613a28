//! Batch comparison of agent programs across many worlds.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;
use wumpus_core::{GameConfig, GameState, Heading, MapDimensions, Position, PropKind};

use crate::api::{AgentProgram, Result};
use crate::simulation::Simulation;

/// A world without its agent, plus where the agent starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arena {
    pub state: GameState,
    pub config: GameConfig,
    pub start: Position,
    pub heading: Heading,
}

impl Arena {
    /// Agent starts at (1, 1) facing east.
    pub fn new(state: GameState, config: GameConfig) -> Self {
        Self {
            state,
            config,
            start: Position::new(1, 1),
            heading: Heading::East,
        }
    }

    /// Walled world with one gold, one wumpus and `pits` pits on random
    /// interior cells, never on the start cell.
    pub fn random(config: &GameConfig, pits: usize, seed: u64) -> Result<Self> {
        let dims = config.dimensions;
        let mut state = GameState::with_walls(dims);
        state.set_arrows_per_agent(config.arrows_per_agent);
        let mut arena = Self::new(state, config.clone());

        let mut rng = StdRng::seed_from_u64(seed);
        let kinds = [PropKind::Gold, PropKind::Wumpus]
            .into_iter()
            .chain(std::iter::repeat_n(PropKind::Pit, pits));
        for kind in kinds {
            if let Some(position) = random_interior_cell(&mut rng, dims, arena.start) {
                arena.state.add_prop(kind, position)?;
            }
        }
        Ok(arena)
    }
}

fn random_interior_cell(rng: &mut StdRng, dims: MapDimensions, avoid: Position) -> Option<Position> {
    let (width, height) = (dims.width as i32, dims.height as i32);
    if width < 3 || height < 3 || (width - 2) * (height - 2) < 2 {
        return None;
    }
    loop {
        let position = Position::new(rng.gen_range(1..width - 1), rng.gen_range(1..height - 1));
        if position != avoid {
            return Some(position);
        }
    }
}

/// Average performance of one program family.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub label: String,
    pub mean_score: f64,
}

/// Named factory producing a fresh program per trial.
pub struct Contender<'a> {
    pub label: String,
    pub factory: Box<dyn Fn() -> Box<dyn AgentProgram> + 'a>,
}

impl<'a> Contender<'a> {
    pub fn new<F, P>(label: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> P + 'a,
        P: AgentProgram + 'static,
    {
        Self {
            label: label.into(),
            factory: Box::new(move || Box::new(factory()) as Box<dyn AgentProgram>),
        }
    }
}

/// Runs every contender in the same `n` worlds for up to `steps` ticks each
/// and reports the mean final score per contender.
///
/// The worlds are built once up front; each trial runs on a fresh clone, so
/// every contender faces identical starting conditions.
pub fn compare_programs<E>(
    mut env_factory: E,
    contenders: &[Contender<'_>],
    n: usize,
    steps: u64,
) -> Result<Vec<Comparison>>
where
    E: FnMut(usize) -> Result<Arena>,
{
    let arenas = (0..n).map(&mut env_factory).collect::<Result<Vec<_>>>()?;

    contenders
        .iter()
        .map(|contender| {
            let mean_score = mean_score(contender, &arenas, steps)?;
            info!(
                target: "runtime::harness",
                label = %contender.label,
                worlds = arenas.len(),
                steps,
                mean_score,
                "contender evaluated"
            );
            Ok(Comparison {
                label: contender.label.clone(),
                mean_score,
            })
        })
        .collect()
}

fn mean_score(contender: &Contender<'_>, arenas: &[Arena], steps: u64) -> Result<f64> {
    if arenas.is_empty() {
        return Ok(0.0);
    }

    let mut total = 0i64;
    for arena in arenas {
        let mut sim = Simulation::new(arena.state.clone(), arena.config.clone());
        sim.add_agent((contender.factory)(), arena.start, arena.heading)?;
        total += sim.run(steps)?.score;
    }
    Ok(total as f64 / arenas.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::IdleProgram;
    use crate::providers::{ScriptedProgram, WumpusHunter};
    use wumpus_core::Action;

    fn gold_next_door(_: usize) -> Result<Arena> {
        let mut state = GameState::with_walls(MapDimensions::new(5, 5));
        state.add_prop(PropKind::Gold, Position::new(2, 1))?;
        Ok(Arena::new(state, GameConfig::default()))
    }

    #[test]
    fn contenders_face_identical_worlds() {
        let contenders = [
            Contender::new("idle", || IdleProgram::new("Idle")),
            Contender::new("grabber", || {
                ScriptedProgram::new("Grabber", [Action::Forward, Action::Grab])
            }),
        ];

        let results = compare_programs(gold_next_door, &contenders, 3, 10).unwrap();

        assert_eq!(results[0], Comparison { label: "idle".into(), mean_score: 0.0 });
        assert_eq!(results[1].label, "grabber");
        assert_eq!(results[1].mean_score, 999.0);
    }

    #[test]
    fn random_arenas_are_reproducible_and_keep_start_clear() {
        let config = GameConfig::default();
        let a = Arena::random(&config, 3, 11).unwrap();
        let b = Arena::random(&config, 3, 11).unwrap();
        assert_eq!(a, b);

        assert_eq!(a.state.entities.props_at(a.start).count(), 0);
        let pits = a
            .state
            .entities
            .props
            .iter()
            .filter(|prop| prop.kind == PropKind::Pit)
            .count();
        assert_eq!(pits, 3);
    }

    #[test]
    fn hunter_runs_in_random_arenas() {
        let config = GameConfig::default();
        let contenders = [Contender::new("hunter", WumpusHunter::default)];
        let results =
            compare_programs(|i| Arena::random(&config, 2, i as u64), &contenders, 4, 50).unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].mean_score.is_finite());
    }
}
