//! Scenario definitions for entity placement and world initialization.
//!
//! A scenario names the grid size, whether the perimeter is walled, which
//! props to place, and which agents to spawn with which program. Agent
//! programs are described by [`ProgramSpec`] and instantiated by the runtime;
//! content never depends on runtime code.

use wumpus_core::{
    Action, EntitySpec, GameConfig, GameState, Heading, MapDimensions, Position, PropKind,
    StateError,
};

/// Prop placement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub position: Position,
    pub kind: PropKind,
}

impl Placement {
    pub fn new(kind: PropKind, x: i32, y: i32) -> Self {
        Self {
            position: Position::new(x, y),
            kind,
        }
    }
}

/// Decision program an agent is spawned with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgramSpec {
    /// The reference wumpus-hunting reflex policy.
    Hunter,
    /// Uniform random choice among `actions`, seeded for reproducibility.
    Random { seed: u64, actions: Vec<Action> },
    /// Replays `actions` in order, then does nothing.
    Scripted { actions: Vec<Action> },
    /// Never acts.
    Idle,
}

/// Agent placement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentPlacement {
    pub name: String,
    pub program: ProgramSpec,
    pub position: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    pub heading: Heading,
}

/// Complete scenario configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub dimensions: MapDimensions,
    /// Line the perimeter with walls before placing anything else.
    #[cfg_attr(feature = "serde", serde(default = "default_walls"))]
    pub walls: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub placements: Vec<Placement>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub agents: Vec<AgentPlacement>,
}

#[cfg(feature = "serde")]
fn default_walls() -> bool {
    true
}

impl Scenario {
    /// The reference hunting scenario: 10x10 walled grid, one hunter at
    /// (1, 1) facing east, gold at (8, 3), the wumpus at (3, 8) and a pit at
    /// (1, 3).
    pub fn classic() -> Self {
        Self {
            dimensions: MapDimensions::new(10, 10),
            walls: true,
            placements: vec![
                Placement::new(PropKind::Gold, 8, 3),
                Placement::new(PropKind::Wumpus, 3, 8),
                Placement::new(PropKind::Pit, 1, 3),
            ],
            agents: vec![AgentPlacement {
                name: "Explorer".to_string(),
                program: ProgramSpec::Hunter,
                position: Position::new(1, 1),
                heading: Heading::East,
            }],
        }
    }

    /// The classic cave with two more gold and a second pit.
    pub fn demo() -> Self {
        let mut scenario = Self::classic();
        scenario.placements = vec![
            Placement::new(PropKind::Gold, 8, 3),
            Placement::new(PropKind::Gold, 3, 4),
            Placement::new(PropKind::Gold, 5, 7),
            Placement::new(PropKind::Wumpus, 3, 8),
            Placement::new(PropKind::Pit, 1, 3),
            Placement::new(PropKind::Pit, 4, 5),
        ];
        scenario
    }

    /// Builds the world described by this scenario, without its agents.
    ///
    /// Agents need programs, which live in the runtime; callers spawn them
    /// from [`Scenario::agents`] after this returns. Scoring and the arrow
    /// allowance come from `config`, the grid size from the scenario.
    pub fn create_initial_state(&self, config: &GameConfig) -> Result<GameState, StateError> {
        let mut state = if self.walls {
            GameState::with_walls(self.dimensions)
        } else {
            GameState::new(self.dimensions)
        };
        state.set_arrows_per_agent(config.arrows_per_agent);

        tracing::debug!(
            width = self.dimensions.width,
            height = self.dimensions.height,
            placements = self.placements.len(),
            agents = self.agents.len(),
            "creating initial state from scenario"
        );

        for placement in &self.placements {
            state.add_entity(
                EntitySpec::from(placement.kind),
                placement.position,
                Heading::default(),
            )?;
        }

        Ok(state)
    }

    /// Scoring config with this scenario's grid size.
    pub fn config(&self, base: &GameConfig) -> GameConfig {
        base.clone().with_dimensions(self.dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_scenario_places_hazards_inside_walls() {
        let state = Scenario::classic()
            .create_initial_state(&GameConfig::default())
            .unwrap();

        assert!(state.entities.find_at(PropKind::Gold, Position::new(8, 3)).is_some());
        assert!(state.entities.find_at(PropKind::Wumpus, Position::new(3, 8)).is_some());
        assert!(state.entities.find_at(PropKind::Pit, Position::new(1, 3)).is_some());
        assert!(state.entities.find_at(PropKind::Wall, Position::new(0, 0)).is_some());
        assert!(state.entities.agents.is_empty());
    }

    #[test]
    fn out_of_bounds_placement_fails_setup() {
        let mut scenario = Scenario::classic();
        scenario.placements.push(Placement::new(PropKind::Pit, 10, 3));

        let err = scenario
            .create_initial_state(&GameConfig::default())
            .unwrap_err();
        assert!(matches!(err, StateError::PositionOutOfBounds { .. }));
    }

    #[test]
    fn arrow_allowance_comes_from_config() {
        let config = GameConfig::default().with_arrows_per_agent(Some(1));
        let state = Scenario::classic().create_initial_state(&config).unwrap();
        assert_eq!(state.arrows_per_agent(), Some(1));
    }
}
