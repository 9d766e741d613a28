use crate::state::MapDimensions;

/// Scoring constants and world provisioning.
///
/// Every score change in an episode is one of these fixed deltas; the score is
/// never recomputed from scratch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Charged for every forward move that actually changes the location.
    pub move_cost: i64,
    /// Charged when an agent walks into a pit or the wumpus.
    pub death_penalty: i64,
    /// Credited for grabbing gold.
    pub gold_reward: i64,
    /// Charged for every shot, hit or miss.
    pub arrow_cost: i64,
    /// Arrows each agent starts with. `None` means an unlimited quiver.
    pub arrows_per_agent: Option<u32>,
    /// Grid size for worlds built from this config.
    pub dimensions: MapDimensions,
}

impl GameConfig {
    pub const DEFAULT_MOVE_COST: i64 = 1;
    pub const DEFAULT_DEATH_PENALTY: i64 = 1000;
    pub const DEFAULT_GOLD_REWARD: i64 = 1000;
    pub const DEFAULT_ARROW_COST: i64 = 10;

    /// Radius within which stench and breeze are sensed.
    pub const SENSE_RADIUS: u32 = 1;

    pub fn new() -> Self {
        Self {
            move_cost: Self::DEFAULT_MOVE_COST,
            death_penalty: Self::DEFAULT_DEATH_PENALTY,
            gold_reward: Self::DEFAULT_GOLD_REWARD,
            arrow_cost: Self::DEFAULT_ARROW_COST,
            arrows_per_agent: None,
            dimensions: MapDimensions::default(),
        }
    }

    pub fn with_dimensions(mut self, dimensions: MapDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_arrows_per_agent(mut self, arrows: Option<u32>) -> Self {
        self.arrows_per_agent = arrows;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
