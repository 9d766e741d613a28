//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use wumpus_core::GameConfig;

/// What the binary does once configured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    /// Run one scenario and draw every tick.
    #[default]
    Play,
    /// Average the bundled programs over random worlds.
    Compare,
}

/// Configuration for one client session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub mode: Mode,
    /// Scenario RON file, or the name of a built-in scenario.
    pub scenario: String,
    /// Scoring TOML file; built-in defaults when unset.
    pub config_path: Option<PathBuf>,
    pub steps: u64,
    pub tick_delay_ms: u64,
    pub compare_runs: usize,
    /// Overrides the arrow allowance from the scoring file.
    pub arrows_per_agent: Option<u32>,
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Play,
            scenario: "classic".to_string(),
            config_path: None,
            steps: 100,
            tick_delay_ms: 0,
            compare_runs: 10,
            arrows_per_agent: None,
            session_id: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WUMPUS_MODE` - `play` or `compare` (default: play)
    /// - `WUMPUS_SCENARIO` - RON path or built-in name `classic`/`demo` (default: classic)
    /// - `WUMPUS_CONFIG` - scoring TOML path (default: built-in values)
    /// - `WUMPUS_STEPS` - tick budget per episode (default: 100)
    /// - `WUMPUS_TICK_DELAY_MS` - pause between rendered ticks (default: 0)
    /// - `WUMPUS_COMPARE_RUNS` - worlds per contender in compare mode (default: 10)
    /// - `WUMPUS_ARROWS` - arrows per agent; unset keeps the scoring file value
    /// - `WUMPUS_SESSION_ID` - log directory name (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(mode) = read_env::<Mode>("WUMPUS_MODE") {
            config.mode = mode;
        }
        if let Ok(scenario) = env::var("WUMPUS_SCENARIO") {
            config.scenario = scenario;
        }
        config.config_path = env::var("WUMPUS_CONFIG").ok().map(PathBuf::from);

        if let Some(steps) = read_env::<u64>("WUMPUS_STEPS") {
            config.steps = steps;
        }
        if let Some(delay) = read_env::<u64>("WUMPUS_TICK_DELAY_MS") {
            config.tick_delay_ms = delay;
        }
        if let Some(runs) = read_env::<usize>("WUMPUS_COMPARE_RUNS") {
            config.compare_runs = runs.max(1);
        }
        config.arrows_per_agent = read_env::<u32>("WUMPUS_ARROWS");
        config.session_id = env::var("WUMPUS_SESSION_ID").ok();

        config
    }

    /// Applies environment overrides on top of a loaded scoring config.
    pub fn apply_overrides(&self, mut game: GameConfig) -> GameConfig {
        if let Some(arrows) = self.arrows_per_agent {
            game.arrows_per_agent = Some(arrows);
        }
        game
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_tokens_are_case_insensitive() {
        assert_eq!("play".parse::<Mode>().unwrap(), Mode::Play);
        assert_eq!("Compare".parse::<Mode>().unwrap(), Mode::Compare);
        assert!("replay".parse::<Mode>().is_err());
    }

    #[test]
    fn arrow_override_only_applies_when_set() {
        let base = GameConfig::default().with_arrows_per_agent(Some(3));

        let untouched = ClientConfig::default().apply_overrides(base.clone());
        assert_eq!(untouched.arrows_per_agent, Some(3));

        let client = ClientConfig {
            arrows_per_agent: Some(1),
            ..ClientConfig::default()
        };
        assert_eq!(client.apply_overrides(base).arrows_per_agent, Some(1));
    }
}
