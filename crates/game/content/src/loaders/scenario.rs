//! Scenario loader.
//!
//! Loads prop and agent placements from scenario RON files.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        let scenario = Self::parse(&content)?;

        tracing::info!(
            path = %path.display(),
            placements = scenario.placements.len(),
            agents = scenario.agents.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    /// Parse a scenario from a RON string.
    ///
    /// Action tokens inside scripted or random programs are deserialized as
    /// [`wumpus_core::Action`] variants, written either as the variant name
    /// (`TurnLeft`) or all lowercase (`turnleft`). Anything else, including
    /// other casings, fails the load instead of silently doing nothing.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ProgramSpec;
    use wumpus_core::{Action, Heading, Position, PropKind};

    const CLASSIC: &str = r#"
        (
            dimensions: (width: 10, height: 10),
            placements: [
                (position: (x: 8, y: 3), kind: Gold),
                (position: (x: 3, y: 8), kind: Wumpus),
                (position: (x: 1, y: 3), kind: Pit),
            ],
            agents: [
                (
                    name: "Explorer",
                    program: Hunter,
                    position: (x: 1, y: 1),
                    heading: East,
                ),
            ],
        )
    "#;

    #[test]
    fn parses_the_classic_layout() {
        let scenario = ScenarioLoader::parse(CLASSIC).unwrap();
        assert_eq!(scenario, Scenario::classic());
        assert!(scenario.walls, "walls default to on");
    }

    #[test]
    fn scripted_programs_carry_parsed_actions() {
        let scenario = ScenarioLoader::parse(
            r#"(
                dimensions: (width: 5, height: 5),
                walls: false,
                agents: [(
                    name: "Bot",
                    program: Scripted(actions: [Forward, TurnLeft, Shoot]),
                    position: (x: 2, y: 2),
                )],
            )"#,
        )
        .unwrap();

        let agent = &scenario.agents[0];
        assert_eq!(agent.heading, Heading::East);
        assert_eq!(agent.position, Position::new(2, 2));
        assert_eq!(
            agent.program,
            ProgramSpec::Scripted {
                actions: vec![Action::Forward, Action::TurnLeft, Action::Shoot]
            }
        );
        assert!(!scenario.walls);
        assert!(scenario.placements.is_empty());
    }

    #[test]
    fn unknown_action_token_fails_the_load() {
        let result = ScenarioLoader::parse(
            r#"(
                dimensions: (width: 5, height: 5),
                agents: [(
                    name: "Bot",
                    program: Scripted(actions: [Suck]),
                    position: (x: 2, y: 2),
                )],
            )"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn lowercase_action_tokens_match_variant_names() {
        let scenario = ScenarioLoader::parse(
            r#"(
                dimensions: (width: 5, height: 5),
                agents: [(
                    name: "Bot",
                    program: Scripted(actions: [forward, turnleft, noop]),
                    position: (x: 2, y: 2),
                )],
            )"#,
        )
        .unwrap();

        let expected: Vec<_> = ["Forward", "TurnLeft", "NoOp"]
            .into_iter()
            .map(|token| Action::parse(token).unwrap())
            .collect();
        assert_eq!(
            scenario.agents[0].program,
            ProgramSpec::Scripted { actions: expected }
        );
    }

    #[test]
    fn mixed_case_action_tokens_fail_the_load() {
        let result = ScenarioLoader::parse(
            r#"(
                dimensions: (width: 5, height: 5),
                agents: [(
                    name: "Bot",
                    program: Scripted(actions: [FORWARD]),
                    position: (x: 2, y: 2),
                )],
            )"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classic.ron");
        std::fs::write(&path, CLASSIC).unwrap();

        let scenario = ScenarioLoader::load(&path).unwrap();
        assert_eq!(scenario.placements[1].kind, PropKind::Wumpus);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = ScenarioLoader::load(Path::new("/nonexistent/scenario.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/scenario.ron"));
    }
}
