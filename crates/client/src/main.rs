//! Terminal entry point for the Wumpus World simulation.
mod config;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use config::{ClientConfig, Mode};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wumpus_content::{ConfigLoader, Scenario, ScenarioLoader};
use wumpus_core::GameConfig;
use wumpus_runtime::{
    Arena, Contender, GridRenderer, IdleProgram, RandomProgram, WumpusHunter, build_simulation,
    compare_programs,
};

/// Pits per random world in compare mode.
const COMPARE_PITS: usize = 2;

fn main() -> Result<()> {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    setup_logging(&config.session_id)?;

    let game = load_game_config(&config)?;
    match config.mode {
        Mode::Play => play(&config, &game),
        Mode::Compare => compare(&config, &game),
    }
}

fn load_game_config(config: &ClientConfig) -> Result<GameConfig> {
    let game = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => GameConfig::default(),
    };
    Ok(config.apply_overrides(game))
}

fn load_scenario(name: &str) -> Result<Scenario> {
    match name {
        "classic" => Ok(Scenario::classic()),
        "demo" => Ok(Scenario::demo()),
        path => ScenarioLoader::load(Path::new(path))
            .with_context(|| format!("unknown scenario '{}'", path)),
    }
}

fn play(config: &ClientConfig, game: &GameConfig) -> Result<()> {
    let scenario = load_scenario(&config.scenario)?;
    let mut sim = build_simulation(&scenario, game)?;
    tracing::info!(
        scenario = %config.scenario,
        steps = config.steps,
        "starting episode"
    );

    let mut stdout = std::io::stdout().lock();
    let mut ticks = 0;
    draw(&mut stdout, &GridRenderer::render(sim.state()))?;

    while ticks < config.steps && !sim.is_done() {
        sim.step()?;
        ticks += 1;

        draw(&mut stdout, &GridRenderer::render(sim.state()))?;
        if config.tick_delay_ms > 0 {
            std::thread::sleep(Duration::from_millis(config.tick_delay_ms));
        }
    }

    let summary = sim.summary(ticks)?;
    tracing::info!(
        termination = ?summary.termination,
        score = summary.score,
        steps = summary.steps,
        "episode finished"
    );
    writeln!(stdout, "{}", serde_json::to_string_pretty(&summary)?)?;
    Ok(())
}

/// Clear the screen, return the cursor to the top left, and print a frame.
fn draw(out: &mut impl Write, frame: &str) -> Result<()> {
    write!(out, "\x1b[2J\x1b[H{}", frame)?;
    out.flush()?;
    Ok(())
}

fn compare(config: &ClientConfig, game: &GameConfig) -> Result<()> {
    let contenders = [
        Contender::new("hunter", WumpusHunter::default),
        Contender::new("random", || {
            RandomProgram::with_all_actions("Random", config.compare_runs as u64)
        }),
        Contender::new("idle", || IdleProgram::new("Idle")),
    ];

    let results = compare_programs(
        |index| Arena::random(game, COMPARE_PITS, index as u64),
        &contenders,
        config.compare_runs,
        config.steps,
    )?;

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

/// Sends tracing output to `<cache>/logs/<session>/wumpus.log`.
fn setup_logging(session_id: &Option<String>) -> Result<()> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let log_dir = get_log_directory();

    let session_id = session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "wumpus.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    // The terminal shows the grid, so logs only go to the file.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Flushes for the whole process lifetime.
    std::mem::forget(guard);

    tracing::info!(
        session = %session_id,
        dir = %session_log_dir.display(),
        "logging initialized"
    );

    Ok(())
}

/// Platform cache directory for logs, falling back to the temp directory.
fn get_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "wumpus")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("wumpus").join("logs"))
}
