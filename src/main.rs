//! Lane Blaster headless demo
//!
//! Runs the simulation under the frame driver with the autopilot producing
//! intents, restarting after each game over.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use lane_blaster::sim::{Arena, Autopilot, GamePhase, GameState};
use lane_blaster::{ConfigError, FrameDriver, GameConfig, SystemClock};

/// Headless Lane Blaster session driven by the autopilot
#[derive(Parser, Debug)]
#[command(name = "lane-blaster")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Arena width
    #[arg(long, default_value_t = lane_blaster::consts::DEFAULT_ARENA_WIDTH)]
    width: f32,

    /// Arena height
    #[arg(long, default_value_t = lane_blaster::consts::DEFAULT_ARENA_HEIGHT)]
    height: f32,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 3600)]
    frames: u64,

    /// Frame pacing (0 = as fast as possible)
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Tuning overrides (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Restarts allowed after game over
    #[arg(long, default_value_t = 3)]
    restarts: u32,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), ConfigError> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    if cli.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let arena = Arena::new(cli.width, cli.height);
    config.validate(&arena)?;

    log::info!(
        "Lane Blaster starting: arena {}x{}, {} frames",
        arena.width,
        arena.height,
        cli.frames
    );

    let clock = SystemClock::new();
    let mut driver = FrameDriver::new(GameState::new(arena, config));
    let pilot = Autopilot::default();
    let frame_time = (cli.fps > 0).then(|| Duration::from_secs_f64(1.0 / cli.fps as f64));

    // No assets to preload headless
    driver.assets_ready();

    let mut restarts_left = cli.restarts;
    let mut runs = Vec::new();
    let mut last_phase = driver.state().phase;

    for _ in 0..cli.frames {
        pilot.steer(driver.state_mut());
        if driver.pump(&clock).is_none() {
            break;
        }

        let phase = driver.state().phase;
        if phase != last_phase && phase == GamePhase::GameOver {
            let score = driver.state().score;
            runs.push(score);
            log::info!("Run {} ended with score {}", runs.len(), score);

            if restarts_left == 0 {
                driver.stop();
                break;
            }
            restarts_left -= 1;
            driver.state_mut().request_restart();
        }
        last_phase = driver.state().phase;

        if let Some(frame_time) = frame_time {
            std::thread::sleep(frame_time);
        }
    }
    driver.stop();

    let snapshot = driver.snapshot();
    if snapshot.phase == GamePhase::Running {
        runs.push(snapshot.score);
    }
    log::info!(
        "Finished after {} frames; scores per run: {:?}",
        driver.frames(),
        runs
    );

    if cli.json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize snapshot: {e}"),
        }
    }

    Ok(())
}
