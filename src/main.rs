//! Ghost Jump headless driver
//!
//! Loads a level (or the built-in one), plays a scripted input sequence at a
//! fixed rate and prints the final snapshot.

use std::process::ExitCode;

use ghost_jump::consts::SIM_DT;
use ghost_jump::sim::{Level, Outcome, World};
use ghost_jump::{ScreenTable, Tuning};

/// Longest session the driver will simulate (seconds)
const MAX_SECONDS: f64 = 30.0;
/// Seconds between scripted jump presses
const JUMP_INTERVAL: f64 = 0.75;
/// How long each scripted jump is held
const JUMP_HOLD: f64 = 0.3;

fn load_level(path: Option<&str>) -> Result<Level, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let level = Level::from_json(&json)?;
            log::info!("Loaded level from {} ({} obstacles)", path, level.obstacles.len());
            Ok(level)
        }
        None => {
            log::info!("Using built-in level");
            Ok(Level::default_layout())
        }
    }
}

fn run() -> Result<Outcome, Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1);
    let level = load_level(path.as_deref())?;
    let mut world = World::new(level, Tuning::default());
    let mut screens = ScreenTable::new();

    // Hold right the whole session, tapping jump periodically
    world.accelerate(1);

    let ticks = (MAX_SECONDS / SIM_DT) as u64;
    let mut outcome = world.outcome();
    for i in 0..ticks {
        let t = i as f64 * SIM_DT;
        let phase = t % JUMP_INTERVAL;
        if phase < SIM_DT {
            world.jump_start();
        } else if (phase - JUMP_HOLD).abs() < SIM_DT / 2.0 {
            world.jump_end();
        }

        outcome = world.update(SIM_DT, None);
        if let Some(screen) = screens.switch(outcome) {
            log::info!("Screen: {}", screen.as_str());
            if let Some(banner) = screen.banner() {
                println!("{banner}");
            }
        }
        if world.is_terminal() {
            break;
        }
    }

    println!("{}", serde_json::to_string_pretty(&world.snapshot())?);
    Ok(outcome)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Ghost Jump (headless) starting...");

    match run() {
        Ok(outcome) => {
            log::info!("Session ended: {}", outcome.as_str());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
