//! Vector Rocks headless demo driver
//!
//! Runs a seeded autoplay session at a fixed 60 Hz cadence and reports the
//! outcome. The simulation core is renderer-free; this binary stands in for
//! the frame driver a real front end would provide.
//!
//! Usage: `vector-rocks [--seed N] [--dump]`

use std::env;
use std::process::ExitCode;

use log::{error, info};

use vector_rocks::sim::{GamePhase, GameState, TickInput, tick};

/// Demo frame cadence (seconds)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after this much simulated time if the autopilot survives
const MAX_SESSION_SECS: f32 = 120.0;

fn main() -> ExitCode {
    env_logger::init();

    let mut seed: u64 = 0xC0FFEE;
    let mut dump = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dump" => dump = true,
            "--seed" => {
                let Some(value) = args.next() else {
                    error!("--seed requires a value");
                    return ExitCode::FAILURE;
                };
                match value.parse() {
                    Ok(parsed) => seed = parsed,
                    Err(e) => {
                        error!("invalid seed {value:?}: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            }
            other => {
                error!("unknown argument {other:?}");
                return ExitCode::FAILURE;
            }
        }
    }

    info!("starting session with seed {seed}");
    let mut state = GameState::new(seed);

    let mut frame: u64 = 0;
    while state.phase == GamePhase::Running && state.elapsed < MAX_SESSION_SECS {
        let input = autopilot(frame);
        tick(&mut state, &input, FRAME_DT);
        frame += 1;
    }

    match state.phase {
        GamePhase::GameOver => info!(
            "game over after {:.2}s: {} asteroids live, {} shots in flight",
            state.elapsed,
            state.asteroids.len(),
            state.shots.len()
        ),
        GamePhase::Running => info!(
            "autopilot survived the full {:.0}s session ({} entities drawable)",
            MAX_SESSION_SECS,
            state.drawables().len()
        ),
    }

    if dump {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("failed to serialize final state: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Scripted input: sweep the facing back and forth, pulse the thruster and
/// hold fire. Not clever, just enough to exercise every input path.
fn autopilot(frame: u64) -> TickInput {
    TickInput {
        rotate_right: frame % 240 < 120,
        rotate_left: frame % 240 >= 120,
        thrust_forward: frame % 180 < 45,
        thrust_backward: false,
        fire: true,
    }
}
