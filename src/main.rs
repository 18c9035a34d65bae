use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use pacman_sim::constants::MILLISECONDS_PER_FRAME;
use pacman_sim::formatter;
use pacman_sim::game::{on_time_elapsed, GameEvent, GameStore};
use pacman_sim::input::KeyScript;
use pacman_sim::logging::setup_logging;
use tracing::{debug, info, warn};

/// Runs the Pac-Man simulation headlessly and reports what happened.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,
    /// Milliseconds between two frames
    #[arg(long, default_value_t = MILLISECONDS_PER_FRAME)]
    frame_ms: u64,
    /// Scripted input, e.g. "0:left,400:up,3000:kill"
    #[arg(long, default_value = "")]
    keys: KeyScript,
    /// Revive Pac-Man as soon as his death animation ends
    #[arg(long)]
    auto_revive: bool,
    /// Pace frames in real time instead of running as fast as possible
    #[arg(long)]
    realtime: bool,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log).context("Could not set up logging")?;

    let mut store = GameStore::new();
    let frame_time = Duration::from_millis(cli.frame_ms);
    let mut previous = None;

    info!(frames = cli.frames, frame_ms = cli.frame_ms, commands = cli.keys.len(), "Starting simulation");
    for frame in 0..cli.frames {
        let start = Instant::now();
        let timestamp = 1 + frame * cli.frame_ms;
        formatter::set_simulation_time(timestamp);

        for command in cli.keys.due(previous, timestamp) {
            debug!(?command, "Applying scripted command");
            command.apply(&mut store);
        }
        previous = Some(timestamp);

        for event in on_time_elapsed(&mut store, timestamp) {
            match event {
                GameEvent::PillEaten { tile, score } => debug!(?tile, score, "Pill eaten"),
                GameEvent::PacManCaught { ghost } => info!(%ghost, "Pac-Man was caught"),
                GameEvent::PacManDied => {
                    info!("Pac-Man died");
                    if cli.auto_revive {
                        store.revive_pac_man();
                    }
                }
            }
        }

        if !store.is_game_running() {
            info!(frame, "Game stopped, ending simulation");
            break;
        }

        if cli.realtime {
            let elapsed = start.elapsed();
            if elapsed < frame_time {
                spin_sleep::sleep(frame_time - elapsed);
            } else {
                warn!("Frame behind schedule by: {:?}", elapsed - frame_time);
            }
        }
    }

    let pac_man = store.pac_man();
    let state = pac_man.state();
    let state: &str = state.as_ref();
    info!(
        score = store.score(),
        state,
        tile = ?pac_man.tile(),
        remaining_pills = store.maze().remaining_pills(),
        "Simulation finished"
    );

    Ok(())
}
