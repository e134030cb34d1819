//! Headless demo driver
//!
//! Stands in for the real frame-scheduling/rendering host: feeds the
//! simulation scripted pointer input at a fixed 60 Hz, logs session events,
//! and prints a JSON run summary when the run ends.
//!
//! Usage: neon-swarm [seed] [standard|advanced]

use glam::Vec2;
use serde::Serialize;

use neon_swarm::sim::{GamePhase, GameState, TickInput, tick};
use neon_swarm::tuning::Mode;

/// Simulated viewport for headless runs
const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);
/// Two minutes at 60 Hz
const MAX_TICKS: u64 = 60 * 120;

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    mode: &'static str,
    ticks: u64,
    elapsed_secs: f32,
    score: u64,
    kills: u64,
    crashed: bool,
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    let mode = match args.next().as_deref() {
        Some("advanced") => Mode::Advanced,
        _ => Mode::Standard,
    };

    let mut state = GameState::new(seed, VIEWPORT);
    state.start(mode);

    let center = VIEWPORT * 0.5;
    let dt_ms = 1000.0 / 60.0;
    let mut ticks = 0;

    while ticks < MAX_TICKS {
        // Circle the pointer around the center so the craft keeps strafing
        let t = ticks as f32 * 0.02;
        let pointer = center + Vec2::new(t.cos(), t.sin()) * 240.0;
        tick(&mut state, &TickInput {
            dt_ms,
            pointer,
            viewport: VIEWPORT,
        });
        ticks += 1;

        if state.phase == GamePhase::GameOver {
            break;
        }
        if ticks % (60 * 10) == 0 {
            log::info!(
                "T={:.0}s score={} enemies={} shake={:.1}",
                state.elapsed_secs(),
                state.score,
                state.enemies.len(),
                state.screen_shake
            );
        }
    }

    let summary = RunSummary {
        seed,
        mode: mode.as_str(),
        ticks,
        elapsed_secs: state.elapsed_secs(),
        score: state.score,
        kills: state.kills,
        crashed: state.phase == GamePhase::GameOver,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("summary serialization failed: {err}"),
    }
}
