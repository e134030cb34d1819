//! Explosion bursts and screen shake
//!
//! Combat events feed back into the scene through two channels: radial
//! particle bursts at the event position, and a single shake scalar the
//! renderer reads to jitter its draw transform.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::palette::{self, Hsl};
use super::state::{GameState, Particle};
use crate::consts::*;
use crate::polar_to_cartesian;
use crate::tuning::Mode;

/// Accumulate screen shake, capped at the maximum
pub(crate) fn add_shake(state: &mut GameState, amount: f32) {
    state.screen_shake = (state.screen_shake + amount).min(SHAKE_MAX);
}

/// Geometric per-tick decay, snapped to zero below the threshold
pub(crate) fn decay_shake(state: &mut GameState) {
    if state.screen_shake > 0.0 {
        state.screen_shake *= SHAKE_DECAY;
        if state.screen_shake < SHAKE_SNAP {
            state.screen_shake = 0.0;
        }
    }
}

/// Emit a radial burst of particles at `pos`.
///
/// Particle count, launch speed, and lifetime come from the active mode's
/// tuning table. Advanced mode mixes in neutral white flares and kicks the
/// screen shake.
pub(crate) fn create_explosion(state: &mut GameState, pos: Vec2, color: Hsl) {
    let tuning = state.mode.tuning();

    if state.mode == Mode::Advanced {
        add_shake(state, 4.0);
    }

    for i in 0..tuning.particle_count {
        let angle = TAU / tuning.particle_count as f32 * i as f32;
        let speed =
            state.rng.random::<f32>() * tuning.particle_speed + tuning.particle_speed_floor;

        let particle_color = if tuning.particle_flare_chance > 0.0
            && state.rng.random_bool(tuning.particle_flare_chance)
        {
            palette::WHITE
        } else {
            color
        };

        state.particles.push(Particle {
            pos,
            vel: polar_to_cartesian(speed, angle),
            radius: state.rng.random::<f32>() * 2.0 + 1.0,
            color: particle_color,
            life: 1.0,
            max_life: 1.0,
            deleted: false,
        });
    }
}
