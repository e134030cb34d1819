//! Per-frame simulation tick
//!
//! The engine's single entry point: advance the session clock, steer the
//! player, fire and spawn, integrate motion, resolve combat, prune the
//! dead. Motion integration is a fixed per-tick displacement; only the
//! spawn/fire pacing consumes the supplied elapsed time, so frame-rate
//! variance changes perceived speed.

use glam::Vec2;

use super::collision;
use super::difficulty;
use super::feedback;
use super::spawn;
use super::state::{Bullet, GamePhase, GameState};
use crate::consts::*;
use crate::polar_to_cartesian;
use crate::tuning::Mode;

/// Input for a single tick, supplied by the hosting frame loop
#[derive(Debug, Clone)]
pub struct TickInput {
    /// Elapsed wall-clock time since the previous tick, in milliseconds
    pub dt_ms: f64,
    /// Pointer target in viewport coordinates
    pub pointer: Vec2,
    /// Current viewport size
    pub viewport: Vec2,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            dt_ms: 1000.0 / 60.0,
            pointer: Vec2::new(640.0, 360.0),
            viewport: Vec2::new(1280.0, 720.0),
        }
    }
}

/// Advance the game state by one frame.
///
/// No-op outside the Playing phase: the menu idles, and game-over freezes
/// the final frame until the host transitions out.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.viewport = input.viewport;
    state.now_ms += input.dt_ms;

    feedback::decay_shake(state);
    if state.mode == Mode::Advanced {
        state.grid_pulse.advance(&mut state.rng);
    }

    // Difficulty inputs freeze at the top of the tick
    let elapsed = state.elapsed_secs();
    let enemy_count = state.enemies.len();
    let enemy_speed = difficulty::enemy_speed(state.mode, elapsed, state.score, enemy_count);

    move_player(state, input.pointer);

    if state.mode == Mode::Advanced {
        state.trail.push(state.player.pos);
        if state.trail.len() > TRAIL_LENGTH {
            state.trail.remove(0);
        }
    }

    auto_fire(state, enemy_count);
    spawn::maybe_spawn(state);

    integrate_bullets(state);
    integrate_enemies(state, enemy_speed);
    integrate_particles(state);

    collision::resolve(state);

    // Deferred removal: flags set anywhere in this tick take effect here,
    // so a flagged entity never acts twice but stays readable until now
    state.enemies.retain(|e| !e.deleted);
    state.bullets.retain(|b| !b.deleted);
    state.particles.retain(|p| !p.deleted);
}

/// Ease the craft toward the pointer and keep it inside the viewport.
///
/// Exponential smoothing, not physical velocity: a fixed fraction of the
/// remaining offset per tick. Facing re-aims only past a small displacement
/// so the craft does not jitter at rest.
fn move_player(state: &mut GameState, pointer: Vec2) {
    let player = &mut state.player;
    let delta = pointer - player.pos;
    player.pos += delta * PLAYER_LERP;

    if delta.length() > PLAYER_TURN_DEADZONE {
        player.angle = delta.y.atan2(delta.x);
    }

    // A viewport smaller than the craft would invert the clamp range
    let min = Vec2::splat(player.radius);
    let max = (state.viewport - Vec2::splat(player.radius)).max(min);
    player.pos = player.pos.clamp(min, max);
}

/// Fire from the craft tip when the crowd-scaled interval has elapsed
fn auto_fire(state: &mut GameState, enemy_count: usize) {
    let interval = difficulty::fire_interval_ms(enemy_count);
    let due = state.last_shot_ms.is_none_or(|t| state.now_ms - t > interval);
    if !due {
        return;
    }

    let tuning = state.mode.tuning();
    let tip = state.player.pos + polar_to_cartesian(state.player.radius, state.player.angle);
    let id = state.next_entity_id();
    state.bullets.push(Bullet {
        id,
        pos: tip,
        vel: polar_to_cartesian(BULLET_SPEED, state.player.angle),
        radius: BULLET_RADIUS,
        color: tuning.bullet_color,
        distance_traveled: 0.0,
        // A fresh bullet can cross the whole screen
        max_range: state.viewport.length(),
        penetration_count: 0,
        deleted: false,
    });
    state.last_shot_ms = Some(state.now_ms);

    if state.mode == Mode::Advanced {
        feedback::add_shake(state, 0.5);
    }
}

/// Constant-velocity step with range and boundary culling
fn integrate_bullets(state: &mut GameState) {
    let viewport = state.viewport;
    for bullet in &mut state.bullets {
        bullet.pos += bullet.vel;
        bullet.distance_traveled += bullet.vel.length();

        // >= so an exhausted bullet dies even on a zero-length step
        if bullet.distance_traveled >= bullet.max_range {
            bullet.deleted = true;
        }
        if bullet.pos.x < -BULLET_CULL_MARGIN
            || bullet.pos.x > viewport.x + BULLET_CULL_MARGIN
            || bullet.pos.y < -BULLET_CULL_MARGIN
            || bullet.pos.y > viewport.y + BULLET_CULL_MARGIN
        {
            bullet.deleted = true;
        }
    }
}

/// Instantaneous re-aim toward the player at the tick's difficulty speed
fn integrate_enemies(state: &mut GameState, speed: f32) {
    let target = state.player.pos;
    for enemy in &mut state.enemies {
        let delta = target - enemy.pos;
        let dist = delta.length();
        // Zero distance would normalize a zero vector; hold position
        if dist > 0.0 {
            enemy.pos += delta / dist * speed;
        }
    }
}

/// Velocity step, multiplicative friction, fixed life decay
fn integrate_particles(state: &mut GameState) {
    let tuning = state.mode.tuning();
    for particle in &mut state.particles {
        particle.pos += particle.vel;
        particle.vel *= tuning.particle_friction;
        particle.life -= tuning.particle_life_decay;
        if particle.life <= 0.0 {
            particle.deleted = true;
        }
    }
}
