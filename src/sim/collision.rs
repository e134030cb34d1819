//! Collision and combat resolution
//!
//! Penetrating bullets against enemies, then player/enemy contact.
//! Iteration is enemies outer, bullets inner, both in insertion order; an
//! entity flagged deleted stops participating immediately. Explosions are
//! queued during iteration and materialized afterward.

use glam::Vec2;

use super::feedback;
use super::palette::Hsl;
use super::state::{GamePhase, GameState};
use crate::consts::*;
use crate::tuning::Mode;

/// Bonus travel distance granted by the k-th penetration (1-indexed).
///
/// `base * decay^(k-1)`: each successive penetration grants a strictly
/// smaller bonus, so bullets exhaust themselves after a few kills instead
/// of traveling forever.
pub fn penetration_bonus(base: f32, decay: f32, penetration_count: u32) -> f32 {
    base * decay.powi(penetration_count as i32 - 1)
}

/// Resolve all combat for the current tick
pub(crate) fn resolve(state: &mut GameState) {
    // Explosion origins collected here; spawning them mid-iteration would
    // alias the entity collections.
    let mut explosions: Vec<(Vec2, Hsl)> = Vec::new();
    let mut crashed = false;

    for ei in 0..state.enemies.len() {
        if state.enemies[ei].deleted {
            continue;
        }

        for bi in 0..state.bullets.len() {
            // A kill earlier in this inner loop ends the enemy's tick
            if state.enemies[ei].deleted {
                break;
            }
            if state.bullets[bi].deleted {
                continue;
            }

            let dist = state.bullets[bi].pos.distance(state.enemies[ei].pos);
            if dist >= state.enemies[ei].radius + state.bullets[bi].radius {
                continue;
            }

            let enemy = &mut state.enemies[ei];
            enemy.hp -= 1;
            if enemy.hp <= 0 {
                enemy.deleted = true;
                explosions.push((enemy.pos, enemy.color));
                state.score += KILL_SCORE;
                state.kills += 1;
            }

            // The bullet passes through; its travel budget is rebased to
            // the hit point plus a decaying bonus
            let bullet = &mut state.bullets[bi];
            bullet.penetration_count += 1;
            let bonus =
                penetration_bonus(POST_HIT_DISTANCE, PENETRATION_DECAY, bullet.penetration_count);
            bullet.max_range = bullet.distance_traveled + bonus;
        }

        let enemy = &state.enemies[ei];
        if enemy.deleted || state.phase != GamePhase::Playing {
            continue;
        }
        let dist = state.player.pos.distance(enemy.pos);
        if dist < state.player.radius * 0.5 + enemy.radius {
            state.phase = GamePhase::GameOver;
            explosions.push((state.player.pos, state.player.color));
            crashed = true;
            log::info!(
                "crashed at T={:.1}s: score={} kills={}",
                state.elapsed_secs(),
                state.score,
                state.kills
            );
        }
    }

    for (pos, color) in explosions {
        feedback::create_explosion(state, pos, color);
    }
    if crashed && state.mode == Mode::Advanced {
        feedback::add_shake(state, 20.0);
    }
}
