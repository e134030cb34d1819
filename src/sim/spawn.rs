//! Spawn director
//!
//! Emits at most one enemy per tick, once the difficulty-driven interval
//! has elapsed. Standard mode drops enemies just outside a random viewport
//! edge. Advanced mode places them on a ring around the player, outside a
//! shrinking safe radius, biased toward the emptiest angular sector so the
//! enemy ring cannot degenerate into clumps.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::difficulty;
use super::palette;
use super::state::{Enemy, GameState};
use crate::consts::*;
use crate::tuning::Mode;
use crate::{polar_to_cartesian, positive_angle};

/// Chance that an advanced spawn targets the least-populated sector
const GAP_FILL_CHANCE: f64 = 0.3;

/// Spawn one enemy if the pacing interval has elapsed
pub(crate) fn maybe_spawn(state: &mut GameState) {
    let interval = difficulty::spawn_interval_ms(
        state.mode,
        state.elapsed_secs(),
        state.kills,
        state.enemies.len(),
    );
    let due = state
        .last_spawn_ms
        .is_none_or(|t| state.now_ms - t > interval);
    if !due {
        return;
    }

    let pos = match state.mode {
        Mode::Standard => edge_spawn_pos(state.viewport, &mut state.rng),
        Mode::Advanced => {
            let difficulty = difficulty::spawn_difficulty(state.elapsed_secs(), state.kills);
            ring_spawn_pos(state.player.pos, &state.enemies, difficulty, &mut state.rng)
        }
    };

    let color = match state.mode {
        Mode::Standard => palette::standard_color(&mut state.rng),
        Mode::Advanced => palette::advanced_color(&state.enemies, &mut state.rng),
    };

    let id = state.next_entity_id();
    state.enemies.push(Enemy {
        id,
        pos,
        radius: ENEMY_RADIUS,
        hp: ENEMY_START_HP,
        hue_index: color.hue_index,
        color: color.fill,
        border_color: color.border,
        deleted: false,
    });
    state.last_spawn_ms = Some(state.now_ms);
}

/// Uniform pick of one of the four viewport edges, placed just outside it
fn edge_spawn_pos(viewport: Vec2, rng: &mut Pcg32) -> Vec2 {
    match rng.random_range(0..4) {
        0 => Vec2::new(rng.random::<f32>() * viewport.x, -EDGE_SPAWN_OFFSET),
        1 => Vec2::new(viewport.x + EDGE_SPAWN_OFFSET, rng.random::<f32>() * viewport.y),
        2 => Vec2::new(rng.random::<f32>() * viewport.x, viewport.y + EDGE_SPAWN_OFFSET),
        _ => Vec2::new(-EDGE_SPAWN_OFFSET, rng.random::<f32>() * viewport.y),
    }
}

/// Density-aware ring placement around the player.
///
/// With a fixed probability the angle lands inside the least-populated
/// sector (gap filling); otherwise it is fully uniform. Distance is the
/// safe radius plus 100 plus up to 200 more.
fn ring_spawn_pos(
    player_pos: Vec2,
    enemies: &[Enemy],
    difficulty: f32,
    rng: &mut Pcg32,
) -> Vec2 {
    let safe = difficulty::safe_radius(difficulty);
    let sector_size = TAU / SPAWN_SECTOR_COUNT as f32;

    let angle = if rng.random_bool(GAP_FILL_CHANCE) {
        let counts = sector_census(enemies, player_pos);
        let sector = least_populated_sector(&counts);
        sector as f32 * sector_size + rng.random::<f32>() * sector_size
    } else {
        rng.random::<f32>() * TAU
    };

    let dist = safe + 100.0 + rng.random::<f32>() * 200.0;
    player_pos + polar_to_cartesian(dist, angle)
}

/// Count live enemies per angular sector by their bearing from the player
pub fn sector_census(enemies: &[Enemy], player_pos: Vec2) -> [u32; SPAWN_SECTOR_COUNT] {
    let sector_size = TAU / SPAWN_SECTOR_COUNT as f32;
    let mut counts = [0u32; SPAWN_SECTOR_COUNT];
    for enemy in enemies {
        let offset = enemy.pos - player_pos;
        let bearing = positive_angle(offset.y.atan2(offset.x));
        // Float edge: a bearing of exactly τ-ε can round onto the boundary
        let idx = ((bearing / sector_size) as usize).min(SPAWN_SECTOR_COUNT - 1);
        counts[idx] += 1;
    }
    counts
}

/// Index of the sector with the fewest enemies; ties go to the lowest index
pub fn least_populated_sector(counts: &[u32; SPAWN_SECTOR_COUNT]) -> usize {
    let mut best = 0;
    let mut best_count = u32::MAX;
    for (idx, &count) in counts.iter().enumerate() {
        if count < best_count {
            best_count = count;
            best = idx;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::palette::WHITE;
    use rand::SeedableRng;

    fn enemy_at(pos: Vec2) -> Enemy {
        Enemy {
            id: 0,
            pos,
            radius: ENEMY_RADIUS,
            hp: ENEMY_START_HP,
            hue_index: 0,
            color: WHITE,
            border_color: WHITE,
            deleted: false,
        }
    }

    #[test]
    fn census_buckets_by_bearing() {
        let player = Vec2::new(100.0, 100.0);
        // Due east: bearing 0, sector 0. 100 degrees: sector 2 of 40-degree
        // sectors.
        let enemies = vec![
            enemy_at(player + Vec2::new(50.0, 0.0)),
            enemy_at(player + polar_to_cartesian(80.0, 100f32.to_radians())),
        ];
        let counts = sector_census(&enemies, player);
        assert_eq!(counts[0], 1);
        assert_eq!(counts[2], 1);
        assert_eq!(counts.iter().sum::<u32>(), 2);
    }

    #[test]
    fn census_handles_enemy_on_top_of_player() {
        let player = Vec2::new(100.0, 100.0);
        let enemies = vec![enemy_at(player)];
        // atan2(0, 0) is 0; the enemy lands in sector 0 instead of panicking
        let counts = sector_census(&enemies, player);
        assert_eq!(counts[0], 1);
    }

    #[test]
    fn least_populated_prefers_lowest_index_on_ties() {
        let mut counts = [3u32; SPAWN_SECTOR_COUNT];
        counts[4] = 1;
        counts[7] = 1;
        assert_eq!(least_populated_sector(&counts), 4);
        assert_eq!(least_populated_sector(&[0; SPAWN_SECTOR_COUNT]), 0);
    }

    #[test]
    fn edge_spawns_land_outside_the_viewport() {
        let viewport = Vec2::new(800.0, 600.0);
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..100 {
            let pos = edge_spawn_pos(viewport, &mut rng);
            let outside =
                pos.x < 0.0 || pos.x > viewport.x || pos.y < 0.0 || pos.y > viewport.y;
            assert!(outside, "spawn {pos:?} landed inside the viewport");
        }
    }

    #[test]
    fn ring_spawns_respect_the_safe_radius() {
        let player = Vec2::new(400.0, 300.0);
        let mut rng = Pcg32::seed_from_u64(11);
        let difficulty = 5.0;
        let safe = difficulty::safe_radius(difficulty);
        for _ in 0..100 {
            let pos = ring_spawn_pos(player, &[], difficulty, &mut rng);
            let dist = pos.distance(player);
            assert!(dist >= safe + 100.0 - 1e-3);
            assert!(dist <= safe + 300.0 + 1e-3);
        }
    }

    #[test]
    fn first_spawn_is_due_immediately() {
        let mut state = GameState::new(3, Vec2::new(800.0, 600.0));
        state.start(crate::tuning::Mode::Standard);
        maybe_spawn(&mut state);
        assert_eq!(state.enemies.len(), 1);
        let enemy = &state.enemies[0];
        assert_eq!(enemy.hp, ENEMY_START_HP);
        assert_eq!(enemy.radius, ENEMY_RADIUS);
        assert!(enemy.hue_index < palette::ENEMY_HUES.len());

        // No time has passed, so a second call must not spawn
        maybe_spawn(&mut state);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn spawn_waits_for_the_interval() {
        let mut state = GameState::new(3, Vec2::new(800.0, 600.0));
        state.start(crate::tuning::Mode::Standard);
        maybe_spawn(&mut state);
        assert_eq!(state.enemies.len(), 1);

        // Standard interval at T=0 is 2000 ms
        state.now_ms += 1900.0;
        maybe_spawn(&mut state);
        assert_eq!(state.enemies.len(), 1);

        state.now_ms += 200.0;
        maybe_spawn(&mut state);
        assert_eq!(state.enemies.len(), 2);
    }
}
