//! Dynamic difficulty model
//!
//! Pure functions mapping elapsed time, score, kill count, and live-enemy
//! count to enemy speed, spawn pacing, and auto-fire pacing. Advanced mode
//! rides logistic ramps with crowd-based self-regulation; standard mode
//! stays linear. Every output is clamped to its documented band.

use crate::consts::*;
use crate::tuning::Mode;

/// Logistic curve in (0, 1), centered at `center`
#[inline]
fn logistic(x: f32, center: f32, steepness: f32) -> f32 {
    1.0 / (1.0 + (-steepness * (x - center)).exp())
}

/// Enemy movement speed in units per tick.
///
/// Advanced: a sigmoid over `T/60 + S/500` lifts a 2.5 base by a 1x-6x
/// multiplier, then crowd drag `min(0.6, C/150)` damps it; clamp [2, 12].
/// Standard: linear ramp clamped to [1.5, 6].
pub fn enemy_speed(mode: Mode, elapsed_secs: f32, score: u64, enemy_count: usize) -> f32 {
    let t = elapsed_secs;
    let s = score as f32;
    let c = enemy_count as f32;
    match mode {
        Mode::Advanced => {
            let progress = t / 60.0 + s / 500.0;
            let multiplier = 1.0 + 5.0 * logistic(progress, 4.0, 0.8);
            let drag = (c / 150.0).min(0.6);
            (2.5 * multiplier * (1.0 - drag)).clamp(2.0, 12.0)
        }
        Mode::Standard => (2.0 + 0.01 * t + 0.005 * s - 0.02 * c).clamp(1.5, 6.0),
    }
}

/// Advanced-mode difficulty scalar in (1.5, 10.5), over `T/60 + K/50`.
///
/// Feeds both the spawn interval and the safe radius.
pub fn spawn_difficulty(elapsed_secs: f32, kills: u64) -> f32 {
    let input = elapsed_secs / 60.0 + kills as f32 / 50.0;
    1.5 + 9.0 * logistic(input, 4.0, 0.5)
}

/// Milliseconds between enemy spawns.
///
/// Advanced divides a 1200 ms base by the difficulty scalar, then inflates
/// it by a cubic crowd penalty `2 * max(0, C-10)^3`; clamp [100, 2000].
/// Standard decays linearly from 2000 ms toward a 500 ms floor.
pub fn spawn_interval_ms(mode: Mode, elapsed_secs: f32, kills: u64, enemy_count: usize) -> f64 {
    match mode {
        Mode::Advanced => {
            let difficulty = spawn_difficulty(elapsed_secs, kills) as f64;
            let crowd = enemy_count.saturating_sub(10) as f64;
            let penalty = 2.0 * crowd.powi(3);
            (SPAWN_BASE_INTERVAL_MS / difficulty + penalty)
                .clamp(SPAWN_MIN_INTERVAL_MS, SPAWN_MAX_INTERVAL_MS)
        }
        Mode::Standard => (2000.0 - 10.0 * elapsed_secs as f64).max(500.0),
    }
}

/// Milliseconds between auto-fire shots, mode-independent.
///
/// Firing accelerates logarithmically with crowd size, floored at the
/// minimum interval.
pub fn fire_interval_ms(enemy_count: usize) -> f64 {
    let rate = 1.0 + 0.3 * (enemy_count as f64 + 1.0).ln();
    (FIRE_BASE_INTERVAL_MS / rate).max(FIRE_MIN_INTERVAL_MS)
}

/// Safe-zone radius around the player for advanced spawns.
///
/// Shrinks as difficulty rises, never below the floor.
pub fn safe_radius(difficulty: f32) -> f32 {
    (SAFE_ZONE_START - difficulty * 20.0).max(SAFE_ZONE_MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn standard_baseline_at_session_start() {
        assert_eq!(enemy_speed(Mode::Standard, 0.0, 0, 0), 2.0);
        assert_eq!(spawn_interval_ms(Mode::Standard, 0.0, 0, 0), 2000.0);
    }

    #[test]
    fn standard_speed_saturates_both_ways() {
        // A long, high-scoring run pins the ceiling
        assert_eq!(enemy_speed(Mode::Standard, 3600.0, 10_000, 0), 6.0);
        // A huge crowd pins the floor
        assert_eq!(enemy_speed(Mode::Standard, 0.0, 0, 1000), 1.5);
    }

    #[test]
    fn advanced_speed_ramps_with_progress() {
        let early = enemy_speed(Mode::Advanced, 0.0, 0, 0);
        let late = enemy_speed(Mode::Advanced, 600.0, 5000, 0);
        assert!(late > early);
        assert!(late <= 12.0);
    }

    #[test]
    fn crowd_drag_slows_advanced_enemies() {
        let sparse = enemy_speed(Mode::Advanced, 300.0, 2000, 0);
        let crowded = enemy_speed(Mode::Advanced, 300.0, 2000, 90);
        assert!(crowded < sparse);
    }

    #[test]
    fn spawn_difficulty_stays_in_band() {
        assert!(spawn_difficulty(0.0, 0) > 1.5);
        assert!(spawn_difficulty(0.0, 0) < 10.5);
        // The logistic saturates to exactly 1.0 in f32 far past the center
        assert!(spawn_difficulty(1e6, 1_000_000) <= 10.5);
    }

    #[test]
    fn crowd_penalty_inflates_advanced_interval() {
        let calm = spawn_interval_ms(Mode::Advanced, 60.0, 10, 5);
        let packed = spawn_interval_ms(Mode::Advanced, 60.0, 10, 18);
        assert!(packed > calm);
        assert_eq!(spawn_interval_ms(Mode::Advanced, 60.0, 10, 500), 2000.0);
    }

    #[test]
    fn standard_interval_floors_at_500ms() {
        assert_eq!(spawn_interval_ms(Mode::Standard, 1e4, 0, 0), 500.0);
    }

    #[test]
    fn fire_interval_base_and_floor() {
        // ln(1) = 0, so an empty field fires at the base interval
        assert_eq!(fire_interval_ms(0), 400.0);
        assert!(fire_interval_ms(10) < 400.0);
        assert_eq!(fire_interval_ms(usize::MAX / 2), 100.0);
    }

    #[test]
    fn safe_radius_shrinks_to_floor() {
        assert_eq!(safe_radius(0.0), 600.0);
        assert!(safe_radius(5.0) < 600.0);
        assert_eq!(safe_radius(100.0), 200.0);
    }

    proptest! {
        #[test]
        fn advanced_interval_always_clamped(
            t in 0.0f32..1e5,
            k in 0u64..1_000_000,
            c in 0usize..10_000,
        ) {
            let ms = spawn_interval_ms(Mode::Advanced, t, k, c);
            prop_assert!((100.0..=2000.0).contains(&ms));
        }

        #[test]
        fn standard_speed_always_clamped(
            t in 0.0f32..1e5,
            s in 0u64..1_000_000,
            c in 0usize..10_000,
        ) {
            let v = enemy_speed(Mode::Standard, t, s, c);
            prop_assert!((1.5..=6.0).contains(&v));
        }

        #[test]
        fn advanced_speed_always_clamped(
            t in 0.0f32..1e5,
            s in 0u64..1_000_000,
            c in 0usize..10_000,
        ) {
            let v = enemy_speed(Mode::Advanced, t, s, c);
            prop_assert!((2.0..=12.0).contains(&v));
        }
    }
}
