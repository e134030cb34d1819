//! Neon Swarm - a top-down survival shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (difficulty, spawning, collisions, game state)
//! - `tuning`: Data-driven game balance, one table per difficulty mode
//!
//! Rendering, input capture, and frame scheduling belong to the hosting
//! application. The simulation consumes a `TickInput` per frame and exposes
//! its state read-only between ticks.

pub mod sim;
pub mod tuning;

pub use sim::{GamePhase, GameState, TickInput, tick};
pub use tuning::Mode;

use glam::Vec2;

/// Engine configuration constants
pub mod consts {
    /// Player craft radius
    pub const PLAYER_RADIUS: f32 = 10.0;
    /// Fraction of the pointer offset covered each tick (exponential smoothing)
    pub const PLAYER_LERP: f32 = 0.08;
    /// Displacement below which the facing angle holds steady
    pub const PLAYER_TURN_DEADZONE: f32 = 5.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 12.0;
    pub const BULLET_RADIUS: f32 = 3.0;
    /// Margin outside the viewport beyond which bullets are culled
    pub const BULLET_CULL_MARGIN: f32 = 50.0;

    /// Auto-fire pacing (milliseconds)
    pub const FIRE_BASE_INTERVAL_MS: f64 = 400.0;
    pub const FIRE_MIN_INTERVAL_MS: f64 = 100.0;
    /// Bonus travel distance granted by a bullet's first penetration
    pub const POST_HIT_DISTANCE: f32 = 200.0;
    /// Each further penetration grants this fraction of the previous bonus
    pub const PENETRATION_DECAY: f32 = 0.4;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 7.74;
    pub const ENEMY_START_HP: i32 = 1;
    pub const KILL_SCORE: u64 = 10;

    /// Spawn pacing (milliseconds)
    pub const SPAWN_BASE_INTERVAL_MS: f64 = 1200.0;
    pub const SPAWN_MIN_INTERVAL_MS: f64 = 100.0;
    pub const SPAWN_MAX_INTERVAL_MS: f64 = 2000.0;
    /// Safe-zone radius around the player before difficulty shrinks it
    pub const SAFE_ZONE_START: f32 = 600.0;
    pub const SAFE_ZONE_MIN: f32 = 200.0;
    /// Angular sectors used for gap-filling spawn placement
    pub const SPAWN_SECTOR_COUNT: usize = 9;
    /// Distance outside a viewport edge for standard-mode spawns
    pub const EDGE_SPAWN_OFFSET: f32 = 50.0;

    /// Screen shake accumulator cap, per-tick decay, and snap-to-zero floor
    pub const SHAKE_MAX: f32 = 15.0;
    pub const SHAKE_DECAY: f32 = 0.9;
    pub const SHAKE_SNAP: f32 = 0.5;

    /// Player trail length (advanced mode)
    pub const TRAIL_LENGTH: usize = 20;
}

/// Normalize angle to [0, τ)
#[inline]
pub fn positive_angle(mut angle: f32) -> f32 {
    use std::f32::consts::TAU;
    while angle < 0.0 {
        angle += TAU;
    }
    while angle >= TAU {
        angle -= TAU;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
