//! Data-driven game balance
//!
//! Two parallel constant tables, one per difficulty mode. A mode is chosen
//! when a session starts and its table is held for the whole session, so
//! hot loops never re-derive balance values.

use serde::{Deserialize, Serialize};

use crate::sim::palette::Hsl;

/// Difficulty mode, selected at session start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Linear ramps, pastel palette, edge spawning
    #[default]
    Standard,
    /// Sigmoid ramps, neon palette, density-aware spawning around the player
    Advanced,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Standard => "standard",
            Mode::Advanced => "advanced",
        }
    }

    /// Balance table for this mode
    pub fn tuning(self) -> &'static ModeTuning {
        match self {
            Mode::Standard => &STANDARD,
            Mode::Advanced => &ADVANCED,
        }
    }
}

/// Per-mode balance table
#[derive(Debug, Clone, Copy)]
pub struct ModeTuning {
    /// Particles per explosion burst
    pub particle_count: u32,
    /// Upper bound of the random particle launch speed
    pub particle_speed: f32,
    /// Launch speed added to every burst particle
    pub particle_speed_floor: f32,
    /// Multiplicative velocity damping per tick
    pub particle_friction: f32,
    /// Life subtracted per tick
    pub particle_life_decay: f32,
    /// Chance a burst particle is forced to neutral white
    pub particle_flare_chance: f64,
    pub player_color: Hsl,
    pub bullet_color: Hsl,
}

/// Standard mode: casual pacing, muted craft on a light field
pub const STANDARD: ModeTuning = ModeTuning {
    particle_count: 12,
    particle_speed: 5.0,
    particle_speed_floor: 0.0,
    particle_friction: 0.95,
    particle_life_decay: 0.03,
    particle_flare_chance: 0.0,
    // #2d3436 dark slate
    player_color: Hsl::new(193.0, 9.0, 19.0),
    bullet_color: Hsl::new(193.0, 9.0, 19.0),
};

/// Advanced mode: harder bursts, white craft and cyan fire for the glow pass
pub const ADVANCED: ModeTuning = ModeTuning {
    particle_count: 25,
    particle_speed: 8.0,
    particle_speed_floor: 2.0,
    particle_friction: 0.92,
    particle_life_decay: 0.04,
    particle_flare_chance: 0.3,
    player_color: Hsl::new(0.0, 0.0, 100.0),
    // #00ffff cyan
    bullet_color: Hsl::new(180.0, 100.0, 50.0),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_selects_matching_table() {
        assert_eq!(Mode::Standard.tuning().particle_count, 12);
        assert_eq!(Mode::Advanced.tuning().particle_count, 25);
    }

    #[test]
    fn advanced_bursts_are_hotter() {
        let standard = Mode::Standard.tuning();
        let advanced = Mode::Advanced.tuning();
        assert!(advanced.particle_speed > standard.particle_speed);
        assert!(advanced.particle_life_decay > standard.particle_life_decay);
        assert!(advanced.particle_flare_chance > 0.0);
        assert_eq!(standard.particle_flare_chance, 0.0);
    }
}
