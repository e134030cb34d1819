//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven only by per-tick input (elapsed time, pointer, viewport)
//! - Seeded RNG only
//! - Stable iteration order (by insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod feedback;
pub mod palette;
pub mod spawn;
pub mod state;
pub mod tick;

pub use palette::{ENEMY_HUES, Hsl};
pub use state::{Bullet, Enemy, GamePhase, GameState, GridPulse, Particle, Player};
pub use tick::{TickInput, tick};
