//! Game state and simulated entity types
//!
//! Everything a session owns lives here: the entity collections, the session
//! counters, and the phase machine with its control surface. State is
//! serializable so a host can snapshot and restore a run.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::palette::Hsl;
use crate::consts::*;
use crate::tuning::Mode;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle; ticks perform no work
    Menu,
    /// Active gameplay
    Playing,
    /// Player crashed; physics, spawning, and collision stop until a
    /// transition out
    GameOver,
}

/// The player craft. One per session, steered by the pointer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Facing angle in radians; only re-aims past a small displacement
    pub angle: f32,
    pub color: Hsl,
}

impl Player {
    pub fn new(pos: Vec2, color: Hsl) -> Self {
        Self {
            pos,
            radius: PLAYER_RADIUS,
            // Face up until the pointer says otherwise
            angle: -std::f32::consts::FRAC_PI_2,
            color,
        }
    }
}

/// A pursuing enemy.
///
/// Enemies carry no stored velocity: they re-aim toward the player every
/// tick and move at the tick's difficulty speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub hp: i32,
    /// Index into the fixed hue palette, tracked for rarity weighting
    pub hue_index: usize,
    pub color: Hsl,
    pub border_color: Hsl,
    pub deleted: bool,
}

/// A player bullet. Penetrates kills with a decaying range bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Hsl,
    /// Cumulative Euclidean distance, never decreases
    pub distance_traveled: f32,
    /// Current travel budget; rebased past the hit point on each penetration
    pub max_range: f32,
    /// Enemies already passed through
    pub penetration_count: u32,
    pub deleted: bool,
}

/// A short-lived explosion particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Hsl,
    /// Remaining life in [0, 1]
    pub life: f32,
    pub max_life: f32,
    pub deleted: bool,
}

/// Slowly drifting background-grid intensity (advanced mode).
///
/// Eases toward a target; when it gets close, a new target and easing speed
/// are re-picked so the pulse never settles into a fixed rhythm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridPulse {
    pub value: f32,
    target: f32,
    speed: f32,
}

impl Default for GridPulse {
    fn default() -> Self {
        Self {
            value: 0.07,
            target: 0.12,
            speed: 0.001,
        }
    }
}

impl GridPulse {
    pub fn advance(&mut self, rng: &mut Pcg32) {
        use rand::Rng;
        if (self.value - self.target).abs() < 0.005 {
            self.target = 0.05 + rng.random::<f32>() * 0.15;
            self.speed = 0.001 + rng.random::<f32>() * 0.004;
        }
        if self.value < self.target {
            self.value += self.speed;
        } else {
            self.value -= self.speed;
        }
    }
}

/// Complete session state (deterministic, serializable).
///
/// The host reads this between ticks; nothing outside the simulation
/// mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; every random draw flows through here
    pub rng: Pcg32,
    pub mode: Mode,
    pub phase: GamePhase,
    /// Session clock in milliseconds, accumulated from tick input
    pub now_ms: f64,
    /// Clock value captured when the current session started
    pub start_ms: f64,
    pub score: u64,
    pub kills: u64,
    /// Timestamp of the last shot; `None` means a shot is due now
    pub last_shot_ms: Option<f64>,
    /// Timestamp of the last spawn; `None` means a spawn is due now
    pub last_spawn_ms: Option<f64>,
    /// Viewport size, refreshed from tick input
    pub viewport: Vec2,
    pub player: Player,
    /// Live enemies in insertion order (stable for determinism)
    pub enemies: Vec<Enemy>,
    /// Live bullets in insertion order
    pub bullets: Vec<Bullet>,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: Vec<Particle>,
    /// Screen-shake magnitude, read by the renderer to jitter its transform
    pub screen_shake: f32,
    /// Recent player positions, newest last (advanced mode)
    #[serde(skip)]
    pub trail: Vec<Vec2>,
    /// Background grid intensity (advanced mode)
    pub grid_pulse: GridPulse,
    next_id: u32,
}

impl GameState {
    /// Create a state in the menu phase with the given seed and viewport
    pub fn new(seed: u64, viewport: Vec2) -> Self {
        let mode = Mode::default();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            mode,
            phase: GamePhase::Menu,
            now_ms: 0.0,
            start_ms: 0.0,
            score: 0,
            kills: 0,
            last_shot_ms: None,
            last_spawn_ms: None,
            viewport,
            player: Player::new(viewport * 0.5, mode.tuning().player_color),
            enemies: Vec::new(),
            bullets: Vec::new(),
            particles: Vec::new(),
            screen_shake: 0.0,
            trail: Vec::new(),
            grid_pulse: GridPulse::default(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID (monotonic, backs insertion-order iteration)
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Seconds since the current session started
    pub fn elapsed_secs(&self) -> f32 {
        ((self.now_ms - self.start_ms) / 1000.0) as f32
    }

    /// Start a session in the given mode.
    ///
    /// Resets all session-scoped state atomically: collections empty, score
    /// and kill counters zeroed, player re-centered and re-oriented, shot
    /// and spawn timers cleared so the first tick fires and spawns. The RNG
    /// stream continues across restarts; determinism is anchored at
    /// construction.
    pub fn start(&mut self, mode: Mode) {
        self.mode = mode;
        self.phase = GamePhase::Playing;
        self.player = Player::new(self.viewport * 0.5, mode.tuning().player_color);
        self.enemies.clear();
        self.bullets.clear();
        self.particles.clear();
        self.trail.clear();
        self.screen_shake = 0.0;
        self.grid_pulse = GridPulse::default();
        self.score = 0;
        self.kills = 0;
        self.last_shot_ms = None;
        self.last_spawn_ms = None;
        self.start_ms = self.now_ms;
        log::info!("session start: mode={} seed={}", mode.as_str(), self.seed);
    }

    /// Retry in the same mode
    pub fn restart(&mut self) {
        self.start(self.mode);
    }

    /// Abandon the session and go idle. Idempotent.
    pub fn return_to_menu(&mut self) {
        self.phase = GamePhase::Menu;
        self.enemies.clear();
        self.bullets.clear();
        self.particles.clear();
        self.trail.clear();
        log::info!("returned to menu");
    }
}
