//! Enemy palette and hue-rarity color allocation
//!
//! Advanced mode keeps the on-screen hue population balanced: each new
//! enemy's hue is drawn with inverse-frequency weights over the live
//! population, so under-represented hues become more likely. Standard mode
//! is a plain uniform pick with a pastel treatment.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::Enemy;

/// An HSL color: hue in degrees, saturation/lightness in percent.
///
/// Presentation-agnostic; the renderer decides how to realize it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Same hue and saturation at an offset lightness, clamped to [0, 100]
    pub fn with_lightness_offset(self, delta: f32) -> Self {
        Self {
            l: (self.l + delta).clamp(0.0, 100.0),
            ..self
        }
    }
}

/// Neutral bright flare color for advanced-mode bursts
pub const WHITE: Hsl = Hsl::new(0.0, 0.0, 100.0);

/// Fixed enemy hue palette: red, orange, yellow, green, cyan, magenta
pub const ENEMY_HUES: [f32; 6] = [0.0, 30.0, 60.0, 120.0, 180.0, 300.0];

/// Fill, border, and palette index assigned to a new enemy
#[derive(Debug, Clone, Copy)]
pub struct EnemyColor {
    pub fill: Hsl,
    pub border: Hsl,
    pub hue_index: usize,
}

/// Count live enemies per palette hue.
///
/// An out-of-range hue index is counted as the first palette entry rather
/// than dropped or allowed to index out of bounds.
pub fn hue_census(enemies: &[Enemy]) -> [u32; ENEMY_HUES.len()] {
    let mut counts = [0u32; ENEMY_HUES.len()];
    for enemy in enemies {
        let idx = if enemy.hue_index < ENEMY_HUES.len() {
            enemy.hue_index
        } else {
            0
        };
        counts[idx] += 1;
    }
    counts
}

/// Inverse-frequency weights: a hue with count `n` weighs `1/(n+1)`
pub fn rarity_weights(counts: &[u32; ENEMY_HUES.len()]) -> [f32; ENEMY_HUES.len()] {
    let mut weights = [0.0f32; ENEMY_HUES.len()];
    for (w, &count) in weights.iter_mut().zip(counts) {
        *w = 1.0 / (count as f32 + 1.0);
    }
    weights
}

/// Draw an index from `weights` via cumulative-weight search.
///
/// A non-positive total weight falls back to index 0.
pub fn sample_weighted(weights: &[f32], rng: &mut Pcg32) -> usize {
    let total: f32 = weights.iter().sum();
    if total <= 0.0 {
        return 0;
    }
    let mut remaining = rng.random::<f32>() * total;
    for (i, w) in weights.iter().enumerate() {
        remaining -= w;
        if remaining <= 0.0 {
            return i;
        }
    }
    weights.len() - 1
}

/// Uniform pastel pick for standard mode
pub fn standard_color(rng: &mut Pcg32) -> EnemyColor {
    let hue_index = rng.random_range(0..ENEMY_HUES.len());
    let hue = ENEMY_HUES[hue_index];
    EnemyColor {
        fill: Hsl::new(hue, 85.0, 60.0),
        border: Hsl::new(hue, 85.0, 45.0),
        hue_index,
    }
}

/// Rarity-weighted neon pick for advanced mode.
///
/// Lightness is bimodal: 60% bright tier, 40% dark tier. Visual tiering
/// only, no gameplay effect.
pub fn advanced_color(enemies: &[Enemy], rng: &mut Pcg32) -> EnemyColor {
    let counts = hue_census(enemies);
    let weights = rarity_weights(&counts);
    let hue_index = sample_weighted(&weights, rng);
    let hue = ENEMY_HUES[hue_index];

    let lightness = if rng.random_bool(0.6) { 50.0 } else { 35.0 };
    let fill = Hsl::new(hue, 100.0, lightness);
    EnemyColor {
        fill,
        border: fill.with_lightness_offset(-15.0),
        hue_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn enemy_with_hue(hue_index: usize) -> Enemy {
        use crate::consts::{ENEMY_RADIUS, ENEMY_START_HP};
        use glam::Vec2;
        Enemy {
            id: 0,
            pos: Vec2::ZERO,
            radius: ENEMY_RADIUS,
            hp: ENEMY_START_HP,
            hue_index,
            color: WHITE,
            border_color: WHITE,
            deleted: false,
        }
    }

    #[test]
    fn rarity_weights_favor_missing_hues() {
        let enemies: Vec<_> = (0..3).map(|_| enemy_with_hue(0)).collect();
        let weights = rarity_weights(&hue_census(&enemies));
        // Hue 0 has three live enemies; every empty hue must outweigh it.
        for &w in &weights[1..] {
            assert!(w > weights[0]);
        }
        assert_eq!(weights[0], 0.25);
        assert_eq!(weights[1], 1.0);
    }

    #[test]
    fn census_clamps_bad_hue_index() {
        let enemies = vec![enemy_with_hue(999), enemy_with_hue(2)];
        let counts = hue_census(&enemies);
        assert_eq!(counts[0], 1);
        assert_eq!(counts[2], 1);
    }

    #[test]
    fn sample_weighted_honors_forced_weight() {
        let mut rng = Pcg32::seed_from_u64(7);
        let weights = [0.0, 0.0, 1.0, 0.0];
        for _ in 0..50 {
            assert_eq!(sample_weighted(&weights, &mut rng), 2);
        }
    }

    #[test]
    fn sample_weighted_degenerate_falls_back_to_first() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(sample_weighted(&[0.0, 0.0], &mut rng), 0);
    }

    #[test]
    fn standard_color_is_pastel_and_in_palette() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..20 {
            let c = standard_color(&mut rng);
            assert!(c.hue_index < ENEMY_HUES.len());
            assert_eq!(c.fill.s, 85.0);
            assert_eq!(c.fill.l, 60.0);
            assert_eq!(c.border.l, 45.0);
        }
    }

    #[test]
    fn advanced_lightness_is_bimodal() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..50 {
            let c = advanced_color(&[], &mut rng);
            assert!(c.fill.l == 50.0 || c.fill.l == 35.0);
            assert_eq!(c.border.l, c.fill.l - 15.0);
            assert_eq!(c.fill.s, 100.0);
        }
    }
}
