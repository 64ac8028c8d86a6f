//! Spawn context for particle initialization.
//!
//! Wraps a seedable RNG with the helpers the particle pool needs, so that
//! a fixed seed reproduces the same pool exactly.

use crate::surface::Viewport;
use crate::visuals::hsl_to_rgb;
use crate::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Random source handed to the particle spawner.
///
/// ```ignore
/// let mut ctx = SpawnContext::seeded(42, 100, Viewport::new(800.0, 600.0));
/// let position = ctx.random_in_viewport();
/// let color = ctx.hsl(ctx.random_range(180.0, 240.0), 1.0, 0.5);
/// ```
pub struct SpawnContext {
    /// Index of the particle being spawned (0 to count-1).
    pub index: u32,
    /// Total number of particles being spawned.
    pub count: u32,
    /// Viewport the particles are spawned into.
    pub viewport: Viewport,
    seed: Option<u64>,
    rng: SmallRng,
}

impl SpawnContext {
    /// Deterministic context: the same seed always yields the same draws.
    pub fn seeded(seed: u64, count: u32, viewport: Viewport) -> Self {
        Self {
            index: 0,
            count,
            viewport,
            seed: Some(seed),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Context seeded from OS entropy, different each run.
    pub fn from_entropy(count: u32, viewport: Viewport) -> Self {
        Self {
            index: 0,
            count,
            viewport,
            seed: None,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn new(seed: Option<u64>, count: u32, viewport: Viewport) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed, count, viewport),
            None => Self::from_entropy(count, viewport),
        }
    }

    /// The seed this context was created with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Normalized progress through the spawn (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        self.index as f32 / self.count as f32
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in `[min, max)`. Returns `min` for an empty range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Uniform random point over the viewport.
    pub fn random_in_viewport(&mut self) -> Vec2 {
        Vec2::new(
            self.random_range(0.0, self.viewport.width),
            self.random_range(0.0, self.viewport.height),
        )
    }

    /// Random vector with each component in `[min, max)`.
    pub fn random_velocity(&mut self, min: f32, max: f32) -> Vec2 {
        Vec2::new(self.random_range(min, max), self.random_range(min, max))
    }

    /// Color from HSL values, hue in degrees.
    pub fn hsl(&self, hue: f32, saturation: f32, lightness: f32) -> Vec3 {
        hsl_to_rgb(hue, saturation, lightness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_context_progress() {
        let mut ctx = SpawnContext::seeded(1, 100, Viewport::new(10.0, 10.0));
        ctx.index = 50;
        assert!((ctx.progress() - 0.5).abs() < 0.001);

        let empty = SpawnContext::seeded(1, 0, Viewport::default());
        assert_eq!(empty.progress(), 0.0);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut a = SpawnContext::seeded(42, 1, viewport);
        let mut b = SpawnContext::seeded(42, 1, viewport);
        for _ in 0..32 {
            assert_eq!(a.random_in_viewport(), b.random_in_viewport());
        }
        assert_eq!(a.seed(), Some(42));
    }

    #[test]
    fn test_random_in_viewport_bounds() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut ctx = SpawnContext::seeded(7, 1, viewport);
        for _ in 0..1000 {
            let p = ctx.random_in_viewport();
            assert!(p.x >= 0.0 && p.x < 800.0);
            assert!(p.y >= 0.0 && p.y < 600.0);
        }
    }

    #[test]
    fn test_empty_range_returns_min() {
        let mut ctx = SpawnContext::from_entropy(1, Viewport::default());
        assert_eq!(ctx.random_range(3.0, 3.0), 3.0);
        assert_eq!(ctx.random_range(5.0, 1.0), 5.0);
        assert_eq!(ctx.random_in_viewport(), Vec2::ZERO);
    }
}
