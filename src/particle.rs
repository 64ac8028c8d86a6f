//! Particle data and the per-frame step.
//!
//! A [`Particle`] is plain data; motion is applied by the free functions
//! [`step`] and [`step_all`] over a mutable slice.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::spawn::SpawnContext;
use crate::surface::Viewport;

/// One animated point sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in viewport pixels.
    pub position: Vec2,
    /// Pixels moved per frame.
    pub velocity: Vec2,
    /// Circle radius in pixels. Never below [`ParticleSettings::min_size`].
    pub size: f32,
    /// RGB color, fixed at spawn.
    pub color: Vec3,
    /// Alpha, recomputed every step.
    pub opacity: f32,
}

/// Half-open `[min, max)` range for random draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value < self.max
    }

    fn sample(&self, ctx: &mut SpawnContext) -> f32 {
        ctx.random_range(self.min, self.max)
    }
}

/// Spawn ranges and per-step constants for the particle pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    /// Pool size, fixed for the life of the field.
    pub count: u32,
    /// Initial radius.
    pub size: Span,
    /// Initial velocity, per axis.
    pub speed: Span,
    /// Hue in degrees.
    pub hue: Span,
    pub saturation: f32,
    pub lightness: f32,
    /// Opacity until the first step.
    pub opacity: Span,
    /// Radius lost per step.
    pub shrink_rate: f32,
    /// Radius floor.
    pub min_size: f32,
    /// Opacity is `sin(time + x * opacity_frequency) * opacity_amplitude + opacity_base`.
    pub opacity_base: f32,
    pub opacity_amplitude: f32,
    pub opacity_frequency: f32,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            count: 100,
            size: Span::new(1.0, 6.0),
            speed: Span::new(-1.5, 1.5),
            hue: Span::new(180.0, 240.0),
            saturation: 1.0,
            lightness: 0.5,
            opacity: Span::new(0.1, 0.6),
            shrink_rate: 0.1,
            min_size: 0.2,
            opacity_base: 0.3,
            opacity_amplitude: 0.2,
            opacity_frequency: 0.01,
        }
    }
}

impl ParticleSettings {
    /// Opacity of a particle at horizontal position `x` at `time` seconds.
    #[inline]
    pub fn opacity_at(&self, time: f32, x: f32) -> f32 {
        (time + x * self.opacity_frequency).sin() * self.opacity_amplitude + self.opacity_base
    }
}

impl Particle {
    /// Draw a particle uniformly over the context's viewport.
    pub fn spawn(ctx: &mut SpawnContext, settings: &ParticleSettings) -> Self {
        let position = ctx.random_in_viewport();
        let size = settings.size.sample(ctx);
        let velocity = ctx.random_velocity(settings.speed.min, settings.speed.max);
        let hue = settings.hue.sample(ctx);
        let color = ctx.hsl(hue, settings.saturation, settings.lightness);
        let opacity = settings.opacity.sample(ctx);

        Self {
            position,
            velocity,
            size,
            color,
            opacity,
        }
    }
}

/// Advance one particle by one frame.
///
/// Moves by the velocity, shrinks toward the size floor, turns the velocity
/// back toward the interior on any axis where the position left
/// `[0, dimension]`, and recomputes opacity. Positions are not clamped.
pub fn step(particle: &mut Particle, viewport: Viewport, time: f32, settings: &ParticleSettings) {
    particle.position += particle.velocity;

    if particle.size > settings.min_size {
        particle.size = (particle.size - settings.shrink_rate).max(settings.min_size);
    }

    if particle.position.x < 0.0 {
        particle.velocity.x = particle.velocity.x.abs();
    } else if particle.position.x > viewport.width {
        particle.velocity.x = -particle.velocity.x.abs();
    }
    if particle.position.y < 0.0 {
        particle.velocity.y = particle.velocity.y.abs();
    } else if particle.position.y > viewport.height {
        particle.velocity.y = -particle.velocity.y.abs();
    }

    particle.opacity = settings.opacity_at(time, particle.position.x);
}

/// [`step`] every particle in the pool.
pub fn step_all(particles: &mut [Particle], viewport: Viewport, time: f32, settings: &ParticleSettings) {
    for particle in particles.iter_mut() {
        step(particle, viewport, time, settings);
    }
}
