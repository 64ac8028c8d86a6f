//! The particle field renderer.
//!
//! Owns the fixed particle pool and paints one backdrop frame at a time:
//! clear, gradient, particles, then the wave lines.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::particle::{step_all, Particle, ParticleSettings};
use crate::spawn::SpawnContext;
use crate::surface::{DrawSurface, Viewport};
use crate::visuals::{wave_points, GradientSettings, WaveSettings};

/// Everything that shapes the field: pool, background and lines.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    pub particles: ParticleSettings,
    pub gradient: GradientSettings,
    pub waves: WaveSettings,
}

/// A mounted particle field.
///
/// The pool is created once and only ever mutated in place; its length
/// never changes for the life of the field.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    settings: FieldSettings,
    viewport: Viewport,
}

impl ParticleField {
    /// Spawn `settings.particles.count` particles over the context's viewport.
    pub fn new(settings: FieldSettings, ctx: &mut SpawnContext) -> Self {
        let count = settings.particles.count;
        ctx.count = count;
        let particles = (0..count)
            .map(|i| {
                ctx.index = i;
                Particle::spawn(ctx, &settings.particles)
            })
            .collect();

        Self {
            particles,
            settings,
            viewport: ctx.viewport,
        }
    }

    /// Size `surface` to `viewport` and spawn the pool into it.
    ///
    /// Returns `None` without doing anything when no surface is available.
    pub fn mount<S: DrawSurface>(
        settings: FieldSettings,
        surface: Option<&mut S>,
        viewport: Viewport,
        seed: Option<u64>,
    ) -> Option<Self> {
        let surface = surface?;
        surface.resize(viewport);

        let mut ctx = SpawnContext::new(seed, settings.particles.count, viewport);
        let field = Self::new(settings, &mut ctx);
        tracing::info!(
            particles = field.len(),
            width = viewport.width,
            height = viewport.height,
            seed = ?seed,
            "particle field mounted"
        );
        Some(field)
    }

    /// Advance every particle by one frame.
    pub fn update(&mut self, time: f32) {
        step_all(&mut self.particles, self.viewport, time, &self.settings.particles);
    }

    /// Paint the current state without advancing it.
    pub fn draw<S: DrawSurface>(&self, surface: &mut S, time: f32) {
        let viewport = surface.size();
        surface.clear();

        let gradient = &self.settings.gradient;
        surface.fill_linear_gradient(
            Vec2::ZERO,
            Vec2::new(viewport.width, viewport.height),
            gradient.start,
            gradient.end,
        );

        for particle in &self.particles {
            surface.fill_circle(particle.position, particle.size, particle.color.extend(particle.opacity));
        }

        let waves = &self.settings.waves;
        for line in 0..waves.count {
            let points = wave_points(line, viewport, time, waves);
            surface.stroke_polyline(&points, waves.line_width, waves.color);
        }
    }

    /// One full frame: update against the surface's current size, then paint.
    ///
    /// Does nothing when the surface is unavailable.
    pub fn frame<S: DrawSurface>(&mut self, surface: Option<&mut S>, time: f32) {
        let Some(surface) = surface else {
            return;
        };
        self.viewport = surface.size();
        self.update(time);
        self.draw(surface, time);
    }

    /// Follow a viewport resize. Particle positions are left untouched.
    pub fn resize<S: DrawSurface>(&mut self, surface: Option<&mut S>, viewport: Viewport) {
        if let Some(surface) = surface {
            surface.resize(viewport);
        }
        self.viewport = viewport;
        tracing::debug!(width = viewport.width, height = viewport.height, "particle field resized");
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to the pool. The pool itself cannot grow or shrink.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }
}
