//! Builder for running the backdrop.

use glam::Vec4;
use winit::event_loop::{ControlFlow, EventLoop};

use crate::config::BackdropConfig;
use crate::error::BackdropError;
use crate::snapshot;
use crate::surface::{Canvas, Viewport};
use crate::window::App;

/// Builder for the animated backdrop.
///
/// # Example
///
/// ```ignore
/// use particle_backdrop::prelude::*;
///
/// Backdrop::new()
///     .with_particle_count(100)
///     .with_seed(7)
///     .run()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Backdrop {
    config: BackdropConfig,
}

impl Backdrop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: BackdropConfig) -> Self {
        Self { config }
    }

    /// Set the number of particles in the pool.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.config.field.particles.count = count;
        self
    }

    /// Fix the RNG seed so every run spawns the same field.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.window.title = title.into();
        self
    }

    /// Initial inner size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.config.window.width = width;
        self.config.window.height = height;
        self
    }

    /// Animation speed multiplier. Negative values clamp to zero.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.config.speed = speed.max(0.0);
        self
    }

    /// Background gradient from top-left to bottom-right (RGBA, 0.0-1.0).
    pub fn with_gradient(mut self, start: Vec4, end: Vec4) -> Self {
        self.config.field.gradient.start = start;
        self.config.field.gradient.end = end;
        self
    }

    /// Number of sine wave lines.
    pub fn with_wave_lines(mut self, count: u32) -> Self {
        self.config.field.waves.count = count;
        self
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    /// Open the window and animate until it is closed.
    pub fn run(self) -> Result<(), BackdropError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.config);
        event_loop.run_app(&mut app)?;

        match app.take_error() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Render `frames` frames without a window.
    pub fn snapshot(&self, viewport: Viewport, frames: u32) -> Result<Canvas, BackdropError> {
        Ok(snapshot::render(&self.config, viewport, frames, None)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visuals::rgba8;

    #[test]
    fn test_builder_sets_config() {
        let backdrop = Backdrop::new()
            .with_particle_count(12)
            .with_seed(3)
            .with_title("Test")
            .with_window_size(640, 480)
            .with_speed(-2.0)
            .with_wave_lines(2)
            .with_gradient(rgba8(0, 0, 0, 1.0), rgba8(255, 255, 255, 1.0));

        let config = backdrop.config();
        assert_eq!(config.field.particles.count, 12);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.window.title, "Test");
        assert_eq!((config.window.width, config.window.height), (640, 480));
        assert_eq!(config.speed, 0.0);
        assert_eq!(config.field.waves.count, 2);
        assert_eq!(config.field.gradient.end, Vec4::ONE);
    }

    #[test]
    fn test_snapshot_uses_builder_config() {
        let canvas = Backdrop::new()
            .with_seed(11)
            .with_particle_count(0)
            .with_wave_lines(0)
            .snapshot(Viewport::new(20.0, 10.0), 1)
            .unwrap();

        // Only the gradient remains.
        let top_left = canvas.pixel(0, 0).unwrap();
        assert_eq!(top_left[3], 128);
    }
}
