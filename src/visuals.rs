//! Colors and paint settings for the backdrop.
//!
//! This module holds everything that controls how the backdrop looks,
//! separate from the particle motion in [`crate::particle`].
//!
//! # Usage
//!
//! ```ignore
//! Backdrop::new()
//!     .with_gradient(rgba8(0, 64, 77, 0.5), rgba8(230, 100, 40, 0.5))
//!     .with_wave_lines(5)
//!     .run()?;
//! ```

use glam::{Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::surface::Viewport;

/// Color from 8-bit RGB channels and a 0-1 alpha, like CSS `rgba()`.
pub fn rgba8(r: u8, g: u8, b: u8, a: f32) -> Vec4 {
    Vec4::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a)
}

/// Convert HSL to RGB.
///
/// * `hue` - degrees, wraps at 360 (180 = cyan, 240 = blue)
/// * `saturation` - 0.0 (gray) to 1.0 (vivid)
/// * `lightness` - 0.0 (black) to 1.0 (white), 0.5 is the pure hue
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Vec3 {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m)
}

/// Diagonal background gradient, top-left to bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientSettings {
    /// Color at the top-left corner (RGBA, 0.0-1.0).
    pub start: Vec4,
    /// Color at the bottom-right corner (RGBA, 0.0-1.0).
    pub end: Vec4,
}

impl Default for GradientSettings {
    fn default() -> Self {
        Self {
            start: rgba8(0, 64, 77, 0.5),
            end: rgba8(230, 100, 40, 0.5),
        }
    }
}

/// Horizontal flowing lines painted over the particles.
///
/// Line `i` rests at `height / count * i` and is displaced at every sampled
/// `x` by `sin(time + x * frequency) * amplitude`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveSettings {
    /// Number of lines.
    pub count: u32,
    /// Stroke color (RGBA, 0.0-1.0).
    pub color: Vec4,
    /// Stroke width in pixels.
    pub line_width: f32,
    /// Horizontal distance between samples in pixels.
    pub step: f32,
    /// Vertical displacement in pixels.
    pub amplitude: f32,
    /// Phase change per pixel of `x`.
    pub frequency: f32,
}

impl Default for WaveSettings {
    fn default() -> Self {
        Self {
            count: 5,
            color: rgba8(255, 255, 255, 0.1),
            line_width: 1.0,
            step: 20.0,
            amplitude: 20.0,
            frequency: 0.01,
        }
    }
}

/// Smallest horizontal distance between wave samples, in pixels.
pub const MIN_WAVE_STEP: f32 = 1.0;

/// Points of wave line `line` at `time` seconds.
///
/// The first point is the unperturbed start `(0, rest_y)`, followed by one
/// sample every `step` pixels while `x < width`. Positive steps below
/// [`MIN_WAVE_STEP`] are raised to it.
pub fn wave_points(line: u32, viewport: Viewport, time: f32, settings: &WaveSettings) -> Vec<Vec2> {
    if settings.count == 0 {
        return Vec::new();
    }
    let rest_y = viewport.height / settings.count as f32 * line as f32;
    let mut points = vec![Vec2::new(0.0, rest_y)];
    if settings.step.is_nan() || settings.step <= 0.0 {
        return points;
    }

    let step = settings.step.max(MIN_WAVE_STEP);
    let samples = (viewport.width.max(0.0) / step).ceil() as usize;
    points.reserve(samples);
    for i in 0..samples {
        let x = i as f32 * step;
        let offset = (time + x * settings.frequency).sin() * settings.amplitude;
        points.push(Vec2::new(x, rest_y + offset));
    }
    points
}
