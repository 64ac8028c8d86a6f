//! Headless rendering.
//!
//! Drives the same field and render loop as the window, but against an
//! in-memory [`Canvas`] with a fixed 60 fps clock, so a given seed always
//! produces the same image.

use std::path::Path;

use crate::config::BackdropConfig;
use crate::error::SnapshotError;
use crate::field::ParticleField;
use crate::render_loop::{LoopControl, RenderLoop};
use crate::surface::{Canvas, Viewport};
use crate::time::Time;

/// Clock step for headless frames.
pub const FRAME_STEP: f32 = 1.0 / 60.0;

/// Render `frames` frames of the backdrop described by `config` and return
/// the final canvas. `seed` overrides the configured seed.
pub fn render(
    config: &BackdropConfig,
    viewport: Viewport,
    frames: u32,
    seed: Option<u64>,
) -> Result<Canvas, SnapshotError> {
    if viewport.is_empty() {
        return Err(SnapshotError::EmptyViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let mut canvas = Canvas::new(viewport);
    let seed = seed.or(config.seed);
    let Some(field) = ParticleField::mount(config.field.clone(), Some(&mut canvas), viewport, seed)
    else {
        return Ok(canvas);
    };

    let mut time = Time::fixed(FRAME_STEP);
    time.set_time_scale(config.speed);
    let mut render_loop = RenderLoop::new(field, time);

    for _ in 0..frames {
        if render_loop.tick(Some(&mut canvas)) == LoopControl::Stop {
            break;
        }
    }
    render_loop.teardown();

    Ok(canvas)
}

/// Write the canvas as a PNG.
pub fn save(canvas: &Canvas, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    canvas.image().save_with_format(path, image::ImageFormat::Png)?;
    tracing::info!(path = %path.display(), width = canvas.width(), height = canvas.height(), "snapshot saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_viewport_is_rejected() {
        let result = render(&BackdropConfig::default(), Viewport::new(0.0, 100.0), 1, Some(1));
        assert!(matches!(result, Err(SnapshotError::EmptyViewport { .. })));
    }

    #[test]
    fn test_same_seed_same_pixels() {
        let config = BackdropConfig::default();
        let viewport = Viewport::new(160.0, 90.0);
        let a = render(&config, viewport, 5, Some(42)).unwrap();
        let b = render(&config, viewport, 5, Some(42)).unwrap();
        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn test_zero_frames_is_blank() {
        let canvas = render(&BackdropConfig::default(), Viewport::new(32.0, 32.0), 0, Some(3)).unwrap();
        assert!(canvas.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_frame_paints_gradient() {
        let canvas = render(&BackdropConfig::default(), Viewport::new(64.0, 64.0), 1, Some(3)).unwrap();
        let [_, _, _, a] = canvas.pixel(0, 63).unwrap();
        assert!(a > 0);
    }

    #[test]
    fn test_save_writes_png() {
        let canvas = render(&BackdropConfig::default(), Viewport::new(48.0, 32.0), 2, Some(5)).unwrap();
        let path = std::env::temp_dir().join(format!("backdrop-snapshot-{}.png", std::process::id()));

        save(&canvas, &path).unwrap();
        let decoded = image::open(&path).unwrap().to_rgba8();
        let _ = std::fs::remove_file(&path);

        assert_eq!(decoded.dimensions(), (48, 32));
        assert_eq!(decoded.as_raw(), canvas.pixels());
    }
}
