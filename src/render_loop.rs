//! Frame loop with deterministic shutdown.
//!
//! The host (the winit event loop, or the headless snapshot driver) calls
//! [`RenderLoop::tick`] once per display refresh and schedules another
//! frame only while it returns [`LoopControl::Continue`]. Cancelling the
//! [`CancellationToken`] stops the loop before the next frame runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::field::ParticleField;
use crate::surface::{DrawSurface, Viewport};
use crate::time::Time;

/// Frames between FPS log lines.
const FPS_LOG_INTERVAL: u64 = 600;

/// Shared stop flag. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// What the host should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// A frame ran (or was skipped for lack of a surface); request another.
    Continue,
    /// The loop is cancelled; do not request another frame.
    Stop,
}

/// Owns the mounted field and its clock for as long as the view is up.
pub struct RenderLoop {
    field: Option<ParticleField>,
    time: Time,
    token: CancellationToken,
}

impl RenderLoop {
    pub fn new(field: ParticleField, time: Time) -> Self {
        Self {
            field: Some(field),
            time,
            token: CancellationToken::new(),
        }
    }

    /// A token that stops this loop when cancelled.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Run one frame.
    ///
    /// A missing surface skips the frame's work but keeps the loop alive.
    pub fn tick<S: DrawSurface>(&mut self, surface: Option<&mut S>) -> LoopControl {
        if self.token.is_cancelled() {
            return LoopControl::Stop;
        }
        let Some(field) = self.field.as_mut() else {
            return LoopControl::Stop;
        };

        let elapsed = self.time.update();
        field.frame(surface, elapsed);

        if self.time.frame() % FPS_LOG_INTERVAL == 0 {
            tracing::debug!(frame = self.time.frame(), fps = self.time.fps(), "render loop");
        }
        LoopControl::Continue
    }

    /// Forward a viewport resize to the field and surface.
    pub fn resize<S: DrawSurface>(&mut self, surface: Option<&mut S>, viewport: Viewport) {
        if self.token.is_cancelled() {
            return;
        }
        if let Some(field) = self.field.as_mut() {
            field.resize(surface, viewport);
        }
    }

    /// Stop the loop and discard the particle pool.
    pub fn teardown(&mut self) {
        self.token.cancel();
        if self.field.take().is_some() {
            tracing::info!(
                frames = self.time.frame(),
                uptime_secs = self.time.since_start().as_secs_f32(),
                "render loop torn down"
            );
        }
    }

    pub fn is_running(&self) -> bool {
        self.field.is_some() && !self.token.is_cancelled()
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn field_mut(&mut self) -> Option<&mut ParticleField> {
        self.field.as_mut()
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    pub fn time_mut(&mut self) -> &mut Time {
        &mut self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldSettings;
    use crate::surface::Canvas;

    fn running(canvas: &mut Canvas) -> RenderLoop {
        let field = ParticleField::mount(
            FieldSettings::default(),
            Some(canvas),
            Viewport::new(320.0, 240.0),
            Some(9),
        )
        .unwrap();
        RenderLoop::new(field, Time::fixed(1.0 / 60.0))
    }

    #[test]
    fn test_tick_continues_while_running() {
        let mut canvas = Canvas::new(Viewport::default());
        let mut render_loop = running(&mut canvas);

        assert_eq!(render_loop.tick(Some(&mut canvas)), LoopControl::Continue);
        assert_eq!(render_loop.tick::<Canvas>(None), LoopControl::Continue);
        assert_eq!(render_loop.time().frame(), 2);
        assert!(render_loop.is_running());
    }

    #[test]
    fn test_teardown_stops_before_next_frame() {
        let mut canvas = Canvas::new(Viewport::default());
        let mut render_loop = running(&mut canvas);
        render_loop.tick(Some(&mut canvas));

        render_loop.teardown();

        assert_eq!(render_loop.tick(Some(&mut canvas)), LoopControl::Stop);
        assert_eq!(render_loop.time().frame(), 1);
        assert!(render_loop.field().is_none());
        assert!(!render_loop.is_running());
    }

    #[test]
    fn test_cancel_from_cloned_token() {
        let mut canvas = Canvas::new(Viewport::default());
        let mut render_loop = running(&mut canvas);
        let token = render_loop.token();

        token.cancel();

        let before = render_loop.field().unwrap().particles().to_vec();
        assert_eq!(render_loop.tick(Some(&mut canvas)), LoopControl::Stop);
        assert_eq!(render_loop.field().unwrap().particles(), &before[..]);
    }

    #[test]
    fn test_resize_after_cancel_is_ignored() {
        let mut canvas = Canvas::new(Viewport::default());
        let mut render_loop = running(&mut canvas);
        render_loop.token().cancel();

        render_loop.resize(Some(&mut canvas), Viewport::new(10.0, 10.0));
        assert_eq!(canvas.size(), Viewport::new(320.0, 240.0));
    }
}
