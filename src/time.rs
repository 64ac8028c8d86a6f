//! Frame clock for the render loop.
//!
//! A [`Time`] either follows the wall clock or advances by a fixed step per
//! frame, which keeps headless renders reproducible.
//!
//! ```ignore
//! let mut time = Time::new();
//!
//! // once per frame:
//! let elapsed = time.update();
//! println!("{:.2}s, frame {}, {:.1} fps", elapsed, time.frame(), time.fps());
//! ```

use std::time::{Duration, Instant};

/// Time tracking for the frame loop.
#[derive(Debug)]
pub struct Time {
    /// When the timer was created.
    start: Instant,
    /// When the last frame occurred.
    last_frame: Instant,
    /// Total elapsed time in seconds (cached for fast access).
    elapsed_secs: f32,
    /// Time since last frame in seconds.
    delta_secs: f32,
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
    /// Fixed step per frame instead of the wall clock.
    fixed_delta: Option<f32>,
    /// Time scale multiplier (1.0 = normal speed).
    time_scale: f32,
}

impl Time {
    /// Create a wall-clock time tracker starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
            fixed_delta: None,
            time_scale: 1.0,
        }
    }

    /// Create a tracker that advances exactly `step` seconds per update.
    pub fn fixed(step: f32) -> Self {
        let mut time = Self::new();
        time.fixed_delta = Some(step.max(0.0));
        time
    }

    /// Advance one frame. Call once per frame.
    ///
    /// Returns the elapsed time in seconds.
    pub fn update(&mut self) -> f32 {
        let now = Instant::now();

        match self.fixed_delta {
            Some(step) => {
                self.delta_secs = step * self.time_scale;
                self.elapsed_secs += self.delta_secs;
            }
            None => {
                let raw_delta = now.duration_since(self.last_frame).as_secs_f32();
                self.delta_secs = raw_delta * self.time_scale;
                self.elapsed_secs += self.delta_secs;
            }
        }
        self.last_frame = now;
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        self.elapsed_secs
    }

    /// Total elapsed time in seconds since start.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Time since last frame in seconds (delta time).
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Calculated frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Current time scale multiplier.
    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Set time scale multiplier.
    ///
    /// - `1.0` = normal speed
    /// - `0.5` = half speed
    /// - `2.0` = double speed
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Wall-clock time since the tracker was created.
    #[inline]
    pub fn since_start(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
