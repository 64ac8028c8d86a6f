//! # particle-backdrop
//!
//! Animated particle-field backdrop for a personal blog landing page.
//!
//! A fixed pool of drifting, shrinking, flickering particles is painted each
//! frame over a translucent diagonal gradient, with a set of sine wave lines
//! on top. The page content (tabs, profile, recent articles) is drawn over
//! it with egui when the `egui` feature is enabled.
//!
//! ## Quick Start
//!
//! ```ignore
//! use particle_backdrop::prelude::*;
//!
//! fn main() -> Result<(), BackdropError> {
//!     Backdrop::new()
//!         .with_particle_count(100)
//!         .with_title("Java Learning Journey")
//!         .run()
//! }
//! ```
//!
//! ## Headless
//!
//! The same frames can be rendered without a window, with a fixed clock:
//!
//! ```ignore
//! let canvas = Backdrop::new()
//!     .with_seed(7)
//!     .snapshot(Viewport::new(1280.0, 720.0), 120)?;
//! particle_backdrop::snapshot::save(&canvas, "backdrop.png")?;
//! ```
//!
//! ## Frame
//!
//! Each frame, in order:
//!
//! 1. clear the surface
//! 2. fill the gradient from the top-left to the bottom-right corner
//! 3. for every particle: move, shrink, bounce off the edges, update
//!    opacity, then draw it
//! 4. stroke the wave lines
//!
//! | Module | Role |
//! |--------|------|
//! | [`particle`] | particle state and the per-frame step |
//! | [`field`] | the pool and frame painting |
//! | [`surface`] | [`DrawSurface`] and the software [`Canvas`] |
//! | [`render_loop`] | frame loop with a [`CancellationToken`] |
//! | [`config`] | JSON configuration |
//! | [`page`] | landing page content |

mod backdrop;
pub mod config;
pub mod error;
pub mod field;
mod gpu;
#[cfg(feature = "egui")]
pub mod overlay;
pub mod page;
pub mod particle;
pub mod render_loop;
pub mod snapshot;
pub mod spawn;
pub mod surface;
pub mod time;
pub mod visuals;
mod window;

pub use backdrop::Backdrop;
pub use config::{BackdropConfig, WindowSettings};
pub use error::{BackdropError, ConfigError, GpuError, SnapshotError};
pub use field::{FieldSettings, ParticleField};
pub use glam::{Vec2, Vec3, Vec4};
pub use page::TabBar;
pub use particle::{Particle, ParticleSettings, Span};
pub use render_loop::{CancellationToken, LoopControl, RenderLoop};
pub use spawn::SpawnContext;
pub use surface::{Canvas, DrawSurface, Viewport};
pub use time::Time;
pub use visuals::{GradientSettings, WaveSettings};

#[cfg(feature = "egui")]
pub use overlay::PageOverlay;

/// Convenient imports for common usage.
///
/// ```ignore
/// use particle_backdrop::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backdrop::Backdrop;
    pub use crate::config::BackdropConfig;
    pub use crate::error::BackdropError;
    pub use crate::field::{FieldSettings, ParticleField};
    pub use crate::particle::{Particle, ParticleSettings};
    pub use crate::render_loop::{CancellationToken, LoopControl, RenderLoop};
    pub use crate::surface::{Canvas, DrawSurface, Viewport};
    pub use crate::time::Time;
    pub use glam::{Vec2, Vec3, Vec4};
}
