//! Native window host for the backdrop.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::config::BackdropConfig;
use crate::error::BackdropError;
use crate::field::ParticleField;
use crate::gpu::GpuState;
use crate::render_loop::{LoopControl, RenderLoop};
use crate::surface::{Canvas, Viewport};
use crate::time::Time;

#[cfg(feature = "egui")]
use crate::gpu::OverlayLayer;
#[cfg(feature = "egui")]
use crate::overlay::PageOverlay;

pub(crate) struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    canvas: Canvas,
    render_loop: Option<RenderLoop>,
    config: BackdropConfig,
    #[cfg(feature = "egui")]
    overlay: Option<OverlayLayer>,
    error: Option<BackdropError>,
}

impl App {
    pub(crate) fn new(config: BackdropConfig) -> Self {
        Self {
            window: None,
            gpu_state: None,
            canvas: Canvas::new(Viewport::default()),
            render_loop: None,
            config,
            #[cfg(feature = "egui")]
            overlay: None,
            error: None,
        }
    }

    /// The setup error that ended the event loop, if any.
    pub(crate) fn take_error(&mut self) -> Option<BackdropError> {
        self.error.take()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), BackdropError> {
        let settings = &self.config.window;
        let window_attrs = Window::default_attributes()
            .with_title(settings.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(settings.width, settings.height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        self.window = Some(window.clone());

        let gpu_state = pollster::block_on(GpuState::new(window.clone(), settings.base_color))?;

        #[cfg(feature = "egui")]
        {
            self.overlay = Some(OverlayLayer::new(
                gpu_state.device(),
                gpu_state.config.format,
                &window,
                PageOverlay::default(),
            ));
        }
        self.gpu_state = Some(gpu_state);

        let viewport = Viewport::from(window.inner_size());
        if let Some(field) =
            ParticleField::mount(self.config.field.clone(), Some(&mut self.canvas), viewport, self.config.seed)
        {
            let mut time = Time::new();
            time.set_time_scale(self.config.speed);
            self.render_loop = Some(RenderLoop::new(field, time));
        }

        window.request_redraw();
        Ok(())
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(render_loop) = &mut self.render_loop {
            render_loop.teardown();
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                tracing::error!(error = %e, "failed to start backdrop");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        #[cfg(feature = "egui")]
        if let (Some(overlay), Some(window)) = (&mut self.overlay, &self.window) {
            overlay.on_window_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
                if let Some(render_loop) = &mut self.render_loop {
                    render_loop.resize(Some(&mut self.canvas), Viewport::from(physical_size));
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(render_loop) = &mut self.render_loop else {
                    return;
                };
                if render_loop.tick(Some(&mut self.canvas)) == LoopControl::Stop {
                    return;
                }

                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.upload(&self.canvas);

                    #[cfg(feature = "egui")]
                    let result = {
                        if let (Some(overlay), Some(window)) = (&mut self.overlay, &self.window) {
                            overlay.run(window);
                        }
                        gpu_state.render(self.overlay.as_mut())
                    };
                    #[cfg(not(feature = "egui"))]
                    let result = gpu_state.render();

                    match result {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu_state.resize(winit::dpi::PhysicalSize {
                                width: gpu_state.config.width,
                                height: gpu_state.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            tracing::error!("surface out of memory");
                            self.shutdown(event_loop);
                            return;
                        }
                        Err(e) => tracing::warn!(error = ?e, "render error"),
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
