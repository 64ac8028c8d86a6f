//! Draws the [`PageOverlay`] on top of the presented backdrop.
//!
//! Only compiled with the `egui` feature.

use winit::window::Window;

use crate::overlay::{self, PageOverlay};

/// Tessellated overlay waiting to be painted.
struct PendingFrame {
    paint_jobs: Vec<egui::ClippedPrimitive>,
    textures_delta: egui::TexturesDelta,
    pixels_per_point: f32,
}

/// The page overlay plus the egui context, input state and renderer that
/// put it on screen.
pub struct OverlayLayer {
    page: PageOverlay,
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    pending: Option<PendingFrame>,
}

impl OverlayLayer {
    pub fn new(device: &wgpu::Device, output_format: wgpu::TextureFormat, window: &Window, page: PageOverlay) -> Self {
        let ctx = egui::Context::default();
        ctx.set_style(overlay::style());

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(device, output_format, None, 1, false);

        Self {
            page,
            ctx,
            state,
            renderer,
            pending: None,
        }
    }

    /// Feed a window event to egui. Returns true if a card consumed it.
    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Lay out the page for this frame and keep the result for [`paint`].
    ///
    /// [`paint`]: Self::paint
    pub fn run(&mut self, window: &Window) {
        let raw_input = self.state.take_egui_input(window);
        let page = &mut self.page;
        let full_output = self.ctx.run(raw_input, |ctx| page.show(ctx));

        // opened links, cursor
        self.state.handle_platform_output(window, full_output.platform_output);

        self.pending = Some(PendingFrame {
            paint_jobs: self.ctx.tessellate(full_output.shapes, full_output.pixels_per_point),
            textures_delta: full_output.textures_delta,
            pixels_per_point: full_output.pixels_per_point,
        });
    }

    /// Paint the pending frame over `view`, keeping what is already there.
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        size_in_pixels: [u32; 2],
    ) {
        let Some(frame) = self.pending.take() else {
            return;
        };
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: frame.pixels_per_point,
        };

        for (id, image_delta) in &frame.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }
        self.renderer
            .update_buffers(device, queue, encoder, &frame.paint_jobs, &screen_descriptor);

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Overlay Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let mut render_pass = render_pass.forget_lifetime();
            self.renderer
                .render(&mut render_pass, &frame.paint_jobs, &screen_descriptor);
        }

        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}
