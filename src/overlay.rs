use critter_rig::render::GpuContext;
use winit::event::WindowEvent;
use winit::window::Window;

/// Tessellated UI for one frame, waiting to be painted.
pub struct OverlayFrame {
    primitives: Vec<egui::ClippedPrimitive>,
    textures: egui::TexturesDelta,
    pixels_per_point: f32,
}

/// egui state and renderer, drawn over the figure.
pub struct Overlay {
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl Overlay {
    pub fn new(window: &Window, context: &GpuContext) -> Self {
        let state = egui_winit::State::new(
            egui::Context::default(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer =
            egui_wgpu::Renderer::new(&context.device, context.config.format, None, 1, false);
        Self { state, renderer }
    }

    /// Returns `true` if egui used the event.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    pub fn is_pointer_over(&self) -> bool {
        self.state.egui_ctx().is_pointer_over_area()
    }

    /// Runs the UI once and tessellates it.
    pub fn build(&mut self, window: &Window, ui: impl FnMut(&egui::Context)) -> OverlayFrame {
        let input = self.state.take_egui_input(window);
        let ctx = self.state.egui_ctx().clone();
        let output = ctx.run(input, ui);

        self.state.handle_platform_output(window, output.platform_output);
        OverlayFrame {
            primitives: ctx.tessellate(output.shapes, output.pixels_per_point),
            textures: output.textures_delta,
            pixels_per_point: output.pixels_per_point,
        }
    }

    /// Paints `frame` on top of whatever `target` already holds.
    pub fn paint(&mut self, context: &GpuContext, target: &wgpu::TextureView, frame: OverlayFrame) {
        for (id, delta) in &frame.textures.set {
            self.renderer
                .update_texture(&context.device, &context.queue, *id, delta);
        }

        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [context.size.width, context.size.height],
            pixels_per_point: frame.pixels_per_point,
        };

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Overlay Encoder"),
            });
        self.renderer.update_buffers(
            &context.device,
            &context.queue,
            &mut encoder,
            &frame.primitives,
            &screen,
        );

        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Overlay Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();
            self.renderer.render(&mut pass, &frame.primitives, &screen);
        }

        context.queue.submit(std::iter::once(encoder.finish()));

        for id in &frame.textures.free {
            self.renderer.free_texture(id);
        }
    }
}
