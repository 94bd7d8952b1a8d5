mod overlay;
mod panel;

use std::sync::Arc;
use std::time::Instant;

use critter_rig::anim::Command;
use critter_rig::config::AppConfig;
use critter_rig::input::PointerDrag;
use critter_rig::render::{FigureRenderer, GpuContext, NullBackend, Projection};
use critter_rig::Scene;
use overlay::Overlay;
use panel::{ControlPanel, PanelEvents};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use winit::window::{Window, WindowId};

/// Everything that only exists once a GPU surface is up.
struct Gpu {
    context: GpuContext,
    renderer: FigureRenderer,
    overlay: Overlay,
}

struct Viewer {
    config: AppConfig,
    window: Option<Arc<Window>>,
    gpu: Option<Gpu>,
    scene: Scene,
    panel: ControlPanel,
    projection: Projection,
    drag: PointerDrag,
    modifiers: ModifiersState,
    cursor_x: f64,
    started: Instant,
    gui_hovered: bool,
}

impl Viewer {
    fn new(config: AppConfig) -> Self {
        let scene = Scene::new(&config.animation, config.bindings.clone());
        let panel = ControlPanel::new(&config.bindings);

        Self {
            config,
            window: None,
            gpu: None,
            scene,
            panel,
            projection: Projection::default(),
            drag: PointerDrag::new(),
            modifiers: ModifiersState::empty(),
            cursor_x: 0.0,
            started: Instant::now(),
            gui_hovered: false,
        }
    }

    fn clock(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    fn apply_panel(&mut self, events: PanelEvents) {
        for id in &events.buttons {
            self.scene.press_button(id);
        }
        if let Some(angle) = events.camera_angle {
            self.scene.push(Command::SetGlobalAngle(angle));
        }
        self.scene.poll_controls(&self.panel);
    }

    fn redraw(&mut self) {
        let clock = self.clock();
        let Some(window) = self.window.clone() else {
            return;
        };

        let Some(gpu) = self.gpu.as_mut() else {
            // Headless: input still lands, nothing is drawn.
            self.scene.poll_controls(&self.panel);
            self.scene.tick_with(clock, &mut NullBackend);
            return;
        };

        let output = match gpu.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.context.resize(gpu.context.size);
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };
        let target = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let camera_angle = self.scene.state().global_angle();
        let frame_ms = self.scene.last_frame_ms();
        let mut events = PanelEvents::default();
        let panel = &mut self.panel;
        let bindings = &self.config.bindings;
        let ui = gpu.overlay.build(&window, |ctx| {
            events = panel.show(ctx, bindings, camera_angle, frame_ms);
        });
        self.gui_hovered = gpu.overlay.is_pointer_over();

        self.apply_panel(events);

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let frame = self.scene.tick(clock);
        gpu.renderer
            .render(&gpu.context, &target, frame, &self.projection);
        gpu.overlay.paint(&gpu.context, &target, ui);

        output.present();
    }

    fn on_left_button(&mut self, state: ElementState, captured_by_ui: bool) {
        let pressed = state == ElementState::Pressed;
        let captured = captured_by_ui || self.gui_hovered;
        if self.drag.button(pressed, self.cursor_x, captured) && self.modifiers.shift_key() {
            let clock = self.clock();
            self.scene.push(Command::TriggerPulse(clock));
        }
    }
}

impl ApplicationHandler for Viewer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.config.window_size;
        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("Failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        match pollster::block_on(GpuContext::new(window.clone())) {
            Ok(context) => {
                self.projection.set_aspect(context.aspect_ratio());
                let renderer = FigureRenderer::new(&context, self.config.clear_color);
                let overlay = Overlay::new(&window, &context);
                log::info!("GPU ready, surface {:?}", context.config.format);
                self.gpu = Some(Gpu {
                    context,
                    renderer,
                    overlay,
                });
            }
            Err(err) => log::error!("{err}; continuing without rendering"),
        }

        window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let consumed = match (&mut self.gpu, &self.window) {
            (Some(gpu), Some(window)) => gpu.overlay.on_window_event(window, &event),
            _ => false,
        };
        if consumed {
            // A drag that ends over the panel must still end.
            if let WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } = event
            {
                self.on_left_button(state, true);
            }
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.context.resize(size);
                    self.projection.set_aspect(gpu.context.aspect_ratio());
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    event_loop.exit();
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => self.modifiers = modifiers.state(),

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.on_left_button(state, false),

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_x = position.x;
                if let Some(delta) = self.drag.move_to(position.x) {
                    self.scene.push(Command::Rotate(delta));
                }
            }

            WindowEvent::CursorLeft { .. } => self.drag.release(),

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            log::error!("Failed to create event loop: {err}");
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut viewer = Viewer::new(AppConfig::default());
    if let Err(err) = event_loop.run_app(&mut viewer) {
        log::error!("Event loop exited with error: {err}");
    }
}
