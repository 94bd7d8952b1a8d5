use critter_rig::config::ControlBindings;
use critter_rig::input::ControlSource;

const ANGLE_RANGE: std::ops::RangeInclusive<f32> = -90.0..=90.0;

struct SliderField {
    id: String,
    label: &'static str,
    text: String,
}

/// What the user did in the panel this frame.
#[derive(Default)]
pub struct PanelEvents {
    pub buttons: Vec<String>,
    pub camera_angle: Option<f32>,
}

/// egui stand-in for the slider and button widgets.
pub struct ControlPanel {
    sliders: Vec<SliderField>,
}

impl ControlPanel {
    pub fn new(bindings: &ControlBindings) -> Self {
        let sliders = bindings
            .sliders
            .iter()
            .map(|b| SliderField {
                id: b.control.clone(),
                label: b.joint.name(),
                text: "0".to_string(),
            })
            .collect();
        Self { sliders }
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        bindings: &ControlBindings,
        camera_angle: f32,
        frame_ms: f64,
    ) -> PanelEvents {
        let mut events = PanelEvents::default();

        egui::Window::new("Critter Controls")
            .default_pos([10.0, 10.0])
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Joint angles:");
                for field in &mut self.sliders {
                    ui.horizontal(|ui| {
                        ui.label(field.label);
                        let mut value = field.text.trim().parse::<f32>().unwrap_or(0.0);
                        if ui
                            .add(egui::Slider::new(&mut value, ANGLE_RANGE).suffix("°"))
                            .changed()
                        {
                            field.text = format!("{value:.1}");
                        }
                        ui.add(egui::TextEdit::singleline(&mut field.text).desired_width(48.0));
                    });
                }

                ui.separator();
                ui.label("Animations:");
                for toggle in &bindings.toggles {
                    ui.horizontal(|ui| {
                        ui.label(toggle.joint.name());
                        if ui.button("On").clicked() {
                            events.buttons.push(toggle.on_button.clone());
                        }
                        if ui.button("Off").clicked() {
                            events.buttons.push(toggle.off_button.clone());
                        }
                    });
                }

                ui.separator();
                let mut angle = camera_angle;
                ui.horizontal(|ui| {
                    ui.label("Camera:");
                    if ui
                        .add(egui::Slider::new(&mut angle, -180.0..=180.0).suffix("°"))
                        .changed()
                    {
                        events.camera_angle = Some(angle);
                    }
                });

                ui.separator();
                let fps = if frame_ms > 0.0 { 1000.0 / frame_ms } else { 0.0 };
                ui.label(format!("ms: {frame_ms:.2} fps: {fps:.0}"));
                ui.small("Drag: rotate camera");
                ui.small("Shift + click: pulse");
            });

        events
    }
}

impl ControlSource for ControlPanel {
    fn slider_text(&self, id: &str) -> Option<&str> {
        self.sliders
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.text.as_str())
    }
}
