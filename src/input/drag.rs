/// Tracks a horizontal pointer drag and reports per-move deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerDrag {
    dragging: bool,
    last_x: f64,
}

impl PointerDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn press(&mut self, x: f64) {
        self.dragging = true;
        self.last_x = x;
    }

    /// Ends the drag; also used when the pointer leaves the surface.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Feeds a primary-button event. A press only starts a drag when the UI
    /// did not take it; a release always ends the drag, wherever it lands.
    /// Returns `true` if a drag started.
    pub fn button(&mut self, pressed: bool, x: f64, captured_by_ui: bool) -> bool {
        if !pressed {
            self.release();
            return false;
        }
        if captured_by_ui {
            return false;
        }
        self.press(x);
        true
    }

    /// Horizontal movement since the last call, while dragging.
    pub fn move_to(&mut self, x: f64) -> Option<f32> {
        if !self.dragging {
            return None;
        }
        let delta = x - self.last_x;
        self.last_x = x;
        Some(delta as f32)
    }
}
