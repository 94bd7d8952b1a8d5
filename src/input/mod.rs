//! Input module
//!
//! Adapters from host widgets and pointer events to animation commands.

pub mod controls;
pub mod drag;

pub use controls::{parse_angle, press_button, ControlSource, SliderPoller};
pub use drag::PointerDrag;
