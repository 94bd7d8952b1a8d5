//! Figure module
//!
//! The part table describing the critter and the routine that poses it.

pub mod part;
pub mod pose;
pub mod rig;

pub use part::Part;
pub use pose::{render_frame, PlacedPart, Pose};
pub use rig::{FrameSlot, Origin, PartSpec, Step, CRITTER};
