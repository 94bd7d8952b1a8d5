//! Animation module
//!
//! Joint angle state, the body pulse, and the command queue that feeds them.

pub mod command;
pub mod joint;
pub mod pulse;
pub mod state;

pub use command::{Command, CommandQueue};
pub use joint::{JointId, JointMap, JointMotion, JointState, Waveform};
pub use pulse::{BodyPulse, PulsePhase};
pub use state::{advance_animation_state, AnimationState};
