//! # critter-rig
//!
//! A blocky articulated critter posed every frame from slider-set joint
//! angles, toggleable procedural swings and a one-shot body pulse, with a
//! wgpu viewer.
//!
//! ## Features
//! - Composable [`Transform`] with value-copy frame snapshots
//! - Declarative part table posed by one generic routine
//! - Immutable-per-tick [`AnimationState`] fed by a [`CommandQueue`]
//! - Backend-agnostic rendering: record a frame, replay it on the GPU
//!
//! ## Example
//! ```rust,ignore
//! use critter_rig::anim::{Command, JointId};
//! use critter_rig::Scene;
//!
//! let mut scene = Scene::default();
//! scene.push(Command::SetBaseAngle(JointId::RightLeg, 20.0));
//! scene.push(Command::ToggleAnimation(JointId::Arm, true));
//!
//! let frame = scene.tick(0.5);
//! println!("{} draw calls", frame.draw_count());
//! ```

pub mod anim;
pub mod config;
pub mod error;
pub mod figure;
pub mod input;
pub mod math;
pub mod render;
pub mod scene;

pub use anim::{advance_animation_state, AnimationState, Command, CommandQueue, JointId};
pub use config::{AnimationConfig, AppConfig, ControlBindings};
pub use error::{InputError, RenderError};
pub use figure::{render_frame, Part, Pose};
pub use math::Transform;
pub use render::{FrameRecorder, FrameRecording, MeshKind, RenderBackend};
pub use scene::Scene;
