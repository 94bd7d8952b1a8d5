//! Rendering module
//!
//! The backend trait the figure draws against, the shared mesh primitives,
//! and the wgpu renderer that replays recorded frames.

pub mod backend;
pub mod camera;
pub mod context;
pub mod mesh;
pub mod pipeline;
pub mod renderer;

pub use backend::{
    DrawCall, DrawRange, DrawUniforms, FrameRecorder, FrameRecording, NullBackend, RenderBackend,
};
pub use camera::Projection;
pub use context::GpuContext;
pub use mesh::{Geometry, Mesh, MeshCache, MeshKind, Vertex};
pub use renderer::FigureRenderer;
