use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::mesh::MeshKind;

/// Which vertices of a mesh a draw call covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawRange {
    /// Non-indexed triangles starting at vertex `first`.
    Triangles { first: u32, count: u32 },
    /// The mesh's whole index buffer.
    Indexed { count: u32 },
}

/// Immediate-mode drawing surface the figure renders against.
///
/// Uniform setters stay in effect until changed, the same way shader uniforms
/// do, so a cube can set its model matrix once and then vary only the color.
pub trait RenderBackend {
    fn begin_frame(&mut self, global_rotation: Mat4);
    fn set_model(&mut self, model: Mat4);
    fn set_color(&mut self, color: [f32; 4]);
    fn draw(&mut self, mesh: MeshKind, range: DrawRange);
}

/// Uniform values in effect for one draw call.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DrawUniforms {
    pub global_rotation: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl Default for DrawUniforms {
    fn default() -> Self {
        Self {
            global_rotation: Mat4::IDENTITY.to_cols_array_2d(),
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub mesh: MeshKind,
    pub range: DrawRange,
    pub uniforms: DrawUniforms,
}

/// Everything one frame submitted, in submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameRecording {
    pub calls: Vec<DrawCall>,
    pub color_updates: usize,
    pub model_updates: usize,
}

impl FrameRecording {
    pub fn draw_count(&self) -> usize {
        self.calls.len()
    }

    /// Flat byte image of the submission stream: uniforms, mesh and range
    /// for each call.
    pub fn to_bytes(&self) -> Vec<u8> {
        let per_call = std::mem::size_of::<DrawUniforms>() + 16;
        let mut bytes = Vec::with_capacity(self.calls.len() * per_call);
        for call in &self.calls {
            bytes.extend_from_slice(bytemuck::bytes_of(&call.uniforms));
            let (indexed, first, count) = match call.range {
                DrawRange::Triangles { first, count } => (0u32, first, count),
                DrawRange::Indexed { count } => (1u32, 0, count),
            };
            for word in [call.mesh.index() as u32, indexed, first, count] {
                bytes.extend_from_slice(&word.to_le_bytes());
            }
        }
        bytes
    }
}

/// Backend that captures submissions instead of drawing them.
///
/// The GPU renderer replays a [`FrameRecording`]; tests inspect it directly.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    current: DrawUniforms,
    recording: FrameRecording,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recording(&self) -> &FrameRecording {
        &self.recording
    }

    pub fn take(&mut self) -> FrameRecording {
        std::mem::take(&mut self.recording)
    }
}

impl RenderBackend for FrameRecorder {
    fn begin_frame(&mut self, global_rotation: Mat4) {
        self.recording = FrameRecording::default();
        self.current = DrawUniforms {
            global_rotation: global_rotation.to_cols_array_2d(),
            ..DrawUniforms::default()
        };
    }

    fn set_model(&mut self, model: Mat4) {
        self.current.model = model.to_cols_array_2d();
        self.recording.model_updates += 1;
    }

    fn set_color(&mut self, color: [f32; 4]) {
        self.current.color = color;
        self.recording.color_updates += 1;
    }

    fn draw(&mut self, mesh: MeshKind, range: DrawRange) {
        self.recording.calls.push(DrawCall {
            mesh,
            range,
            uniforms: self.current,
        });
    }
}

/// Backend that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackend;

impl RenderBackend for NullBackend {
    fn begin_frame(&mut self, _global_rotation: Mat4) {}
    fn set_model(&mut self, _model: Mat4) {}
    fn set_color(&mut self, _color: [f32; 4]) {}
    fn draw(&mut self, _mesh: MeshKind, _range: DrawRange) {}
}
