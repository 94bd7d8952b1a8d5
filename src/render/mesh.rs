use bytemuck::{Pod, Zeroable};
use once_cell::sync::Lazy;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        }],
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Cube,
    Heart,
}

impl MeshKind {
    pub const COUNT: usize = 2;

    pub fn index(self) -> usize {
        match self {
            MeshKind::Cube => 0,
            MeshKind::Heart => 1,
        }
    }

    pub fn geometry(self) -> &'static Geometry {
        match self {
            MeshKind::Cube => &CUBE_GEOMETRY,
            MeshKind::Heart => &HEART_GEOMETRY,
        }
    }
}

/// CPU-side mesh data, built once per kind and shared by every instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Option<Vec<u16>>,
}

impl Geometry {
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn index_count(&self) -> u32 {
        self.indices.as_ref().map_or(0, |i| i.len() as u32)
    }

    pub fn triangle_count(&self) -> u32 {
        match &self.indices {
            Some(indices) => indices.len() as u32 / 3,
            None => self.vertex_count() / 3,
        }
    }
}

pub struct CubeFace {
    pub name: &'static str,
    /// Multiplier on the base RGB; alpha is left alone.
    pub shade: f32,
    pub triangles: [[[f32; 3]; 3]; 2],
}

impl CubeFace {
    pub fn shaded(&self, color: [f32; 4]) -> [f32; 4] {
        [
            color[0] * self.shade,
            color[1] * self.shade,
            color[2] * self.shade,
            color[3],
        ]
    }
}

pub const CUBE_FACES: [CubeFace; 6] = [
    CubeFace {
        name: "front",
        shade: 1.0,
        triangles: [
            [[0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
            [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
        ],
    },
    CubeFace {
        name: "top",
        shade: 0.9,
        triangles: [
            [[0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0]],
            [[0.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]],
        ],
    },
    CubeFace {
        name: "bottom",
        shade: 1.0,
        triangles: [
            [[1.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
            [[1.0, 0.0, 1.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
        ],
    },
    CubeFace {
        name: "back",
        shade: 1.0,
        triangles: [
            [[1.0, 1.0, 1.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0]],
            [[1.0, 1.0, 1.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]],
        ],
    },
    CubeFace {
        name: "left",
        shade: 1.0,
        triangles: [
            [[0.0, 1.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]],
            [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 1.0]],
        ],
    },
    CubeFace {
        name: "right",
        shade: 1.0,
        triangles: [
            [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]],
            [[1.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 0.0, 0.0]],
        ],
    },
];

/// First vertex of triangle `triangle` (0 or 1) of face `face` in the cube buffer.
pub fn cube_triangle_start(face: usize, triangle: usize) -> u32 {
    (face * 6 + triangle * 3) as u32
}

/// Outline of the heart in the xy plane. Index 0 is the fan center; the other
/// twelve run around the rim.
const HEART_OUTLINE: [[f32; 2]; 13] = [
    [0.0, 0.2],
    [0.0, -1.0],
    [-1.0, -0.2],
    [-1.4, 0.2],
    [-1.6, 0.6],
    [-1.4, 1.0],
    [-0.8, 1.3],
    [0.0, 0.9],
    [0.8, 1.3],
    [1.4, 1.0],
    [1.6, 0.6],
    [1.4, 0.2],
    [1.0, -0.2],
];

pub const HEART_HALF_DEPTH: f32 = 0.1;

static CUBE_GEOMETRY: Lazy<Geometry> = Lazy::new(|| Geometry {
    vertices: CUBE_FACES
        .iter()
        .flat_map(|face| face.triangles.iter().flatten())
        .map(|&[x, y, z]| Vertex::new(x, y, z))
        .collect(),
    indices: None,
});

static HEART_GEOMETRY: Lazy<Geometry> = Lazy::new(build_heart);

fn build_heart() -> Geometry {
    let ring = HEART_OUTLINE.len() as u16;
    let rim = ring - 1;

    let vertices = [HEART_HALF_DEPTH, -HEART_HALF_DEPTH]
        .iter()
        .flat_map(|&z| HEART_OUTLINE.iter().map(move |&[x, y]| Vertex::new(x, y, z)))
        .collect();

    let next = |i: u16| i % rim + 1;
    let prev = |i: u16| if i == 1 { rim } else { i - 1 };

    let mut indices = Vec::with_capacity(rim as usize * 12);
    for i in 1..=rim {
        indices.extend_from_slice(&[0, i, next(i)]);
    }
    // Back fan walks the rim the other way so it faces outward.
    for r in (1..=rim).rev() {
        indices.extend_from_slice(&[ring, ring + r, ring + prev(r)]);
    }
    for i in 1..=rim {
        let j = next(i);
        indices.extend_from_slice(&[i, j, j + ring]);
        indices.extend_from_slice(&[i, j + ring, i + ring]);
    }

    Geometry {
        vertices,
        indices: Some(indices),
    }
}

pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: Option<wgpu::Buffer>,
    pub vertex_count: u32,
    pub index_count: u32,
}

impl Mesh {
    pub fn upload(device: &wgpu::Device, kind: MeshKind, geometry: &Geometry) -> Self {
        use wgpu::util::DeviceExt;

        log::debug!(
            "uploading {:?} mesh: {} vertices, {} indices",
            kind,
            geometry.vertex_count(),
            geometry.index_count()
        );

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(&geometry.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = geometry.indices.as_ref().map(|indices| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Index Buffer"),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        Self {
            vertex_buffer,
            index_buffer,
            vertex_count: geometry.vertex_count(),
            index_count: geometry.index_count(),
        }
    }
}

/// One lazily uploaded slot per [`MeshKind`].
///
/// Generic over the uploaded handle so the upload-once rule holds for any
/// backend, GPU or not.
pub struct MeshCache<M> {
    slots: [Option<M>; MeshKind::COUNT],
    uploads: usize,
}

impl<M> Default for MeshCache<M> {
    fn default() -> Self {
        Self {
            slots: [None, None],
            uploads: 0,
        }
    }
}

impl<M> MeshCache<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_upload(
        &mut self,
        kind: MeshKind,
        upload: impl FnOnce(&'static Geometry) -> M,
    ) -> &M {
        let slot = &mut self.slots[kind.index()];
        if slot.is_none() {
            self.uploads += 1;
        }
        slot.get_or_insert_with(|| upload(kind.geometry()))
    }

    pub fn get(&self, kind: MeshKind) -> Option<&M> {
        self.slots[kind.index()].as_ref()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_triangle_starts_follow_face_order() {
        assert_eq!(cube_triangle_start(0, 0), 0);
        assert_eq!(cube_triangle_start(0, 1), 3);
        assert_eq!(cube_triangle_start(5, 1), 33);
    }

    #[test]
    fn heart_back_fan_walks_rim_backwards() {
        let indices = MeshKind::Heart.geometry().indices.clone().unwrap();
        assert_eq!(&indices[36..42], &[13, 25, 24, 13, 24, 23]);
        assert_eq!(&indices[69..72], &[13, 14, 25]);
    }

    #[test]
    fn heart_side_band_closes_the_loop() {
        let indices = MeshKind::Heart.geometry().indices.clone().unwrap();
        assert_eq!(&indices[72..78], &[1, 2, 15, 1, 15, 14]);
        let n = indices.len();
        assert_eq!(&indices[n - 6..], &[12, 1, 14, 12, 14, 25]);
    }
}
