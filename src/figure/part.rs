use crate::math::Transform;
use crate::render::backend::{DrawRange, RenderBackend};
use crate::render::mesh::{cube_triangle_start, MeshKind, CUBE_FACES};

/// A colored mesh instance placed by a transform. Built fresh every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Part {
    pub mesh: MeshKind,
    pub color: [f32; 4],
    pub transform: Transform,
}

impl Part {
    pub fn new(mesh: MeshKind, color: [f32; 4]) -> Self {
        Self {
            mesh,
            color,
            transform: Transform::identity(),
        }
    }

    pub fn cube(color: [f32; 4]) -> Self {
        Self::new(MeshKind::Cube, color)
    }

    pub fn heart(color: [f32; 4]) -> Self {
        Self::new(MeshKind::Heart, color)
    }

    pub fn render<B: RenderBackend + ?Sized>(&self, backend: &mut B) {
        backend.set_model(self.transform.matrix());
        match self.mesh {
            MeshKind::Cube => {
                for (face_idx, face) in CUBE_FACES.iter().enumerate() {
                    backend.set_color(face.shaded(self.color));
                    for triangle in 0..2 {
                        backend.draw(
                            MeshKind::Cube,
                            DrawRange::Triangles {
                                first: cube_triangle_start(face_idx, triangle),
                                count: 3,
                            },
                        );
                    }
                }
            }
            MeshKind::Heart => {
                backend.set_color(self.color);
                backend.draw(
                    MeshKind::Heart,
                    DrawRange::Indexed {
                        count: MeshKind::Heart.geometry().index_count(),
                    },
                );
            }
        }
    }
}
