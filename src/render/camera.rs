use glam::{Mat4, Vec3, Vec4};

/// Maps the figure's [-1, 1] working cube onto the surface.
///
/// Keeps the figure's proportions on non-square windows and moves depth from
/// [-1, 1] to the [0, 1] range wgpu clips against. Near stays near.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub aspect: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self { aspect: 1.0 }
    }
}

impl Projection {
    pub fn new(aspect: f32) -> Self {
        Self { aspect }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn matrix(&self) -> Mat4 {
        let aspect = if self.aspect.is_finite() && self.aspect > 0.0 {
            self.aspect
        } else {
            1.0
        };
        let (sx, sy) = if aspect >= 1.0 {
            (1.0 / aspect, 1.0)
        } else {
            (1.0, aspect)
        };
        Mat4::from_cols(
            Vec4::new(sx, 0.0, 0.0, 0.0),
            Vec4::new(0.0, sy, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 0.5, 0.0),
            Vec4::new(0.0, 0.0, 0.5, 1.0),
        )
    }

    /// Projection applied after the per-frame global rotation.
    pub fn view(&self, global_rotation: Mat4) -> Mat4 {
        self.matrix() * global_rotation
    }

    pub fn project_point(&self, point: Vec3) -> Vec3 {
        self.matrix().transform_point3(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_is_remapped_to_unit_range() {
        let p = Projection::default();
        assert!((p.project_point(Vec3::new(0.0, 0.0, -1.0)).z - 0.0).abs() < 1e-6);
        assert!((p.project_point(Vec3::new(0.0, 0.0, 1.0)).z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn wide_window_squeezes_x() {
        let p = Projection::new(2.0);
        let v = p.project_point(Vec3::new(1.0, 1.0, 0.0));
        assert!((v.x - 0.5).abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }
}
