use glam::{Mat4, Vec3, Vec4};

/// A 4x4 affine transform built by composing elementary operations.
///
/// Every operation right-multiplies onto the current matrix, so operations
/// apply to geometry in reverse of the order they were issued: the last call
/// is the first thing that happens to a vertex. `Transform` is `Copy`, which
/// makes forking a coordinate frame an explicit value copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        matrix: Mat4::IDENTITY,
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// Independent copy of `other` at its current construction point.
    pub fn from_copy(other: &Transform) -> Self {
        Self {
            matrix: other.matrix,
        }
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.matrix *= Mat4::from_translation(Vec3::new(x, y, z));
        self
    }

    /// Right-handed rotation of `degrees` about `(x, y, z)`.
    ///
    /// The axis does not need to be unit length. A zero axis is a no-op.
    pub fn rotate(&mut self, degrees: f32, x: f32, y: f32, z: f32) -> &mut Self {
        let axis = Vec3::new(x, y, z);
        if axis.length_squared() <= f32::EPSILON {
            return self;
        }
        self.matrix *= Mat4::from_axis_angle(axis.normalize(), degrees.to_radians());
        self
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.matrix *= Mat4::from_scale(Vec3::new(x, y, z));
        self
    }

    pub fn translate_by(&mut self, offset: Vec3) -> &mut Self {
        self.translate(offset.x, offset.y, offset.z)
    }

    pub fn rotate_about(&mut self, degrees: f32, axis: Vec3) -> &mut Self {
        self.rotate(degrees, axis.x, axis.y, axis.z)
    }

    pub fn scale_by(&mut self, factors: Vec3) -> &mut Self {
        self.scale(factors.x, factors.y, factors.z)
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        self.matrix.to_cols_array_2d()
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.matrix.transform_point3(point)
    }

    /// Where the local origin lands in the parent space.
    pub fn origin(&self) -> Vec3 {
        (self.matrix * Vec4::W).truncate()
    }
}
