//! Math utilities module
//!
//! Provides the composable [`Transform`] plus re-exports from glam.

mod transform;

pub use transform::Transform;

// Re-export commonly used glam types
pub use glam::{Mat4, Vec3, Vec4};
