//! Transform composition tests
//!
//! Tests for:
//! - Right-multiplied composition order
//! - Degree rotations about arbitrary axes
//! - Value-copy snapshots staying independent of later edits

use critter_rig::math::Transform;
use glam::{Mat4, Vec3};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn identity_leaves_points_alone() {
    let t = Transform::identity();
    let p = Vec3::new(0.3, -1.2, 4.0);
    assert!(vec3_approx(t.transform_point(p), p));
    assert_eq!(t.matrix(), Mat4::IDENTITY);
}

#[test]
fn from_matrix_keeps_composing() {
    let mut t = Transform::from_matrix(Mat4::from_translation(Vec3::new(0.0, 0.0, 2.0)));
    t.scale(2.0, 2.0, 2.0);

    assert!(vec3_approx(t.transform_point(Vec3::X), Vec3::new(2.0, 0.0, 2.0)));
    assert_eq!(t.matrix().w_axis.z, 2.0);
}

#[test]
fn translate_then_rotate_applies_rotation_first() {
    let mut t = Transform::identity();
    t.translate(1.0, 0.0, 0.0).rotate(90.0, 0.0, 0.0, 1.0);

    let p = t.transform_point(Vec3::X);
    assert!(vec3_approx(p, Vec3::new(1.0, 1.0, 0.0)), "got {p:?}");
}

#[test]
fn rotate_then_translate_moves_along_rotated_axis() {
    let mut t = Transform::identity();
    t.rotate(90.0, 0.0, 0.0, 1.0).translate(1.0, 0.0, 0.0);

    let p = t.transform_point(Vec3::X);
    assert!(vec3_approx(p, Vec3::new(0.0, 2.0, 0.0)), "got {p:?}");
}

#[test]
fn scale_is_applied_in_the_current_frame() {
    let mut t = Transform::identity();
    t.translate(0.0, 1.0, 0.0).scale(2.0, 3.0, 4.0);

    let p = t.transform_point(Vec3::ONE);
    assert!(vec3_approx(p, Vec3::new(2.0, 4.0, 4.0)), "got {p:?}");
}

#[test]
fn negative_scale_mirrors() {
    let mut t = Transform::identity();
    t.scale(0.5, -0.5, 0.5);

    let p = t.transform_point(Vec3::new(0.0, 1.0, 0.0));
    assert!(vec3_approx(p, Vec3::new(0.0, -0.5, 0.0)));
}

#[test]
fn rotation_axis_length_does_not_matter() {
    let mut unit = Transform::identity();
    unit.rotate(30.0, 1.0, 1.0, 0.0);
    let mut long = Transform::identity();
    long.rotate(30.0, 5.0, 5.0, 0.0);

    let p = Vec3::new(0.2, 0.7, -0.4);
    assert!(vec3_approx(unit.transform_point(p), long.transform_point(p)));
}

#[test]
fn origin_tracks_accumulated_translation() {
    let mut t = Transform::identity();
    t.translate(0.5, 0.0, 0.0)
        .rotate(90.0, 0.0, 0.0, 1.0)
        .translate(1.0, 0.0, 0.0);

    assert!(vec3_approx(t.origin(), Vec3::new(0.5, 1.0, 0.0)));
}

// ============================================================================
// Snapshots
// ============================================================================

#[test]
fn from_copy_is_independent_of_the_source() {
    let mut source = Transform::identity();
    source.translate(1.0, 2.0, 3.0);

    let mut copy = Transform::from_copy(&source);
    copy.scale(2.0, 2.0, 2.0);
    source.rotate(45.0, 0.0, 1.0, 0.0);

    assert!(vec3_approx(copy.origin(), Vec3::new(1.0, 2.0, 3.0)));
    assert!(vec3_approx(
        copy.transform_point(Vec3::X),
        Vec3::new(3.0, 2.0, 3.0)
    ));
}

#[test]
fn saved_frame_survives_later_edits() {
    let mut leg = Transform::identity();
    leg.translate(-0.12, -0.3, 0.3).scale(0.5, -0.5, 0.5);
    let saved = leg;

    leg.scale(0.55, 0.85, 0.55).translate(-0.5, 0.0, 0.0);

    let mut paw = Transform::from_copy(&saved);
    paw.translate(0.0, 0.65, 0.0);
    assert!(vec3_approx(paw.origin(), Vec3::new(-0.12, -0.625, 0.3)));
    assert_ne!(saved, leg);
}
