//! Pose assembly tests
//!
//! Tests for:
//! - Part list order and meshes
//! - Joint pivots for the two-link legs
//! - Body pulse and camera rotation reaching the submitted uniforms

use critter_rig::anim::{AnimationState, Command, JointId};
use critter_rig::figure::{FrameSlot, Origin, PartSpec, Pose, Step, CRITTER};
use critter_rig::render::{FrameRecorder, MeshKind};
use critter_rig::render_frame;
use glam::{Mat4, Vec3};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-4;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn posed(commands: &[Command], clock: f64) -> Pose {
    let state = commands
        .iter()
        .fold(AnimationState::default(), |s, c| s.apply(*c))
        .advance(clock);
    Pose::critter(&state)
}

fn pivot(pose: &Pose, name: &str) -> Vec3 {
    pose.part(name)
        .and_then(|p| p.joint_pivot)
        .map(|(_, at)| at)
        .unwrap()
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn critter_has_sixteen_parts_in_draw_order() {
    let pose = posed(&[], 0.0);
    let names: Vec<_> = pose.parts().iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        [
            "body",
            "right_leg",
            "right_paw",
            "left_leg",
            "left_paw",
            "head",
            "left_arm",
            "right_arm",
            "right_ear",
            "left_ear",
            "nose",
            "right_eye",
            "left_eye",
            "chest_heart",
            "back_heart_left",
            "back_heart_right",
        ]
    );
}

#[test]
fn only_the_three_hearts_use_the_heart_mesh() {
    let pose = posed(&[], 0.0);
    let hearts: Vec<_> = pose
        .parts()
        .iter()
        .filter(|p| p.part.mesh == MeshKind::Heart)
        .map(|p| p.name)
        .collect();
    assert_eq!(hearts, ["chest_heart", "back_heart_left", "back_heart_right"]);
}

#[test]
fn jointed_parts_report_their_joint() {
    let pose = posed(&[], 0.0);
    let jointed: Vec<_> = pose
        .parts()
        .iter()
        .filter_map(|p| p.joint_pivot.map(|(joint, _)| (p.name, joint)))
        .collect();
    assert_eq!(
        jointed,
        [
            ("right_leg", JointId::RightLeg),
            ("right_paw", JointId::RightPaw),
            ("left_leg", JointId::LeftLeg),
            ("left_paw", JointId::LeftPaw),
            ("right_arm", JointId::Arm),
        ]
    );
}

// ============================================================================
// Pivots
// ============================================================================

#[test]
fn paw_pivot_ignores_paw_angle() {
    let a = posed(&[Command::SetBaseAngle(JointId::RightPaw, -40.0)], 0.0);
    let b = posed(&[Command::SetBaseAngle(JointId::RightPaw, 55.0)], 0.0);

    assert!(vec3_approx(pivot(&a, "right_paw"), pivot(&b, "right_paw")));
    assert_ne!(
        a.part("right_paw").unwrap().part.transform,
        b.part("right_paw").unwrap().part.transform
    );
}

#[test]
fn paw_pivot_follows_leg_angle() {
    let rest = posed(&[], 0.0);
    let swung = posed(&[Command::SetBaseAngle(JointId::LeftLeg, 30.0)], 0.0);

    assert!(!vec3_approx(pivot(&rest, "left_paw"), pivot(&swung, "left_paw")));
    assert!(vec3_approx(pivot(&rest, "left_leg"), pivot(&swung, "left_leg")));
    // The other leg is untouched.
    assert!(vec3_approx(pivot(&rest, "right_paw"), pivot(&swung, "right_paw")));
}

#[test]
fn hip_pivot_is_leg_translation() {
    let pose = posed(&[], 0.0);
    assert!(vec3_approx(pivot(&pose, "right_leg"), Vec3::new(-0.12, -0.3, 0.3)));
    assert!(vec3_approx(pivot(&pose, "left_leg"), Vec3::new(0.25, -0.3, 0.3)));
}

#[test]
fn paw_pivot_hangs_below_hip_at_rest() {
    let pose = posed(&[], 0.0);
    let hip = pivot(&pose, "right_leg");
    let ankle = pivot(&pose, "right_paw");
    assert!(ankle.y < hip.y);
}

#[test]
fn paw_before_leg_falls_back_to_root_frame() {
    const PAW_ONLY: &[PartSpec] = &[PartSpec {
        name: "orphan_paw",
        origin: Origin::Frame(FrameSlot::LeftLeg),
        steps: &[Step::Translate(Vec3::new(0.0, 0.65, 0.0))],
        mesh: MeshKind::Cube,
        color: [1.0, 1.0, 1.0, 1.0],
    }];

    let pose = Pose::assemble(PAW_ONLY, &AnimationState::default());
    let origin = pose.parts()[0].part.transform.origin();
    assert!(vec3_approx(origin, Vec3::new(0.0, 0.65, 0.0)));
}

// ============================================================================
// Pulse and camera
// ============================================================================

#[test]
fn body_scales_with_pulse() {
    let rest = posed(&[], 0.0);
    let peak = posed(&[Command::TriggerPulse(0.0)], 0.5);

    let corner_rest = rest.part("body").unwrap().part.transform.transform_point(Vec3::ONE);
    let corner_peak = peak.part("body").unwrap().part.transform.transform_point(Vec3::ONE);

    assert!(vec3_approx(corner_rest, Vec3::new(0.45, 0.5, 0.7)));
    assert!(vec3_approx(corner_peak, Vec3::new(0.59, 0.66, 0.84)));
}

#[test]
fn pulse_only_scales_the_body() {
    let rest = posed(&[], 0.0);
    let peak = posed(&[Command::TriggerPulse(0.0)], 0.5);

    for (a, b) in rest.parts().iter().zip(peak.parts()).skip(1) {
        assert_eq!(a.part.transform, b.part.transform, "{} moved", a.name);
    }
}

#[test]
fn camera_rotation_reaches_every_draw() {
    let state = AnimationState::default()
        .apply(Command::SetGlobalAngle(90.0))
        .advance(0.0);

    let mut recorder = FrameRecorder::new();
    render_frame(&state, &mut recorder);

    let expected = Mat4::from_rotation_y(90f32.to_radians());
    for call in &recorder.recording().calls {
        let got = Mat4::from_cols_array_2d(&call.uniforms.global_rotation);
        assert!(got.abs_diff_eq(expected, EPSILON));
    }
}

#[test]
fn full_rig_is_the_default_critter() {
    let state = AnimationState::default().advance(0.0);
    assert_eq!(Pose::assemble(CRITTER, &state), Pose::critter(&state));
}
