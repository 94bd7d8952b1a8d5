//! The critter, as a table.
//!
//! Each [`PartSpec`] starts from an origin frame and applies its steps in
//! order. Steps are the same right-multiplied operations [`Transform`] offers,
//! plus joint-driven rotations, the body pulse, and named frame snapshots that
//! later parts can start from.
//!
//! [`Transform`]: crate::math::Transform

use glam::Vec3;

use crate::anim::JointId;
use crate::render::mesh::MeshKind;

/// Named snapshot point a child part can start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSlot {
    RightLeg,
    LeftLeg,
}

impl FrameSlot {
    pub const COUNT: usize = 2;

    pub fn index(self) -> usize {
        match self {
            FrameSlot::RightLeg => 0,
            FrameSlot::LeftLeg => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Origin {
    Root,
    Frame(FrameSlot),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Translate(Vec3),
    Rotate { degrees: f32, axis: Vec3 },
    /// Rotates by `sign * angle(joint)` about `axis`.
    Joint { joint: JointId, sign: f32, axis: Vec3 },
    Scale(Vec3),
    /// Scale multiplied by the current body pulse factor on every axis.
    PulseScale(Vec3),
    Save(FrameSlot),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartSpec {
    pub name: &'static str,
    pub origin: Origin,
    pub steps: &'static [Step],
    pub mesh: MeshKind,
    pub color: [f32; 4],
}

pub const FUR: [f32; 4] = [0.5, 0.25, 0.1, 1.0];
pub const NOSE: [f32; 4] = [0.5, 0.4, 0.1, 1.0];
pub const EYE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub const HEART: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

const HIP_TILT: Step = Step::Rotate {
    degrees: -5.0,
    axis: Vec3::X,
};
const FACE_TILT: Step = Step::Rotate {
    degrees: -0.75,
    axis: Vec3::new(1.0, 1.0, 0.0),
};
/// Negative y so leg geometry hangs downward from the hip.
const LEG_FRAME: Step = Step::Scale(Vec3::new(0.5, -0.5, 0.5));
const LEG_THICKNESS: Step = Step::Scale(Vec3::new(0.55, 0.85, 0.55));
const CENTER_X: Step = Step::Translate(Vec3::new(-0.5, 0.0, 0.0));
const ANKLE: Step = Step::Translate(Vec3::new(0.0, 0.65, 0.0));
const PAW_SIZE: Step = Step::Scale(Vec3::new(0.5, 0.55, 0.5));
const PAW_OFFSET: Step = Step::Translate(Vec3::new(-0.5, 0.45, -0.001));

const fn joint(joint: JointId) -> Step {
    Step::Joint {
        joint,
        sign: -1.0,
        axis: Vec3::Z,
    }
}

const fn translate(x: f32, y: f32, z: f32) -> Step {
    Step::Translate(Vec3::new(x, y, z))
}

const fn scale(x: f32, y: f32, z: f32) -> Step {
    Step::Scale(Vec3::new(x, y, z))
}

const fn cube(name: &'static str, color: [f32; 4], steps: &'static [Step]) -> PartSpec {
    PartSpec {
        name,
        origin: Origin::Root,
        steps,
        mesh: MeshKind::Cube,
        color,
    }
}

const fn paw(name: &'static str, slot: FrameSlot, steps: &'static [Step]) -> PartSpec {
    PartSpec {
        name,
        origin: Origin::Frame(slot),
        steps,
        mesh: MeshKind::Cube,
        color: FUR,
    }
}

const fn heart(name: &'static str, steps: &'static [Step]) -> PartSpec {
    PartSpec {
        name,
        origin: Origin::Root,
        steps,
        mesh: MeshKind::Heart,
        color: HEART,
    }
}

const BODY: &[Step] = &[
    translate(-0.25, -0.3, 0.0),
    Step::PulseScale(Vec3::new(0.7, 0.8, 0.7)),
];
const RIGHT_LEG: &[Step] = &[
    translate(-0.12, -0.3, 0.3),
    HIP_TILT,
    joint(JointId::RightLeg),
    LEG_FRAME,
    Step::Save(FrameSlot::RightLeg),
    LEG_THICKNESS,
    CENTER_X,
];
const RIGHT_PAW: &[Step] = &[ANKLE, joint(JointId::RightPaw), PAW_SIZE, PAW_OFFSET];
const LEFT_LEG: &[Step] = &[
    translate(0.25, -0.3, 0.3),
    HIP_TILT,
    joint(JointId::LeftLeg),
    LEG_FRAME,
    Step::Save(FrameSlot::LeftLeg),
    LEG_THICKNESS,
    CENTER_X,
];
const LEFT_PAW: &[Step] = &[ANKLE, joint(JointId::LeftPaw), PAW_SIZE, PAW_OFFSET];
const HEAD: &[Step] = &[translate(-0.15, 0.5, 0.15), scale(0.4, 0.3, 0.4)];
const LEFT_ARM: &[Step] = &[translate(-0.45, -0.1, 0.35), FACE_TILT, scale(0.2, 0.5, 0.2)];
const RIGHT_ARM: &[Step] = &[
    translate(0.45, 0.5, 0.35),
    Step::Rotate {
        degrees: -0.75,
        axis: Vec3::new(1.0, -1.0, 0.0),
    },
    joint(JointId::Arm),
    scale(0.2, 0.5, 0.2),
];
const RIGHT_EAR: &[Step] = &[translate(-0.25, 0.8, 0.35), FACE_TILT, scale(0.2, 0.2, 0.2)];
const LEFT_EAR: &[Step] = &[translate(0.15, 0.8, 0.35), FACE_TILT, scale(0.2, 0.2, 0.2)];
const NOSE_STEPS: &[Step] = &[translate(-0.15, 0.5, 0.0), FACE_TILT, scale(0.4, 0.2, 0.2)];
const RIGHT_EYE: &[Step] = &[translate(0.1, 0.7, 0.1), FACE_TILT, scale(0.1, 0.1, 0.1)];
const LEFT_EYE: &[Step] = &[translate(-0.1, 0.7, 0.1), FACE_TILT, scale(0.1, 0.1, 0.1)];
const CHEST_HEART: &[Step] = &[translate(0.1, 0.1, 0.0), scale(0.2, 0.2, 0.2)];
const BACK_HEART_LEFT: &[Step] = &[translate(-0.7, 0.6, -0.5), scale(0.1, 0.1, 0.1)];
const BACK_HEART_RIGHT: &[Step] = &[translate(0.7, -0.7, -0.6), scale(0.1, 0.1, 0.1)];

/// Draw order matters: legs must precede the paws that read their frames.
pub const CRITTER: &[PartSpec] = &[
    cube("body", FUR, BODY),
    cube("right_leg", FUR, RIGHT_LEG),
    paw("right_paw", FrameSlot::RightLeg, RIGHT_PAW),
    cube("left_leg", FUR, LEFT_LEG),
    paw("left_paw", FrameSlot::LeftLeg, LEFT_PAW),
    cube("head", FUR, HEAD),
    cube("left_arm", FUR, LEFT_ARM),
    cube("right_arm", FUR, RIGHT_ARM),
    cube("right_ear", FUR, RIGHT_EAR),
    cube("left_ear", FUR, LEFT_EAR),
    cube("nose", NOSE, NOSE_STEPS),
    cube("right_eye", EYE, RIGHT_EYE),
    cube("left_eye", EYE, LEFT_EYE),
    heart("chest_heart", CHEST_HEART),
    heart("back_heart_left", BACK_HEART_LEFT),
    heart("back_heart_right", BACK_HEART_RIGHT),
];
