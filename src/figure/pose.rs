use std::time::Instant;

use glam::Vec3;

use super::part::Part;
use super::rig::{FrameSlot, Origin, PartSpec, Step, CRITTER};
use crate::anim::{AnimationState, JointId};
use crate::math::Transform;
use crate::render::backend::RenderBackend;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedPart {
    pub name: &'static str,
    pub part: Part,
    /// Model-space point the part's joint rotation turns about, if it has one.
    pub joint_pivot: Option<(JointId, Vec3)>,
}

/// Every part of the figure placed for one tick, in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pose {
    parts: Vec<PlacedPart>,
}

impl Pose {
    pub fn assemble(rig: &[PartSpec], state: &AnimationState) -> Self {
        let mut frames: [Option<Transform>; FrameSlot::COUNT] = [None; FrameSlot::COUNT];
        let parts = rig
            .iter()
            .map(|spec| place(spec, state, &mut frames))
            .collect();
        Self { parts }
    }

    pub fn critter(state: &AnimationState) -> Self {
        Self::assemble(CRITTER, state)
    }

    pub fn parts(&self) -> &[PlacedPart] {
        &self.parts
    }

    pub fn part(&self, name: &str) -> Option<&PlacedPart> {
        self.parts.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn render<B: RenderBackend + ?Sized>(&self, backend: &mut B) {
        for placed in &self.parts {
            placed.part.render(backend);
        }
    }
}

fn place(
    spec: &PartSpec,
    state: &AnimationState,
    frames: &mut [Option<Transform>; FrameSlot::COUNT],
) -> PlacedPart {
    let mut transform = match spec.origin {
        Origin::Root => Transform::identity(),
        Origin::Frame(slot) => match frames[slot.index()] {
            Some(frame) => Transform::from_copy(&frame),
            None => {
                log::warn!(
                    "{} starts from {:?} before it was saved, using the root frame",
                    spec.name,
                    slot
                );
                Transform::identity()
            }
        },
    };

    let mut joint_pivot = None;
    for step in spec.steps {
        match *step {
            Step::Translate(offset) => {
                transform.translate_by(offset);
            }
            Step::Rotate { degrees, axis } => {
                transform.rotate_about(degrees, axis);
            }
            Step::Joint { joint, sign, axis } => {
                joint_pivot = Some((joint, transform.origin()));
                transform.rotate_about(sign * state.angle(joint), axis);
            }
            Step::Scale(factors) => {
                transform.scale_by(factors);
            }
            Step::PulseScale(factors) => {
                transform.scale_by(factors * state.body_scale());
            }
            Step::Save(slot) => frames[slot.index()] = Some(transform),
        }
    }

    PlacedPart {
        name: spec.name,
        part: Part {
            mesh: spec.mesh,
            color: spec.color,
            transform,
        },
        joint_pivot,
    }
}

/// Host-loop entry point: places the critter under the global camera
/// rotation and submits it. Returns the time spent, in milliseconds.
pub fn render_frame<B: RenderBackend + ?Sized>(state: &AnimationState, backend: &mut B) -> f64 {
    let started = Instant::now();

    let mut camera = Transform::identity();
    camera.rotate(state.global_angle(), 0.0, 1.0, 0.0);
    backend.begin_frame(camera.matrix());

    Pose::critter(state).render(backend);

    started.elapsed().as_secs_f64() * 1000.0
}
