use super::command::Command;
use super::joint::{JointId, JointMap, JointMotion, JointState};
use super::pulse::BodyPulse;
use crate::config::AnimationConfig;

/// Everything pose assembly reads for one tick.
///
/// The value is replaced, never shared: commands and [`advance`](Self::advance)
/// return a new state, and rendering only borrows it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    clock: f64,
    joints: JointMap<JointState>,
    motions: JointMap<JointMotion>,
    angles: JointMap<f32>,
    pulse: BodyPulse,
    global_angle: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(&AnimationConfig::default())
    }
}

impl AnimationState {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            clock: 0.0,
            joints: JointMap::default(),
            motions: config.motions,
            angles: JointMap::splat(0.0),
            pulse: BodyPulse::new(config.pulse_duration, config.pulse_amplitude),
            global_angle: 0.0,
        }
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn joint(&self, joint: JointId) -> JointState {
        self.joints[joint]
    }

    pub fn motion(&self, joint: JointId) -> JointMotion {
        self.motions[joint]
    }

    /// Effective angle in degrees, as of the last [`advance`](Self::advance).
    pub fn angle(&self, joint: JointId) -> f32 {
        self.angles[joint]
    }

    pub fn pulse(&self) -> &BodyPulse {
        &self.pulse
    }

    pub fn body_scale(&self) -> f32 {
        self.pulse.scale()
    }

    pub fn global_angle(&self) -> f32 {
        self.global_angle
    }

    pub fn apply(mut self, command: Command) -> Self {
        log::trace!("applying {:?}", command);
        match command {
            Command::SetBaseAngle(joint, degrees) => self.joints[joint].base_angle = degrees,
            Command::ToggleAnimation(joint, enabled) => {
                if self.joints[joint].enabled != enabled {
                    log::debug!(
                        "{} animation {}",
                        joint.name(),
                        if enabled { "on" } else { "off" }
                    );
                }
                self.joints[joint].enabled = enabled;
            }
            Command::TriggerPulse(at) => self.pulse.trigger(at),
            Command::Rotate(delta) => self.global_angle += delta,
            Command::SetGlobalAngle(degrees) => self.global_angle = degrees,
        }
        self
    }

    /// Moves the clock to `elapsed_seconds` and recomputes derived values.
    pub fn advance(mut self, elapsed_seconds: f64) -> Self {
        self.clock = elapsed_seconds;
        for joint in JointId::ALL {
            let motion = self.motions[joint];
            self.angles[joint] = self.joints[joint].effective_angle(&motion, self.clock);
        }
        self.pulse.advance(self.clock);
        self
    }
}

/// Host-loop entry point, called right before rendering each tick.
pub fn advance_animation_state(state: AnimationState, elapsed_seconds: f64) -> AnimationState {
    state.advance(elapsed_seconds)
}
