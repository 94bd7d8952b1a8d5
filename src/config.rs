//! Runtime configuration
//!
//! Everything here has a `Default` matching the stock critter; the builder
//! setters let the host or tests override individual values.

use crate::anim::{JointId, JointMap, JointMotion};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub motions: JointMap<JointMotion>,
    pub pulse_duration: f64,
    pub pulse_amplitude: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            motions: JointMap::from_fn(JointMotion::default_for),
            pulse_duration: 1.0,
            pulse_amplitude: 0.2,
        }
    }
}

impl AnimationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn motion(mut self, joint: JointId, motion: JointMotion) -> Self {
        self.motions[joint] = motion;
        self
    }

    pub fn pulse_duration(mut self, seconds: f64) -> Self {
        self.pulse_duration = seconds;
        self
    }

    pub fn pulse_amplitude(mut self, amplitude: f32) -> Self {
        self.pulse_amplitude = amplitude;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderBinding {
    pub control: String,
    pub joint: JointId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleBinding {
    pub on_button: String,
    pub off_button: String,
    pub joint: JointId,
}

/// Which UI control drives which joint.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlBindings {
    pub sliders: Vec<SliderBinding>,
    pub toggles: Vec<ToggleBinding>,
}

impl Default for ControlBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        for joint in JointId::ALL {
            let key = Self::control_key(joint);
            bindings = bindings
                .slider(format!("{key}_slider"), joint)
                .toggle(format!("{key}_on"), format!("{key}_off"), joint);
        }
        bindings
    }
}

impl ControlBindings {
    pub fn empty() -> Self {
        Self {
            sliders: Vec::new(),
            toggles: Vec::new(),
        }
    }

    /// Stem used for a joint's default control ids, e.g. `right_leg_slider`.
    pub fn control_key(joint: JointId) -> &'static str {
        match joint {
            JointId::RightLeg => "right_leg",
            JointId::RightPaw => "right_paw",
            JointId::LeftLeg => "left_leg",
            JointId::LeftPaw => "left_paw",
            JointId::Arm => "arm",
        }
    }

    pub fn slider(mut self, control: impl Into<String>, joint: JointId) -> Self {
        self.sliders.push(SliderBinding {
            control: control.into(),
            joint,
        });
        self
    }

    pub fn toggle(
        mut self,
        on_button: impl Into<String>,
        off_button: impl Into<String>,
        joint: JointId,
    ) -> Self {
        self.toggles.push(ToggleBinding {
            on_button: on_button.into(),
            off_button: off_button.into(),
            joint,
        });
        self
    }

    /// Resolves a button id to the joint it toggles and the requested state.
    pub fn button(&self, id: &str) -> Option<(JointId, bool)> {
        self.toggles.iter().find_map(|t| {
            if t.on_button == id {
                Some((t.joint, true))
            } else if t.off_button == id {
                Some((t.joint, false))
            } else {
                None
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub window_size: (u32, u32),
    pub clear_color: [f64; 4],
    pub animation: AnimationConfig,
    pub bindings: ControlBindings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Critter Rig".to_string(),
            window_size: (900, 900),
            clear_color: [1.0, 0.8, 0.8, 1.0],
            animation: AnimationConfig::default(),
            bindings: ControlBindings::default(),
        }
    }
}

impl AppConfig {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    pub fn animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    pub fn bindings(mut self, bindings: ControlBindings) -> Self {
        self.bindings = bindings;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_map_each_joint_to_its_namesake() {
        let bindings = ControlBindings::default();
        assert_eq!(bindings.button("left_leg_on"), Some((JointId::LeftLeg, true)));
        assert_eq!(bindings.button("left_paw_off"), Some((JointId::LeftPaw, false)));
        assert_eq!(bindings.button("tail_on"), None);
        assert_eq!(bindings.sliders.len(), JointId::COUNT);
    }
}
