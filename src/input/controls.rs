use std::collections::{HashMap, HashSet};

use crate::anim::{Command, CommandQueue, JointId, JointMap};
use crate::config::ControlBindings;
use crate::error::InputError;

/// Read access to the host's slider widgets, by control id.
pub trait ControlSource {
    /// Raw text of a slider, or `None` if no such control exists.
    fn slider_text(&self, id: &str) -> Option<&str>;
}

impl ControlSource for HashMap<String, String> {
    fn slider_text(&self, id: &str) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

pub fn parse_angle(control: &str, text: &str) -> Result<f32, InputError> {
    match text.trim().parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::InvalidNumber {
            control: control.to_string(),
            text: text.to_string(),
        }),
    }
}

/// Re-reads every bound slider each tick and queues the base angles.
#[derive(Debug, Default)]
pub struct SliderPoller {
    last_good: JointMap<f32>,
    reported_missing: HashSet<String>,
}

impl SliderPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last successfully parsed base angle for `joint`.
    pub fn last_good(&self, joint: JointId) -> f32 {
        self.last_good[joint]
    }

    pub fn poll<S: ControlSource + ?Sized>(
        &mut self,
        source: &S,
        bindings: &ControlBindings,
        queue: &mut CommandQueue,
    ) {
        for binding in &bindings.sliders {
            let Some(text) = source.slider_text(&binding.control) else {
                self.report_missing(&binding.control);
                continue;
            };

            let angle = match parse_angle(&binding.control, text) {
                Ok(angle) => angle,
                Err(err) => {
                    log::warn!("{err}; keeping {}", self.last_good[binding.joint]);
                    self.last_good[binding.joint]
                }
            };
            self.last_good[binding.joint] = angle;
            queue.push(Command::SetBaseAngle(binding.joint, angle));
        }
    }

    fn report_missing(&mut self, control: &str) {
        let err = InputError::MissingControl(control.to_string());
        if self.reported_missing.insert(control.to_string()) {
            log::warn!("{err}; its joint keeps its current base angle");
        } else {
            log::debug!("{err}");
        }
    }
}

/// Turns an on/off button press into a toggle command.
pub fn press_button(
    bindings: &ControlBindings,
    id: &str,
    queue: &mut CommandQueue,
) -> Result<(), InputError> {
    let (joint, enabled) = bindings
        .button(id)
        .ok_or_else(|| InputError::UnboundButton(id.to_string()))?;
    queue.push(Command::ToggleAnimation(joint, enabled));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_angle_trims_whitespace() {
        assert_eq!(parse_angle("s", " 12.5 "), Ok(12.5));
    }

    #[test]
    fn poller_remembers_last_good_angle() {
        let bindings = ControlBindings::default();
        let mut poller = SliderPoller::new();
        let mut queue = CommandQueue::new();
        let mut source: HashMap<String, String> = HashMap::new();

        source.insert("arm_slider".to_string(), "30".to_string());
        poller.poll(&source, &bindings, &mut queue);
        assert_eq!(poller.last_good(JointId::Arm), 30.0);
        assert_eq!(queue.len(), 1);

        source.insert("arm_slider".to_string(), "abc".to_string());
        poller.poll(&source, &bindings, &mut queue);
        assert_eq!(poller.last_good(JointId::Arm), 30.0);
        assert_eq!(poller.last_good(JointId::LeftLeg), 0.0);

        let state = queue.drain_into(crate::anim::AnimationState::default()).advance(0.0);
        assert_eq!(state.angle(JointId::Arm), 30.0);
    }

    #[test]
    fn parse_angle_rejects_non_finite() {
        assert!(parse_angle("s", "NaN").is_err());
        assert!(parse_angle("s", "inf").is_err());
        assert!(parse_angle("s", "").is_err());
    }
}
