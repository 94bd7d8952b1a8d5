use std::collections::VecDeque;

use super::joint::JointId;
use super::state::AnimationState;

/// A single input event, queued until the next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SetBaseAngle(JointId, f32),
    ToggleAnimation(JointId, bool),
    /// Starts (or restarts) the body pulse at the given clock time.
    TriggerPulse(f64),
    /// Adds a horizontal drag delta, in degrees, to the camera angle.
    Rotate(f32),
    SetGlobalAngle(f32),
}

/// FIFO of pending commands, drained once per tick.
#[derive(Debug, Default, Clone)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Applies every queued command to `state` in arrival order.
    pub fn drain_into(&mut self, state: AnimationState) -> AnimationState {
        self.pending
            .drain(..)
            .fold(state, |state, command| state.apply(command))
    }
}

impl Extend<Command> for CommandQueue {
    fn extend<I: IntoIterator<Item = Command>>(&mut self, iter: I) {
        self.pending.extend(iter);
    }
}
