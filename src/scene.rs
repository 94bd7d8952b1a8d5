use crate::anim::{advance_animation_state, AnimationState, Command, CommandQueue};
use crate::config::{AnimationConfig, ControlBindings};
use crate::figure::render_frame;
use crate::input::{press_button, ControlSource, SliderPoller};
use crate::render::backend::{FrameRecorder, FrameRecording, RenderBackend};

/// One critter plus the input plumbing that drives it.
///
/// Input handlers only enqueue; [`tick`](Self::tick) drains the queue, moves
/// the clock and renders, in that order.
pub struct Scene {
    state: AnimationState,
    queue: CommandQueue,
    poller: SliderPoller,
    bindings: ControlBindings,
    recorder: FrameRecorder,
    last_frame_ms: f64,
}

impl Scene {
    pub fn new(animation: &AnimationConfig, bindings: ControlBindings) -> Self {
        Self {
            state: AnimationState::new(animation),
            queue: CommandQueue::new(),
            poller: SliderPoller::new(),
            bindings,
            recorder: FrameRecorder::new(),
            last_frame_ms: 0.0,
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn bindings(&self) -> &ControlBindings {
        &self.bindings
    }

    pub fn last_frame_ms(&self) -> f64 {
        self.last_frame_ms
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn push(&mut self, command: Command) {
        self.queue.push(command);
    }

    pub fn press_button(&mut self, id: &str) {
        if let Err(err) = press_button(&self.bindings, id, &mut self.queue) {
            log::warn!("{err}");
        }
    }

    pub fn poll_controls<S: ControlSource + ?Sized>(&mut self, source: &S) {
        self.poller.poll(source, &self.bindings, &mut self.queue);
    }

    /// Applies queued input and moves the clock, without drawing.
    pub fn update(&mut self, clock: f64) -> &AnimationState {
        let state = self.queue.drain_into(self.state);
        self.state = advance_animation_state(state, clock);
        &self.state
    }

    /// Runs a full tick and returns what was submitted.
    pub fn tick(&mut self, clock: f64) -> &FrameRecording {
        self.update(clock);
        self.last_frame_ms = render_frame(&self.state, &mut self.recorder);
        self.recorder.recording()
    }

    /// Runs a full tick against an arbitrary backend.
    pub fn tick_with<B: RenderBackend + ?Sized>(&mut self, clock: f64, backend: &mut B) -> f64 {
        self.update(clock);
        self.last_frame_ms = render_frame(&self.state, backend);
        self.last_frame_ms
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(&AnimationConfig::default(), ControlBindings::default())
    }
}
