use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PulsePhase {
    Idle,
    Pulsing { started_at: f64 },
}

/// One-shot whole-body swell that eases up to `1 + amplitude` and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPulse {
    phase: PulsePhase,
    duration: f64,
    amplitude: f32,
    scale: f32,
}

impl Default for BodyPulse {
    fn default() -> Self {
        Self::new(1.0, 0.2)
    }
}

impl BodyPulse {
    pub fn new(duration: f64, amplitude: f32) -> Self {
        Self {
            phase: PulsePhase::Idle,
            duration: duration.max(f64::EPSILON),
            amplitude,
            scale: 1.0,
        }
    }

    pub fn phase(&self) -> PulsePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, PulsePhase::Pulsing { .. })
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Scale computed by the last [`advance`](Self::advance).
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Starts the pulse at `now`, restarting it if one is already running.
    pub fn trigger(&mut self, now: f64) {
        self.phase = PulsePhase::Pulsing { started_at: now };
    }

    /// Scale factor `elapsed` seconds into a pulse.
    pub fn scale_at(&self, elapsed: f64) -> f32 {
        if elapsed >= self.duration {
            return 1.0;
        }
        let t = elapsed.max(0.0) / self.duration;
        1.0 + (self.amplitude as f64 * (1.0 - (TAU * t).cos()) / 2.0) as f32
    }

    pub fn advance(&mut self, now: f64) -> f32 {
        self.scale = match self.phase {
            PulsePhase::Idle => 1.0,
            PulsePhase::Pulsing { started_at } => {
                let elapsed = (now - started_at).clamp(0.0, self.duration);
                if elapsed >= self.duration {
                    log::trace!("body pulse finished");
                    self.phase = PulsePhase::Idle;
                    1.0
                } else {
                    self.scale_at(elapsed)
                }
            }
        };
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_pulse_stays_at_unit_scale() {
        let mut pulse = BodyPulse::default();
        assert_eq!(pulse.advance(3.0), 1.0);
        assert!(!pulse.is_active());
    }

    #[test]
    fn clock_before_trigger_clamps_to_start() {
        let mut pulse = BodyPulse::default();
        pulse.trigger(5.0);
        assert_eq!(pulse.advance(4.0), 1.0);
        assert!(pulse.is_active());
    }
}
