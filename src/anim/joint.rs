use std::ops::{Index, IndexMut};

/// One rotational degree of freedom on the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointId {
    RightLeg,
    RightPaw,
    LeftLeg,
    LeftPaw,
    Arm,
}

impl JointId {
    pub const COUNT: usize = 5;

    pub const ALL: [JointId; Self::COUNT] = [
        JointId::RightLeg,
        JointId::RightPaw,
        JointId::LeftLeg,
        JointId::LeftPaw,
        JointId::Arm,
    ];

    pub fn index(self) -> usize {
        match self {
            JointId::RightLeg => 0,
            JointId::RightPaw => 1,
            JointId::LeftLeg => 2,
            JointId::LeftPaw => 3,
            JointId::Arm => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            JointId::RightLeg => "right leg",
            JointId::RightPaw => "right paw",
            JointId::LeftLeg => "left leg",
            JointId::LeftPaw => "left paw",
            JointId::Arm => "arm",
        }
    }
}

/// Fixed-size table with one entry per [`JointId`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointMap<T>([T; JointId::COUNT]);

impl<T: Copy> JointMap<T> {
    pub fn splat(value: T) -> Self {
        Self([value; JointId::COUNT])
    }
}

impl<T> JointMap<T> {
    pub fn from_fn(mut f: impl FnMut(JointId) -> T) -> Self {
        Self(JointId::ALL.map(&mut f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (JointId, &T)> + '_ {
        JointId::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T: Default + Copy> Default for JointMap<T> {
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T> Index<JointId> for JointMap<T> {
    type Output = T;

    fn index(&self, joint: JointId) -> &T {
        &self.0[joint.index()]
    }
}

impl<T> IndexMut<JointId> for JointMap<T> {
    fn index_mut(&mut self, joint: JointId) -> &mut T {
        &mut self.0[joint.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Cosine,
}

impl Waveform {
    pub fn sample(self, phase: f64) -> f64 {
        match self {
            Waveform::Sine => phase.sin(),
            Waveform::Cosine => phase.cos(),
        }
    }
}

/// How a joint swings while its animation is enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointMotion {
    pub waveform: Waveform,
    /// Multiplier on the clock, in radians per second.
    pub frequency: f64,
    /// Peak deviation from the base angle, in degrees.
    pub amplitude: f32,
}

impl JointMotion {
    pub const fn new(waveform: Waveform, frequency: f64, amplitude: f32) -> Self {
        Self {
            waveform,
            frequency,
            amplitude,
        }
    }

    pub fn offset(&self, clock: f64) -> f32 {
        (self.amplitude as f64 * self.waveform.sample(self.frequency * clock)) as f32
    }

    /// Default swing for each joint: legs at the base rate, paws at double
    /// rate, the arm on a cosine with a wider arc.
    pub fn default_for(joint: JointId) -> Self {
        match joint {
            JointId::RightLeg | JointId::LeftLeg => Self::new(Waveform::Sine, 1.0, 30.0),
            JointId::RightPaw | JointId::LeftPaw => Self::new(Waveform::Sine, 2.0, 30.0),
            JointId::Arm => Self::new(Waveform::Cosine, 1.0, 45.0),
        }
    }
}

/// Slider-set base angle plus the animation toggle for one joint.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointState {
    pub base_angle: f32,
    pub enabled: bool,
}

impl JointState {
    pub fn new(base_angle: f32) -> Self {
        Self {
            base_angle,
            enabled: false,
        }
    }

    pub fn is_oscillating(&self) -> bool {
        self.enabled
    }

    pub fn effective_angle(&self, motion: &JointMotion, clock: f64) -> f32 {
        if self.enabled {
            self.base_angle + motion.offset(clock)
        } else {
            self.base_angle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joint_indices_are_dense() {
        for (i, joint) in JointId::ALL.iter().enumerate() {
            assert_eq!(joint.index(), i);
        }
    }

    #[test]
    fn arm_peaks_at_time_zero() {
        let motion = JointMotion::default_for(JointId::Arm);
        assert!((motion.offset(0.0) - 45.0).abs() < 1e-4);
    }

    #[test]
    fn paw_runs_at_double_rate() {
        let paw = JointMotion::default_for(JointId::RightPaw);
        let leg = JointMotion::default_for(JointId::RightLeg);
        assert!((paw.offset(0.4) - leg.offset(0.8)).abs() < 1e-4);
    }
}
