use super::{FrameInputs, TransformProvider};
use crate::clock::FrameInfo;
use crate::constants::{
    FLOAT_PHASE_PERIOD, FLOAT_PHASE_SEED_MAX, FLOAT_PHASE_STEP, FLOAT_SPIN_X_PER_FRAME, FLOAT_SPIN_Y_PER_FRAME,
    FLOAT_XZ_AMPLITUDE, FLOAT_X_FREQ, FLOAT_Y_AMPLITUDE, FLOAT_Z_FREQ,
};
use crate::error::{finite, ConfigError};
use crate::transform::{wrap_angle, Transform};
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatParams {
    /// Multiplier on the per-frame spin.
    pub speed: f32,
    /// Multiplier on the drift amplitudes.
    pub intensity: f32,
}

impl Default for FloatParams {
    fn default() -> Self {
        Self {
            speed: 1.0,
            intensity: 1.0,
        }
    }
}

impl FloatParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("float speed", self.speed)?;
        finite("float intensity", self.intensity)
    }
}

/// Decorative shape drifting around its rest position.
///
/// The phase accumulator starts at a random offset so that several elements
/// never bob in lockstep. It wraps at [`FLOAT_PHASE_PERIOD`], where every
/// drift term repeats, so it never grows past f32 step resolution.
#[derive(Clone, Debug)]
pub struct FloatingElement {
    rest: Vec3,
    params: FloatParams,
    phase: f32,
    rotation: Vec3,
}

impl FloatingElement {
    pub fn new(rest: Vec3, params: FloatParams, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self::with_phase(rest, params, rng.gen_range(0.0..FLOAT_PHASE_SEED_MAX)))
    }

    pub fn with_phase(rest: Vec3, params: FloatParams, phase: f32) -> Self {
        Self {
            rest,
            params,
            phase: phase.rem_euclid(FLOAT_PHASE_PERIOD),
            rotation: Vec3::ZERO,
        }
    }

    pub fn starting_at(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn rest(&self) -> Vec3 {
        self.rest
    }

    /// Offset from the rest position for a given phase value.
    pub fn drift(phase: f32, intensity: f32) -> Vec3 {
        Vec3::new(
            (phase * FLOAT_X_FREQ).sin() * FLOAT_XZ_AMPLITUDE * intensity,
            phase.sin() * FLOAT_Y_AMPLITUDE * intensity,
            (phase * FLOAT_Z_FREQ).cos() * FLOAT_XZ_AMPLITUDE * intensity,
        )
    }
}

impl TransformProvider for FloatingElement {
    fn advance(&mut self, _frame: &FrameInfo, _inputs: &FrameInputs, target: &mut Transform) {
        let speed = self.params.speed;
        self.rotation.x = wrap_angle(self.rotation.x + FLOAT_SPIN_X_PER_FRAME * speed);
        self.rotation.y = wrap_angle(self.rotation.y + FLOAT_SPIN_Y_PER_FRAME * speed);
        self.phase = (self.phase + FLOAT_PHASE_STEP).rem_euclid(FLOAT_PHASE_PERIOD);
        target.rotation = self.rotation;
        target.position = self.rest + Self::drift(self.phase, self.params.intensity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seeded_phases_differ() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = FloatingElement::new(Vec3::ZERO, FloatParams::default(), &mut rng).unwrap();
        let b = FloatingElement::new(Vec3::ZERO, FloatParams::default(), &mut rng).unwrap();
        assert_ne!(a.phase(), b.phase());
        assert!((0.0..FLOAT_PHASE_PERIOD).contains(&a.phase()));
    }

    #[test]
    fn drift_is_continuous_across_phase_wrap() {
        let rest = Vec3::ZERO;
        let start = FLOAT_PHASE_PERIOD - FLOAT_PHASE_STEP * 0.5;
        let mut el = FloatingElement::with_phase(rest, FloatParams::default(), start);
        let mut t = Transform::at(rest);
        el.advance(&FrameInfo::default(), &FrameInputs::default(), &mut t);
        assert!(el.phase() < FLOAT_PHASE_STEP);
        let unwrapped = FloatingElement::drift(start + FLOAT_PHASE_STEP, 1.0);
        assert!((t.position - unwrapped).length() < 1e-4);
    }

    #[test]
    fn phase_stays_bounded_over_long_runs() {
        let mut el = FloatingElement::with_phase(Vec3::ZERO, FloatParams::default(), 99.9);
        let mut t = Transform::default();
        let before = el.phase();
        for _ in 0..100 {
            el.advance(&FrameInfo::default(), &FrameInputs::default(), &mut t);
        }
        let moved = (el.phase() - before).rem_euclid(FLOAT_PHASE_PERIOD);
        assert!((moved - 100.0 * FLOAT_PHASE_STEP).abs() < 1e-4);
        for _ in 0..100_000 {
            el.advance(&FrameInfo::default(), &FrameInputs::default(), &mut t);
        }
        assert!((0.0..FLOAT_PHASE_PERIOD).contains(&el.phase()));
    }

    #[test]
    fn stays_within_drift_envelope() {
        let rest = Vec3::new(1.0, -2.0, 0.5);
        let mut el = FloatingElement::with_phase(rest, FloatParams::default(), 3.0);
        let mut t = Transform::at(rest);
        for i in 1..=500 {
            let frame = FrameInfo {
                elapsed: i as f64 / 60.0,
                delta: 1.0 / 60.0,
                index: i,
            };
            el.advance(&frame, &FrameInputs::default(), &mut t);
            let d = t.position - rest;
            assert!(d.y.abs() <= FLOAT_Y_AMPLITUDE + 1e-6);
            assert!(d.x.abs() <= FLOAT_XZ_AMPLITUDE + 1e-6);
            assert!(d.z.abs() <= FLOAT_XZ_AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn rejects_non_finite_params() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = FloatParams {
            speed: f32::NAN,
            intensity: 1.0,
        };
        assert!(FloatingElement::new(Vec3::ZERO, params, &mut rng).is_err());
    }
}
