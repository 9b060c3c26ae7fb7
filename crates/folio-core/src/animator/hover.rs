use super::{FrameInputs, TransformProvider};
use crate::clock::FrameInfo;
use crate::constants::*;
use crate::easing::Ease;
use crate::shape::ShapeKind;
use crate::transform::{clock_phase, wrap_angle, Transform};
use crate::tween::{Track, Tween};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// The three hero shapes that react to being hovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverPreset {
    /// Tilts on X, spins on Y; hover turns a full revolution and hops up.
    Cube,
    /// Tilts on X, spins on Y; hover flips half a turn on Z with overshoot.
    Ring,
    /// Bobs on Y, spins on Z; hover pulses the scale.
    Orb,
}

impl HoverPreset {
    pub fn shape(&self) -> ShapeKind {
        match self {
            HoverPreset::Cube => ShapeKind::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            HoverPreset::Ring => ShapeKind::Torus {
                radius: 1.0,
                tube: 0.3,
                radial_segments: 16,
                tubular_segments: 32,
            },
            HoverPreset::Orb => ShapeKind::Sphere {
                radius: 0.7,
                width_segments: 32,
                height_segments: 32,
            },
        }
    }

    pub fn color(&self) -> [f32; 3] {
        match self {
            HoverPreset::Cube => COLOR_VIOLET,
            HoverPreset::Ring => COLOR_ORANGE,
            HoverPreset::Orb => COLOR_SKY,
        }
    }

    pub fn hit_radius(&self) -> f32 {
        match self {
            HoverPreset::Cube => CUBE_HIT_RADIUS,
            HoverPreset::Ring => RING_HIT_RADIUS,
            HoverPreset::Orb => ORB_HIT_RADIUS,
        }
    }
}

/// Hero shape with idle motion and hover one-shots.
///
/// One-shots are never cancelled when the hover ends. A new hover while one
/// is still running starts the next transition from the value on screen.
#[derive(Clone, Debug)]
pub struct HoverShape {
    preset: HoverPreset,
    rest: Vec3,
    spin: f32,
    turn: Track<f32>,
    lift: Track<f32>,
    swell: Track<f32>,
}

impl HoverShape {
    pub fn new(preset: HoverPreset, rest: Vec3) -> Self {
        Self {
            preset,
            rest,
            spin: 0.0,
            turn: Track::new(0.0),
            lift: Track::new(0.0),
            swell: Track::new(1.0),
        }
    }

    pub fn preset(&self) -> HoverPreset {
        self.preset
    }

    pub fn rest(&self) -> Vec3 {
        self.rest
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.turn.is_animating(now) || self.lift.is_animating(now) || self.swell.is_animating(now)
    }

    fn sample_turn(&mut self, now: f64) -> f32 {
        let v = self.turn.sample(now);
        if !self.turn.is_animating(now) {
            // keep the resting offset bounded once a turn has landed
            self.turn.set(wrap_angle(v));
        }
        v
    }
}

impl TransformProvider for HoverShape {
    fn advance(&mut self, frame: &FrameInfo, _inputs: &FrameInputs, target: &mut Transform) {
        let t = frame.elapsed;
        self.spin = wrap_angle(self.spin + SHAPE_SPIN_PER_FRAME);
        match self.preset {
            HoverPreset::Cube => {
                let turn = self.sample_turn(t);
                target.rotation.x = clock_phase(t, CUBE_TILT_FREQ).sin() * IDLE_TILT_AMPLITUDE;
                target.rotation.y = wrap_angle(self.spin + turn);
                target.position = self.rest + Vec3::Y * self.lift.sample(t);
            }
            HoverPreset::Ring => {
                let turn = self.sample_turn(t);
                target.rotation.x =
                    clock_phase(t, RING_TILT_FREQ).cos() * IDLE_TILT_AMPLITUDE + RING_TILT_OFFSET;
                target.rotation.y = self.spin;
                target.rotation.z = wrap_angle(turn);
                target.position = self.rest;
            }
            HoverPreset::Orb => {
                target.position =
                    self.rest + Vec3::Y * (clock_phase(t, 1.0).sin() * ORB_BOB_AMPLITUDE);
                target.rotation.z = self.spin;
                target.scale = Vec3::splat(self.swell.sample(t));
            }
        }
    }

    fn hover_begin(&mut self, now: f64, _target: &Transform) {
        match self.preset {
            HoverPreset::Cube => {
                self.turn.retarget(now, |from| {
                    Tween::new(from, from + TAU, now, CUBE_TURN_SEC, Ease::Power2InOut)
                });
                self.lift.retarget(now, |from| {
                    Tween::new(from, from + CUBE_LIFT, now, CUBE_LIFT_SEC, Ease::Power2Out)
                        .settle_at(0.0)
                });
            }
            HoverPreset::Ring => {
                self.turn.retarget(now, |from| {
                    Tween::new(
                        from,
                        from + PI,
                        now,
                        RING_TURN_SEC,
                        Ease::BackOut(RING_BACK_OVERSHOOT),
                    )
                });
            }
            HoverPreset::Orb => {
                self.swell.retarget(now, |from| {
                    Tween::new(from, ORB_SWELL_SCALE, now, ORB_SWELL_SEC, Ease::Power1Out)
                        .settle_at(1.0)
                });
            }
        }
    }

    fn hit_radius(&self) -> Option<f32> {
        Some(self.preset.hit_radius())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(elapsed: f32, index: u64) -> FrameInfo {
        FrameInfo {
            elapsed: f64::from(elapsed),
            delta: 1.0 / 60.0,
            index,
        }
    }

    #[test]
    fn cube_lift_returns_to_rest() {
        let rest = Vec3::new(-2.0, 0.0, 0.0);
        let mut cube = HoverShape::new(HoverPreset::Cube, rest);
        let mut t = Transform::at(rest);
        cube.hover_begin(0.0, &t);
        cube.advance(&frame(CUBE_LIFT_SEC, 1), &FrameInputs::default(), &mut t);
        assert!((t.position.y - CUBE_LIFT).abs() < 1e-5);
        cube.advance(&frame(2.0, 2), &FrameInputs::default(), &mut t);
        assert_eq!(t.position, rest);
        assert!(!cube.is_animating(2.0));
    }

    #[test]
    fn cube_turn_adds_a_revolution() {
        let mut cube = HoverShape::new(HoverPreset::Cube, Vec3::ZERO);
        let mut t = Transform::default();
        cube.hover_begin(0.0, &t);
        cube.advance(&frame(CUBE_TURN_SEC * 0.5, 1), &FrameInputs::default(), &mut t);
        // half way through a full turn plus one frame of idle spin
        assert!((t.rotation.y - (PI + SHAPE_SPIN_PER_FRAME)).abs() < 1e-4);
        cube.advance(&frame(CUBE_TURN_SEC, 2), &FrameInputs::default(), &mut t);
        assert!((t.rotation.y - 2.0 * SHAPE_SPIN_PER_FRAME).abs() < 1e-4);
    }

    #[test]
    fn retrigger_continues_from_current_value() {
        let mut ring = HoverShape::new(HoverPreset::Ring, Vec3::ZERO);
        let t = Transform::default();
        ring.hover_begin(0.0, &t);
        let mid = ring.turn.peek(0.5);
        ring.hover_begin(0.5, &t);
        assert!((ring.turn.peek(0.5) - mid).abs() < 1e-6);
        assert!((ring.turn.peek(1.5) - (mid + PI)).abs() < 1e-5);
    }

    #[test]
    fn orb_swell_settles_at_unit_scale() {
        let mut orb = HoverShape::new(HoverPreset::Orb, Vec3::new(0.0, 1.5, 0.0));
        let mut t = Transform::default();
        orb.hover_begin(0.0, &t);
        orb.advance(&frame(ORB_SWELL_SEC, 1), &FrameInputs::default(), &mut t);
        assert!((t.scale.x - ORB_SWELL_SCALE).abs() < 1e-5);
        // retrigger on the way back down peaks again, never drifts above the peak
        orb.hover_begin(0.45, &t);
        orb.advance(&frame(0.45 + ORB_SWELL_SEC, 2), &FrameInputs::default(), &mut t);
        assert!((t.scale.x - ORB_SWELL_SCALE).abs() < 1e-5);
        orb.advance(&frame(5.0, 3), &FrameInputs::default(), &mut t);
        assert_eq!(t.scale, Vec3::ONE);
    }
}
