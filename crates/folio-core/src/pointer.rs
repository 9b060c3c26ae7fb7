//! Pointer samples and the velocity estimate derived from them.

use crate::constants::{CURSOR_SPEED_NORMALIZER, MIN_SAMPLE_DT_SEC, SPEED_IDLE_RESET_SEC};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// Latest normalized pointer position, shared between the input handler
/// (the only writer) and the next frame callback (the only reader).
#[derive(Clone, Debug, Default)]
pub struct PointerCell(Rc<Cell<Option<Vec2>>>);

impl PointerCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, ndc: Vec2) {
        self.0.set(Some(ndc));
    }

    pub fn get(&self) -> Option<Vec2> {
        self.0.get()
    }

    pub fn clear(&self) {
        self.0.set(None);
    }
}

/// Map a viewport-relative position in pixels to -1..1 on both axes, +Y up.
///
/// An empty viewport maps everything to the centre.
#[inline]
pub fn normalize_pointer(client: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client.x / viewport.x) * 2.0 - 1.0,
        -(client.y / viewport.y) * 2.0 + 1.0,
    )
}

/// Normalized speed and heading from consecutive pointer samples.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    normalizer: f32,
    anchor: Option<(Vec2, f64)>,
    speed: f32,
    heading: f32,
    last_motion: f64,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(CURSOR_SPEED_NORMALIZER)
    }
}

impl VelocityTracker {
    /// `normalizer` is the raw speed (units per second) that maps to 1.0.
    pub fn new(normalizer: f32) -> Self {
        Self {
            normalizer: normalizer.max(f32::EPSILON),
            anchor: None,
            speed: 0.0,
            heading: 0.0,
            last_motion: f64::NEG_INFINITY,
        }
    }

    /// Feed one raw sample taken at `now` seconds.
    ///
    /// Returns false when the sample arrived in the same tick as the previous
    /// one; speed, heading and the reference sample are then left untouched.
    pub fn sample(&mut self, pos: Vec2, now: f64) -> bool {
        let Some((prev, prev_t)) = self.anchor else {
            self.anchor = Some((pos, now));
            return true;
        };
        let dt = (now - prev_t) as f32;
        if !(dt > MIN_SAMPLE_DT_SEC) {
            return false;
        }
        let delta = pos - prev;
        let dist = delta.length();
        self.speed = (dist / dt / self.normalizer).clamp(0.0, 1.0);
        if dist > 0.0 {
            self.heading = delta.y.atan2(delta.x);
            self.last_motion = now;
        }
        self.anchor = Some((pos, now));
        true
    }

    /// Last computed speed in 0..=1.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Speed as seen by a frame at `now`; reads zero once the pointer has
    /// been still for [`SPEED_IDLE_RESET_SEC`].
    pub fn speed_at(&self, now: f64) -> f32 {
        if now - self.last_motion > f64::from(SPEED_IDLE_RESET_SEC) {
            0.0
        } else {
            self.speed
        }
    }

    /// Heading of the last movement in radians, `atan2(dy, dx)`.
    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.normalizer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_flips_y() {
        let v = Vec2::new(800.0, 600.0);
        assert_eq!(normalize_pointer(Vec2::ZERO, v), Vec2::new(-1.0, 1.0));
        assert_eq!(normalize_pointer(v, v), Vec2::new(1.0, -1.0));
        assert_eq!(normalize_pointer(v * 0.5, v), Vec2::ZERO);
        assert_eq!(normalize_pointer(Vec2::ONE, Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn pointer_cell_is_shared() {
        let writer = PointerCell::new();
        let reader = writer.clone();
        assert_eq!(reader.get(), None);
        writer.set(Vec2::new(0.5, -0.5));
        assert_eq!(reader.get(), Some(Vec2::new(0.5, -0.5)));
        writer.clear();
        assert_eq!(reader.get(), None);
    }

    #[test]
    fn first_sample_only_anchors() {
        let mut v = VelocityTracker::default();
        assert!(v.sample(Vec2::new(10.0, 10.0), 1.0));
        assert_eq!(v.speed(), 0.0);
    }

    #[test]
    fn heading_follows_direction() {
        let mut v = VelocityTracker::new(1000.0);
        v.sample(Vec2::ZERO, 0.0);
        v.sample(Vec2::new(0.0, 10.0), 0.1);
        assert!((v.heading() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((v.speed() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn speed_holds_after_days_of_uptime() {
        let t = 6.5 * 86_400.0;
        let mut v = VelocityTracker::new(1000.0);
        v.sample(Vec2::ZERO, t);
        assert!(v.sample(Vec2::new(0.0, 10.0), t + 0.1));
        assert!((v.speed() - 0.1).abs() < 1e-4);
        assert!(v.speed_at(t + 0.15) > 0.0);
    }

    #[test]
    fn speed_relaxes_when_idle() {
        let mut v = VelocityTracker::new(1000.0);
        v.sample(Vec2::ZERO, 0.0);
        v.sample(Vec2::new(50.0, 0.0), 0.1);
        assert!(v.speed_at(0.15) > 0.0);
        assert_eq!(v.speed_at(0.5), 0.0);
    }
}
