//! Time-sampled value transitions.
//!
//! A [`Tween`] is a pure function of the clock: sampling it twice at the same
//! time yields the same value. A [`Track`] holds a resting value plus at most
//! one running tween and is what animated properties actually own.

use crate::easing::Ease;
use glam::{Vec2, Vec3};

pub trait Lerp: Copy {
    fn lerp_to(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    back_to: Option<T>,
    start: f64,
    duration: f32,
    ease: Ease,
}

impl<T: Lerp> Tween<T> {
    /// `start` is a clock timestamp and `duration` a span, both in seconds.
    /// A non-positive duration jumps straight to the end value.
    pub fn new(from: T, to: T, start: f64, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            back_to: None,
            start,
            duration,
            ease,
        }
    }

    /// Play forward, then the same ease in reverse back to the start value.
    pub fn yoyo(mut self) -> Self {
        self.back_to = Some(self.from);
        self
    }

    /// Like [`Tween::yoyo`] but the return leg ends at `value` instead of the start.
    pub fn settle_at(mut self, value: T) -> Self {
        self.back_to = Some(value);
        self
    }

    pub fn total_duration(&self) -> f32 {
        if self.back_to.is_some() {
            self.duration * 2.0
        } else {
            self.duration
        }
    }

    pub fn end_value(&self) -> T {
        self.back_to.unwrap_or(self.to)
    }

    /// Seconds since the tween started, differenced in f64 before narrowing.
    fn local(&self, now: f64) -> f32 {
        (now - self.start).max(0.0) as f32
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.duration <= 0.0 || self.local(now) >= self.total_duration()
    }

    pub fn sample(&self, now: f64) -> T {
        if self.duration <= 0.0 {
            return self.end_value();
        }
        let local = self.local(now);
        if local < self.duration {
            return self.from.lerp_to(self.to, self.ease.apply(local / self.duration));
        }
        match self.back_to {
            Some(back) => {
                let k = (local - self.duration) / self.duration;
                if k >= 1.0 {
                    back
                } else {
                    back.lerp_to(self.to, self.ease.apply(1.0 - k))
                }
            }
            None => self.to,
        }
    }
}

/// An animated property: a resting value and an optional running tween.
///
/// Tweens are never cancelled, only superseded by [`Track::retarget`], which
/// starts the new tween from whatever value the property shows right now.
#[derive(Clone, Debug)]
pub struct Track<T: Lerp> {
    value: T,
    tween: Option<Tween<T>>,
}

impl<T: Lerp> Track<T> {
    pub fn new(value: T) -> Self {
        Self { value, tween: None }
    }

    /// Current value; folds a finished tween into the resting value.
    pub fn sample(&mut self, now: f64) -> T {
        if let Some(tween) = self.tween {
            if tween.is_finished(now) {
                self.value = tween.end_value();
                self.tween = None;
            } else {
                return tween.sample(now);
            }
        }
        self.value
    }

    pub fn peek(&self, now: f64) -> T {
        match &self.tween {
            Some(tween) => tween.sample(now),
            None => self.value,
        }
    }

    pub fn retarget(&mut self, now: f64, build: impl FnOnce(T) -> Tween<T>) {
        let current = self.peek(now);
        self.tween = Some(build(current));
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.tween = None;
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.tween.map_or(false, |t| !t.is_finished(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_pure_in_time() {
        let tw = Tween::new(0.0_f32, 10.0, 1.0, 2.0, Ease::Power2Out);
        let a = tw.sample(1.7);
        let _ = tw.sample(2.9);
        assert_eq!(a, tw.sample(1.7));
        assert_eq!(tw.sample(0.0), 0.0);
        assert_eq!(tw.sample(3.0), 10.0);
    }

    #[test]
    fn yoyo_returns_to_start() {
        let tw = Tween::new(1.0_f32, 1.2, 0.0, 0.3, Ease::Power1Out).yoyo();
        assert!((tw.sample(0.3) - 1.2).abs() < 1e-6);
        assert!(tw.sample(0.45) > 1.0 && tw.sample(0.45) < 1.2);
        assert_eq!(tw.sample(0.6), 1.0);
        assert!(tw.is_finished(0.6));
        assert!(!tw.is_finished(0.59));
    }

    #[test]
    fn settle_ends_at_baseline() {
        let tw = Tween::new(1.1_f32, 1.2, 0.0, 0.3, Ease::Power1Out).settle_at(1.0);
        assert_eq!(tw.end_value(), 1.0);
        assert_eq!(tw.sample(10.0), 1.0);
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let mut track = Track::new(0.0_f32);
        track.retarget(0.0, |from| Tween::new(from, 1.0, 0.0, 1.0, Ease::Linear));
        track.retarget(0.5, |from| {
            assert!((from - 0.5).abs() < 1e-6);
            Tween::new(from, from + 1.0, 0.5, 1.0, Ease::Linear)
        });
        assert!((track.sample(1.5) - 1.5).abs() < 1e-6);
        assert!(!track.is_animating(1.5));
    }

    #[test]
    fn durations_stay_exact_after_days_of_uptime() {
        let start = 6.5 * 86_400.0;
        let tw = Tween::new(0.0_f32, 1.0, start, 0.3, Ease::Linear);
        assert!((tw.sample(start + 0.15) - 0.5).abs() < 1e-4);
        assert!(!tw.is_finished(start + 0.29));
        assert!(tw.is_finished(start + 0.31));
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let tw = Tween::new(Vec2::ZERO, Vec2::ONE, 0.0, 0.0, Ease::Linear);
        assert_eq!(tw.sample(0.0), Vec2::ONE);
        assert!(tw.is_finished(0.0));
    }
}
