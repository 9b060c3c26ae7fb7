use super::FrameInputs;
use crate::clock::FrameInfo;
use crate::constants::{CAMERA_FOLLOW_SEC, CAMERA_FOV_DEG, CAMERA_SENSITIVITY, CAMERA_Z, LOOK_AT};
use crate::easing::Ease;
use crate::error::{finite, positive, ConfigError};
use crate::transform::Camera;
use crate::tween::{Track, Tween};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraParams {
    pub distance: f32,
    pub fov_deg: f32,
    /// Pointer (-1..1) to eye offset factor.
    pub sensitivity: f32,
    pub follow_sec: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            distance: CAMERA_Z,
            fov_deg: CAMERA_FOV_DEG,
            sensitivity: CAMERA_SENSITIVITY,
            follow_sec: CAMERA_FOLLOW_SEC,
        }
    }
}

impl CameraParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("camera distance", self.distance)?;
        positive("camera fov", self.fov_deg)?;
        positive("camera follow duration", self.follow_sec)?;
        finite("camera sensitivity", self.sensitivity)
    }
}

/// Eye that drifts toward the pointer and always looks at the origin.
///
/// Every frame with a pointer sample starts a fresh fixed-duration ease from
/// the current offset, so the eye closes in quickly then slows. Before the
/// first pointer sample the rig holds still.
#[derive(Clone, Debug)]
pub struct CameraRig {
    params: CameraParams,
    offset: Track<Vec2>,
    aspect: f32,
}

impl CameraRig {
    pub fn new(params: CameraParams, aspect: f32) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            params,
            offset: Track::new(Vec2::ZERO),
            aspect,
        })
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn advance(&mut self, frame: &FrameInfo, inputs: &FrameInputs) {
        let now = frame.elapsed;
        if let Some(p) = inputs.pointer {
            let goal = p * self.params.sensitivity;
            let follow = self.params.follow_sec;
            self.offset
                .retarget(now, |from| Tween::new(from, goal, now, follow, Ease::Power1Out));
        }
        self.offset.sample(now);
    }

    /// Current eye offset from the rest eye position (X/Y only).
    pub fn offset(&self, now: f64) -> Vec2 {
        self.offset.peek(now)
    }

    pub fn camera(&self, now: f64) -> Camera {
        let o = self.offset(now);
        let eye = Vec3::new(o.x, o.y, self.params.distance);
        let mut cam = Camera::looking_at_origin(eye, self.aspect, self.params.fov_deg.to_radians());
        cam.target = LOOK_AT;
        cam
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(i: u64) -> FrameInfo {
        FrameInfo {
            elapsed: i as f64 / 60.0,
            delta: 1.0 / 60.0,
            index: i,
        }
    }

    #[test]
    fn idle_until_first_pointer() {
        let mut rig = CameraRig::new(CameraParams::default(), 1.5).unwrap();
        for i in 1..=30 {
            rig.advance(&frame(i), &FrameInputs::default());
        }
        assert_eq!(rig.offset(0.5), Vec2::ZERO);
        assert_eq!(rig.camera(0.5).eye, Vec3::new(0.0, 0.0, CAMERA_Z));
    }

    #[test]
    fn converges_toward_scaled_pointer() {
        let mut rig = CameraRig::new(CameraParams::default(), 1.5).unwrap();
        let inputs = FrameInputs {
            pointer: Some(Vec2::new(1.0, -1.0)),
        };
        let mut prev = 0.0;
        for i in 1..=120 {
            rig.advance(&frame(i), &inputs);
            let x = rig.offset(i as f64 / 60.0).x;
            assert!(x >= prev && x <= CAMERA_SENSITIVITY + 1e-6);
            prev = x;
        }
        assert!(prev > CAMERA_SENSITIVITY * 0.9);
        let cam = rig.camera(2.0);
        assert_eq!(cam.target, Vec3::ZERO);
    }
}
