use super::{FrameInputs, TransformProvider};
use crate::clock::FrameInfo;
use crate::transform::{wrap_angle, Transform};
use glam::Vec3;

/// Rotation-only shape: adds a fixed increment per frame, whatever the frame
/// duration was.
#[derive(Clone, Debug)]
pub struct SpinningShape {
    rate: Vec3,
    rotation: Vec3,
}

impl SpinningShape {
    /// `rate` is radians per frame on each axis.
    pub fn new(rate: Vec3) -> Self {
        Self {
            rate,
            rotation: Vec3::ZERO,
        }
    }

    pub fn starting_at(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }
}

impl TransformProvider for SpinningShape {
    fn advance(&mut self, _frame: &FrameInfo, _inputs: &FrameInputs, target: &mut Transform) {
        let r = self.rotation + self.rate;
        self.rotation = Vec3::new(wrap_angle(r.x), wrap_angle(r.y), wrap_angle(r.z));
        target.rotation = self.rotation;
    }
}
