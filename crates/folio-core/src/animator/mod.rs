//! Per-object transform providers for the decorative scene.
//!
//! Every provider is stepped once per frame with the shared clock and the
//! latest pointer sample, and writes the transform the renderer will draw.
//! Rotation fields that are running totals live inside the provider; all
//! other fields are recomputed from time and rest state each frame.

mod camera;
mod floating;
mod hover;
mod spin;
mod surface;

pub use camera::{CameraParams, CameraRig};
pub use floating::{FloatParams, FloatingElement};
pub use hover::{HoverPreset, HoverShape};
pub use spin::SpinningShape;
pub use surface::{displacement, pointer_bump, SurfaceParams, WavySurface};

use crate::clock::FrameInfo;
use crate::transform::Transform;
use glam::Vec2;

/// Inputs shared by every provider for one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInputs {
    /// Normalized pointer (-1..1, +Y up), absent until the first move.
    pub pointer: Option<Vec2>,
}

pub trait TransformProvider {
    fn advance(&mut self, frame: &FrameInfo, inputs: &FrameInputs, target: &mut Transform);

    /// Discrete "hover begin" event. Most providers ignore it.
    fn hover_begin(&mut self, _now: f64, _target: &Transform) {}

    /// Radius of the invisible pick sphere around the rest position, if the
    /// provider reacts to hover at all.
    fn hit_radius(&self) -> Option<f32> {
        None
    }
}
