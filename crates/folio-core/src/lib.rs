pub mod animator;
pub mod clock;
pub mod constants;
pub mod context;
pub mod cursor;
pub mod easing;
pub mod error;
pub mod mesh;
pub mod picking;
pub mod pointer;
pub mod scene;
pub mod scroll;
pub mod shape;
pub mod transform;
pub mod tween;

pub use animator::{FrameInputs, TransformProvider};
pub use clock::{FrameClock, FrameInfo};
pub use context::{AnimationContext, FrameHandle, FrameSystem};
pub use cursor::{CursorController, CursorFrame, CursorParams, CursorVariant, ElementHandle};
pub use easing::Ease;
pub use error::ConfigError;
pub use mesh::MeshData;
pub use pointer::{normalize_pointer, PointerCell, VelocityTracker};
pub use scene::{default_scene, NodeId, Scene};
pub use shape::ShapeKind;
pub use transform::{Camera, Transform};
