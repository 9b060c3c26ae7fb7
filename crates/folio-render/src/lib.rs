mod gpu;
mod helpers;
pub mod overlay;
pub mod renderer;
pub mod scene;

pub use gpu::GpuState;
pub use overlay::{cursor_quads, OverlayQuad};
pub use renderer::{FrameOutcome, Renderer};

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static OVERLAY_WGSL: &str = include_str!("../shaders/overlay.wgsl");
