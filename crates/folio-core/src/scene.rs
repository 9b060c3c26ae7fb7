//! The decorative scene: nodes, their providers, the surface and the camera.

use crate::animator::{
    CameraParams, CameraRig, FloatParams, FloatingElement, FrameInputs, HoverPreset, HoverShape,
    SpinningShape, SurfaceParams, TransformProvider, WavySurface,
};
use crate::clock::FrameInfo;
use crate::constants::*;
use crate::context::FrameSystem;
use crate::error::ConfigError;
use crate::picking::{ray_sphere, screen_to_world_ray};
use crate::pointer::PointerCell;
use crate::shape::ShapeKind;
use crate::transform::{Camera, Transform};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

pub struct SceneNode {
    name: String,
    shape: ShapeKind,
    color: [f32; 3],
    rest: Transform,
    provider: Box<dyn TransformProvider>,
    /// `None` while the render target is not mounted.
    transform: Option<Transform>,
}

impl SceneNode {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    pub fn rest(&self) -> &Transform {
        &self.rest
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.transform.is_some()
    }

    /// Whether pointer picking can hover this node.
    pub fn is_pickable(&self) -> bool {
        self.provider.hit_radius().is_some()
    }
}

pub struct SurfaceNode {
    pub surface: WavySurface,
    pub color: [f32; 3],
    rest: Transform,
    transform: Option<Transform>,
}

impl SurfaceNode {
    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }
}

pub struct Scene {
    nodes: Vec<SceneNode>,
    surface: Option<SurfaceNode>,
    camera: CameraRig,
    pointer: PointerCell,
    hovered: Option<NodeId>,
    now: f64,
}

impl Scene {
    pub fn new(camera: CameraRig, pointer: PointerCell) -> Self {
        Self {
            nodes: Vec::new(),
            surface: None,
            camera,
            pointer,
            hovered: None,
            now: 0.0,
        }
    }

    /// Add a node; it starts unmounted.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        shape: ShapeKind,
        color: [f32; 3],
        rest: Transform,
        provider: Box<dyn TransformProvider>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode {
            name: name.into(),
            shape,
            color,
            rest,
            provider,
            transform: None,
        });
        id
    }

    pub fn set_surface(&mut self, surface: WavySurface, color: [f32; 3], rest: Transform) {
        self.surface = Some(SurfaceNode {
            surface,
            color,
            rest,
            transform: None,
        });
    }

    pub fn mount(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            if node.transform.is_none() {
                node.transform = Some(node.rest);
                log::debug!("[scene] mounted {}", node.name);
            }
        }
    }

    pub fn unmount(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.transform = None;
            log::debug!("[scene] unmounted {}", node.name);
        }
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    pub fn mount_all(&mut self) {
        for i in 0..self.nodes.len() {
            self.mount(NodeId(i));
        }
        if let Some(s) = self.surface.as_mut() {
            s.transform.get_or_insert(s.rest);
        }
    }

    pub fn unmount_all(&mut self) {
        for node in &mut self.nodes {
            node.transform = None;
        }
        if let Some(s) = self.surface.as_mut() {
            s.transform = None;
        }
        self.hovered = None;
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    pub fn surface(&self) -> Option<&SurfaceNode> {
        self.surface.as_ref()
    }

    pub fn pointer(&self) -> &PointerCell {
        &self.pointer
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.set_aspect(aspect);
    }

    pub fn camera(&self) -> Camera {
        self.camera.camera(self.now)
    }

    /// Elapsed clock time seen by the last frame.
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Nearest mounted node whose pick sphere the pointer ray hits.
    pub fn pick(&self, ndc: Vec2) -> Option<NodeId> {
        let (ro, rd) = screen_to_world_ray(ndc, &self.camera());
        let mut best: Option<(f32, NodeId)> = None;
        for (i, node) in self.nodes.iter().enumerate() {
            if !node.is_mounted() {
                continue;
            }
            let Some(radius) = node.provider.hit_radius() else {
                continue;
            };
            if let Some(t) = ray_sphere(ro, rd, node.rest.position, radius) {
                if best.map_or(true, |(bt, _)| t < bt) {
                    best = Some((t, NodeId(i)));
                }
            }
        }
        best.map(|(_, id)| id)
    }

    /// Update the hovered node from a pointer position and fire the hover
    /// one-shot when a node becomes hovered. Returns the hovered node.
    pub fn pointer_over(&mut self, ndc: Option<Vec2>) -> Option<NodeId> {
        let hit = ndc.and_then(|p| self.pick(p));
        if hit != self.hovered {
            self.hovered = hit;
            if let Some(id) = hit {
                let now = self.now;
                if let Some(node) = self.nodes.get_mut(id.0) {
                    if let Some(t) = node.transform.as_ref() {
                        node.provider.hover_begin(now, t);
                    }
                }
            }
        }
        self.hovered
    }

    /// Step every mounted node, the surface and the camera for one frame.
    pub fn update(&mut self, frame: &FrameInfo) {
        self.now = frame.elapsed;
        let inputs = FrameInputs {
            pointer: self.pointer.get(),
        };
        self.camera.advance(frame, &inputs);
        for node in &mut self.nodes {
            if let Some(t) = node.transform.as_mut() {
                node.provider.advance(frame, &inputs, t);
            }
        }
        if let Some(s) = self.surface.as_mut() {
            if let Some(t) = s.transform.as_mut() {
                s.surface.advance(frame, &inputs, t);
            }
        }
    }
}

impl FrameSystem for Scene {
    fn on_frame(&mut self, frame: &FrameInfo) {
        self.update(frame);
    }
}

/// Hero layout: three hover shapes, four floating accents, one spinning
/// accent and the wavy surface tilted behind them. All nodes are mounted.
pub fn default_scene(seed: u64, aspect: f32, pointer: PointerCell) -> Result<Scene, ConfigError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let camera = CameraRig::new(CameraParams::default(), aspect)?;
    let mut scene = Scene::new(camera, pointer);

    for (name, preset, pos) in [
        ("cube", HoverPreset::Cube, Vec3::new(-2.0, 0.0, 0.0)),
        ("ring", HoverPreset::Ring, Vec3::new(2.0, 0.0, 0.0)),
        ("orb", HoverPreset::Orb, Vec3::new(0.0, 1.5, 0.0)),
    ] {
        scene.add_node(
            name,
            preset.shape(),
            preset.color(),
            Transform::at(pos),
            Box::new(HoverShape::new(preset, pos)),
        );
    }

    let floaters = [
        ("octahedron", Vec3::new(-3.6, 2.1, -2.0), 0.35, 1.2, COLOR_PINK),
        ("tetrahedron", Vec3::new(3.4, -1.9, -1.5), 0.3, 0.8, COLOR_VIOLET),
        ("torus", Vec3::new(-3.1, -2.0, -1.0), 0.3, 1.0, COLOR_SKY),
        ("sphere", Vec3::new(3.3, 2.3, -2.5), 0.25, 0.6, COLOR_ORANGE),
    ];
    for (tag, pos, scale, speed, color) in floaters {
        let params = FloatParams {
            speed,
            intensity: 1.0,
        };
        let el = FloatingElement::new(pos, params, &mut rng)?;
        scene.add_node(
            format!("float-{tag}"),
            ShapeKind::from_tag(tag),
            color,
            Transform::at(pos).with_scale(scale),
            Box::new(el),
        );
    }

    let accent = Vec3::new(0.0, -1.6, -0.5);
    scene.add_node(
        "accent",
        ShapeKind::from_tag("tetrahedron"),
        COLOR_PINK,
        Transform::at(accent).with_scale(0.2),
        Box::new(SpinningShape::new(Vec3::new(0.0, SHAPE_SPIN_PER_FRAME, 0.0))),
    );

    let surface = WavySurface::new(SurfaceParams::default(), rng.gen())?;
    scene.set_surface(
        surface,
        COLOR_VIOLET,
        Transform::at(Vec3::new(0.0, -2.5, -3.0)).with_rotation(Vec3::new(-1.2, 0.0, 0.0)),
    );

    scene.mount_all();
    log::info!("[scene] default scene ready: {} nodes", scene.nodes.len());
    Ok(scene)
}
