use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use folio_core::cursor::{CursorController, CursorParams, ElementHandle, InteractiveMeta};
use folio_core::scene::{NodeId, Scene};
use folio_core::{default_scene, normalize_pointer, AnimationContext, PointerCell};
use folio_render::{cursor_quads, FrameOutcome, Renderer};
use glam::Vec2;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

const CURSOR_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Scene shapes stand in for page links: hovering one shows its name.
fn node_handle(id: NodeId) -> ElementHandle {
    ElementHandle(id.0 as u64)
}

fn register_shapes(scene: &Scene, cursor: &mut CursorController) {
    for (i, node) in scene.nodes().iter().enumerate() {
        if node.is_pickable() {
            cursor.register_interactive(
                node_handle(NodeId(i)),
                InteractiveMeta::labeled(node.name()),
            );
        }
    }
}

struct App<'w> {
    window: &'w winit::window::Window,
    renderer: Renderer<'w>,
    ctx: AnimationContext,
    scene: Rc<RefCell<Scene>>,
    cursor: CursorController,
    pointer: PointerCell,
    hovered: Option<NodeId>,
    start: Instant,
    last_frame: Instant,
}

impl<'w> App<'w> {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        self.renderer.resize(size.width, size.height);
        self.scene
            .borrow_mut()
            .set_aspect(size.width as f32 / size.height.max(1) as f32);
    }

    fn cursor_moved(&mut self, px: Vec2) {
        let now = self.now();
        self.cursor.pointer_move(px, now);
        let size = self.window.inner_size();
        let viewport = Vec2::new(size.width as f32, size.height as f32);
        self.pointer.set(normalize_pointer(px, viewport));
    }

    fn sync_hover(&mut self) {
        let hovered = {
            let mut scene = self.scene.borrow_mut();
            let pointer = self.pointer.get();
            scene.pointer_over(pointer)
        };
        if hovered == self.hovered {
            return;
        }
        let now = self.now();
        if let Some(old) = self.hovered.take() {
            self.cursor.pointer_leave(node_handle(old), now);
        }
        if let Some(new) = hovered {
            self.cursor.pointer_enter(node_handle(new), now);
        }
        self.hovered = hovered;
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.sync_hover();
        self.ctx.tick(dt);
        let t = self.now();
        let quads = cursor_quads(&self.cursor.frame(t), CURSOR_COLOR);
        let scene = self.scene.borrow();
        self.renderer.render(&scene, &quads)
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("folio (native preview)")
        .build(&event_loop)
        .expect("window");
    window.set_cursor_visible(false);

    let size = window.inner_size();
    let pointer = PointerCell::new();
    let aspect = size.width as f32 / size.height.max(1) as f32;
    let scene = Rc::new(RefCell::new(
        default_scene(42, aspect, pointer.clone()).expect("scene"),
    ));
    let mut cursor = CursorController::new(CursorParams::default()).expect("cursor");
    register_shapes(&scene.borrow(), &mut cursor);

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(&window).expect("surface");
    let renderer = pollster::block_on(Renderer::new(
        &instance,
        surface,
        size.width,
        size.height,
        &scene.borrow(),
    ))
    .expect("gpu");

    let mut ctx = AnimationContext::new();
    ctx.register(scene.clone());

    let start = Instant::now();
    let mut app = App {
        window: &window,
        renderer,
        ctx,
        scene,
        cursor,
        pointer,
        hovered: None,
        start,
        last_frame: start,
    };

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => app.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => app.cursor_moved(Vec2::new(position.x as f32, position.y as f32)),
            Event::WindowEvent {
                event: WindowEvent::CursorLeft { .. },
                ..
            } => app.pointer.clear(),
            Event::WindowEvent {
                event:
                    WindowEvent::MouseInput {
                        state,
                        button: MouseButton::Left,
                        ..
                    },
                ..
            } => {
                let now = app.now();
                match state {
                    ElementState::Pressed => app.cursor.pointer_down(now),
                    ElementState::Released => app.cursor.pointer_up(now),
                }
            }
            Event::AboutToWait => match app.render() {
                Ok(_) => app.window.request_redraw(),
                Err(e) => {
                    if app.renderer.handle_surface_error(e) == FrameOutcome::Fatal {
                        elwt.exit();
                    }
                }
            },
            _ => {}
        })
        .unwrap();
}
