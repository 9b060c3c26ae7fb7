use crate::dom;
use crate::events::ScrollEffects;
use crate::overlay::CursorOverlay;
use folio_core::cursor::CursorController;
use folio_core::scene::Scene;
use folio_core::AnimationContext;
use folio_render::{FrameOutcome, Renderer};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback touches.
pub struct FrameContext {
    pub ctx: AnimationContext,
    pub scene: Rc<RefCell<Scene>>,
    pub cursor: Rc<RefCell<CursorController>>,
    pub scroll: Rc<RefCell<ScrollEffects>>,
    pub overlay: Option<CursorOverlay>,
    pub renderer: Option<Renderer<'static>>,
    pub canvas: web::HtmlCanvasElement,
    pub origin: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let t = (now - self.origin).as_secs_f64();

        {
            let mut scene = self.scene.borrow_mut();
            let pointer = scene.pointer().get();
            scene.pointer_over(pointer);
        }
        self.ctx.tick(dt);

        if let Some(overlay) = &mut self.overlay {
            let mut cursor = self.cursor.borrow_mut();
            overlay.apply(&cursor.frame(t));
        }
        self.scroll.borrow_mut().frame(t);

        let Some(renderer) = &mut self.renderer else {
            return;
        };
        let (w, h) = (self.canvas.width(), self.canvas.height());
        if (w, h) != renderer.size() {
            renderer.resize(w, h);
            self.scene
                .borrow_mut()
                .set_aspect(w as f32 / h.max(1) as f32);
        }
        let scene = self.scene.borrow();
        if let Err(e) = renderer.render(&scene, &[]) {
            if renderer.handle_surface_error(e) == FrameOutcome::Fatal {
                log::error!("[frame] renderer stopped");
                self.renderer = None;
            }
        }
    }

    /// Resync the canvas backing store and re-test reveal triggers against
    /// the new viewport height.
    pub fn resize(&mut self) {
        dom::sync_canvas_backing_size(&self.canvas);
        if let Some(window) = web::window() {
            let vh = dom::viewport_size(&window).y;
            let now = self.origin.elapsed().as_secs_f64();
            self.scroll.borrow_mut().on_scroll(vh, now);
        }
    }
}

/// A running requestAnimationFrame chain. Dropping it stops the chain.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let pending_clone = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_clone.set(None);
            frame_ctx.borrow_mut().frame();
            if let Some(cb) = tick_clone.borrow().as_ref() {
                request(cb, &pending_clone);
            }
        }) as Box<dyn FnMut()>));
        if let Some(cb) = tick.borrow().as_ref() {
            request(cb, &pending);
        }
        Self { tick, pending }
    }

    pub fn cancel(&self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            let _ = w.cancel_animation_frame(id);
        }
        // breaks the closure's reference to itself
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request(cb: &Closure<dyn FnMut()>, pending: &Cell<Option<i32>>) {
    if let Some(w) = web::window() {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            pending.set(Some(id));
        }
    }
}
