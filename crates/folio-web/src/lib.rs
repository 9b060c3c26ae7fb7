#![cfg(target_arch = "wasm32")]
mod dom;
mod events;
mod frame;
mod overlay;

use events::{InteractiveElements, Listener, Listeners, ScrollEffects};
use folio_core::cursor::{CursorController, CursorParams, ElementHandle};
use folio_core::{default_scene, AnimationContext, PointerCell};
use folio_render::Renderer;
use frame::{FrameContext, FrameLoop};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Handles owned for the lifetime of the page; dropping them tears it all down.
struct WebApp {
    frame_loop: FrameLoop,
    interactive: InteractiveElements,
    listeners: Listeners,
}

impl WebApp {
    fn shutdown(mut self) {
        self.frame_loop.cancel();
        self.interactive.clear();
        self.listeners.clear();
        log::info!("[app] shut down");
    }
}

thread_local! {
    static APP: RefCell<Option<WebApp>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the frame loop and detach every listener.
#[wasm_bindgen]
pub fn shutdown() {
    if let Some(app) = APP.with(|a| a.borrow_mut().take()) {
        app.shutdown();
    }
}

/// Flag an element added after start-up as interactive.
#[wasm_bindgen]
pub fn register_interactive(element: web::Element) -> Option<f64> {
    APP.with(|a| {
        let mut app = a.borrow_mut();
        let handle = app.as_mut()?.interactive.register(element)?;
        Some(handle.0 as f64)
    })
}

#[wasm_bindgen]
pub fn unregister_interactive(handle: f64) -> bool {
    APP.with(|a| {
        a.borrow_mut()
            .as_mut()
            .map(|app| app.interactive.unregister(ElementHandle(handle as u64)))
            .unwrap_or(false)
    })
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("hero-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #hero-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let origin = Instant::now();
    let pointer = PointerCell::new();
    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let scene = Rc::new(RefCell::new(default_scene(seed, aspect, pointer.clone())?));

    let mut cursor = CursorController::new(CursorParams::default())?;
    let touch_only = dom::lacks_hover(&window);
    if touch_only {
        log::info!("[cursor] no hover support; custom cursor disabled");
        cursor.set_enabled(false);
    }
    let cursor = Rc::new(RefCell::new(cursor));
    let overlay = if touch_only {
        None
    } else {
        overlay::CursorOverlay::find()
    };

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let renderer = match Renderer::new(
        &instance,
        surface,
        canvas.width(),
        canvas.height(),
        &scene.borrow(),
    )
    .await
    {
        Ok(r) => Some(r),
        Err(e) => {
            // the page still works without the hero scene
            log::warn!("[gpu] WebGPU unavailable: {:?}", e);
            None
        }
    };

    let mut ctx = AnimationContext::new();
    ctx.register(scene.clone());

    let scroll = Rc::new(RefCell::new(ScrollEffects::scan(&document)));
    scroll
        .borrow_mut()
        .on_scroll(dom::viewport_size(&window).y, origin.elapsed().as_secs_f64());

    let mut listeners = Listeners::new();
    events::wire_pointer(&window, cursor.clone(), pointer, origin, &mut listeners);
    events::wire_scroll(&window, scroll.clone(), origin, &mut listeners);
    let mut interactive = InteractiveElements::new(cursor.clone(), origin);
    events::wire_interactive(&document, &mut interactive);

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        ctx,
        scene,
        cursor,
        scroll,
        overlay,
        renderer,
        canvas,
        origin,
        last_instant: origin,
    }));
    {
        let frame_ctx = frame_ctx.clone();
        listeners.extend(Listener::attach(&window, "resize", move |_| {
            frame_ctx.borrow_mut().resize();
        }));
    }
    let frame_loop = FrameLoop::start(frame_ctx);

    APP.with(|a| {
        *a.borrow_mut() = Some(WebApp {
            frame_loop,
            interactive,
            listeners,
        })
    });
    log::info!("[app] running");
    Ok(())
}
