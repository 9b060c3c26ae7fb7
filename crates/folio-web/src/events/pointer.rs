use super::{Listener, Listeners};
use crate::dom;
use folio_core::cursor::{CursorController, ElementHandle, InteractiveMeta};
use folio_core::{normalize_pointer, PointerCell};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const INTERACTIVE_SELECTOR: &str =
    "a, button, .interactive, [role=\"button\"], input, select, textarea";
pub const LABEL_ATTRIBUTE: &str = "data-cursor-text";

#[inline]
fn client_px(ev: &web::Event) -> Option<Vec2> {
    let ev = ev.dyn_ref::<web::MouseEvent>()?;
    Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32))
}

/// Window-level move/press listeners feeding the cursor and the scene pointer.
pub fn wire_pointer(
    window: &web::Window,
    cursor: Rc<RefCell<CursorController>>,
    pointer: PointerCell,
    origin: Instant,
    listeners: &mut Listeners,
) {
    {
        let cursor = cursor.clone();
        let win = window.clone();
        listeners.extend(Listener::attach(window, "pointermove", move |ev| {
            let Some(client) = client_px(&ev) else {
                return;
            };
            let now = origin.elapsed().as_secs_f64();
            cursor.borrow_mut().pointer_move(client, now);
            pointer.set(normalize_pointer(client, dom::viewport_size(&win)));
        }));
    }
    {
        let cursor = cursor.clone();
        listeners.extend(Listener::attach(window, "pointerdown", move |_| {
            cursor
                .borrow_mut()
                .pointer_down(origin.elapsed().as_secs_f64());
        }));
    }
    listeners.extend(Listener::attach(window, "pointerup", move |_| {
        cursor
            .borrow_mut()
            .pointer_up(origin.elapsed().as_secs_f64());
    }));
}

struct Entry {
    handle: ElementHandle,
    element: web::Element,
    _listeners: [Listener; 2],
}

/// Elements the cursor reacts to, each with its own enter/leave listeners.
pub struct InteractiveElements {
    cursor: Rc<RefCell<CursorController>>,
    origin: Instant,
    next: u64,
    entries: Vec<Entry>,
}

impl InteractiveElements {
    pub fn new(cursor: Rc<RefCell<CursorController>>, origin: Instant) -> Self {
        Self {
            cursor,
            origin,
            next: 0,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registering an element twice returns its existing handle.
    pub fn register(&mut self, element: web::Element) -> Option<ElementHandle> {
        if let Some(e) = self.entries.iter().find(|e| e.element == element) {
            return Some(e.handle);
        }
        let handle = ElementHandle(self.next);
        let meta = InteractiveMeta::from_attribute(element.get_attribute(LABEL_ATTRIBUTE).as_deref());
        let origin = self.origin;
        let enter = {
            let cursor = self.cursor.clone();
            Listener::attach(&element, "pointerenter", move |_| {
                cursor
                    .borrow_mut()
                    .pointer_enter(handle, origin.elapsed().as_secs_f64());
            })?
        };
        let leave = {
            let cursor = self.cursor.clone();
            Listener::attach(&element, "pointerleave", move |_| {
                cursor
                    .borrow_mut()
                    .pointer_leave(handle, origin.elapsed().as_secs_f64());
            })?
        };
        self.next += 1;
        self.cursor.borrow_mut().register_interactive(handle, meta);
        self.entries.push(Entry {
            handle,
            element,
            _listeners: [enter, leave],
        });
        Some(handle)
    }

    pub fn unregister(&mut self, handle: ElementHandle) -> bool {
        let Some(i) = self.entries.iter().position(|e| e.handle == handle) else {
            return false;
        };
        self.entries.swap_remove(i);
        self.cursor
            .borrow_mut()
            .unregister(handle, self.origin.elapsed().as_secs_f64());
        true
    }

    pub fn clear(&mut self) {
        let handles: Vec<_> = self.entries.iter().map(|e| e.handle).collect();
        for h in handles {
            self.unregister(h);
        }
    }
}

/// Register every interactive element currently in the document.
pub fn wire_interactive(document: &web::Document, elements: &mut InteractiveElements) {
    for el in dom::query_document(document, INTERACTIVE_SELECTOR) {
        elements.register(el);
    }
    log::info!("[cursor] {} interactive elements", elements.len());
}
