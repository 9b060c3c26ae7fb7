use super::{Listener, Listeners};
use crate::dom;
use folio_core::scroll::{Parallax, RevealGroup, RevealParams, RevealStyle};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Reveal {
    trigger: web::Element,
    items: Vec<web::HtmlElement>,
    group: RevealGroup,
    /// Styles still need writing this frame.
    dirty: bool,
}

struct ParallaxItem {
    element: web::HtmlElement,
    parent: web::Element,
    effect: Parallax,
}

/// Reveal groups and parallax layers found in the document.
#[derive(Default)]
pub struct ScrollEffects {
    reveals: Vec<Reveal>,
    parallax: Vec<ParallaxItem>,
}

fn as_html(el: web::Element) -> Option<web::HtmlElement> {
    el.dyn_into::<web::HtmlElement>().ok()
}

fn paint(el: &web::HtmlElement, style: RevealStyle) {
    dom::set_style(el, "opacity", &format!("{:.3}", style.opacity));
    dom::set_style(
        el,
        "transform",
        &format!("translateY({:.2}px)", style.translate_y),
    );
}

impl ScrollEffects {
    pub fn scan(document: &web::Document) -> Self {
        let mut fx = Self::default();
        for el in dom::query_document(document, ".fade-in") {
            let Ok(group) = RevealGroup::new(RevealParams::fade(), 1) else {
                continue;
            };
            let items = as_html(el.clone()).into_iter().collect();
            fx.push_reveal(el, items, group);
        }
        for el in dom::query_document(document, ".stagger-fade-in") {
            let items: Vec<_> = dom::query_all(&el, ".stagger-item")
                .into_iter()
                .filter_map(as_html)
                .collect();
            let Ok(group) = RevealGroup::new(RevealParams::stagger(), items.len()) else {
                continue;
            };
            fx.push_reveal(el, items, group);
        }
        for el in dom::query_document(document, ".parallax") {
            let Some(parent) = el.parent_element() else {
                continue;
            };
            if let Some(element) = as_html(el) {
                fx.parallax.push(ParallaxItem {
                    element,
                    parent,
                    effect: Parallax::default(),
                });
            }
        }
        log::info!(
            "[scroll] {} reveal groups, {} parallax layers",
            fx.reveals.len(),
            fx.parallax.len()
        );
        fx
    }

    fn push_reveal(&mut self, trigger: web::Element, items: Vec<web::HtmlElement>, group: RevealGroup) {
        self.reveals.push(Reveal {
            trigger,
            items,
            group,
            dirty: true,
        });
    }

    /// Re-measure triggers and parallax parents against the viewport.
    pub fn on_scroll(&mut self, viewport_height: f32, now: f64) {
        for r in &mut self.reveals {
            let top = r.trigger.get_bounding_client_rect().top() as f32;
            if r.group.on_scroll(top, viewport_height, now) {
                r.dirty = true;
            }
        }
        for p in &self.parallax {
            let rect = p.parent.get_bounding_client_rect();
            let y = p
                .effect
                .offset(rect.top() as f32, rect.height() as f32, viewport_height);
            dom::set_style(&p.element, "transform", &format!("translateY({:.2}px)", y));
        }
    }

    /// Write styles for groups that are mid-animation or just changed.
    pub fn frame(&mut self, now: f64) {
        for r in &mut self.reveals {
            if !r.dirty {
                continue;
            }
            for (i, el) in r.items.iter().enumerate() {
                paint(el, r.group.item(i, now));
            }
            if r.group.is_settled(now) {
                r.dirty = false;
            }
        }
    }
}

pub fn wire_scroll(
    window: &web::Window,
    effects: Rc<RefCell<ScrollEffects>>,
    origin: Instant,
    listeners: &mut Listeners,
) {
    let win = window.clone();
    listeners.extend(Listener::attach(window, "scroll", move |_| {
        let vh = dom::viewport_size(&win).y;
        effects
            .borrow_mut()
            .on_scroll(vh, origin.elapsed().as_secs_f64());
    }));
}
