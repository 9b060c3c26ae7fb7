use crate::dom::{self, set_style};
use folio_core::CursorFrame;
use web_sys as web;

/// DOM elements standing in for the two cursor indicators.
pub struct CursorOverlay {
    dot: web::HtmlElement,
    outline: web::HtmlElement,
    label: Option<web::HtmlElement>,
    shown_label: Option<String>,
    visible: bool,
}

impl CursorOverlay {
    /// None if the page has no cursor markup.
    pub fn find() -> Option<Self> {
        let dot = dom::html_element("cursor-dot")?;
        let outline = dom::html_element("cursor-outline")?;
        let label = dom::html_element("cursor-label");
        for el in [&dot, &outline] {
            set_style(el, "position", "fixed");
            set_style(el, "left", "0");
            set_style(el, "top", "0");
            set_style(el, "pointer-events", "none");
            set_style(el, "border-radius", "50%");
        }
        let mut overlay = Self {
            dot,
            outline,
            label,
            shown_label: None,
            visible: true,
        };
        overlay.set_visible(false);
        Some(overlay)
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        let opacity = if visible { "1" } else { "0" };
        set_style(&self.dot, "opacity", opacity);
        set_style(&self.outline, "opacity", opacity);
        if !visible {
            if let Some(label) = &self.label {
                set_style(label, "opacity", "0");
            }
        }
    }

    pub fn apply(&mut self, frame: &CursorFrame<'_>) {
        self.set_visible(frame.visible);
        if !frame.visible {
            return;
        }
        let d = frame.dot_radius * 2.0;
        set_style(&self.dot, "width", &format!("{:.2}px", d));
        set_style(&self.dot, "height", &format!("{:.2}px", d));
        set_style(
            &self.dot,
            "transform",
            &format!(
                "translate({:.2}px, {:.2}px) translate(-50%, -50%)",
                frame.dot.x, frame.dot.y
            ),
        );

        let r = frame.radius * 2.0;
        set_style(&self.outline, "width", &format!("{:.2}px", r));
        set_style(&self.outline, "height", &format!("{:.2}px", r));
        set_style(
            &self.outline,
            "transform",
            &format!(
                "translate({:.2}px, {:.2}px) translate(-50%, -50%) rotate({:.4}rad) scale({:.4}, {:.4})",
                frame.outline.x,
                frame.outline.y,
                frame.heading,
                frame.stretch_along,
                frame.stretch_across
            ),
        );
        set_style(
            &self.outline,
            "background-color",
            &format!("rgba(255, 255, 255, {:.3})", frame.style.fill_opacity),
        );
        set_style(&self.outline, "mix-blend-mode", frame.style.blend.as_css());
        let _ = self
            .outline
            .set_attribute("data-variant", frame.variant.as_str());

        if let Some(el) = &self.label {
            if self.shown_label.as_deref() != frame.label {
                self.shown_label = frame.label.map(str::to_string);
                el.set_text_content(frame.label);
            }
            set_style(el, "opacity", if frame.label.is_some() { "1" } else { "0" });
            set_style(
                el,
                "transform",
                &format!(
                    "translate({:.2}px, {:.2}px) translate(-50%, -50%)",
                    frame.outline.x, frame.outline.y
                ),
            );
        }
    }
}
