//! Pointer-follow cursor.
//!
//! Two indicators trail the real pointer: a small dot that follows quickly
//! and a larger outline that lags behind and changes shape with the hover
//! context. Input events update targets; [`CursorController::frame`] samples
//! everything for the current display refresh.

mod registry;
mod variant;

pub use registry::{ElementHandle, InteractiveMeta, InteractiveRegistry};
pub use variant::{BlendMode, CursorParams, CursorVariant, VariantStyle};

use crate::constants::{CURSOR_BACK_OVERSHOOT, CURSOR_DOT_SCALE_SEC};
use crate::easing::Ease;
use crate::error::ConfigError;
use crate::pointer::VelocityTracker;
use crate::tween::{Track, Tween};
use glam::Vec2;

/// Everything a host needs to draw the cursor for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorFrame<'a> {
    pub visible: bool,
    pub variant: CursorVariant,
    pub style: VariantStyle,
    /// Dot centre in px.
    pub dot: Vec2,
    pub dot_radius: f32,
    /// Outline centre in px.
    pub outline: Vec2,
    pub radius: f32,
    /// Outline scale along the direction of travel.
    pub stretch_along: f32,
    /// Outline scale perpendicular to the direction of travel.
    pub stretch_across: f32,
    /// Direction of travel in radians.
    pub heading: f32,
    pub label: Option<&'a str>,
}

pub struct CursorController {
    params: CursorParams,
    registry: InteractiveRegistry,
    variant: CursorVariant,
    /// Where `pointer_up` returns to.
    resting: CursorVariant,
    pressed: bool,
    hovered: Option<ElementHandle>,
    label: Option<String>,
    has_pointer: bool,
    enabled: bool,
    dot: Track<Vec2>,
    outline: Track<Vec2>,
    radius: Track<f32>,
    dot_scale: Track<f32>,
    velocity: VelocityTracker,
}

impl CursorController {
    pub fn new(params: CursorParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let style = params.style(CursorVariant::Default);
        Ok(Self {
            velocity: VelocityTracker::new(params.speed_normalizer),
            params,
            registry: InteractiveRegistry::new(),
            variant: CursorVariant::Default,
            resting: CursorVariant::Default,
            pressed: false,
            hovered: None,
            label: None,
            has_pointer: false,
            enabled: true,
            dot: Track::new(Vec2::ZERO),
            outline: Track::new(Vec2::ZERO),
            radius: Track::new(style.radius),
            dot_scale: Track::new(style.dot_scale),
        })
    }

    pub fn params(&self) -> &CursorParams {
        &self.params
    }

    pub fn variant(&self) -> CursorVariant {
        self.variant
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn velocity(&self) -> &VelocityTracker {
        &self.velocity
    }

    pub fn registry(&self) -> &InteractiveRegistry {
        &self.registry
    }

    /// Hide the indicators entirely (e.g. on devices without hover).
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn register_interactive(&mut self, handle: ElementHandle, meta: InteractiveMeta) {
        if self.registry.register_interactive(handle, meta).is_none() {
            log::debug!("[cursor] interactive {:?} registered", handle);
        }
    }

    /// Forget an element. If it is under the pointer this acts as a leave.
    pub fn unregister(&mut self, handle: ElementHandle, now: f64) {
        if self.registry.unregister(handle).is_some() {
            log::debug!("[cursor] interactive {:?} unregistered", handle);
        }
        self.pointer_leave(handle, now);
    }

    /// Raw pointer position in viewport px at `now` seconds.
    pub fn pointer_move(&mut self, px: Vec2, now: f64) {
        self.velocity.sample(px, now);
        if !self.has_pointer {
            self.has_pointer = true;
            self.dot.set(px);
            self.outline.set(px);
            return;
        }
        let p = self.params;
        self.dot.retarget(now, |from| {
            Tween::new(from, px, now, p.dot_follow_sec, Ease::Power3Out)
        });
        self.outline.retarget(now, |from| {
            Tween::new(from, px, now, p.outline_follow_sec, Ease::Power3Out)
        });
    }

    pub fn pointer_down(&mut self, now: f64) {
        if self.pressed {
            return;
        }
        self.pressed = true;
        self.apply(CursorVariant::Click, now);
    }

    pub fn pointer_up(&mut self, now: f64) {
        if !self.pressed {
            return;
        }
        self.pressed = false;
        self.apply(self.resting, now);
    }

    /// Pointer entered a host element. Unregistered elements are ignored.
    pub fn pointer_enter(&mut self, handle: ElementHandle, now: f64) {
        let Some(meta) = self.registry.get(handle) else {
            return;
        };
        self.label = meta.label.clone();
        self.hovered = Some(handle);
        self.resting = if self.label.is_some() {
            CursorVariant::Text
        } else {
            CursorVariant::Hover
        };
        if !self.pressed {
            self.apply(self.resting, now);
        }
    }

    pub fn pointer_leave(&mut self, handle: ElementHandle, now: f64) {
        if self.hovered != Some(handle) {
            return;
        }
        self.hovered = None;
        self.label = None;
        self.resting = CursorVariant::Default;
        if !self.pressed {
            self.apply(CursorVariant::Default, now);
        }
    }

    fn apply(&mut self, variant: CursorVariant, now: f64) {
        if self.variant == variant {
            return;
        }
        self.variant = variant;
        let style = self.params.style(variant);
        let radius_sec = self.params.radius_sec;
        let back = Ease::BackOut(CURSOR_BACK_OVERSHOOT);
        self.radius
            .retarget(now, |from| Tween::new(from, style.radius, now, radius_sec, back));
        self.dot_scale.retarget(now, |from| {
            Tween::new(from, style.dot_scale, now, CURSOR_DOT_SCALE_SEC, back)
        });
    }

    /// Sample both indicators for the frame shown at `now`.
    pub fn frame(&mut self, now: f64) -> CursorFrame<'_> {
        let speed = self.velocity.speed_at(now);
        let style = self.params.style(self.variant);
        let dot_scale = self.dot_scale.sample(now).max(0.0);
        CursorFrame {
            visible: self.enabled && self.has_pointer,
            variant: self.variant,
            style,
            dot: self.dot.sample(now),
            dot_radius: self.params.dot_size * 0.5 * dot_scale,
            outline: self.outline.sample(now),
            radius: self.radius.sample(now).max(0.0),
            stretch_along: 1.0 + speed * self.params.stretch_along,
            stretch_across: 1.0 + speed * self.params.stretch_across,
            heading: self.velocity.heading(),
            label: if style.show_label {
                self.label.as_deref()
            } else {
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CursorController {
        let mut c = CursorController::new(CursorParams::default()).unwrap();
        c.register_interactive(ElementHandle(1), InteractiveMeta::plain());
        c.register_interactive(ElementHandle(2), InteractiveMeta::labeled("Contact"));
        c
    }

    #[test]
    fn hover_then_leave() {
        let mut c = controller();
        c.pointer_enter(ElementHandle(1), 0.0);
        assert_eq!(c.variant(), CursorVariant::Hover);
        c.pointer_leave(ElementHandle(1), 0.1);
        assert_eq!(c.variant(), CursorVariant::Default);
    }

    #[test]
    fn click_returns_to_previous_state() {
        let mut c = controller();
        c.pointer_enter(ElementHandle(2), 0.0);
        c.pointer_down(0.1);
        assert_eq!(c.variant(), CursorVariant::Click);
        c.pointer_up(0.2);
        assert_eq!(c.variant(), CursorVariant::Text);
        assert_eq!(c.label(), Some("Contact"));
    }

    #[test]
    fn leaving_while_pressed_releases_to_default() {
        let mut c = controller();
        c.pointer_enter(ElementHandle(1), 0.0);
        c.pointer_down(0.1);
        c.pointer_leave(ElementHandle(1), 0.2);
        assert_eq!(c.variant(), CursorVariant::Click);
        c.pointer_up(0.3);
        assert_eq!(c.variant(), CursorVariant::Default);
    }

    #[test]
    fn unknown_element_is_ignored() {
        let mut c = controller();
        c.pointer_enter(ElementHandle(99), 0.0);
        assert_eq!(c.variant(), CursorVariant::Default);
        // leave for an element that is not hovered changes nothing
        c.pointer_enter(ElementHandle(1), 0.0);
        c.pointer_leave(ElementHandle(2), 0.1);
        assert_eq!(c.variant(), CursorVariant::Hover);
    }

    #[test]
    fn unregister_under_pointer_acts_as_leave() {
        let mut c = controller();
        c.pointer_enter(ElementHandle(2), 0.0);
        c.unregister(ElementHandle(2), 0.1);
        assert_eq!(c.variant(), CursorVariant::Default);
        assert_eq!(c.label(), None);
        c.pointer_enter(ElementHandle(2), 0.2);
        assert_eq!(c.variant(), CursorVariant::Default);
    }

    #[test]
    fn indicators_trail_at_different_speeds() {
        let mut c = controller();
        c.pointer_move(Vec2::ZERO, 0.0);
        c.pointer_move(Vec2::new(100.0, 0.0), 0.05);
        let f = c.frame(0.15);
        assert!(f.visible);
        assert!(f.dot.x > f.outline.x);
        assert!(f.outline.x > 0.0);
        let f = c.frame(1.0);
        assert_eq!(f.dot, Vec2::new(100.0, 0.0));
        assert_eq!(f.outline, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn hidden_until_first_move_or_when_disabled() {
        let mut c = controller();
        assert!(!c.frame(0.0).visible);
        c.pointer_move(Vec2::new(5.0, 5.0), 0.0);
        assert!(c.frame(0.0).visible);
        c.set_enabled(false);
        assert!(!c.frame(0.0).visible);
    }
}
