//! Scroll-triggered reveals and scrubbed parallax.
//!
//! Geometry comes in as viewport-relative px (an element's top edge and the
//! viewport height), so hosts can feed whatever their layout engine reports.

use crate::constants::*;
use crate::easing::Ease;
use crate::error::{finite, positive, ConfigError};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealParams {
    pub duration: f32,
    /// Starting downward offset in px.
    pub shift_px: f32,
    /// Delay between consecutive items of a group.
    pub stagger_sec: f32,
    /// Trigger once the top edge is this far above the viewport bottom.
    pub start_offset_px: f32,
    pub ease: Ease,
}

impl RevealParams {
    /// Single element fading up.
    pub fn fade() -> Self {
        Self {
            duration: REVEAL_FADE_SEC,
            shift_px: REVEAL_FADE_SHIFT_PX,
            stagger_sec: 0.0,
            start_offset_px: REVEAL_START_OFFSET_PX,
            ease: Ease::Power2Out,
        }
    }

    /// List whose items fade up one after another.
    pub fn stagger() -> Self {
        Self {
            duration: REVEAL_STAGGER_SEC,
            shift_px: REVEAL_STAGGER_SHIFT_PX,
            stagger_sec: REVEAL_STAGGER_STEP_SEC,
            start_offset_px: REVEAL_START_OFFSET_PX,
            ease: Ease::Power2Out,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("reveal duration", self.duration)?;
        finite("reveal shift", self.shift_px)?;
        finite("reveal stagger", self.stagger_sec)?;
        finite("reveal start offset", self.start_offset_px)
    }
}

impl Default for RevealParams {
    fn default() -> Self {
        Self::fade()
    }
}

/// Visual state of one revealed item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub translate_y: f32,
}

/// One trigger element and the items it reveals.
///
/// Plays when the trigger scrolls into range, does nothing on leave or
/// re-enter, and resets once scrolled back above the start point.
#[derive(Clone, Debug)]
pub struct RevealGroup {
    params: RevealParams,
    delays: SmallVec<[f32; 8]>,
    started_at: Option<f64>,
}

impl RevealGroup {
    pub fn new(params: RevealParams, items: usize) -> Result<Self, ConfigError> {
        params.validate()?;
        let delays = (0..items.max(1))
            .map(|i| i as f32 * params.stagger_sec)
            .collect();
        Ok(Self {
            params,
            delays,
            started_at: None,
        })
    }

    pub fn len(&self) -> usize {
        self.delays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }

    /// Feed the trigger's current top edge. Returns true if the group just
    /// started or reset.
    pub fn on_scroll(&mut self, trigger_top: f32, viewport_height: f32, now: f64) -> bool {
        let in_range = trigger_top <= viewport_height - self.params.start_offset_px;
        match (in_range, self.started_at) {
            (true, None) => {
                self.started_at = Some(now);
                true
            }
            (false, Some(_)) => {
                self.started_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn item(&self, index: usize, now: f64) -> RevealStyle {
        let hidden = RevealStyle {
            opacity: 0.0,
            translate_y: self.params.shift_px,
        };
        let (Some(start), Some(delay)) = (self.started_at, self.delays.get(index)) else {
            return hidden;
        };
        let k = self
            .params
            .ease
            .apply(((now - start) as f32 - delay) / self.params.duration);
        RevealStyle {
            opacity: k,
            translate_y: self.params.shift_px * (1.0 - k),
        }
    }

    /// True once every item has finished playing.
    pub fn is_settled(&self, now: f64) -> bool {
        match (self.started_at, self.delays.last()) {
            (Some(start), Some(last)) => (now - start) as f32 >= last + self.params.duration,
            _ => true,
        }
    }
}

/// Element drifting up as its parent passes through the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub shift_px: f32,
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            shift_px: PARALLAX_SHIFT_PX,
        }
    }
}

impl Parallax {
    /// 0 when the parent's top meets the viewport bottom, 1 when its bottom
    /// meets the viewport top.
    pub fn progress(parent_top: f32, parent_height: f32, viewport_height: f32) -> f32 {
        let span = viewport_height + parent_height;
        if span <= 0.0 {
            return 0.0;
        }
        ((viewport_height - parent_top) / span).clamp(0.0, 1.0)
    }

    pub fn offset(&self, parent_top: f32, parent_height: f32, viewport_height: f32) -> f32 {
        self.shift_px * Self::progress(parent_top, parent_height, viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_plays_once_in_range_and_resets_above() {
        let mut g = RevealGroup::new(RevealParams::fade(), 1).unwrap();
        assert!(!g.on_scroll(750.0, 800.0, 0.0));
        assert_eq!(g.item(0, 0.0).opacity, 0.0);
        assert!(g.on_scroll(700.0, 800.0, 1.0));
        assert!(!g.on_scroll(100.0, 800.0, 1.5));
        assert_eq!(g.item(0, 2.0), RevealStyle { opacity: 1.0, translate_y: 0.0 });
        assert!(g.on_scroll(790.0, 800.0, 3.0));
        assert_eq!(g.item(0, 3.0).translate_y, REVEAL_FADE_SHIFT_PX);
    }

    #[test]
    fn stagger_delays_items() {
        let mut g = RevealGroup::new(RevealParams::stagger(), 3).unwrap();
        g.on_scroll(0.0, 800.0, 0.0);
        let a = g.item(0, 0.2).opacity;
        let b = g.item(1, 0.2).opacity;
        let c = g.item(2, 0.2).opacity;
        assert!(a > b && b > c && c == 0.0);
        assert!(!g.is_settled(0.9));
        assert!(g.is_settled(f64::from(0.25 + REVEAL_STAGGER_SEC)));
    }

    #[test]
    fn late_start_plays_from_hidden() {
        let mut g = RevealGroup::new(RevealParams::fade(), 1).unwrap();
        let start = 42.5;
        assert!(g.on_scroll(100.0, 800.0, start));
        assert_eq!(g.item(0, start).opacity, 0.0);
        assert!(g.item(0, start + 0.1).opacity < 1.0);
        assert!(!g.is_settled(start + 0.1));
        let end = start + f64::from(REVEAL_FADE_SEC);
        assert_eq!(g.item(0, end).opacity, 1.0);
        assert!(g.is_settled(end));
    }

    #[test]
    fn taller_viewport_starts_group_without_scrolling() {
        let mut g = RevealGroup::new(RevealParams::fade(), 1).unwrap();
        assert!(!g.on_scroll(750.0, 800.0, 0.0));
        assert!(g.on_scroll(750.0, 900.0, 0.5));
        assert!(g.is_playing());
        assert_eq!(g.item(0, 0.5).opacity, 0.0);
    }

    #[test]
    fn parallax_scrubs_with_position() {
        let p = Parallax::default();
        assert_eq!(p.offset(800.0, 400.0, 800.0), 0.0);
        assert_eq!(p.offset(-400.0, 400.0, 800.0), PARALLAX_SHIFT_PX);
        assert!((p.offset(200.0, 400.0, 800.0) - PARALLAX_SHIFT_PX * 0.5).abs() < 1e-5);
    }
}
