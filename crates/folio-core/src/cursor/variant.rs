use crate::constants::*;
use crate::error::{finite, positive, ConfigError};

/// Presentation state of the cursor indicators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorVariant {
    #[default]
    Default,
    Hover,
    Text,
    Click,
}

impl CursorVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CursorVariant::Default => "default",
            CursorVariant::Hover => "hover",
            CursorVariant::Text => "text",
            CursorVariant::Click => "click",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    Normal,
    Difference,
}

impl BlendMode {
    pub fn as_css(&self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Difference => "difference",
        }
    }
}

/// How a variant looks. Purely visual.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantStyle {
    /// Outline radius in px.
    pub radius: f32,
    /// Multiplier on the dot size.
    pub dot_scale: f32,
    pub fill_opacity: f32,
    pub blend: BlendMode,
    pub show_label: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorParams {
    /// Outline diameter in the default state.
    pub indicator_size: f32,
    pub dot_size: f32,
    pub hover_radius: f32,
    pub text_radius: f32,
    pub click_radius: f32,
    pub dot_follow_sec: f32,
    pub outline_follow_sec: f32,
    pub radius_sec: f32,
    pub speed_normalizer: f32,
    pub stretch_along: f32,
    pub stretch_across: f32,
}

impl Default for CursorParams {
    fn default() -> Self {
        Self {
            indicator_size: CURSOR_INDICATOR_SIZE,
            dot_size: CURSOR_DOT_SIZE,
            hover_radius: CURSOR_HOVER_RADIUS,
            text_radius: CURSOR_TEXT_RADIUS,
            click_radius: CURSOR_CLICK_RADIUS,
            dot_follow_sec: CURSOR_DOT_FOLLOW_SEC,
            outline_follow_sec: CURSOR_OUTLINE_FOLLOW_SEC,
            radius_sec: CURSOR_RADIUS_SEC,
            speed_normalizer: CURSOR_SPEED_NORMALIZER,
            stretch_along: CURSOR_STRETCH_ALONG,
            stretch_across: CURSOR_STRETCH_ACROSS,
        }
    }
}

impl CursorParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("indicator size", self.indicator_size)?;
        positive("dot size", self.dot_size)?;
        positive("hover radius", self.hover_radius)?;
        positive("text radius", self.text_radius)?;
        positive("click radius", self.click_radius)?;
        positive("speed normalizer", self.speed_normalizer)?;
        // durations may be zero (snap), never negative
        for (name, v) in [
            ("dot follow duration", self.dot_follow_sec),
            ("outline follow duration", self.outline_follow_sec),
            ("radius duration", self.radius_sec),
        ] {
            finite(name, v)?;
            if v < 0.0 {
                return Err(ConfigError::NotPositive { name, value: v });
            }
        }
        finite("stretch along", self.stretch_along)?;
        finite("stretch across", self.stretch_across)
    }

    pub fn style(&self, variant: CursorVariant) -> VariantStyle {
        match variant {
            CursorVariant::Default => VariantStyle {
                radius: self.indicator_size * 0.5,
                dot_scale: 1.0,
                fill_opacity: 0.0,
                blend: BlendMode::Normal,
                show_label: false,
            },
            CursorVariant::Hover => VariantStyle {
                radius: self.hover_radius,
                dot_scale: 1.5,
                fill_opacity: 0.2,
                blend: BlendMode::Normal,
                show_label: false,
            },
            CursorVariant::Text => VariantStyle {
                radius: self.text_radius,
                dot_scale: 0.0,
                fill_opacity: 0.85,
                blend: BlendMode::Difference,
                show_label: true,
            },
            CursorVariant::Click => VariantStyle {
                radius: self.click_radius,
                dot_scale: 0.7,
                fill_opacity: 0.4,
                blend: BlendMode::Normal,
                show_label: false,
            },
        }
    }
}
