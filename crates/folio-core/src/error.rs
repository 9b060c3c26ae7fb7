use thiserror::Error;

/// Rejected construction parameters.
///
/// Only constructors validate; nothing on the per-frame or per-event path
/// returns an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("surface needs at least one segment per side")]
    NoSegments,
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
}

pub(crate) fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

pub(crate) fn finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { name, value })
    }
}
