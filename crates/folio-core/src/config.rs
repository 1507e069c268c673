//! Tunable parameters for the popover and the section fader.
//!
//! Defaults come from `constants.rs`. The page can override fader settings
//! through `data-*` attributes, parsed by [`FaderConfig::with_overrides`].

use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("fade radius `{0}` is not a number")]
    InvalidRadius(String),
    #[error("fade radius {0} must be in (0, 2]")]
    RadiusOutOfRange(f32),
    #[error("snap flag `{0}` must be `true` or `false`")]
    InvalidSnapFlag(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PopoverConfig {
    pub breakpoint: f32,
    pub margin: f32,
    pub offset: f32,
    pub max_width: f32,
    pub arrow_inset: f32,
}

impl Default for PopoverConfig {
    fn default() -> Self {
        Self {
            breakpoint: MOBILE_BREAKPOINT_PX,
            margin: VIEWPORT_MARGIN_PX,
            offset: ANCHOR_OFFSET_PX,
            max_width: PANEL_MAX_WIDTH_PX,
            arrow_inset: ARROW_INSET_PX,
        }
    }
}

impl PopoverConfig {
    /// Desktop width cap: never wider than the viewport's safe area.
    #[inline]
    pub fn max_width_for(&self, viewport_width: f32) -> f32 {
        self.max_width
            .min(viewport_width - 2.0 * self.margin)
            .max(0.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaderConfig {
    /// Fraction of viewport height at which a section's weight reaches zero.
    pub radius_fraction: f32,
    pub snap: bool,
    pub snap_delay: Duration,
}

impl Default for FaderConfig {
    fn default() -> Self {
        Self {
            radius_fraction: FADE_RADIUS_FRACTION,
            snap: false,
            snap_delay: Duration::from_millis(SNAP_DELAY_MS),
        }
    }
}

impl FaderConfig {
    /// Apply `data-fade-radius` / `data-snap` attribute values on top of self.
    pub fn with_overrides(
        mut self,
        radius: Option<&str>,
        snap: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(raw) = radius {
            let r: f32 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidRadius(raw.to_string()))?;
            if !(r > 0.0 && r <= 2.0) {
                return Err(ConfigError::RadiusOutOfRange(r));
            }
            self.radius_fraction = r;
        }
        if let Some(raw) = snap {
            self.snap = match raw.trim() {
                "true" | "" => true,
                "false" => false,
                other => return Err(ConfigError::InvalidSnapFlag(other.to_string())),
            };
        }
        Ok(self)
    }

    #[inline]
    pub fn radius_px(&self, viewport_height: f32) -> f32 {
        self.radius_fraction * viewport_height
    }
}
