//! Adjustment tools and the sliders they expose.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transform::params::{AdjustmentParams, BRIGHTNESS_RANGE, SATURATION_RANGE};

/// Which parameter panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    Brightness,
    Saturation,
}

/// Range and default of the slider a tool shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub min: f32,
    pub max: f32,
    pub default: f32,
}

impl SliderSpec {
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }
}

impl Tool {
    /// Human-readable label for the tool bar.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Brightness => "Brightness",
            Self::Saturation => "Saturation",
        }
    }

    /// Tools in tool-bar order.
    pub fn all() -> &'static [Self] {
        const ALL: [Tool; 2] = [Tool::Brightness, Tool::Saturation];
        &ALL
    }

    pub fn slider(&self) -> SliderSpec {
        let neutral = AdjustmentParams::default();
        match self {
            Self::Brightness => SliderSpec {
                min: *BRIGHTNESS_RANGE.start(),
                max: *BRIGHTNESS_RANGE.end(),
                default: neutral.brightness,
            },
            Self::Saturation => SliderSpec {
                min: *SATURATION_RANGE.start(),
                max: *SATURATION_RANGE.end(),
                default: neutral.saturation,
            },
        }
    }

    /// Current value of the parameter this tool controls.
    pub fn value(&self, params: &AdjustmentParams) -> f32 {
        match self {
            Self::Brightness => params.brightness,
            Self::Saturation => params.saturation,
        }
    }

    pub(crate) fn value_mut<'a>(&self, params: &'a mut AdjustmentParams) -> &'a mut f32 {
        match self {
            Self::Brightness => &mut params.brightness,
            Self::Saturation => &mut params.saturation,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
