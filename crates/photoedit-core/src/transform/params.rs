//! Parameter pair that fully determines an adjustment.
//!
//! `AdjustmentParams` is the snapshot the editor hands to the engine on every
//! evaluation. The matrix and the per-pixel result depend on nothing else.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Valid brightness offsets, in 0–255 channel units.
pub const BRIGHTNESS_RANGE: RangeInclusive<f32> = -255.0..=255.0;

/// Valid saturation factors.
pub const SATURATION_RANGE: RangeInclusive<f32> = 0.0..=5.0;

/// Brightness and saturation for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentParams {
    /// Additive offset on R, G and B. 0.0 = neutral.
    pub brightness: f32,
    /// Chroma multiplier around weighted gray. 1.0 = neutral.
    pub saturation: f32,
}

impl Default for AdjustmentParams {
    /// Produces an identity (no-op) adjustment.
    fn default() -> Self {
        Self {
            brightness: 0.0,
            saturation: 1.0,
        }
    }
}

impl AdjustmentParams {
    /// Build a parameter pair, clamping both values into their ranges.
    pub fn new(brightness: f32, saturation: f32) -> Self {
        Self {
            brightness,
            saturation,
        }
        .clamped()
    }

    /// Copy with both values forced into their ranges. NaN falls back to the
    /// neutral value.
    pub fn clamped(self) -> Self {
        let neutral = Self::default();
        Self {
            brightness: clamp_to(self.brightness, &BRIGHTNESS_RANGE, neutral.brightness),
            saturation: clamp_to(self.saturation, &SATURATION_RANGE, neutral.saturation),
        }
    }

    /// True if both values already sit inside their ranges.
    pub fn is_valid(&self) -> bool {
        BRIGHTNESS_RANGE.contains(&self.brightness) && SATURATION_RANGE.contains(&self.saturation)
    }

    /// True if applying these params leaves every pixel unchanged.
    pub fn is_identity(&self) -> bool {
        self.brightness.abs() < 1e-7 && (self.saturation - 1.0).abs() < 1e-7
    }

    /// Serialize for snapshotting.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restore a snapshot. Values are clamped on the way in.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::clamped)
    }
}

fn clamp_to(value: f32, range: &RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_nan() {
        return fallback;
    }
    value.clamp(*range.start(), *range.end())
}
