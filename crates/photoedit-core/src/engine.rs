//! Entry point tying configuration, parameter validation and evaluation
//! together.

use crate::config::EngineConfig;
use crate::image::EditImage;
use crate::transform::evaluate;
use crate::transform::matrix::ColorMatrix;
use crate::transform::params::AdjustmentParams;

/// Stateless apart from its config. Every call derives its result from the
/// params it is given.
#[derive(Debug, Clone, Default)]
pub struct ColorAdjustmentEngine {
    config: EngineConfig,
}

impl ColorAdjustmentEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Params as they will actually be evaluated.
    pub fn resolve(&self, params: &AdjustmentParams) -> AdjustmentParams {
        if !self.config.validate_params || params.is_valid() {
            return *params;
        }
        let clamped = params.clamped();
        tracing::warn!(
            brightness = params.brightness,
            saturation = params.saturation,
            clamped_brightness = clamped.brightness,
            clamped_saturation = clamped.saturation,
            "adjustment params out of range, clamping"
        );
        clamped
    }

    /// Composed matrix for a rendering layer to apply per draw call.
    pub fn matrix(&self, params: &AdjustmentParams) -> ColorMatrix {
        ColorMatrix::from_params(&self.resolve(params))
    }

    /// Adjust a single pixel given in the configured channel range.
    pub fn apply_pixel(&self, rgba: [f32; 4], params: &AdjustmentParams) -> [f32; 4] {
        evaluate::apply_adjustments(rgba, &self.resolve(params), self.config.channel_range)
    }

    /// Adjust every pixel of `image` in place, using the image's own range.
    pub fn apply_image(&self, image: &mut EditImage, params: &AdjustmentParams) {
        let params = self.resolve(params);
        tracing::debug!(
            width = image.width,
            height = image.height,
            range = %image.range,
            brightness = params.brightness,
            saturation = params.saturation,
            "applying adjustment to image"
        );
        evaluate::apply_to_image(image, &params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ChannelRange;

    fn engine(validate_params: bool) -> ColorAdjustmentEngine {
        ColorAdjustmentEngine::new(EngineConfig {
            validate_params,
            channel_range: ChannelRange::Byte,
        })
    }

    #[test]
    fn test_validating_engine_clamps_params() {
        let raw = AdjustmentParams {
            brightness: 900.0,
            saturation: 12.0,
        };
        let resolved = engine(true).resolve(&raw);
        assert_eq!(resolved, AdjustmentParams::new(255.0, 5.0));
        assert_eq!(engine(true).matrix(&raw).get(0, 4), 255.0);
    }

    #[test]
    fn test_trusting_engine_passes_params_through() {
        let raw = AdjustmentParams {
            brightness: 900.0,
            saturation: 12.0,
        };
        assert_eq!(engine(false).resolve(&raw), raw);
        assert_eq!(engine(false).matrix(&raw).get(0, 4), 900.0);
    }

    #[test]
    fn test_pixel_output_is_clamped_either_way() {
        let raw = AdjustmentParams {
            brightness: 900.0,
            saturation: 1.0,
        };
        for validate in [true, false] {
            let out = engine(validate).apply_pixel([0.0, 0.0, 0.0, 255.0], &raw);
            assert_eq!(out, [255.0, 255.0, 255.0, 255.0]);
        }
    }

    #[test]
    fn test_trusting_engine_never_emits_nan() {
        let raw = AdjustmentParams {
            brightness: f32::NAN,
            saturation: 1.0,
        };
        let out = engine(false).apply_pixel([10.0, 20.0, 30.0, 255.0], &raw);
        assert_eq!(out, [0.0, 0.0, 0.0, 255.0]);
        let out = engine(true).apply_pixel([10.0, 20.0, 30.0, 255.0], &raw);
        assert_eq!(out, [10.0, 20.0, 30.0, 255.0]);
    }

    #[test]
    fn test_apply_image_uses_image_range() {
        let mut img =
            EditImage::from_raw(1, 1, vec![[0.5, 0.5, 0.5, 1.0]], ChannelRange::Unit).unwrap();
        engine(true).apply_image(&mut img, &AdjustmentParams::new(-255.0, 1.0));
        assert_eq!(img.pixels[0], [0.0, 0.0, 0.0, 1.0]);
    }
}
