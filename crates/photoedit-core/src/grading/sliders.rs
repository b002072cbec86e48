//! Slider-based adjustments (saturation, brightness).
//!
//! Both operate on unclamped channel values. Clamping happens once, after
//! the whole chain, in [`crate::transform::evaluate`].

/// Luminance weights used as the desaturation reference.
///
/// These are the coefficients the platform color-matrix saturation helper
/// uses, slightly different from the exact Rec. 709 values.
pub const LUMA_WEIGHTS: [f32; 3] = [0.213, 0.715, 0.072];

/// Weighted gray value of an RGB triple.
pub fn luminance(rgb: [f32; 3]) -> f32 {
    rgb[0] * LUMA_WEIGHTS[0] + rgb[1] * LUMA_WEIGHTS[1] + rgb[2] * LUMA_WEIGHTS[2]
}

/// Apply saturation around the weighted gray.
///
/// ```text
/// luma = dot(rgb, LUMA_WEIGHTS)
/// out  = luma + (rgb − luma) × saturation
/// ```
///
/// `saturation = 1.0` produces no change, `0.0` gives gray on all channels.
pub fn apply_saturation(rgb: [f32; 3], saturation: f32) -> [f32; 3] {
    if (saturation - 1.0).abs() < 1e-7 {
        return rgb;
    }

    let luma = luminance(rgb);
    [
        luma + (rgb[0] - luma) * saturation,
        luma + (rgb[1] - luma) * saturation,
        luma + (rgb[2] - luma) * saturation,
    ]
}

/// Add the same brightness offset to every color channel.
pub fn apply_brightness(rgb: [f32; 3], offset: f32) -> [f32; 3] {
    [rgb[0] + offset, rgb[1] + offset, rgb[2] + offset]
}
