//! Per-pixel evaluation — applies the adjustment chain in closed form.

use crate::grading::sliders::{apply_brightness, apply_saturation};
use crate::image::{ChannelRange, EditImage};
use crate::transform::params::AdjustmentParams;

/// Applies one adjustment to a single RGBA pixel. [`ColorMatrix::from_params`]
/// followed by [`ColorMatrix::apply`] gives the same result.
///
/// 1. Saturation around the weighted gray
/// 2. Brightness offset on R, G, B
/// 3. Clamp every color channel into `range`
///
/// Alpha passes through untouched. The brightness offset is in 0–255 units
/// and is rescaled for normalized pixels.
///
/// [`ColorMatrix::from_params`]: crate::transform::matrix::ColorMatrix::from_params
/// [`ColorMatrix::apply`]: crate::transform::matrix::ColorMatrix::apply
pub fn apply_adjustments(
    rgba: [f32; 4],
    params: &AdjustmentParams,
    range: ChannelRange,
) -> [f32; 4] {
    let rgb = [rgba[0], rgba[1], rgba[2]];
    let rgb = apply_saturation(rgb, params.saturation);
    let rgb = apply_brightness(rgb, params.brightness * range.offset_scale());
    [
        range.clamp(rgb[0]),
        range.clamp(rgb[1]),
        range.clamp(rgb[2]),
        rgba[3],
    ]
}

/// Applies one adjustment to every pixel of `image` in place.
pub fn apply_to_image(image: &mut EditImage, params: &AdjustmentParams) {
    let range = image.range;
    for px in &mut image.pixels {
        *px = apply_adjustments(*px, params, range);
    }
}
