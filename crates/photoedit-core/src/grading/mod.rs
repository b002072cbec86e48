//! Slider tools — saturation and brightness on a single RGB triple.

pub mod sliders;
