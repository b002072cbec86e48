//! Photoedit Core — domain layer for brightness/saturation photo adjustments.
//!
//! This crate contains the color-matrix math, the per-pixel and whole-image
//! evaluation of an adjustment, and the editor state (tool selector and
//! slider-bound parameter cells) that drives it. No GPU or UI framework
//! dependencies.

pub mod config;
pub mod editor;
pub mod engine;
pub mod error;
pub mod grading;
pub mod image;
pub mod transform;

// Re-exports for convenience.
pub use config::EngineConfig;
pub use editor::{EditSession, SharedParams, SliderSpec, Tool};
pub use engine::ColorAdjustmentEngine;
pub use error::EditError;
pub use grading::sliders::LUMA_WEIGHTS;
pub use image::{ChannelRange, EditImage};
pub use transform::evaluate::{apply_adjustments, apply_to_image};
pub use transform::matrix::{ColorMatrix, GpuColorMatrix};
pub use transform::params::AdjustmentParams;
