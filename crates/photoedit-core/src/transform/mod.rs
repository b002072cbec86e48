//! Transform pipeline — parameters, the 4x5 color matrix, and evaluation.

pub mod evaluate;
pub mod matrix;
pub mod params;
