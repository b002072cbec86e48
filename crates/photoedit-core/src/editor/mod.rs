//! Editor state — tool selector and slider-bound parameter cells.

pub mod session;
pub mod shared;
pub mod tool;

pub use session::EditSession;
pub use shared::SharedParams;
pub use tool::{SliderSpec, Tool};
