//! Core geometry types for the desktop
//!
//! Window positions and sizes are plain screen-space pixels; there is no
//! camera or zoom between the pointer and the window layer.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
pub use vec2::Vec2;
