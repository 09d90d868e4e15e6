//! Window management module
//!
//! Provides window lifecycle, focus/z-order, fullscreen and hit testing.

mod config;
mod content;
mod manager;
mod placement;
mod region;
#[allow(clippy::module_inception)]
mod window;

pub use config::WindowConfig;
pub use content::{ElementHandle, WindowContent};
pub use manager::WindowManager;
pub use placement::Placement;
pub use region::{hit_test, WindowRegion};
pub use window::{Capabilities, Window, WindowState};

// Re-export WindowId from crate types module
pub use crate::types::{WindowId, ZOrder};
