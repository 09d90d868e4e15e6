//! Window manager for the arcade portfolio desktop
//!
//! This crate provides the state behind the retro desktop page:
//! - Window management (create, close, focus, z-order)
//! - Fullscreen, minimize and restore
//! - Title-bar drag and corner resize gestures
//! - Mobile layout adaptation
//! - App registry, desktop icons and the taskbar
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`) and frame metrics
//! - [`window`]: Window lifecycle, placement and hit testing
//! - [`input`]: Drag state machine and pointer results
//! - [`apps`]: Launchable apps and fetched content
//! - [`settings`]: Tunable thresholds and window policy
//!
//! ## Example
//!
//! ```rust
//! use arcade_desktop::{DesktopEngine, WindowConfig, Size, Vec2};
//!
//! let mut engine = DesktopEngine::new();
//! engine.init(1920.0, 1080.0);
//!
//! let window_id = engine.create_window(WindowConfig {
//!     title: "Contact".to_string(),
//!     position: Some(Vec2::new(100.0, 100.0)),
//!     size: Size::new(500.0, 450.0),
//!     app_id: Some("contact".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(engine.windows.focused(), Some(window_id));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without a browser
//! 2. **Host Renders**: The page reads window views and forwards pointer events
//! 3. **Best Effort**: Operations on unknown windows are ignored, never errors

pub mod apps;
pub mod input;
pub mod math;
pub mod settings;
pub mod window;

mod engine;
mod error;
mod types;
mod viewport;

// Re-export core types for convenience
pub use apps::{AppDescriptor, AppRegistry, DesktopIcon, FetchError, FragmentRequest, Launch};
pub use error::{DesktopError, DesktopResult};
pub use input::{DragState, InputResult, InputRouter};
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use settings::{DesktopSettings, DuplicatePolicy, WindowPolicy};
pub use window::{
    Capabilities, Placement, Window, WindowConfig, WindowContent, WindowId, WindowManager,
    WindowRegion, WindowState,
};

pub use engine::{DesktopEngine, LaunchOutcome, TaskbarEntry, WindowView};
pub use viewport::{Viewport, ViewportClass};
