//! Window record and per-window state

use serde::{Deserialize, Serialize};

use super::{WindowContent, WindowId};
use crate::math::{Rect, Size, Vec2};
use crate::types::ZOrder;

/// Window display state
///
/// `Normal` and `Minimized` are the two faces of a regular window;
/// `Fullscreen` carries the geometry to restore on exit, so the snapshot
/// exists exactly while the window is fullscreen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Fullscreen {
        /// Geometry captured when entering fullscreen
        restore: Rect,
    },
}

impl WindowState {
    pub fn is_fullscreen(&self) -> bool {
        matches!(self, WindowState::Fullscreen { .. })
    }

    pub fn is_minimized(&self) -> bool {
        matches!(self, WindowState::Minimized)
    }
}

/// Capability flags, fixed at creation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub has_title_bar: bool,
    pub draggable: bool,
    pub resizable: bool,
    pub allow_fullscreen: bool,
}

/// An open window
#[derive(Clone, Debug)]
pub struct Window {
    /// Unique, never reused
    pub id: WindowId,
    /// Application this window belongs to, if any
    pub app_id: Option<String>,
    pub title: String,
    pub content: WindowContent,
    /// Top-left corner in screen pixels
    pub position: Vec2,
    pub size: Size,
    /// Stacking order (higher = in front)
    pub z_order: ZOrder,
    pub state: WindowState,
    pub capabilities: Capabilities,
}

impl Window {
    /// Stored geometry (not the fullscreen rect)
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Geometry to restore when leaving fullscreen
    pub fn pre_fullscreen_geometry(&self) -> Option<Rect> {
        match self.state {
            WindowState::Fullscreen { restore } => Some(restore),
            _ => None,
        }
    }

    /// Shown on screen (not minimized)
    pub fn is_visible(&self) -> bool {
        !self.state.is_minimized()
    }

    /// Pointer drags may reposition this window right now
    pub fn accepts_move(&self) -> bool {
        self.capabilities.draggable
            && self.capabilities.has_title_bar
            && self.state == WindowState::Normal
    }

    /// Pointer resizes may change this window's size right now
    pub fn accepts_resize(&self) -> bool {
        self.capabilities.resizable && self.state == WindowState::Normal
    }

    /// Does this window belong to `app_id`
    pub fn is_app(&self, app_id: &str) -> bool {
        self.app_id.as_deref() == Some(app_id)
    }
}
