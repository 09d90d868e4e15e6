//! Input router - owns the active gesture

use serde::Serialize;
use tracing::trace;

use super::DragState;
use crate::math::{Size, Vec2};
use crate::window::WindowId;

/// Result of routing a pointer event, reported back to the host
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputResult {
    /// Event consumed by the window manager
    Handled,
    /// Event did not hit anything the manager owns
    Unhandled,
    /// A gesture started; route document-level pointer move/up here until
    /// `Released`
    Captured,
    /// The gesture ended; remove the document-level listeners
    Released,
    /// Pointer-down landed in window content
    Forward {
        window_id: WindowId,
        local_x: f32,
        local_y: f32,
    },
}

/// Holds at most one active drag session
#[derive(Debug, Default)]
pub struct InputRouter {
    drag: Option<DragState>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Begin moving a window; replaces any stale session
    pub fn start_window_move(&mut self, window_id: WindowId, offset: Vec2) {
        self.drag = Some(DragState::MoveWindow { window_id, offset });
        trace!(window_id, "move drag started");
    }

    /// Begin resizing a window; replaces any stale session
    pub fn start_window_resize(
        &mut self,
        window_id: WindowId,
        start_pointer: Vec2,
        start_size: Size,
    ) {
        self.drag = Some(DragState::ResizeWindow {
            window_id,
            start_pointer,
            start_size,
        });
        trace!(window_id, "resize drag started");
    }

    /// End the current gesture, returning it
    pub fn end_drag(&mut self) -> Option<DragState> {
        let ended = self.drag.take();
        if let Some(drag) = ended {
            trace!(window_id = drag.window_id(), "drag ended");
        }
        ended
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Is the active gesture targeting `id`
    pub fn is_dragging_window(&self, id: WindowId) -> bool {
        self.drag.map(|d| d.window_id() == id).unwrap_or(false)
    }
}
