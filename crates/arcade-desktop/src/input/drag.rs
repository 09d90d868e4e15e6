//! Drag session state

use crate::math::{Size, Vec2};
use crate::window::WindowId;

/// An in-progress pointer gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    /// Moving a window by its title bar
    MoveWindow {
        window_id: WindowId,
        /// Pointer position minus window origin at pointer-down
        offset: Vec2,
    },
    /// Resizing a window from its bottom-right handle
    ResizeWindow {
        window_id: WindowId,
        start_pointer: Vec2,
        start_size: Size,
    },
}

impl DragState {
    /// Window the gesture targets
    pub fn window_id(&self) -> WindowId {
        match *self {
            DragState::MoveWindow { window_id, .. } | DragState::ResizeWindow { window_id, .. } => {
                window_id
            }
        }
    }

    /// Absolute window origin for a pointer position
    ///
    /// Recomputed from the captured offset on every move so no error
    /// accumulates across events. `None` for resize gestures.
    pub fn target_position(&self, pointer: Vec2) -> Option<Vec2> {
        match *self {
            DragState::MoveWindow { offset, .. } => Some(pointer - offset),
            DragState::ResizeWindow { .. } => None,
        }
    }

    /// Window size for a pointer position, floored at `min`. `None` for
    /// move gestures.
    pub fn target_size(&self, pointer: Vec2, min: Size) -> Option<Size> {
        match *self {
            DragState::ResizeWindow {
                start_pointer,
                start_size,
                ..
            } => Some(start_size.grow(pointer - start_pointer).max(min)),
            DragState::MoveWindow { .. } => None,
        }
    }
}
