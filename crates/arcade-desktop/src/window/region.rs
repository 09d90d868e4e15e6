//! Window region hit testing

use super::{Capabilities, WindowState};
use crate::math::{Rect, Vec2, FRAME_STYLE};

/// Region of a window under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    TitleBar,
    CloseButton,
    FullscreenButton,
    MinimizeButton,
    /// Bottom-right corner
    ResizeHandle,
    Content,
}

/// Find the region of a window at `point`
///
/// `rect` is the on-screen rect (the work area for fullscreen windows).
/// Buttons sit right-to-left: close, fullscreen, minimize; absent controls
/// leave no gap.
pub fn hit_test(
    rect: Rect,
    capabilities: Capabilities,
    state: WindowState,
    minimize_enabled: bool,
    point: Vec2,
) -> Option<WindowRegion> {
    if !rect.contains(point) {
        return None;
    }

    let style = &FRAME_STYLE;

    if capabilities.resizable && state == WindowState::Normal {
        let handle = style.resize_handle_size;
        if point.x >= rect.right() - handle && point.y >= rect.bottom() - handle {
            return Some(WindowRegion::ResizeHandle);
        }
    }

    if !capabilities.has_title_bar || point.y >= rect.y + style.title_bar_height {
        return Some(WindowRegion::Content);
    }

    let mut buttons = vec![WindowRegion::CloseButton];
    if capabilities.allow_fullscreen {
        buttons.push(WindowRegion::FullscreenButton);
    }
    if minimize_enabled {
        buttons.push(WindowRegion::MinimizeButton);
    }

    let top = rect.y + (style.title_bar_height - style.button_size) / 2.0;
    let in_button_row = point.y >= top && point.y < top + style.button_size;
    if in_button_row {
        for (i, button) in buttons.into_iter().enumerate() {
            let right = rect.right()
                - style.button_margin
                - i as f32 * (style.button_size + style.button_spacing);
            let left = right - style.button_size;
            if point.x >= left && point.x < right {
                return Some(button);
            }
        }
    }

    Some(WindowRegion::TitleBar)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPS: Capabilities = Capabilities {
        has_title_bar: true,
        draggable: true,
        resizable: true,
        allow_fullscreen: true,
    };

    fn rect() -> Rect {
        Rect::new(100.0, 100.0, 400.0, 300.0)
    }

    #[test]
    fn test_outside_is_none() {
        assert_eq!(hit_test(rect(), CAPS, WindowState::Normal, true, Vec2::new(50.0, 50.0)), None);
    }

    #[test]
    fn test_buttons_right_to_left() {
        // Button row: y in [104, 124); close spans x [474, 494)
        let y = 110.0;
        assert_eq!(
            hit_test(rect(), CAPS, WindowState::Normal, true, Vec2::new(480.0, y)),
            Some(WindowRegion::CloseButton)
        );
        // fullscreen spans [450, 470)
        assert_eq!(
            hit_test(rect(), CAPS, WindowState::Normal, true, Vec2::new(460.0, y)),
            Some(WindowRegion::FullscreenButton)
        );
        // minimize spans [426, 446)
        assert_eq!(
            hit_test(rect(), CAPS, WindowState::Normal, true, Vec2::new(430.0, y)),
            Some(WindowRegion::MinimizeButton)
        );
        assert_eq!(
            hit_test(rect(), CAPS, WindowState::Normal, true, Vec2::new(200.0, y)),
            Some(WindowRegion::TitleBar)
        );
    }

    #[test]
    fn test_absent_controls_leave_no_gap() {
        let caps = Capabilities {
            allow_fullscreen: false,
            ..CAPS
        };
        assert_eq!(
            hit_test(rect(), caps, WindowState::Normal, true, Vec2::new(460.0, 110.0)),
            Some(WindowRegion::MinimizeButton)
        );
        assert_eq!(
            hit_test(rect(), caps, WindowState::Normal, false, Vec2::new(460.0, 110.0)),
            Some(WindowRegion::TitleBar)
        );
    }

    #[test]
    fn test_resize_handle_only_when_normal() {
        let corner = Vec2::new(495.0, 395.0);
        assert_eq!(
            hit_test(rect(), CAPS, WindowState::Normal, true, corner),
            Some(WindowRegion::ResizeHandle)
        );
        let full = WindowState::Fullscreen { restore: rect() };
        assert_eq!(hit_test(rect(), CAPS, full, true, corner), Some(WindowRegion::Content));

        let fixed = Capabilities {
            resizable: false,
            ..CAPS
        };
        assert_eq!(
            hit_test(rect(), fixed, WindowState::Normal, true, corner),
            Some(WindowRegion::Content)
        );
    }

    #[test]
    fn test_no_title_bar_is_all_content() {
        let bare = Capabilities {
            has_title_bar: false,
            ..CAPS
        };
        assert_eq!(
            hit_test(rect(), bare, WindowState::Normal, true, Vec2::new(480.0, 110.0)),
            Some(WindowRegion::Content)
        );
    }
}
