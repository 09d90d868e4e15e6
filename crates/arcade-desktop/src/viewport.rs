//! Viewport classification
//!
//! The only environmental input the window manager consumes. A single
//! breakpoint splits screens into desktop and mobile classes; the bars above
//! and below the window layer bound the work area used for fullscreen and
//! mobile placement.

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size};
use crate::settings::DesktopSettings;

/// Layout class of the current screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    /// Free-floating, manipulable windows
    Desktop,
    /// Single-column, viewable and closable only
    Mobile,
}

/// Screen geometry the window layer lives in
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Screen size in pixels
    pub screen_size: Size,
    /// Height reserved for the top menu bar
    pub top_bar_height: f32,
    /// Height reserved for the bottom taskbar
    pub bottom_bar_height: f32,
    /// Widths strictly below this are mobile
    pub breakpoint: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_settings(&DesktopSettings::default(), 1920.0, 1080.0)
    }
}

impl Viewport {
    /// Create a viewport with the bars and breakpoint from `settings`
    pub fn from_settings(
        settings: &DesktopSettings,
        screen_width: f32,
        screen_height: f32,
    ) -> Self {
        Self {
            screen_size: Size::new(screen_width, screen_height),
            top_bar_height: settings.top_bar_height,
            bottom_bar_height: settings.bottom_bar_height,
            breakpoint: settings.mobile_breakpoint,
        }
    }

    /// Update the screen size (browser resize)
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_size = Size::new(width, height);
    }

    /// Classify the current screen
    pub fn class(&self) -> ViewportClass {
        if self.screen_size.width < self.breakpoint {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    /// Shorthand for `class() == Mobile`
    pub fn is_mobile(&self) -> bool {
        self.class() == ViewportClass::Mobile
    }

    /// Area between the top bar and the taskbar
    pub fn work_area(&self) -> Rect {
        let height =
            (self.screen_size.height - self.top_bar_height - self.bottom_bar_height).max(0.0);
        Rect::new(0.0, self.top_bar_height, self.screen_size.width, height)
    }
}
