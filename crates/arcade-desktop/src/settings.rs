//! Desktop configuration
//!
//! The page has historically shipped several slightly different window
//! managers. Their differences are expressed here as data: whether minimize
//! exists, what happens when an already-open app is launched again, whether a
//! minimized window keeps its taskbar entry lit, where windows land by
//! default and how desktop icons are laid out.

use serde::{Deserialize, Serialize};

use crate::apps::IconLayout;
use crate::error::{DesktopError, DesktopResult};
use crate::math::Size;
use crate::window::Placement;

/// What `create` does when a window for the same app is already open
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Restore and focus the existing window
    #[default]
    Refocus,
    /// Always open another window
    NewInstance,
}

/// Behavioral switches for the window manager
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowPolicy {
    /// Minimize/restore controls exist
    pub minimize: bool,
    /// Launching an app that is already open
    pub duplicates: DuplicatePolicy,
    /// A minimized window still marks its app as open in the taskbar
    pub minimized_counts_as_open: bool,
    /// Default position for windows created without one
    pub placement: Placement,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            minimize: true,
            duplicates: DuplicatePolicy::Refocus,
            minimized_counts_as_open: true,
            placement: Placement::default(),
        }
    }
}

/// Complete desktop configuration, loadable from JSON
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopSettings {
    /// Viewport widths strictly below this are classified as mobile
    pub mobile_breakpoint: f32,
    /// Height of the top menu bar
    pub top_bar_height: f32,
    /// Height of the bottom taskbar
    pub bottom_bar_height: f32,
    /// Floor applied to every pointer resize
    pub min_window_size: Size,
    pub policy: WindowPolicy,
    pub icon_layout: IconLayout,
}

impl Default for DesktopSettings {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 800.0,
            top_bar_height: 32.0,
            bottom_bar_height: 48.0,
            min_window_size: Size::new(200.0, 150.0),
            policy: WindowPolicy::default(),
            icon_layout: IconLayout::default(),
        }
    }
}

impl DesktopSettings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let settings: DesktopSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the window manager cannot work with
    pub fn validate(&self) -> DesktopResult<()> {
        if self.mobile_breakpoint.is_nan() || self.mobile_breakpoint <= 0.0 {
            return Err(DesktopError::InvalidSettings {
                field: "mobile_breakpoint",
                reason: "must be positive",
            });
        }
        if self.top_bar_height.is_nan()
            || self.bottom_bar_height.is_nan()
            || self.top_bar_height < 0.0
            || self.bottom_bar_height < 0.0
        {
            return Err(DesktopError::InvalidSettings {
                field: "top_bar_height/bottom_bar_height",
                reason: "must not be negative",
            });
        }
        if !self.min_window_size.is_positive() {
            return Err(DesktopError::InvalidSettings {
                field: "min_window_size",
                reason: "both dimensions must be positive",
            });
        }
        if let Placement::Cascade { cycle: 0, .. } = self.policy.placement {
            return Err(DesktopError::InvalidSettings {
                field: "policy.placement.cycle",
                reason: "cascade cycle must be at least 1",
            });
        }
        Ok(())
    }
}
