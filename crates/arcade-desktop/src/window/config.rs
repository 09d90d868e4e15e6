//! Window configuration for creation

use serde::{Deserialize, Serialize};

use super::WindowContent;
use crate::math::{Size, Vec2};

/// Configuration for creating a window
///
/// Every field has a default, so hosts may send partial JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Content payload, set once at creation
    pub content: WindowContent,
    /// Initial position (None = placement policy)
    pub position: Option<Vec2>,
    /// Initial size
    pub size: Size,
    /// Draw a title bar with controls
    pub has_title_bar: bool,
    /// Title bar drags the window
    pub draggable: bool,
    /// Bottom-right handle resizes the window
    pub resizable: bool,
    /// Fullscreen control is shown
    pub allow_fullscreen: bool,
    /// Application identity for de-duplication and taskbar state
    pub app_id: Option<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            content: WindowContent::default(),
            position: None,
            size: Size::new(400.0, 200.0),
            has_title_bar: true,
            draggable: true,
            resizable: false,
            allow_fullscreen: false,
            app_id: None,
        }
    }
}

impl WindowConfig {
    /// Parse a config from JSON, filling in defaults
    pub fn from_json(json: &str) -> crate::DesktopResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Untitled");
        assert!(config.content.is_empty());
        assert_eq!(config.size, Size::new(400.0, 200.0));
        assert!(config.has_title_bar);
        assert!(config.draggable);
        assert!(!config.resizable);
        assert!(!config.allow_fullscreen);
        assert!(config.position.is_none());
    }

    #[test]
    fn test_partial_json() {
        let config = WindowConfig::from_json(
            r#"{ "title": "Gallery", "size": { "width": 800, "height": 600 }, "resizable": true }"#,
        )
        .unwrap();
        assert_eq!(config.title, "Gallery");
        assert_eq!(config.size, Size::new(800.0, 600.0));
        assert!(config.resizable);
        assert!(config.draggable);
        assert!(config.app_id.is_none());
    }
}
