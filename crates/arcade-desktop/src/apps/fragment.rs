//! Fetched HTML fragments and the error-window fallback

use crate::math::Size;
use crate::window::{WindowConfig, WindowContent};

/// Sandbox flags for inline frames built from fetched markup
pub const FRAGMENT_SANDBOX: &str = "allow-scripts allow-same-origin";

/// Why fetching a fragment failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response
    Network(String),
    /// The server answered with a non-success status
    Status(u16),
    /// The response body could not be read as text
    Body(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {}", msg),
            Self::Status(code) => write!(f, "server responded with status {}", code),
            Self::Body(msg) => write!(f, "unreadable response body: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// A launch waiting on its content fetch
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentRequest {
    pub app_id: String,
    /// Display name, used for the error window text
    pub app_name: String,
    pub url: String,
    /// Window to open once the fragment arrives
    pub config: WindowConfig,
}

/// Wrap fetched HTML into a sandboxed inline frame
///
/// The fragment goes into `srcdoc`, so quotes and ampersands are escaped to
/// keep it inside the attribute.
pub fn embed_fragment(html: &str) -> WindowContent {
    let escaped = html.replace('&', "&amp;").replace('"', "&quot;");
    WindowContent::Markup(format!(
        r#"<iframe srcdoc="{}" sandbox="{}" style="width:100%; height:100%; border:0;"></iframe>"#,
        escaped, FRAGMENT_SANDBOX
    ))
}

/// Small fixed window telling the user an app failed to load
pub fn error_window(app_name: &str, err: &FetchError) -> WindowConfig {
    WindowConfig {
        title: "Error".to_string(),
        content: WindowContent::Markup(format!(
            r#"<div class="error-state"><p>Could not load {}.</p><p>{}</p></div>"#,
            app_name, err
        )),
        size: Size::new(320.0, 160.0),
        resizable: false,
        allow_fullscreen: false,
        ..Default::default()
    }
}
