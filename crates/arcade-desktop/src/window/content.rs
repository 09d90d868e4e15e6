//! Window content payload
//!
//! The manager never looks inside content. Markup is trusted caller-supplied
//! text; elements are host-side objects referenced by handle.

use serde::{Deserialize, Serialize};

/// Opaque key the host maps to a live UI element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementHandle(pub u32);

/// What a window shows
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum WindowContent {
    /// Serialized markup fragment
    Markup(String),
    /// Pre-built element owned by the host
    Element(ElementHandle),
}

impl Default for WindowContent {
    fn default() -> Self {
        WindowContent::Markup(String::new())
    }
}

impl WindowContent {
    /// Markup content
    pub fn markup(text: impl Into<String>) -> Self {
        WindowContent::Markup(text.into())
    }

    /// True for empty markup
    pub fn is_empty(&self) -> bool {
        matches!(self, WindowContent::Markup(text) if text.is_empty())
    }
}
