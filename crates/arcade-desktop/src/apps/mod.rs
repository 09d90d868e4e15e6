//! App registry and the content contract
//!
//! Apps supply a title, geometry hints, capability flags and a content
//! payload. Content is either ready immediately or fetched as an HTML
//! fragment; a failed fetch degrades to an explanatory error window.

mod fragment;
mod icons;
mod registry;

pub use fragment::{embed_fragment, error_window, FetchError, FragmentRequest};
pub use icons::{layout_icons, DesktopIcon, IconLayout};
pub use registry::{AppDescriptor, AppRegistry, Launch};
