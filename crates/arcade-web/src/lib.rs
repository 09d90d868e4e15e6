//! Browser bindings for the arcade desktop
//!
//! Wraps [`arcade_desktop::DesktopEngine`] in a wasm-bindgen controller,
//! supplies the portfolio's app catalog and fetches HTML fragments for apps
//! that load their content over the network.

mod catalog;
mod controller;
mod fetch;

use wasm_bindgen::prelude::*;

pub use catalog::{registry, settings, CATEGORY_ORDER};
pub use controller::ArcadeDesktop;
pub use fetch::fetch_fragment;

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Log to the browser console
pub(crate) fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Warn on the browser console
pub(crate) fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}
