//! Browser-facing desktop controller
//!
//! The page script owns the DOM; it forwards pointer events here and
//! re-renders from the JSON queries whenever an operation reports a change.

use std::cell::RefCell;
use std::rc::Rc;

use arcade_desktop::{
    DesktopEngine, DesktopError, DesktopSettings, LaunchOutcome, WindowConfig, WindowId,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::catalog::{self, CATEGORY_ORDER};
use crate::fetch::fetch_fragment;
use crate::{log, warn};

/// Side panel section
#[derive(Serialize)]
struct AppSection<'a> {
    category: &'a str,
    apps: Vec<AppEntry<'a>>,
}

#[derive(Serialize)]
struct AppEntry<'a> {
    id: &'a str,
    name: &'a str,
    icon: &'a str,
}

/// Desktop controller exported to the page
#[wasm_bindgen]
pub struct ArcadeDesktop {
    engine: Rc<RefCell<DesktopEngine>>,
    on_change: Rc<RefCell<Option<js_sys::Function>>>,
}

impl ArcadeDesktop {
    fn from_engine(engine: DesktopEngine) -> ArcadeDesktop {
        ArcadeDesktop {
            engine: Rc::new(RefCell::new(engine)),
            on_change: Rc::new(RefCell::new(None)),
        }
    }
}

impl Default for ArcadeDesktop {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ArcadeDesktop {
    /// Desktop with the portfolio catalog and arcade layout
    #[wasm_bindgen(constructor)]
    pub fn new() -> ArcadeDesktop {
        Self::from_engine(DesktopEngine::with_apps(
            catalog::settings(),
            catalog::registry(),
        ))
    }

    /// Desktop with the portfolio catalog and settings parsed from JSON
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(settings_json: &str) -> Result<ArcadeDesktop, JsValue> {
        let settings = DesktopSettings::from_json(settings_json).map_err(to_js)?;
        Ok(Self::from_engine(DesktopEngine::with_apps(
            settings,
            catalog::registry(),
        )))
    }

    /// Called after asynchronous work changes the window set
    #[wasm_bindgen]
    pub fn set_on_change(&self, callback: js_sys::Function) {
        *self.on_change.borrow_mut() = Some(callback);
    }

    /// Initialize with the browser's inner size
    #[wasm_bindgen]
    pub fn init(&self, width: f32, height: f32) {
        self.engine.borrow_mut().init(width, height);
        log(&format!("[arcade] desktop ready at {}x{}", width, height));
    }

    /// Browser window resized
    #[wasm_bindgen]
    pub fn resize(&self, width: f32, height: f32) {
        self.engine.borrow_mut().set_screen_size(width, height);
    }

    #[wasm_bindgen]
    pub fn is_mobile(&self) -> bool {
        self.engine.borrow().windows.viewport().is_mobile()
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Create a window from a JSON config; returns its id
    #[wasm_bindgen]
    pub fn create_window(&self, config_json: &str) -> Result<f64, JsValue> {
        let config = WindowConfig::from_json(config_json).map_err(to_js)?;
        Ok(self.engine.borrow_mut().create_window(config) as f64)
    }

    #[wasm_bindgen]
    pub fn close_window(&self, id: f64) {
        self.engine.borrow_mut().close_window(window_id(id));
    }

    #[wasm_bindgen]
    pub fn focus_window(&self, id: f64) {
        self.engine.borrow_mut().focus_window(window_id(id));
    }

    #[wasm_bindgen]
    pub fn minimize_window(&self, id: f64) {
        self.engine.borrow_mut().minimize_window(window_id(id));
    }

    #[wasm_bindgen]
    pub fn restore_window(&self, id: f64) {
        self.engine.borrow_mut().restore_window(window_id(id));
    }

    #[wasm_bindgen]
    pub fn toggle_fullscreen(&self, id: f64) {
        self.engine.borrow_mut().toggle_fullscreen(window_id(id));
    }

    /// Taskbar click: minimize the focused window, otherwise restore it
    #[wasm_bindgen]
    pub fn taskbar_click(&self, app_id: &str) -> Result<(), JsValue> {
        let existing = self.engine.borrow().windows.find_by_app(app_id);
        match existing {
            Some(id) => {
                let mut engine = self.engine.borrow_mut();
                let minimize = engine.windows.policy().minimize;
                if minimize && engine.windows.focused() == Some(id) {
                    engine.minimize_window(id);
                } else {
                    engine.windows.show(id);
                }
                Ok(())
            }
            None => self.launch(app_id),
        }
    }

    // =========================================================================
    // Pointer events
    // =========================================================================

    /// Pointer down on the desktop; returns an `InputResult` as JSON
    #[wasm_bindgen]
    pub fn pointer_down(&self, x: f32, y: f32, button: u8) -> Result<String, JsValue> {
        let result = self.engine.borrow_mut().handle_pointer_down(x, y, button);
        to_json(&result)
    }

    /// Title bar pressed on a DOM-rendered window
    #[wasm_bindgen]
    pub fn start_move(&self, id: f64, x: f32, y: f32) -> Result<String, JsValue> {
        let result = self.engine.borrow_mut().start_move_drag(window_id(id), x, y);
        to_json(&result)
    }

    /// Resize handle pressed on a DOM-rendered window
    #[wasm_bindgen]
    pub fn start_resize(&self, id: f64, x: f32, y: f32) -> Result<String, JsValue> {
        let result = self
            .engine
            .borrow_mut()
            .start_resize_drag(window_id(id), x, y);
        to_json(&result)
    }

    #[wasm_bindgen]
    pub fn pointer_move(&self, x: f32, y: f32) -> Result<String, JsValue> {
        let result = self.engine.borrow_mut().handle_pointer_move(x, y);
        to_json(&result)
    }

    #[wasm_bindgen]
    pub fn pointer_up(&self) -> Result<String, JsValue> {
        let result = self.engine.borrow_mut().handle_pointer_up();
        to_json(&result)
    }

    /// Pointer left the page or capture was lost
    #[wasm_bindgen]
    pub fn pointer_cancel(&self) -> Result<String, JsValue> {
        let result = self.engine.borrow_mut().cancel_pointer();
        to_json(&result)
    }

    // =========================================================================
    // Apps
    // =========================================================================

    /// Launch an app by id
    ///
    /// Fetched apps open later; `on_change` fires once their window exists.
    #[wasm_bindgen]
    pub fn launch(&self, app_id: &str) -> Result<(), JsValue> {
        let outcome = self.engine.borrow_mut().launch(app_id);
        match outcome {
            LaunchOutcome::Opened(_) => Ok(()),
            LaunchOutcome::Unknown => Err(to_js(DesktopError::UnknownApp(app_id.to_string()))),
            LaunchOutcome::Pending(request) => {
                let engine = Rc::clone(&self.engine);
                let on_change = Rc::clone(&self.on_change);
                spawn_local(async move {
                    let result = fetch_fragment(&request.url).await;
                    if let Err(err) = &result {
                        warn(&format!(
                            "[arcade] failed to load {} from {}: {}",
                            request.app_name, request.url, err
                        ));
                    }
                    engine.borrow_mut().complete_fragment(request, result);
                    notify(&on_change);
                });
                Ok(())
            }
        }
    }

    // =========================================================================
    // Render queries
    // =========================================================================

    /// Visible windows back to front
    #[wasm_bindgen]
    pub fn windows_json(&self) -> Result<String, JsValue> {
        to_json(&self.engine.borrow().window_views())
    }

    /// A single window's view
    #[wasm_bindgen]
    pub fn window_json(&self, id: f64) -> Result<String, JsValue> {
        let id = window_id(id);
        let views = self.engine.borrow().window_views();
        match views.iter().find(|view| view.id == id) {
            Some(view) => to_json(view),
            None => Err(to_js(DesktopError::WindowNotFound(id))),
        }
    }

    #[wasm_bindgen]
    pub fn taskbar_json(&self) -> Result<String, JsValue> {
        to_json(&self.engine.borrow().taskbar())
    }

    #[wasm_bindgen]
    pub fn icons_json(&self) -> Result<String, JsValue> {
        to_json(&self.engine.borrow().desktop_icons())
    }

    /// Side panel sections in display order
    #[wasm_bindgen]
    pub fn apps_json(&self) -> Result<String, JsValue> {
        let engine = self.engine.borrow();
        let sections: Vec<AppSection> = engine
            .apps
            .grouped(&CATEGORY_ORDER)
            .into_iter()
            .map(|(category, apps)| AppSection {
                category,
                apps: apps
                    .into_iter()
                    .map(|app| AppEntry {
                        id: &app.id,
                        name: &app.name,
                        icon: &app.icon,
                    })
                    .collect(),
            })
            .collect();
        to_json(&sections)
    }
}

fn window_id(id: f64) -> WindowId {
    id as WindowId
}

fn notify(on_change: &RefCell<Option<js_sys::Function>>) {
    let callback = on_change.borrow().clone();
    if let Some(callback) = callback {
        if let Err(e) = callback.call0(&JsValue::NULL) {
            warn(&format!("[arcade] on_change callback threw: {:?}", e));
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js(DesktopError::from(e)))
}

fn to_js(err: DesktopError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
