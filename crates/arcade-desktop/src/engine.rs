//! Desktop engine coordinating all components

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::apps::{
    embed_fragment, error_window, layout_icons, AppRegistry, DesktopIcon, FetchError,
    FragmentRequest, IconLayout, Launch,
};
use crate::input::{DragState, InputResult, InputRouter};
use crate::math::{Rect, Vec2};
use crate::settings::{DesktopSettings, DuplicatePolicy};
use crate::window::{
    Capabilities, WindowConfig, WindowContent, WindowId, WindowManager, WindowRegion, WindowState,
    ZOrder,
};

/// Window with its on-screen rectangle, for the host renderer
#[derive(Clone, Debug, Serialize)]
pub struct WindowView {
    pub id: WindowId,
    pub app_id: Option<String>,
    pub title: String,
    pub content: WindowContent,
    pub screen_rect: Rect,
    pub z_order: ZOrder,
    pub focused: bool,
    pub state: WindowState,
    pub capabilities: Capabilities,
}

/// Taskbar entry for a listed app
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaskbarEntry {
    pub app_id: String,
    pub name: String,
    pub icon: String,
    pub category: String,
    /// A window for this app is open
    pub active: bool,
}

/// What happened when an app was launched
#[derive(Clone, Debug, PartialEq)]
pub enum LaunchOutcome {
    /// A window was created or an existing one brought forward
    Opened(WindowId),
    /// Content must be fetched first; finish with
    /// [`DesktopEngine::complete_fragment`]
    Pending(FragmentRequest),
    /// No app with that id
    Unknown,
}

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for the host page, managing:
/// - Window manager (window CRUD, focus, z-order, fullscreen)
/// - Input router (drag/resize sessions)
/// - App registry (launchable apps, taskbar and icon state)
pub struct DesktopEngine {
    /// Window manager
    pub windows: WindowManager,
    /// Input router
    pub input: InputRouter,
    /// Launchable apps
    pub apps: AppRegistry,
    icon_layout: IconLayout,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create an engine with default settings and no apps
    pub fn new() -> Self {
        Self::with_apps(DesktopSettings::default(), AppRegistry::new())
    }

    /// Create an engine from settings and an app registry
    pub fn with_apps(settings: DesktopSettings, apps: AppRegistry) -> Self {
        Self {
            windows: WindowManager::with_settings(&settings),
            input: InputRouter::new(),
            apps,
            icon_layout: settings.icon_layout,
        }
    }

    /// Initialize with the host's screen dimensions
    pub fn init(&mut self, width: f32, height: f32) {
        self.windows.set_screen_size(width, height);
        debug!(width, height, class = ?self.windows.viewport().class(), "desktop initialized");
    }

    /// Browser window resized
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.windows.set_screen_size(width, height);
    }

    // =========================================================================
    // Window operations
    // =========================================================================

    /// Create a window and return its ID
    pub fn create_window(&mut self, config: WindowConfig) -> WindowId {
        self.windows.create(config)
    }

    /// Close a window, ending any gesture on it
    pub fn close_window(&mut self, id: WindowId) {
        self.release_gesture_on(id);
        self.windows.close(id);
    }

    /// Focus a window (brings it to front in z-order)
    pub fn focus_window(&mut self, id: WindowId) {
        self.windows.focus(id);
    }

    /// Minimize a window
    pub fn minimize_window(&mut self, id: WindowId) {
        self.release_gesture_on(id);
        self.windows.minimize(id);
    }

    /// Restore a minimized window
    pub fn restore_window(&mut self, id: WindowId) {
        self.windows.restore(id);
    }

    /// Enter or leave fullscreen
    pub fn toggle_fullscreen(&mut self, id: WindowId) {
        self.release_gesture_on(id);
        self.windows.toggle_fullscreen(id);
    }

    fn release_gesture_on(&mut self, id: WindowId) {
        if self.input.is_dragging_window(id) {
            self.input.end_drag();
        }
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Start moving a window from its title bar
    ///
    /// The window is focused before the offset is captured so it stays in
    /// front for the whole gesture.
    pub fn start_move_drag(&mut self, id: WindowId, x: f32, y: f32) -> InputResult {
        if !self.windows.contains(id) {
            return InputResult::Unhandled;
        }
        self.windows.focus(id);

        match self.windows.get(id) {
            Some(window) if window.accepts_move() => {
                let offset = Vec2::new(x, y) - window.position;
                self.input.start_window_move(id, offset);
                InputResult::Captured
            }
            _ => InputResult::Handled,
        }
    }

    /// Start resizing a window from its bottom-right handle
    pub fn start_resize_drag(&mut self, id: WindowId, x: f32, y: f32) -> InputResult {
        if !self.windows.contains(id) {
            return InputResult::Unhandled;
        }
        self.windows.focus(id);

        match self.windows.get(id) {
            Some(window) if window.accepts_resize() => {
                self.input.start_window_resize(id, Vec2::new(x, y), window.size);
                InputResult::Captured
            }
            _ => InputResult::Handled,
        }
    }

    /// Handle pointer down event
    ///
    /// A primary press ends any gesture still open: its release was missed.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, button: u8) -> InputResult {
        if button != 0 {
            return InputResult::Unhandled;
        }
        if self.input.end_drag().is_some() {
            trace!("stale gesture ended by new press");
        }

        let point = Vec2::new(x, y);
        let Some((window_id, region)) = self.windows.region_at(point) else {
            return InputResult::Unhandled;
        };

        match region {
            WindowRegion::CloseButton => {
                self.close_window(window_id);
                InputResult::Handled
            }
            WindowRegion::MinimizeButton => {
                self.minimize_window(window_id);
                InputResult::Handled
            }
            WindowRegion::FullscreenButton => {
                self.focus_window(window_id);
                self.toggle_fullscreen(window_id);
                InputResult::Handled
            }
            WindowRegion::TitleBar => self.start_move_drag(window_id, x, y),
            WindowRegion::ResizeHandle => self.start_resize_drag(window_id, x, y),
            WindowRegion::Content => {
                self.focus_window(window_id);
                match self.windows.get(window_id) {
                    Some(window) => {
                        let local = point - self.windows.screen_rect(window).position();
                        InputResult::Forward {
                            window_id,
                            local_x: local.x,
                            local_y: local.y,
                        }
                    }
                    None => InputResult::Unhandled,
                }
            }
        }
    }

    /// Handle pointer move event
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let pointer = Vec2::new(x, y);
        let min_size = self.windows.min_size();

        match self.input.drag_state().copied() {
            Some(drag @ DragState::MoveWindow { window_id, .. }) => {
                if let Some(position) = drag.target_position(pointer) {
                    self.windows.move_to(window_id, position);
                }
                InputResult::Handled
            }
            Some(drag @ DragState::ResizeWindow { window_id, .. }) => {
                if let Some(size) = drag.target_size(pointer, min_size) {
                    self.windows.resize_to(window_id, size);
                }
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    /// Handle pointer up event
    pub fn handle_pointer_up(&mut self) -> InputResult {
        match self.input.end_drag() {
            Some(_) => InputResult::Released,
            None => InputResult::Unhandled,
        }
    }

    /// Pointer left the document or capture was lost; ends the gesture like
    /// a release
    pub fn cancel_pointer(&mut self) -> InputResult {
        self.handle_pointer_up()
    }

    // =========================================================================
    // App Launch
    // =========================================================================

    /// Launch an app from the registry
    pub fn launch(&mut self, app_id: &str) -> LaunchOutcome {
        let Some(app) = self.apps.get(app_id) else {
            warn!(app_id, "launch of unknown app");
            return LaunchOutcome::Unknown;
        };

        match app.launch.clone() {
            Launch::Window(mut config) => {
                config.app_id.get_or_insert_with(|| app.id.clone());
                LaunchOutcome::Opened(self.windows.create(config))
            }
            Launch::Fragment { url, mut config } => {
                if self.windows.policy().duplicates == DuplicatePolicy::Refocus {
                    if let Some(id) = self.windows.find_by_app(app_id) {
                        self.windows.show(id);
                        return LaunchOutcome::Opened(id);
                    }
                }
                config.app_id.get_or_insert_with(|| app.id.clone());
                debug!(app_id, %url, "fetching app content");
                LaunchOutcome::Pending(FragmentRequest {
                    app_id: app.id.clone(),
                    app_name: app.name.clone(),
                    url,
                    config,
                })
            }
        }
    }

    /// Finish a pending launch; always produces a window
    pub fn complete_fragment(
        &mut self,
        request: FragmentRequest,
        result: Result<String, FetchError>,
    ) -> WindowId {
        match result {
            Ok(html) => {
                let config = WindowConfig {
                    content: embed_fragment(&html),
                    ..request.config
                };
                self.windows.create(config)
            }
            Err(err) => {
                warn!(
                    app_id = %request.app_id,
                    url = %request.url,
                    error = %err,
                    "app content failed to load"
                );
                self.windows.create(error_window(&request.app_name, &err))
            }
        }
    }

    // =========================================================================
    // Render queries
    // =========================================================================

    /// Visible windows back to front with their screen rects
    pub fn window_views(&self) -> Vec<WindowView> {
        let focused = self.windows.focused();
        self.windows
            .windows_by_z()
            .into_iter()
            .filter(|w| w.is_visible())
            .map(|w| WindowView {
                id: w.id,
                app_id: w.app_id.clone(),
                title: w.title.clone(),
                content: w.content.clone(),
                screen_rect: self.windows.screen_rect(w),
                z_order: w.z_order,
                focused: focused == Some(w.id),
                state: w.state,
                capabilities: w.capabilities,
            })
            .collect()
    }

    /// Listed apps with their active flags
    pub fn taskbar(&self) -> Vec<TaskbarEntry> {
        self.apps
            .listed()
            .map(|app| TaskbarEntry {
                app_id: app.id.clone(),
                name: app.name.clone(),
                icon: app.icon.clone(),
                category: app.category.clone(),
                active: self.windows.is_app_open(&app.id),
            })
            .collect()
    }

    /// Desktop icons for listed apps
    pub fn desktop_icons(&self) -> Vec<DesktopIcon> {
        layout_icons(&self.apps, self.icon_layout, self.windows.viewport())
    }
}
