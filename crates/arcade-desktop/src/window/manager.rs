//! Window manager - CRUD, z-order and per-window state transitions
//!
//! Every operation is best-effort: unknown ids and gestures a window does
//! not accept are ignored. The id and z-order counters only ever grow.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::{
    hit_test, Capabilities, Window, WindowConfig, WindowId, WindowRegion, WindowState, ZOrder,
};
use crate::math::{Rect, Size, Vec2};
use crate::settings::{DesktopSettings, DuplicatePolicy, WindowPolicy};
use crate::viewport::Viewport;

/// First z-order value handed out is `BASE_Z_ORDER + 1`
const BASE_Z_ORDER: ZOrder = 100;

/// Owns all open windows for one page session
pub struct WindowManager {
    /// Open windows keyed by id (id order = creation order)
    windows: BTreeMap<WindowId, Window>,
    next_id: WindowId,
    /// Highest z-order ever assigned
    top_z: ZOrder,
    viewport: Viewport,
    policy: WindowPolicy,
    min_size: Size,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a manager with default settings on a 1920x1080 screen
    pub fn new() -> Self {
        Self::with_settings(&DesktopSettings::default())
    }

    /// Create a manager from settings on a 1920x1080 screen
    pub fn with_settings(settings: &DesktopSettings) -> Self {
        Self {
            windows: BTreeMap::new(),
            next_id: 1,
            top_z: BASE_Z_ORDER,
            viewport: Viewport::from_settings(settings, 1920.0, 1080.0),
            policy: settings.policy.clone(),
            min_size: settings.min_window_size,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn policy(&self) -> &WindowPolicy {
        &self.policy
    }

    /// Resize floor
    pub fn min_size(&self) -> Size {
        self.min_size
    }

    /// Update the screen size; only affects windows created afterwards and
    /// the fullscreen rect
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.viewport.set_screen_size(width, height);
    }

    /// Create a window (or refocus an existing one for the same app)
    ///
    /// New windows always start in front. On mobile screens the window fills
    /// the work area and cannot be dragged or resized.
    pub fn create(&mut self, config: WindowConfig) -> WindowId {
        if self.policy.duplicates == DuplicatePolicy::Refocus {
            let existing = config.app_id.as_deref().and_then(|app| self.find_by_app(app));
            if let Some(existing) = existing {
                debug!(id = existing, "app already open, refocusing");
                self.show(existing);
                return existing;
            }
        }

        let id = self.next_id;
        self.next_id += 1;
        self.top_z += 1;

        let mobile = self.viewport.is_mobile();
        let (position, size) = if mobile {
            let area = self.viewport.work_area();
            (area.position(), area.size())
        } else if let Some(position) = config.position {
            (position, config.size)
        } else {
            self.policy
                .placement
                .place(config.size, self.windows.len(), &self.viewport)
        };

        let window = Window {
            id,
            app_id: config.app_id,
            title: config.title,
            content: config.content,
            position,
            size,
            z_order: self.top_z,
            state: WindowState::Normal,
            capabilities: Capabilities {
                has_title_bar: config.has_title_bar,
                draggable: config.draggable && !mobile,
                resizable: config.resizable && !mobile,
                allow_fullscreen: config.allow_fullscreen,
            },
        };

        debug!(id, title = %window.title, z = window.z_order, mobile, "window created");
        self.windows.insert(id, window);
        id
    }

    /// Close a window; returns false if it was not open
    pub fn close(&mut self, id: WindowId) -> bool {
        match self.windows.remove(&id) {
            Some(_) => {
                debug!(id, "window closed");
                true
            }
            None => {
                trace!(id, "close ignored: no such window");
                false
            }
        }
    }

    /// Bring a window to the front; no-op if it already is
    pub fn focus(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            if window.z_order < self.top_z {
                self.top_z += 1;
                window.z_order = self.top_z;
                trace!(id, z = window.z_order, "window focused");
            }
        }
    }

    /// Reposition a window; ignored unless it accepts pointer moves
    pub fn move_to(&mut self, id: WindowId, position: Vec2) {
        match self.windows.get_mut(&id) {
            Some(window) if window.accepts_move() => window.position = position,
            Some(_) => trace!(id, "move ignored: window not movable"),
            None => trace!(id, "move ignored: no such window"),
        }
    }

    /// Resize a window, floored at the minimum size; ignored unless it
    /// accepts pointer resizes
    pub fn resize_to(&mut self, id: WindowId, size: Size) {
        let min_size = self.min_size;
        match self.windows.get_mut(&id) {
            Some(window) if window.accepts_resize() => window.size = size.max(min_size),
            Some(_) => trace!(id, "resize ignored: window not resizable"),
            None => trace!(id, "resize ignored: no such window"),
        }
    }

    /// Enter or leave fullscreen
    ///
    /// Entering snapshots the stored geometry; leaving restores it exactly.
    pub fn toggle_fullscreen(&mut self, id: WindowId) {
        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };
        if !window.capabilities.allow_fullscreen {
            trace!(id, "fullscreen ignored: not allowed");
            return;
        }

        match window.state {
            WindowState::Normal => {
                window.state = WindowState::Fullscreen {
                    restore: window.rect(),
                };
                debug!(id, "entered fullscreen");
            }
            WindowState::Fullscreen { restore } => {
                window.position = restore.position();
                window.size = restore.size();
                window.state = WindowState::Normal;
                debug!(id, "left fullscreen");
            }
            WindowState::Minimized => trace!(id, "fullscreen ignored: minimized"),
        }
    }

    /// Hide a window without destroying it
    pub fn minimize(&mut self, id: WindowId) {
        if !self.policy.minimize {
            trace!(id, "minimize ignored: disabled by policy");
            return;
        }
        if let Some(window) = self.windows.get_mut(&id) {
            if window.state == WindowState::Normal {
                window.state = WindowState::Minimized;
                debug!(id, "window minimized");
            }
        }
    }

    /// Show a minimized window again and bring it to the front
    pub fn restore(&mut self, id: WindowId) {
        let restored = match self.windows.get_mut(&id) {
            Some(window) if window.state.is_minimized() => {
                window.state = WindowState::Normal;
                true
            }
            _ => false,
        };
        if restored {
            debug!(id, "window restored");
            self.focus(id);
        }
    }

    /// Restore if minimized, then focus
    pub fn show(&mut self, id: WindowId) {
        self.restore(id);
        self.focus(id);
    }

    /// Front-most window of an app
    pub fn find_by_app(&self, app_id: &str) -> Option<WindowId> {
        self.windows
            .values()
            .filter(|w| w.is_app(app_id))
            .max_by_key(|w| w.z_order)
            .map(|w| w.id)
    }

    /// Whether an app should show as active in the taskbar
    pub fn is_app_open(&self, app_id: &str) -> bool {
        let count_minimized = self.policy.minimized_counts_as_open;
        self.windows
            .values()
            .any(|w| w.is_app(app_id) && (count_minimized || w.is_visible()))
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    /// Windows in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// Windows sorted back to front
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// Front-most visible window
    pub fn focused(&self) -> Option<WindowId> {
        self.windows
            .values()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_order)
            .map(|w| w.id)
    }

    pub fn count(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Highest z-order ever assigned
    pub fn top_z(&self) -> ZOrder {
        self.top_z
    }

    /// Where a window is drawn: the work area while fullscreen, its stored
    /// geometry otherwise
    pub fn screen_rect(&self, window: &Window) -> Rect {
        if window.state.is_fullscreen() {
            self.viewport.work_area()
        } else {
            window.rect()
        }
    }

    /// Top-most visible window region under `point`
    pub fn region_at(&self, point: Vec2) -> Option<(WindowId, WindowRegion)> {
        self.windows_by_z()
            .into_iter()
            .rev()
            .filter(|w| w.is_visible())
            .find_map(|w| {
                hit_test(
                    self.screen_rect(w),
                    w.capabilities,
                    w.state,
                    self.policy.minimize,
                    point,
                )
                .map(|region| (w.id, region))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowContent;

    fn config(title: &str, app_id: Option<&str>) -> WindowConfig {
        WindowConfig {
            title: title.to_string(),
            app_id: app_id.map(str::to_string),
            ..Default::default()
        }
    }

    fn mobile_manager() -> WindowManager {
        let mut wm = WindowManager::new();
        wm.set_screen_size(400.0, 800.0);
        wm
    }

    #[test]
    fn test_create_defaults() {
        let mut wm = WindowManager::new();
        let id = wm.create(WindowConfig::default());
        let w = wm.get(id).unwrap();

        assert_eq!(id, 1);
        assert_eq!(w.title, "Untitled");
        assert_eq!(w.position, Vec2::new(50.0, 50.0));
        assert_eq!(w.size, Size::new(400.0, 200.0));
        assert_eq!(w.z_order, 101);
        assert!(w.capabilities.draggable);
        assert!(!w.capabilities.resizable);
    }

    #[test]
    fn test_new_window_in_front() {
        let mut wm = WindowManager::new();
        let a = wm.create(config("A", None));
        let b = wm.create(config("B", None));

        assert!(wm.get(b).unwrap().z_order > wm.get(a).unwrap().z_order);
        assert_eq!(wm.focused(), Some(b));
    }

    #[test]
    fn test_focus_is_idempotent() {
        let mut wm = WindowManager::new();
        let a = wm.create(config("A", None));
        let _b = wm.create(config("B", None));

        wm.focus(a);
        let z = wm.get(a).unwrap().z_order;
        let top = wm.top_z();
        wm.focus(a);
        assert_eq!(wm.get(a).unwrap().z_order, z);
        assert_eq!(wm.top_z(), top);
    }

    #[test]
    fn test_close_is_terminal() {
        let mut wm = WindowManager::new();
        let a = wm.create(config("A", None));
        assert!(wm.close(a));
        assert!(!wm.close(a));
        wm.focus(a);
        wm.move_to(a, Vec2::new(1.0, 1.0));
        assert!(wm.get(a).is_none());

        let b = wm.create(config("B", None));
        assert_ne!(a, b);
    }

    #[test]
    fn test_refocus_existing_app() {
        let mut wm = WindowManager::new();
        let music = wm.create(config("Music", Some("music")));
        let _other = wm.create(config("Other", Some("other")));
        wm.minimize(music);

        let again = wm.create(config("Music", Some("music")));
        assert_eq!(again, music);
        assert_eq!(wm.count(), 2);
        assert_eq!(wm.get(music).unwrap().state, WindowState::Normal);
        assert_eq!(wm.focused(), Some(music));
    }

    #[test]
    fn test_new_instance_policy() {
        let settings = DesktopSettings {
            policy: WindowPolicy {
                duplicates: DuplicatePolicy::NewInstance,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut wm = WindowManager::with_settings(&settings);
        let a = wm.create(config("Music", Some("music")));
        let b = wm.create(config("Music", Some("music")));
        assert_ne!(a, b);
        assert_eq!(wm.find_by_app("music"), Some(b));
    }

    #[test]
    fn test_resize_floor() {
        let mut wm = WindowManager::new();
        let id = wm.create(WindowConfig {
            resizable: true,
            ..Default::default()
        });
        wm.resize_to(id, Size::new(10.0, -40.0));
        assert_eq!(wm.get(id).unwrap().size, Size::new(200.0, 150.0));
    }

    #[test]
    fn test_capability_gating() {
        let mut wm = WindowManager::new();
        let id = wm.create(WindowConfig {
            draggable: false,
            resizable: false,
            ..Default::default()
        });
        wm.move_to(id, Vec2::new(300.0, 300.0));
        wm.resize_to(id, Size::new(900.0, 900.0));

        let w = wm.get(id).unwrap();
        assert_eq!(w.position, Vec2::new(50.0, 50.0));
        assert_eq!(w.size, Size::new(400.0, 200.0));
    }

    #[test]
    fn test_fullscreen_round_trip() {
        let mut wm = WindowManager::new();
        let id = wm.create(WindowConfig {
            position: Some(Vec2::new(123.5, 77.25)),
            size: Size::new(640.0, 480.0),
            resizable: true,
            allow_fullscreen: true,
            ..Default::default()
        });

        wm.toggle_fullscreen(id);
        let w = wm.get(id).unwrap();
        assert!(w.state.is_fullscreen());
        assert_eq!(w.pre_fullscreen_geometry(), Some(Rect::new(123.5, 77.25, 640.0, 480.0)));
        assert_eq!(wm.screen_rect(w), wm.viewport().work_area());

        wm.move_to(id, Vec2::new(0.0, 0.0));
        wm.resize_to(id, Size::new(999.0, 999.0));

        wm.toggle_fullscreen(id);
        let w = wm.get(id).unwrap();
        assert_eq!(w.state, WindowState::Normal);
        assert_eq!(w.rect(), Rect::new(123.5, 77.25, 640.0, 480.0));
        assert!(w.pre_fullscreen_geometry().is_none());
    }

    #[test]
    fn test_fullscreen_requires_permission() {
        let mut wm = WindowManager::new();
        let id = wm.create(WindowConfig::default());
        wm.toggle_fullscreen(id);
        assert_eq!(wm.get(id).unwrap().state, WindowState::Normal);
    }

    #[test]
    fn test_minimize_not_from_fullscreen() {
        let mut wm = WindowManager::new();
        let id = wm.create(WindowConfig {
            allow_fullscreen: true,
            ..Default::default()
        });
        wm.toggle_fullscreen(id);
        wm.minimize(id);
        assert!(wm.get(id).unwrap().state.is_fullscreen());
    }

    #[test]
    fn test_minimize_disabled_by_policy() {
        let settings = DesktopSettings {
            policy: WindowPolicy {
                minimize: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut wm = WindowManager::with_settings(&settings);
        let id = wm.create(WindowConfig::default());
        wm.minimize(id);
        assert_eq!(wm.get(id).unwrap().state, WindowState::Normal);
    }

    #[test]
    fn test_restore_refocuses() {
        let mut wm = WindowManager::new();
        let a = wm.create(config("A", None));
        let b = wm.create(config("B", None));
        wm.minimize(a);
        assert_eq!(wm.focused(), Some(b));

        wm.restore(a);
        assert_eq!(wm.get(a).unwrap().state, WindowState::Normal);
        assert_eq!(wm.focused(), Some(a));
    }

    #[test]
    fn test_app_open_visibility_policy() {
        let mut wm = WindowManager::new();
        let id = wm.create(config("Music", Some("music")));
        wm.minimize(id);
        assert!(wm.is_app_open("music"));

        let settings = DesktopSettings {
            policy: WindowPolicy {
                minimized_counts_as_open: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut wm = WindowManager::with_settings(&settings);
        let id = wm.create(config("Music", Some("music")));
        assert!(wm.is_app_open("music"));
        wm.minimize(id);
        assert!(!wm.is_app_open("music"));
        assert!(!wm.is_app_open("gallery"));
    }

    #[test]
    fn test_mobile_overrides_geometry_and_capabilities() {
        let mut wm = mobile_manager();
        let id = wm.create(WindowConfig {
            position: Some(Vec2::new(300.0, 300.0)),
            size: Size::new(800.0, 600.0),
            draggable: true,
            resizable: true,
            ..Default::default()
        });
        let w = wm.get(id).unwrap();
        assert!(!w.capabilities.draggable);
        assert!(!w.capabilities.resizable);
        assert_eq!(w.rect(), wm.viewport().work_area());

        let before = w.rect();
        wm.move_to(id, Vec2::new(10.0, 10.0));
        wm.resize_to(id, Size::new(250.0, 250.0));
        assert_eq!(wm.get(id).unwrap().rect(), before);
    }

    #[test]
    fn test_region_at_picks_front_window() {
        let mut wm = WindowManager::new();
        let back = wm.create(WindowConfig {
            position: Some(Vec2::new(0.0, 0.0)),
            ..Default::default()
        });
        let front = wm.create(WindowConfig {
            position: Some(Vec2::new(100.0, 100.0)),
            ..Default::default()
        });

        assert_eq!(
            wm.region_at(Vec2::new(150.0, 150.0)),
            Some((front, WindowRegion::Content))
        );
        assert_eq!(
            wm.region_at(Vec2::new(20.0, 10.0)),
            Some((back, WindowRegion::TitleBar))
        );

        wm.minimize(front);
        assert_eq!(wm.region_at(Vec2::new(150.0, 150.0)).map(|r| r.0), Some(back));
        assert_eq!(wm.region_at(Vec2::new(1000.0, 1000.0)), None);
    }

    #[test]
    fn test_content_is_kept() {
        let mut wm = WindowManager::new();
        let id = wm.create(WindowConfig {
            content: WindowContent::markup("<p>Hello</p>"),
            ..Default::default()
        });
        assert_eq!(wm.get(id).unwrap().content, WindowContent::markup("<p>Hello</p>"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// One user action against the manager
    #[derive(Clone, Debug)]
    enum Op {
        Create { resizable: bool, fullscreen: bool },
        Close(usize),
        Focus(usize),
        Move(usize, f32, f32),
        Resize(usize, f32, f32),
        Fullscreen(usize),
        Minimize(usize),
        Restore(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (any::<bool>(), any::<bool>())
                .prop_map(|(resizable, fullscreen)| Op::Create { resizable, fullscreen }),
            (0usize..16).prop_map(Op::Close),
            (0usize..16).prop_map(Op::Focus),
            (0usize..16, -500.0f32..2000.0, -500.0f32..2000.0)
                .prop_map(|(i, x, y)| Op::Move(i, x, y)),
            (0usize..16, -500.0f32..2000.0, -500.0f32..2000.0)
                .prop_map(|(i, w, h)| Op::Resize(i, w, h)),
            (0usize..16).prop_map(Op::Fullscreen),
            (0usize..16).prop_map(Op::Minimize),
            (0usize..16).prop_map(Op::Restore),
        ]
    }

    fn apply(wm: &mut WindowManager, created: &mut Vec<WindowId>, op: &Op) {
        // Indices may point at closed windows on purpose
        let pick = |i: usize, created: &Vec<WindowId>| {
            created.get(i).copied().unwrap_or(i as WindowId + 1000)
        };
        match *op {
            Op::Create { resizable, fullscreen } => {
                let id = wm.create(WindowConfig {
                    resizable,
                    allow_fullscreen: fullscreen,
                    ..Default::default()
                });
                created.push(id);
            }
            Op::Close(i) => {
                wm.close(pick(i, created));
            }
            Op::Focus(i) => wm.focus(pick(i, created)),
            Op::Move(i, x, y) => wm.move_to(pick(i, created), Vec2::new(x, y)),
            Op::Resize(i, w, h) => wm.resize_to(pick(i, created), Size::new(w, h)),
            Op::Fullscreen(i) => wm.toggle_fullscreen(pick(i, created)),
            Op::Minimize(i) => wm.minimize(pick(i, created)),
            Op::Restore(i) => wm.restore(pick(i, created)),
        }
    }

    proptest! {
        /// N creations yield N distinct ids and N distinct z-orders
        #[test]
        fn ids_and_z_orders_unique(n in 1usize..40) {
            let mut wm = WindowManager::new();
            let ids: Vec<WindowId> = (0..n).map(|_| wm.create(WindowConfig::default())).collect();

            let unique_ids: HashSet<_> = ids.iter().collect();
            prop_assert_eq!(unique_ids.len(), n);

            let z: HashSet<_> = wm.iter().map(|w| w.z_order).collect();
            prop_assert_eq!(z.len(), n);
        }

        /// After any sequence, z-orders stay distinct and ids are never reused
        #[test]
        fn invariants_hold_under_random_ops(ops in prop::collection::vec(op(), 0..80)) {
            let mut wm = WindowManager::new();
            let mut created = Vec::new();

            for op in &ops {
                apply(&mut wm, &mut created, op);

                let z: HashSet<_> = wm.iter().map(|w| w.z_order).collect();
                prop_assert_eq!(z.len(), wm.count());
                prop_assert!(wm.iter().all(|w| w.z_order <= wm.top_z()));

                for w in wm.iter() {
                    prop_assert_eq!(w.pre_fullscreen_geometry().is_some(), w.state.is_fullscreen());
                    if w.capabilities.resizable {
                        prop_assert!(w.size.width >= 200.0 && w.size.height >= 150.0);
                    } else {
                        prop_assert_eq!(w.size, Size::new(400.0, 200.0));
                    }
                }
            }

            let unique: HashSet<_> = created.iter().collect();
            prop_assert_eq!(unique.len(), created.len());
        }

        /// Focused or newly created windows hold the unique maximum z-order
        #[test]
        fn focus_makes_front_most(count in 2usize..12, target in 0usize..12) {
            let mut wm = WindowManager::new();
            let ids: Vec<WindowId> = (0..count)
            .map(|_| wm.create(WindowConfig::default()))
            .collect();
            let id = ids[target % count];

            wm.focus(id);
            let z = wm.get(id).unwrap().z_order;
            prop_assert!(wm.iter().filter(|w| w.id != id).all(|w| w.z_order < z));

            let top = wm.top_z();
            wm.focus(id);
            prop_assert_eq!(wm.top_z(), top);
        }

        /// Entering then leaving fullscreen restores the exact geometry
        #[test]
        fn fullscreen_round_trip(
            x in -2000.0f32..4000.0,
            y in -2000.0f32..4000.0,
            w in 1.0f32..4000.0,
            h in 1.0f32..4000.0,
        ) {
            let mut wm = WindowManager::new();
            let id = wm.create(WindowConfig {
                position: Some(Vec2::new(x, y)),
                size: Size::new(w, h),
                allow_fullscreen: true,
                ..Default::default()
            });
            let before = wm.get(id).unwrap().rect();

            wm.toggle_fullscreen(id);
            wm.toggle_fullscreen(id);
            prop_assert_eq!(wm.get(id).unwrap().rect(), before);
        }

        /// Every resize respects the floor
        #[test]
        fn resize_floor(w in -1000.0f32..3000.0, h in -1000.0f32..3000.0) {
            let mut wm = WindowManager::new();
            let id = wm.create(WindowConfig { resizable: true, ..Default::default() });
            wm.resize_to(id, Size::new(w, h));
            let size = wm.get(id).unwrap().size;
            prop_assert!(size.width >= 200.0);
            prop_assert!(size.height >= 150.0);
        }
    }
}
