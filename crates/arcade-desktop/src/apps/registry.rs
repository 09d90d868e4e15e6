//! Static list of launchable apps

use crate::math::Vec2;
use crate::window::WindowConfig;

/// How an app builds its window
#[derive(Clone, Debug, PartialEq)]
pub enum Launch {
    /// Content is available synchronously
    Window(WindowConfig),
    /// Content is an HTML fragment fetched from `url` before the window opens
    Fragment { url: String, config: WindowConfig },
}

/// One launchable app
#[derive(Clone, Debug, PartialEq)]
pub struct AppDescriptor {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Section header in the app list
    pub category: String,
    /// Shown as a desktop icon and taskbar entry (sub-windows are not)
    pub listed: bool,
    /// Icon position for free icon layouts
    pub pinned_position: Option<Vec2>,
    pub launch: Launch,
}

impl AppDescriptor {
    /// A listed app with synchronous content
    pub fn new(id: &str, name: &str, icon: &str, category: &str, config: WindowConfig) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            category: category.to_string(),
            listed: true,
            pinned_position: None,
            launch: Launch::Window(config),
        }
    }

    /// Hide from icons and the taskbar
    pub fn unlisted(mut self) -> Self {
        self.listed = false;
        self
    }

    /// Fetch content from `url` instead
    pub fn fetched_from(mut self, url: &str) -> Self {
        let config = match self.launch {
            Launch::Window(config) | Launch::Fragment { config, .. } => config,
        };
        self.launch = Launch::Fragment {
            url: url.to_string(),
            config,
        };
        self
    }

    /// Pin the desktop icon for free layouts
    pub fn pinned_at(mut self, position: Vec2) -> Self {
        self.pinned_position = Some(position);
        self
    }
}

/// Registry of apps, in registration order
#[derive(Clone, Debug, Default)]
pub struct AppRegistry {
    apps: Vec<AppDescriptor>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self { apps: Vec::new() }
    }

    /// Add an app, replacing any app with the same id in place
    pub fn register(&mut self, app: AppDescriptor) {
        match self.apps.iter_mut().find(|a| a.id == app.id) {
            Some(existing) => *existing = app,
            None => self.apps.push(app),
        }
    }

    pub fn get(&self, id: &str) -> Option<&AppDescriptor> {
        self.apps.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.iter()
    }

    /// Apps shown as icons and taskbar entries
    pub fn listed(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.iter().filter(|a| a.listed)
    }

    /// Listed apps grouped into category sections
    ///
    /// Sections follow `order`; categories not named there come after, in
    /// first-seen order. Empty sections are skipped.
    pub fn grouped<'a>(&'a self, order: &[&str]) -> Vec<(&'a str, Vec<&'a AppDescriptor>)> {
        let mut categories: Vec<&str> = Vec::new();
        for name in order {
            if !categories.contains(name) {
                categories.push(*name);
            }
        }
        let mut sections: Vec<(&'a str, Vec<&'a AppDescriptor>)> = Vec::new();
        for app in self.listed() {
            if !categories.contains(&app.category.as_str()) {
                categories.push(app.category.as_str());
            }
        }
        for category in categories {
            let apps: Vec<&AppDescriptor> =
                self.listed().filter(|a| a.category == category).collect();
            if let Some(first) = apps.first() {
                sections.push((first.category.as_str(), apps));
            }
        }
        sections
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(id: &str, category: &str) -> AppDescriptor {
        AppDescriptor::new(id, id, "*", category, WindowConfig::default())
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut registry = AppRegistry::new();
        registry.register(app("music", "MEDIA"));
        registry.register(app("trash", "SYSTEM"));
        registry.register(app("music", "TOOLS"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("music").unwrap().category, "TOOLS");
        assert_eq!(registry.iter().next().unwrap().id, "music");
    }

    #[test]
    fn test_grouped_follows_order_then_first_seen() {
        let mut registry = AppRegistry::new();
        registry.register(app("trash", "SYSTEM"));
        registry.register(app("ravecat", "XENO"));
        registry.register(app("music", "MEDIA"));
        registry.register(app("album_0", "MEDIA").unlisted());
        registry.register(app("paint", "TOOLS"));
        registry.register(app("gallery", "MEDIA"));

        let sections = registry.grouped(&["MEDIA", "TOOLS", "SYSTEM"]);
        let names: Vec<&str> = sections.iter().map(|(c, _)| *c).collect();
        assert_eq!(names, vec!["MEDIA", "TOOLS", "SYSTEM", "XENO"]);

        let media: Vec<&str> = sections[0].1.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(media, vec!["music", "gallery"]);
    }

    #[test]
    fn test_builders() {
        let a = app("synth", "TOOLS")
            .fetched_from("/apps/synth.html")
            .pinned_at(Vec2::new(10.0, 20.0))
            .unlisted();
        assert!(!a.listed);
        assert_eq!(a.pinned_position, Some(Vec2::new(10.0, 20.0)));
        assert!(matches!(a.launch, Launch::Fragment { ref url, .. } if url == "/apps/synth.html"));
    }
}
