// SPDX-License-Identifier: LGPL-3.0-only

//! Windows and the scenes that carry their stylesheets.

use std::fmt;

use indexmap::IndexMap;
use stylecat_theme::stylesheet::StylesheetHost;

/// Identifies an open window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// The content root of a window, holding its stylesheet URIs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    stylesheets: Vec<String>,
}

impl Scene {
    /// Create a scene without stylesheets.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StylesheetHost for Scene {
    fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    fn stylesheets_mut(&mut self) -> &mut Vec<String> {
        &mut self.stylesheets
    }
}

/// A top-level window.
#[derive(Debug, Clone)]
pub struct Window {
    id: WindowId,
    title: String,
    scene: Scene,
}

impl Window {
    /// The window id.
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// The window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Change the window title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// The window's scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the window's scene.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }
}

/// The live windows, in the order they were opened.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    next_id: u64,
    windows: IndexMap<WindowId, Window>,
}

impl WindowRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a window with an empty scene.
    pub fn open(&mut self, title: impl Into<String>) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        let title = title.into();
        log::debug!("Opening {id} '{title}'");
        self.windows.insert(
            id,
            Window {
                id,
                title,
                scene: Scene::new(),
            },
        );
        id
    }

    /// Close a window, returning it.
    pub fn close(&mut self, id: WindowId) -> Option<Window> {
        self.windows.shift_remove(&id)
    }

    /// The window with `id`.
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    /// Mutable access to the window with `id`.
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    /// The live windows.
    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// The scenes of all live windows.
    pub fn scenes_mut(&mut self) -> impl Iterator<Item = &mut Scene> {
        self.windows.values_mut().map(Window::scene_mut)
    }

    /// The number of live windows.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether no window is open.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close() {
        let mut registry = WindowRegistry::new();
        let main = registry.open("Main");
        let tools = registry.open("Tools");
        assert_ne!(main, tools);
        assert_eq!(registry.len(), 2);

        let closed = registry.close(main).unwrap();
        assert_eq!(closed.title(), "Main");
        assert!(registry.get(main).is_none());
        assert_eq!(registry.iter().map(Window::title).collect::<Vec<_>>(), ["Tools"]);

        let reopened = registry.open("Main");
        assert_ne!(reopened, main);
    }

    #[test]
    fn test_scenes_are_stylesheet_hosts() {
        let mut registry = WindowRegistry::new();
        let id = registry.open("Main");
        registry.open("Other");

        for scene in registry.scenes_mut() {
            scene.stylesheets_mut().push("app.css".to_string());
        }
        let window = registry.get_mut(id).unwrap();
        window.set_title("Renamed");
        assert_eq!(window.scene().stylesheets(), ["app.css"]);
        assert_eq!(registry.get(id).unwrap().title(), "Renamed");
    }
}
