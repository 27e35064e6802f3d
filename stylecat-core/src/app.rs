// SPDX-License-Identifier: LGPL-3.0-only

//! # Styled Application
//!
//! [`StyledApp`] is the composition root: it owns the [`StyleCatalog`], the
//! live windows and the UI thread queue, registers the application's styled
//! components at startup and keeps every window's stylesheet current when the
//! theme changes.
//!
//! ## Example
//!
//! ```rust
//! use stylecat_core::app::StyledApp;
//! use stylecat_theme::config::StyleConfig;
//! use stylecat_theme::stylesheet::StylesheetHost;
//!
//! let mut app = StyledApp::new(&StyleConfig::new(), &[]).unwrap();
//! let window = app.open_window("Main");
//! app.select_theme("dark").unwrap();
//!
//! let scene = app.windows().get(window).unwrap().scene();
//! assert_eq!(scene.stylesheets().len(), 1);
//! ```

use stylecat_theme::catalog::StyleCatalog;
use stylecat_theme::component::StyledComponent;
use stylecat_theme::config::StyleConfig;
use stylecat_theme::diagnostics::DiagnosticSink;

use crate::error::CoreResult;
use crate::registration::RegistrationPlan;
use crate::ui_thread::{UiHandle, UiThread};
use crate::window::{Window, WindowId, WindowRegistry};

/// The application's style state and windows.
pub struct StyledApp {
    catalog: StyleCatalog,
    windows: WindowRegistry,
    ui: UiThread,
}

impl StyledApp {
    /// Build the catalog from `config` and register `components` with their
    /// dependencies. The calling thread becomes the UI thread.
    pub fn new(config: &StyleConfig, components: &[&'static dyn StyledComponent]) -> CoreResult<Self> {
        let plan = RegistrationPlan::new(components)?;
        let mut catalog = StyleCatalog::from_config(config);
        plan.register_all(&mut catalog);

        if let Some(directory) = &config.colour_directory {
            for id in plan.ids() {
                if let Err(err) =
                    catalog.load_colours_from_directory(id.name(), directory, &id.colour_key_prefix())
                {
                    catalog.diagnostics().report("Load user colours", &err);
                }
            }
        }

        Ok(Self {
            catalog,
            windows: WindowRegistry::new(),
            ui: UiThread::new(),
        })
    }

    /// Build from the process environment. See [`StyleConfig::from_env_or_default`].
    pub fn from_env(components: &[&'static dyn StyledComponent]) -> CoreResult<Self> {
        Self::new(&StyleConfig::from_env_or_default(), components)
    }

    /// The style catalog.
    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    /// Mutable access to the style catalog.
    ///
    /// Call [`StyledApp::reapply_stylesheets`] after changing colours.
    pub fn catalog_mut(&mut self) -> &mut StyleCatalog {
        &mut self.catalog
    }

    /// The live windows.
    pub fn windows(&self) -> &WindowRegistry {
        &self.windows
    }

    /// A handle for submitting work to the UI thread.
    pub fn ui_handle(&self) -> UiHandle {
        self.ui.handle()
    }

    /// Run queued UI tasks, returning how many ran.
    pub fn run_pending(&self) -> usize {
        self.ui.run_pending()
    }

    /// Open a window whose scene carries the current stylesheet.
    pub fn open_window(&mut self, title: impl Into<String>) -> WindowId {
        let id = self.windows.open(title);
        if let Some(window) = self.windows.get_mut(id) {
            self.catalog.set_stylesheet(window.scene_mut());
        }
        id
    }

    /// Close a window.
    pub fn close_window(&mut self, id: WindowId) -> Option<Window> {
        self.windows.close(id)
    }

    /// Switch to the theme with `id` and restyle all windows.
    pub fn select_theme(&mut self, id: &str) -> CoreResult<()> {
        self.catalog.select_theme(id)?;
        self.reapply_stylesheets();
        Ok(())
    }

    /// Switch to the theme with `id`, or the default theme if there is none,
    /// and restyle all windows.
    pub fn select_theme_or_default(&mut self, id: &str) {
        self.catalog.select_theme_or_default(id);
        self.reapply_stylesheets();
    }

    /// Replace the managed stylesheet of every live window.
    pub fn reapply_stylesheets(&mut self) {
        self.catalog.reapply_stylesheet(self.windows.scenes_mut());
    }
}
