#![warn(missing_docs)]

//! Runtime CSS stylesheet synthesis and theme switching for desktop UI toolkits.

pub use stylecat_core as core;
pub use stylecat_theme as theme;

/// A "prelude" for users of stylecat.
///
/// Importing this module brings into scope the most common types
/// needed to style an application.
///
/// ```rust
/// use stylecat::prelude::*;
///
/// let mut app = StyledApp::new(&StyleConfig::new(), &[]).unwrap();
/// let window = app.open_window("Main");
/// app.select_theme("dark").unwrap();
/// assert!(app.windows().get(window).is_some());
/// ```
pub mod prelude {
    // App
    pub use crate::core::app::StyledApp;
    pub use crate::core::error::{CoreError, CoreResult};
    pub use crate::core::ui_thread::{UiHandle, UiThread};
    pub use crate::core::window::{Scene, Window, WindowId, WindowRegistry};

    // Theme
    pub use crate::theme::catalog::StyleCatalog;
    pub use crate::theme::colour::Colour;
    pub use crate::theme::colour_property::ColourProperty;
    pub use crate::theme::component::StyledComponent;
    pub use crate::theme::config::StyleConfig;
    pub use crate::theme::error::{ThemeError, ThemeResult};
    pub use crate::theme::id::ComponentId;
    pub use crate::theme::properties::StyleProperty;
    pub use crate::theme::rule_set::{RuleSet, Side};
    pub use crate::theme::stylesheet::StylesheetHost;
    pub use crate::theme::theme::Theme;
    #[cfg(feature = "hot-reload")]
    pub use crate::theme::watcher::ColourFileWatcher;
}
