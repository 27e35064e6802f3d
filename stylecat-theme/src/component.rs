//! Styled components.
//!
//! A UI component contributes its styling by implementing
//! [`StyledComponent`]; the composition root registers it with a
//! [`StyleCatalog`](crate::catalog::StyleCatalog).
//!
//! ```rust
//! use stylecat_theme::colour_property::ColourProperty;
//! use stylecat_theme::component::StyledComponent;
//! use stylecat_theme::id::ComponentId;
//! use stylecat_theme::properties::StyleProperty;
//!
//! struct TitledPane;
//!
//! impl StyledComponent for TitledPane {
//!     fn id(&self) -> ComponentId {
//!         ComponentId::new("app.widgets", "TitledPane")
//!     }
//!
//!     fn colour_properties(&self) -> Vec<ColourProperty> {
//!         vec![ColourProperty::of_key(
//!             StyleProperty::BackgroundColour,
//!             "app.widgets.TitledPane.title.background",
//!             [".titled-pane > .title"],
//!         )]
//!     }
//!
//!     fn default_colours(&self, theme_id: &str) -> Option<&'static str> {
//!         match theme_id {
//!             "light" => Some("title.background = 224"),
//!             "dark" => Some("title.background = 64"),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use crate::colour_property::ColourProperty;
use crate::id::ComponentId;
use crate::rule_set::RuleSet;

/// A UI component that contributes style declarations.
pub trait StyledComponent {
    /// The id under which the declarations are registered.
    fn id(&self) -> ComponentId;

    /// Colour-property declarations.
    fn colour_properties(&self) -> Vec<ColourProperty> {
        Vec::new()
    }

    /// Rule sets; values may reference colour keys.
    fn rule_sets(&self) -> Vec<RuleSet> {
        Vec::new()
    }

    /// Components that must be registered before this one.
    fn dependencies(&self) -> Vec<&'static dyn StyledComponent> {
        Vec::new()
    }

    /// Default colour resource text for `theme_id`. Keys are relative to
    /// the component's colour-key prefix.
    fn default_colours(&self, _theme_id: &str) -> Option<&'static str> {
        None
    }
}
