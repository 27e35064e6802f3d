#![warn(missing_docs)]

//! # Stylecat Theming System
//!
//! Themes, colour tables and runtime stylesheet synthesis for desktop UI
//! toolkits that consume CSS stylesheets by URI.
//!
//! ## Overview
//!
//! The theming system consists of several key components:
//!
//! - **[StyleCatalog](catalog::StyleCatalog)**: Registry of component style
//!   declarations, theme selection and stylesheet output
//! - **[Theme](theme::Theme)**: Default and override colour tables plus a base
//!   stylesheet template
//! - **[ColourProperty](colour_property::ColourProperty)**: One style property
//!   bound to a colour key for a list of selectors
//! - **[RuleSet](rule_set::RuleSet)**: Selectors and declarations whose values
//!   may reference colour keys
//! - **[StyledComponent](component::StyledComponent)**: How a UI component
//!   contributes its declarations
//! - **[StyleConfig](config::StyleConfig)**: Settings from environment
//!   variables and TOML files
//! - **Built-in Themes**: Light and dark theme implementations
//!
//! ## Quick Start
//!
//! ```rust
//! use stylecat_theme::catalog::StyleCatalog;
//! use stylecat_theme::colour_property::ColourProperty;
//! use stylecat_theme::id::ComponentId;
//! use stylecat_theme::properties::StyleProperty;
//!
//! let mut catalog = StyleCatalog::new();
//! catalog.register(
//!     ComponentId::new("app", "Sidebar"),
//!     vec![ColourProperty::of_key(StyleProperty::BackgroundColour, "Base.background", [".sidebar"])],
//!     Vec::new(),
//!     &[],
//! );
//!
//! let css = catalog.css_text();
//! assert!(css.contains(".sidebar {\n    -fx-background-color: rgb(244, 244, 244);\n}"));
//! ```
//!
//! ## Colour Keys
//!
//! Values in rule sets and base stylesheets reference colours with `&key`.
//! Keys are resolved against the active theme when the stylesheet is
//! synthesized, so switching themes changes every resolved colour at once.
//!
//! ## Theme Switching
//!
//! ```rust
//! use stylecat_theme::catalog::StyleCatalog;
//!
//! let mut catalog = StyleCatalog::new();
//! let mut scene: Vec<String> = Vec::new();
//! catalog.add_stylesheet(&mut scene);
//!
//! catalog.select_theme("dark").unwrap();
//! catalog.reapply_stylesheet([&mut scene]);
//! assert_eq!(scene.len(), 1);
//! ```
//!
//! ## Stylesheet Output
//!
//! Without a stylesheet filename the stylesheet is delivered as a `data:`
//! URI. With one, it is written to a per-process temp directory and a new
//! file is written only when the synthesized text changes.

/// Contains the [catalog::StyleCatalog] struct.
pub mod catalog;
/// Contains the [colour::Colour] struct.
pub mod colour;
/// Contains colour resource file reading and writing.
pub mod colour_file;
/// Contains the [colour_property::ColourProperty] struct.
pub mod colour_property;
/// Contains the [component::StyledComponent] trait.
pub mod component;
/// Contains the [config::StyleConfig] struct.
pub mod config;
/// Contains non-fatal diagnostic reporting.
pub mod diagnostics;
/// Contains error types for theme operations.
pub mod error;
/// Contains factory functions for common rule sets.
pub mod factory;
/// Contains the [id::ComponentId] struct.
pub mod id;
/// Contains the [properties::StyleProperty] enum.
pub mod properties;
/// Contains rule sets and their resolution.
pub mod rule_set;
/// Contains common selector names.
pub mod selector;
/// Contains serde support for [colour::Colour].
pub mod serde_colour;
/// Contains stylesheet URIs and managed-stylesheet detection.
pub mod stylesheet;
/// Contains the [theme::Theme] struct and the built-in themes.
pub mod theme;
/// Contains style values with colour-key references.
pub mod value;
/// Contains the user colour file watcher.
#[cfg(feature = "hot-reload")]
pub mod watcher;

/// Whether this build includes the colour file watcher.
pub const HOT_RELOAD: bool = cfg!(feature = "hot-reload");
