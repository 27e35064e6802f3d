//! # Style Catalog
//!
//! The [`StyleCatalog`] owns the themes, the registry of component style
//! declarations and the synthesized stylesheet. It is created by the
//! application's composition root and passed by reference to whatever needs
//! to register components or apply stylesheets.
//!
//! ## Overview
//!
//! - **Registration**: [`StyleCatalog::register_component`] registers a
//!   component after its dependencies and loads its default colours into
//!   every theme.
//! - **Synthesis**: [`StyleCatalog::css_text`] builds the stylesheet for the
//!   active theme.
//! - **Output**: [`StyleCatalog::stylesheet_uri`] returns a `data:` URI, or
//!   writes a temp file when a stylesheet filename is configured. Files are
//!   only rewritten when the content digest changes.
//! - **Theme switching**: [`StyleCatalog::select_theme`] followed by
//!   [`StyleCatalog::reapply_stylesheet`] replaces the managed stylesheet in
//!   every live host.
//!
//! ## Example
//!
//! ```rust
//! use stylecat_theme::catalog::StyleCatalog;
//! use stylecat_theme::id::ComponentId;
//! use stylecat_theme::rule_set::RuleSet;
//!
//! let mut catalog = StyleCatalog::new();
//! catalog.theme_mut("light").unwrap().add_colour("red", "255, 0, 0".parse().unwrap());
//! catalog.register(
//!     ComponentId::new("app", "Foo"),
//!     Vec::new(),
//!     vec![RuleSet::builder().selector(".foo").attribute("color", "&red").build()],
//!     &[],
//! );
//! assert!(catalog.css_text().contains(".foo {\n    color: rgb(255, 0, 0);\n}"));
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tempfile::TempDir;

use crate::colour::Colour;
use crate::colour_file::COLOUR_FILE_SUFFIX;
use crate::colour_property::ColourProperty;
use crate::component::StyledComponent;
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::error::{ThemeError, ThemeResult};
use crate::id::ComponentId;
use crate::rule_set::{self, RuleSet};
use crate::stylesheet::{self, StylesheetHost};
use crate::theme::{Theme, DEFAULT_THEME_ID};

/// Name of the directory that holds per-theme colour files.
pub const THEMES_DIRECTORY: &str = "themes";

/// Placeholder replaced by the running index in stylesheet filenames.
pub const INDEX_PLACEHOLDER: &str = "{index}";

const DEFAULT_APP_ID: &str = "StyleCatalog";

const REGISTER_COMPONENT: &str = "Register component";
const LOAD_DEFAULT_COLOURS: &str = "Load default colours";
const APPLY_STYLESHEET: &str = "Apply stylesheet";
const WRITE_STYLESHEET: &str = "Write stylesheet";

#[derive(Debug, Default)]
struct Declarations {
    colour_properties: Vec<ColourProperty>,
    rule_sets: Vec<RuleSet>,
}

#[derive(Debug, Default)]
struct StylesheetOutput {
    temp_dir: Option<TempDir>,
    index: usize,
    location: Option<PathBuf>,
    digest: Option<md5::Digest>,
}

/// Themes, component style declarations and the synthesized stylesheet.
pub struct StyleCatalog {
    app_id: Option<String>,
    themes: Vec<Theme>,
    active: Option<usize>,
    registry: IndexMap<ComponentId, Declarations>,
    registering: Vec<ComponentId>,
    stylesheet_filename: Option<String>,
    no_stylesheet: bool,
    output: StylesheetOutput,
    diagnostics: Box<dyn DiagnosticSink>,
}

impl StyleCatalog {
    /// Create a catalog with the built-in light and dark themes; the light
    /// theme is active.
    pub fn new() -> Self {
        Self::with_themes(vec![Theme::light(), Theme::dark()])
    }

    /// Create a catalog with the given themes. The default theme is active if
    /// it is among them.
    pub fn with_themes(themes: Vec<Theme>) -> Self {
        let mut catalog = Self {
            app_id: None,
            themes,
            active: None,
            registry: IndexMap::new(),
            registering: Vec::new(),
            stylesheet_filename: None,
            no_stylesheet: false,
            output: StylesheetOutput::default(),
            diagnostics: Box::new(LogSink),
        };
        catalog.active = catalog.position(DEFAULT_THEME_ID);
        if catalog.active.is_none() {
            catalog.report("Initialise themes", &ThemeError::NoDefaultTheme);
        }
        catalog
    }

    /// Replace the diagnostic sink.
    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Box::new(sink);
        self
    }

    /// Set the prefix of the temp directory name.
    pub fn set_app_id(&mut self, app_id: impl Into<String>) {
        self.app_id = Some(app_id.into());
    }

    /// The prefix of the temp directory name, if set.
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    /// Set the stylesheet filename pattern. `{index}` is replaced by a
    /// running index. Without a pattern, stylesheets are `data:` URIs.
    pub fn set_stylesheet_filename(&mut self, filename: Option<String>) {
        self.stylesheet_filename = filename;
        self.invalidate_stylesheet();
    }

    /// The stylesheet filename pattern, if set.
    pub fn stylesheet_filename(&self) -> Option<&str> {
        self.stylesheet_filename.as_deref()
    }

    /// Disable or enable stylesheet application to hosts.
    pub fn set_no_stylesheet(&mut self, no_stylesheet: bool) {
        self.no_stylesheet = no_stylesheet;
    }

    /// Whether stylesheet application is disabled.
    pub fn no_stylesheet(&self) -> bool {
        self.no_stylesheet
    }

    /// The diagnostic sink.
    pub fn diagnostics(&self) -> &dyn DiagnosticSink {
        self.diagnostics.as_ref()
    }

    fn report(&self, context: &str, error: &ThemeError) {
        self.diagnostics.report(&format!("StyleCatalog : {context}"), error);
    }

    // Themes

    fn position(&self, id: &str) -> Option<usize> {
        self.themes.iter().position(|theme| theme.id() == id)
    }

    /// All themes, in the order they were added.
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// The ids of all themes.
    pub fn theme_ids(&self) -> Vec<&str> {
        self.themes.iter().map(Theme::id).collect()
    }

    /// The theme with `id`.
    pub fn find_theme(&self, id: &str) -> Option<&Theme> {
        self.position(id).map(|index| &self.themes[index])
    }

    /// Mutable access to the theme with `id`. Invalidates the stylesheet.
    pub fn theme_mut(&mut self, id: &str) -> Option<&mut Theme> {
        let index = self.position(id)?;
        self.invalidate_stylesheet();
        Some(&mut self.themes[index])
    }

    /// Whether a theme with `id` exists.
    pub fn has_theme(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// The default theme, if present.
    pub fn default_theme(&self) -> Option<&Theme> {
        self.find_theme(DEFAULT_THEME_ID)
    }

    /// The active theme.
    pub fn theme(&self) -> Option<&Theme> {
        self.active.map(|index| &self.themes[index])
    }

    /// The id of the active theme.
    pub fn theme_id(&self) -> Option<&str> {
        self.theme().map(Theme::id)
    }

    /// Add a theme, replacing any theme with the same id.
    pub fn add_theme(&mut self, theme: Theme) {
        match self.position(theme.id()) {
            Some(index) => self.themes[index] = theme,
            None => {
                self.themes.push(theme);
                if self.active.is_none() && self.themes.len() == 1 {
                    self.active = Some(0);
                }
            }
        }
        self.invalidate_stylesheet();
    }

    /// Make the theme with `id` active.
    ///
    /// Selecting the active theme does nothing. An unknown id is an error and
    /// leaves the active theme unchanged.
    pub fn select_theme(&mut self, id: &str) -> ThemeResult<()> {
        if self.theme_id() == Some(id) {
            return Ok(());
        }
        let index = self.position(id).ok_or_else(|| ThemeError::unsupported(id))?;
        self.activate(index);
        Ok(())
    }

    /// Make the theme with `id` active, falling back to the default theme
    /// if there is no such theme.
    pub fn select_theme_or_default(&mut self, id: &str) {
        if self.theme_id() == Some(id) {
            return;
        }
        let index = match self.position(id) {
            Some(index) => Some(index),
            None => {
                log::error!("StyleCatalog : {}", ThemeError::unsupported(id));
                self.position(DEFAULT_THEME_ID)
            }
        };
        if let Some(index) = index {
            if self.active != Some(index) {
                self.activate(index);
            }
        }
    }

    fn activate(&mut self, index: usize) {
        self.active = Some(index);
        self.invalidate_stylesheet();
        log::info!("Selected theme '{}'", self.themes[index].id());
    }

    // Colours

    /// The colour of `key` in the active theme, or in the default theme if
    /// no theme is active.
    pub fn colour(&self, key: &str) -> Option<Colour> {
        self.theme()
            .or_else(|| self.default_theme())
            .and_then(|theme| theme.colour(key))
    }

    /// The colour of `key`, or [`Colour::PLACEHOLDER`] with a warning.
    pub fn colour_or_default(&self, key: &str) -> Colour {
        self.colour(key).unwrap_or_else(|| {
            log::warn!("Colour key: {key}: There is no colour for the property.");
            Colour::PLACEHOLDER
        })
    }

    /// Load a component's default colours into every theme.
    pub fn load_default_colours(&mut self, component: &dyn StyledComponent) {
        let id = component.id();
        let prefix = id.colour_key_prefix();
        let mut errors = Vec::new();

        for theme in &mut self.themes {
            let Some(text) = component.default_colours(theme.id()) else {
                continue;
            };
            let source = format!(
                "{id}: {THEMES_DIRECTORY}/{}/{}{COLOUR_FILE_SUFFIX}",
                theme.id(),
                id.name()
            );
            if let Err(err) = theme.load_default_colours(text, &source, &prefix) {
                errors.push(err);
            }
        }

        for err in &errors {
            self.report(LOAD_DEFAULT_COLOURS, err);
        }
        self.invalidate_stylesheet();
    }

    /// Load user colour files from `directory`.
    ///
    /// For each theme, `<directory>/themes/<theme-id>/<filename_prefix>-colours.properties`
    /// is loaded into the theme's overrides if it is a regular file.
    pub fn load_colours_from_directory(
        &mut self,
        filename_prefix: &str,
        directory: &Path,
        key_prefix: &str,
    ) -> ThemeResult<()> {
        for theme in &mut self.themes {
            let location = colour_file_location(directory, theme.id(), filename_prefix);
            let is_file = fs::symlink_metadata(&location)
                .map(|meta| meta.is_file())
                .unwrap_or(false);
            if is_file {
                theme.load_colours(&location, key_prefix)?;
                log::debug!("Loaded colours of theme '{}' from {}", theme.id(), location.display());
            }
        }
        self.invalidate_stylesheet();
        Ok(())
    }

    /// Load user colour files given per theme id. Unknown ids are ignored.
    pub fn load_colours<'a, I>(&mut self, locations: I, key_prefix: &str) -> ThemeResult<()>
    where
        I: IntoIterator<Item = (&'a str, &'a Path)>,
    {
        for (id, location) in locations {
            if let Some(index) = self.position(id) {
                self.themes[index].load_colours(location, key_prefix)?;
            }
        }
        self.invalidate_stylesheet();
        Ok(())
    }

    // Registration

    /// Whether declarations are registered under `id`.
    pub fn is_registered(&self, id: &ComponentId) -> bool {
        self.registry.contains_key(id)
    }

    /// The registered component ids, in registration order.
    pub fn registered_ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.registry.keys()
    }

    /// Register a component and, first, its unregistered dependencies.
    ///
    /// A component that is already registered is skipped.
    pub fn register_component(&mut self, component: &dyn StyledComponent) {
        let id = component.id();
        if self.is_registered(&id) {
            log::debug!("Component {id} is already registered");
            return;
        }
        self.register_with(
            id,
            component.colour_properties(),
            component.rule_sets(),
            &component.dependencies(),
            Some(component),
        );
    }

    /// Append declarations under `id` after registering its unregistered
    /// dependencies.
    ///
    /// Re-entering the registration of a component that is already in
    /// progress is a dependency cycle: it is reported through the diagnostic
    /// sink and the re-entrant registration is abandoned.
    pub fn register(
        &mut self,
        id: ComponentId,
        colour_properties: Vec<ColourProperty>,
        rule_sets: Vec<RuleSet>,
        dependencies: &[&dyn StyledComponent],
    ) {
        self.register_with(id, colour_properties, rule_sets, dependencies, None);
    }

    fn register_with(
        &mut self,
        id: ComponentId,
        colour_properties: Vec<ColourProperty>,
        rule_sets: Vec<RuleSet>,
        dependencies: &[&dyn StyledComponent],
        component: Option<&dyn StyledComponent>,
    ) {
        if let Some(start) = self.registering.iter().position(|entry| *entry == id) {
            let mut path = self.registering[start..].to_vec();
            path.push(id.clone());
            self.report(REGISTER_COMPONENT, &ThemeError::DependencyCycle { component: id, path });
            return;
        }

        self.registering.push(id.clone());
        log::debug!("Registering component {id}");

        for dependency in dependencies {
            if !self.is_registered(&dependency.id()) {
                self.register_component(*dependency);
            }
        }

        if let Some(component) = component {
            self.load_default_colours(component);
        }

        let declarations = self.registry.entry(id).or_default();
        declarations.colour_properties.extend(colour_properties);
        declarations.rule_sets.extend(rule_sets);
        self.invalidate_stylesheet();

        self.registering.pop();
    }

    /// Replace the colour-property declarations of `id`.
    pub fn update_colour_properties(&mut self, id: ComponentId, colour_properties: Vec<ColourProperty>) {
        self.registry.entry(id).or_default().colour_properties = colour_properties;
        self.invalidate_stylesheet();
    }

    /// Replace the rule sets of `id`.
    pub fn update_rule_sets(&mut self, id: ComponentId, rule_sets: Vec<RuleSet>) {
        self.registry.entry(id).or_default().rule_sets = rule_sets;
        self.invalidate_stylesheet();
    }

    // Synthesis

    /// Synthesize the stylesheet for the active theme.
    pub fn css_text(&self) -> String {
        let theme = self.theme();
        let mut out = String::with_capacity(4096);
        out.push_str(&stylesheet::marker_comment());
        out.push_str("\n\n");

        if let Some(theme) = theme {
            out.push_str(&theme.base_template().resolve(|key| resolve_colour(theme, key)));
        }

        let mut all = Vec::new();
        for declarations in self.registry.values() {
            for rule_set in &declarations.rule_sets {
                all.push(match theme {
                    Some(theme) => rule_set.resolve(|key| resolve_colour(theme, key)),
                    None => rule_set.resolve(|_| Colour::PLACEHOLDER),
                });
            }

            let Some(theme) = theme else { continue };
            for property in &declarations.colour_properties {
                match property.to_rule_set(|key| theme.colour(key)) {
                    Some(rule_set) => all.push(rule_set),
                    None => log::warn!(
                        "Selector(s): {}: Property: {}: Colour key: {}: There is no colour for the property.",
                        property.selectors().join(", "),
                        property.property(),
                        property.colour_key().unwrap_or_default()
                    ),
                }
            }
        }

        for rule_set in rule_set::merge(all) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&rule_set.to_css());
        }
        out
    }

    /// Forget the digest of the last written stylesheet, so the next request
    /// writes a new file.
    pub fn invalidate_stylesheet(&mut self) {
        self.output.digest = None;
    }

    /// The URI of the current stylesheet.
    ///
    /// Without a stylesheet filename this is a `data:` URI. Otherwise the
    /// stylesheet file is written if needed and its `file:` URI returned; a
    /// write failure is reported and yields `None`.
    pub fn stylesheet_uri(&mut self) -> Option<String> {
        if self.stylesheet_filename.is_none() {
            return Some(stylesheet::data_uri(&self.css_text()));
        }
        match self.write_stylesheet(false) {
            Ok(location) => Some(stylesheet::file_uri(&location)),
            Err(err) => {
                self.report(WRITE_STYLESHEET, &err);
                None
            }
        }
    }

    /// Write the stylesheet to a file in the temp directory.
    ///
    /// A new file is written only if `unconditional` is set or the digest of
    /// the stylesheet differs from the last written one. Returns the location
    /// of the current stylesheet file.
    pub fn write_stylesheet(&mut self, unconditional: bool) -> ThemeResult<PathBuf> {
        let pattern = self
            .stylesheet_filename
            .clone()
            .ok_or(ThemeError::NoStylesheetFilename)?;
        let text = self.css_text();
        let digest = md5::compute(text.as_bytes());

        if !unconditional && self.output.digest == Some(digest) {
            if let Some(location) = &self.output.location {
                return Ok(location.clone());
            }
        }

        let filename = pattern.replace(INDEX_PLACEHOLDER, &self.output.index.to_string());
        let location = self.temp_directory()?.join(filename);
        fs::write(&location, &text).map_err(|err| ThemeError::write_failed(&location, err))?;
        log::debug!("Wrote stylesheet {} ({:x})", location.display(), digest);

        self.output.index += 1;
        self.output.location = Some(location.clone());
        self.output.digest = Some(digest);
        Ok(location)
    }

    /// The temp directory, created on first use and removed when the catalog
    /// is dropped.
    pub fn temp_directory(&mut self) -> ThemeResult<&Path> {
        let dir = match self.output.temp_dir.take() {
            Some(dir) => dir,
            None => {
                let prefix = format!("{}-", self.app_id.as_deref().unwrap_or(DEFAULT_APP_ID));
                let dir = tempfile::Builder::new()
                    .prefix(&prefix)
                    .tempdir()
                    .map_err(|source| ThemeError::TempDirectory { source })?;
                log::debug!("Created temp directory {}", dir.path().display());
                dir
            }
        };
        Ok(self.output.temp_dir.insert(dir).path())
    }

    // Hosts

    /// Append the current stylesheet to `host`.
    pub fn add_stylesheet<H: StylesheetHost + ?Sized>(&mut self, host: &mut H) {
        if self.no_stylesheet {
            return;
        }
        if let Some(uri) = self.stylesheet_uri() {
            host.stylesheets_mut().push(uri);
        }
    }

    /// Replace all stylesheets of `host` with the current stylesheet.
    pub fn set_stylesheet<H: StylesheetHost + ?Sized>(&mut self, host: &mut H) {
        if self.no_stylesheet {
            return;
        }
        if let Some(uri) = self.stylesheet_uri() {
            let stylesheets = host.stylesheets_mut();
            stylesheets.clear();
            stylesheets.push(uri);
        }
    }

    /// Replace the managed stylesheet of every host with the current one.
    ///
    /// Each host's list is scanned from the end: the first managed entry is
    /// replaced and later managed entries are removed. The URI is generated
    /// at most once. If no URI can be produced, managed entries are removed.
    pub fn reapply_stylesheet<'a, I, H>(&mut self, hosts: I)
    where
        I: IntoIterator<Item = &'a mut H>,
        H: StylesheetHost + ?Sized + 'a,
    {
        if self.no_stylesheet {
            return;
        }
        let mut uri = None;
        for host in hosts {
            self.reapply_with(host, &mut uri);
        }
    }

    /// Replace the managed stylesheet of one host with the current one.
    pub fn reapply_stylesheet_to<H: StylesheetHost + ?Sized>(&mut self, host: &mut H) {
        if self.no_stylesheet {
            return;
        }
        self.reapply_with(host, &mut None);
    }

    fn reapply_with<H: StylesheetHost + ?Sized>(&mut self, host: &mut H, uri: &mut Option<Option<String>>) {
        let stylesheets = host.stylesheets_mut();
        let mut replaced = false;

        for index in (0..stylesheets.len()).rev() {
            match stylesheet::is_managed_stylesheet(&stylesheets[index]) {
                Ok(true) if replaced => {
                    stylesheets.remove(index);
                }
                Ok(true) => {
                    if uri.is_none() {
                        *uri = Some(self.stylesheet_uri());
                    }
                    match uri.clone().flatten() {
                        Some(fresh) => {
                            stylesheets[index] = fresh;
                            replaced = true;
                        }
                        None => {
                            stylesheets.remove(index);
                        }
                    }
                }
                Ok(false) => {}
                Err(err) => self.report(APPLY_STYLESHEET, &err),
            }
        }
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StyleCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleCatalog")
            .field("app_id", &self.app_id)
            .field("theme", &self.theme_id())
            .field("themes", &self.theme_ids())
            .field("registered", &self.registry.len())
            .field("stylesheet_filename", &self.stylesheet_filename)
            .field("no_stylesheet", &self.no_stylesheet)
            .finish()
    }
}

/// The location of a user colour file for `theme_id`.
pub fn colour_file_location(directory: &Path, theme_id: &str, filename_prefix: &str) -> PathBuf {
    directory
        .join(THEMES_DIRECTORY)
        .join(theme_id)
        .join(format!("{filename_prefix}{COLOUR_FILE_SUFFIX}"))
}

fn resolve_colour(theme: &Theme, key: &str) -> Colour {
    theme.colour(key).unwrap_or_else(|| {
        log::warn!("Colour key: {key}: There is no colour for the property.");
        Colour::PLACEHOLDER
    })
}
