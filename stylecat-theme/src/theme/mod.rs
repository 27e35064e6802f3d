//! # Themes
//!
//! A [`Theme`] is a named set of colour choices plus a base stylesheet
//! template.
//!
//! ## Overview
//!
//! Each theme owns two colour tables:
//!
//! - **Default colours**: loaded from colour resources, by the theme itself
//!   and by every registered component.
//! - **Colours**: user overrides. A key present here shadows the default.
//!
//! The base stylesheet template is normalized when it is set (comments and
//! empty lines removed, blocks separated by a blank line) and may reference
//! colour keys with the `&key` form.
//!
//! ## Built-in Themes
//!
//! - [`Theme::light`]: the default theme
//! - [`Theme::dark`]
//!
//! ```rust
//! use stylecat_theme::colour::Colour;
//! use stylecat_theme::theme::Theme;
//!
//! let mut theme = Theme::light();
//! theme.add_colour("Pane.background", Colour::grey(250));
//! assert_eq!(theme.colour("Pane.background"), Some(Colour::grey(250)));
//! ```

use std::path::Path;

use indexmap::IndexMap;

use crate::colour::Colour;
use crate::colour_file::{self, ColourTable};
use crate::error::{ColourParseError, ThemeResult};
use crate::value::StyleValue;

/// The built-in dark theme.
pub mod dark;
/// The built-in light theme, the default.
pub mod light;

/// The id of the default theme.
pub const DEFAULT_THEME_ID: &str = light::ID;

/// Property key of the human readable theme name.
pub const NAME_PROPERTY: &str = "name";

/// A named set of colours and a base stylesheet template.
#[derive(Debug, Clone)]
pub struct Theme {
    id: String,
    name: String,
    properties: IndexMap<String, String>,
    base_stylesheet: String,
    base_template: StyleValue,
    default_colours: ColourTable,
    colours: ColourTable,
}

impl Theme {
    /// Create a theme with no colours and an empty base stylesheet.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let mut properties = IndexMap::new();
        properties.insert(NAME_PROPERTY.to_string(), name.clone());
        Self {
            id: id.into(),
            name,
            properties,
            base_stylesheet: String::new(),
            base_template: StyleValue::new(),
            default_colours: ColourTable::new(),
            colours: ColourTable::new(),
        }
    }

    /// The theme id, e.g. `light`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display name, e.g. `Light`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A free-form theme property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Set a free-form theme property.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    /// The normalized base stylesheet, with colour keys unresolved.
    pub fn base_stylesheet(&self) -> &str {
        &self.base_stylesheet
    }

    /// The base stylesheet as a typed value.
    pub fn base_template(&self) -> &StyleValue {
        &self.base_template
    }

    /// Replace the base stylesheet. The text is normalized first.
    pub fn set_base_stylesheet(&mut self, text: &str) {
        self.base_stylesheet = normalize_stylesheet(text);
        self.base_template = StyleValue::parse(&self.base_stylesheet);
    }

    /// Builder form of [`Theme::set_base_stylesheet`].
    pub fn with_base_stylesheet(mut self, text: &str) -> Self {
        self.set_base_stylesheet(text);
        self
    }

    /// Whether `key` has a default colour.
    pub fn has_default_colour(&self, key: &str) -> bool {
        self.default_colours.contains_key(key)
    }

    /// Whether `key` has an override or a default colour.
    pub fn has_colour(&self, key: &str) -> bool {
        self.colours.contains_key(key) || self.default_colours.contains_key(key)
    }

    /// The default colour of `key`, ignoring overrides.
    pub fn default_colour(&self, key: &str) -> Option<Colour> {
        self.default_colours.get(key).copied()
    }

    /// The colour of `key`: the override if there is one, else the default.
    pub fn colour(&self, key: &str) -> Option<Colour> {
        self.colours
            .get(key)
            .or_else(|| self.default_colours.get(key))
            .copied()
    }

    /// The default colour table.
    pub fn default_colours(&self) -> &ColourTable {
        &self.default_colours
    }

    /// The override colour table.
    pub fn colours(&self) -> &ColourTable {
        &self.colours
    }

    /// Set an override colour, returning the previous override.
    pub fn add_colour(&mut self, key: impl Into<String>, colour: Colour) -> Option<Colour> {
        self.colours.insert(key.into(), colour)
    }

    /// Set several override colours.
    pub fn add_colours<I, K>(&mut self, colours: I)
    where
        I: IntoIterator<Item = (K, Colour)>,
        K: Into<String>,
    {
        self.colours
            .extend(colours.into_iter().map(|(key, colour)| (key.into(), colour)));
    }

    /// Parse and set override colours given as colour resource values.
    ///
    /// Stops at the first invalid value and reports its index.
    pub fn add_colour_values<'a, I>(&mut self, values: I) -> Result<(), (usize, ColourParseError)>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (index, (key, value)) in values.into_iter().enumerate() {
            let colour = Colour::parse_rgb(value).map_err(|err| (index, err))?;
            self.colours.insert(key.to_string(), colour);
        }
        Ok(())
    }

    /// Remove an override colour, returning it.
    pub fn remove_colour(&mut self, key: &str) -> Option<Colour> {
        self.colours.shift_remove(key)
    }

    /// Remove all override colours.
    pub fn clear_colours(&mut self) {
        self.colours.clear();
    }

    /// Merge colours into the default table.
    pub fn add_default_colours(&mut self, colours: ColourTable) {
        self.default_colours.extend(colours);
    }

    /// Parse colour resource text into the default table, prefixing keys.
    pub fn load_default_colours(&mut self, text: &str, source_name: &str, key_prefix: &str) -> ThemeResult<()> {
        let colours = colour_file::parse_colours(text, source_name)?;
        self.add_default_colours(colour_file::prefix_keys(colours, key_prefix));
        Ok(())
    }

    /// Read a colour file into the override table, prefixing keys.
    pub fn load_colours(&mut self, path: impl AsRef<Path>, key_prefix: &str) -> ThemeResult<()> {
        let colours = colour_file::read_colours(path)?;
        self.colours.extend(colour_file::prefix_keys(colours, key_prefix));
        Ok(())
    }

    /// Write the override colours to a colour file.
    pub fn write_colours(&self, path: impl AsRef<Path>, header_comment: Option<&str>) -> ThemeResult<()> {
        colour_file::write_colours(
            path,
            self.colours.iter().map(|(key, colour)| (key.as_str(), colour)),
            header_comment,
        )
    }
}

/// Normalize stylesheet text.
///
/// Block comments are removed, trailing spaces and tabs are stripped, empty
/// lines are removed, a blank line is inserted after each line that ends a
/// block and the text ends with exactly one newline.
pub fn normalize_stylesheet(text: &str) -> String {
    let text = strip_block_comments(&text.replace("\r\n", "\n"));
    let mut out = String::with_capacity(text.len());

    for line in text.split('\n') {
        let line = line.trim_end_matches([' ', '\t']);
        if line.is_empty() {
            continue;
        }
        out.push_str(line);
        out.push('\n');
        if line.ends_with('}') {
            out.push('\n');
        }
    }

    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

fn strip_block_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => {
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_stylesheet() {
        let text = "/* header\n spans lines */\n.a {  \n\t-fx-x: 1;\t\n}\n\n\n\n.b { -fx-y: &k; } /* tail */\n\n\n";
        assert_eq!(
            normalize_stylesheet(text),
            ".a {\n\t-fx-x: 1;\n}\n\n.b { -fx-y: &k; }\n"
        );
    }

    #[test]
    fn test_normalize_unterminated_comment() {
        assert_eq!(normalize_stylesheet(".a {}\n/* open"), ".a {}\n");
        assert_eq!(normalize_stylesheet(""), "");
    }

    #[test]
    fn test_overrides_shadow_defaults() {
        let mut theme = Theme::new("t", "Test");
        theme
            .load_default_colours("bg = 255\nfg = 0\n", "defaults", "Pane.")
            .unwrap();
        assert_eq!(theme.colour("Pane.bg"), Some(Colour::grey(255)));

        assert_eq!(theme.add_colour("Pane.bg", Colour::grey(200)), None);
        assert_eq!(theme.colour("Pane.bg"), Some(Colour::grey(200)));
        assert_eq!(theme.default_colour("Pane.bg"), Some(Colour::grey(255)));

        theme
            .load_default_colours("bg = 10\n", "defaults", "Pane.")
            .unwrap();
        assert_eq!(theme.colour("Pane.bg"), Some(Colour::grey(200)));

        assert_eq!(theme.remove_colour("Pane.bg"), Some(Colour::grey(200)));
        assert_eq!(theme.colour("Pane.bg"), Some(Colour::grey(10)));
        assert!(theme.has_colour("Pane.fg"));
        assert!(!theme.has_colour("Pane.missing"));
    }

    #[test]
    fn test_add_colour_values_reports_index() {
        let mut theme = Theme::new("t", "Test");
        let err = theme
            .add_colour_values([("a", "1, 2, 3"), ("b", "nope")])
            .unwrap_err();
        assert_eq!(err.0, 1);
        assert_eq!(theme.colour("a"), Some(Colour::rgb(1, 2, 3)));

        theme.clear_colours();
        assert!(theme.colours().is_empty());
    }

    #[test]
    fn test_override_colours_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user-colours.properties");
        let mut theme = Theme::new("t", "Test");
        theme.add_colour("k", Colour::rgba(1, 2, 3, 0.75));
        theme.write_colours(&path, Some("User colours")).unwrap();

        let mut other = Theme::new("t", "Test");
        other.load_colours(&path, "").unwrap();
        assert_eq!(other.colour("k"), Some(Colour::rgba(1, 2, 3, 0.75)));
    }
}
