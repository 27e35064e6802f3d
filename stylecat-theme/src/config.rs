//! # Style Configuration
//!
//! Settings that control theme selection and stylesheet output, loaded from
//! environment variables, a TOML file or set programmatically.
//!
//! ## Overview
//!
//! - **[StyleConfig]**: the settings, applied to a catalog with
//!   [`StyleCatalog::from_config`] or [`StyleConfig::apply`]
//! - **Environment Variable Support**: `STYLECAT_*` variables override file
//!   settings
//! - **Configuration File Support**: a `[style]` table in a TOML file
//!
//! ## Environment Variables
//!
//! - `STYLECAT_CONFIG`: path to a TOML configuration file, loaded first
//! - `STYLECAT_THEME`: the theme to select
//! - `STYLECAT_NO_STYLESHEET`: `1`, `true` or `yes` disables stylesheet
//!   application
//! - `STYLECAT_STYLESHEET_FILENAME`: stylesheet filename pattern, with
//!   `{index}` replaced by a running index
//! - `STYLECAT_APP_ID`: prefix of the temp directory
//! - `STYLECAT_COLOUR_DIR`: directory holding user colour files
//!
//! ## Configuration File Format
//!
//! ```toml
//! [style]
//! theme = "dark"
//! stylesheet_filename = "app-{index}.css"
//! app_id = "MyApp"
//!
//! [style.colours.dark]
//! "app.Editor.background" = "30, 30, 34"
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use stylecat_theme::catalog::StyleCatalog;
//! use stylecat_theme::config::StyleConfig;
//!
//! let config = StyleConfig::new().with_theme("dark");
//! let catalog = StyleCatalog::from_config(&config);
//! assert_eq!(catalog.theme_id(), Some("dark"));
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::StyleCatalog;
use crate::colour::Colour;
use crate::error::{ThemeError, ThemeResult};

/// Environment variable naming a configuration file.
pub const ENV_CONFIG: &str = "STYLECAT_CONFIG";
/// Environment variable naming the theme to select.
pub const ENV_THEME: &str = "STYLECAT_THEME";
/// Environment variable disabling stylesheet application.
pub const ENV_NO_STYLESHEET: &str = "STYLECAT_NO_STYLESHEET";
/// Environment variable holding the stylesheet filename pattern.
pub const ENV_STYLESHEET_FILENAME: &str = "STYLECAT_STYLESHEET_FILENAME";
/// Environment variable holding the application id.
pub const ENV_APP_ID: &str = "STYLECAT_APP_ID";
/// Environment variable naming the user colour directory.
pub const ENV_COLOUR_DIR: &str = "STYLECAT_COLOUR_DIR";

/// Theme and stylesheet settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// The theme to select. `None` keeps the default theme.
    pub theme: Option<String>,
    /// Disable stylesheet application to hosts.
    pub no_stylesheet: bool,
    /// Stylesheet filename pattern. `None` produces `data:` URIs.
    pub stylesheet_filename: Option<String>,
    /// Prefix of the temp directory.
    pub app_id: Option<String>,
    /// Directory holding user colour files, laid out as
    /// `themes/<theme-id>/<prefix>-colours.properties`.
    pub colour_directory: Option<PathBuf>,
    /// Colour overrides per theme id.
    pub colours: IndexMap<String, IndexMap<String, Colour>>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    style: StyleConfig,
}

impl StyleConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from the process environment.
    ///
    /// A file named by `STYLECAT_CONFIG` is loaded first; the other
    /// variables override it. A file that fails to load is logged and
    /// ignored.
    pub fn from_env_or_default() -> Self {
        Self::from_env_vars(env::vars())
    }

    /// Create a configuration from the given environment variables.
    pub fn from_env_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let vars: IndexMap<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.as_ref().to_string(), value.into()))
            .collect();

        let mut config = match vars.get(ENV_CONFIG) {
            Some(path) => Self::from_file(path).unwrap_or_else(|err| {
                log::warn!("Ignoring configuration file: {err}");
                Self::new()
            }),
            None => Self::new(),
        };

        if let Some(theme) = vars.get(ENV_THEME) {
            config.theme = Some(theme.clone());
        }
        if let Some(value) = vars.get(ENV_NO_STYLESHEET) {
            config.no_stylesheet = parse_flag(value);
        }
        if let Some(filename) = vars.get(ENV_STYLESHEET_FILENAME) {
            config.stylesheet_filename = Some(filename.clone());
        }
        if let Some(app_id) = vars.get(ENV_APP_ID) {
            config.app_id = Some(app_id.clone());
        }
        if let Some(dir) = vars.get(ENV_COLOUR_DIR) {
            config.colour_directory = Some(PathBuf::from(dir));
        }

        config
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| ThemeError::read_failed(path, err))?;
        Self::parse(&content, Some(path.to_path_buf()))
    }

    /// Load a configuration from TOML text.
    ///
    /// ```rust
    /// use stylecat_theme::config::StyleConfig;
    ///
    /// let config = StyleConfig::from_toml("[style]\ntheme = \"dark\"\n").unwrap();
    /// assert_eq!(config.theme.as_deref(), Some("dark"));
    /// ```
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        Self::parse(content, None)
    }

    fn parse(content: &str, path: Option<PathBuf>) -> ThemeResult<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|err| ThemeError::config_parse(path, err.to_string()))?;
        Ok(file.style)
    }

    /// Serialize as TOML with a `[style]` table.
    pub fn to_toml(&self) -> ThemeResult<String> {
        #[derive(Serialize)]
        struct Out<'a> {
            style: &'a StyleConfig,
        }
        toml::to_string(&Out { style: self }).map_err(|err| ThemeError::config_parse(None, err.to_string()))
    }

    /// Set the theme to select.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Disable or enable stylesheet application.
    pub fn with_no_stylesheet(mut self, no_stylesheet: bool) -> Self {
        self.no_stylesheet = no_stylesheet;
        self
    }

    /// Set the stylesheet filename pattern.
    pub fn with_stylesheet_filename(mut self, filename: impl Into<String>) -> Self {
        self.stylesheet_filename = Some(filename.into());
        self
    }

    /// Set the temp directory prefix.
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Set the user colour directory.
    pub fn with_colour_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.colour_directory = Some(dir.into());
        self
    }

    /// Add a colour override for a theme.
    pub fn with_colour(mut self, theme_id: impl Into<String>, key: impl Into<String>, colour: Colour) -> Self {
        self.colours
            .entry(theme_id.into())
            .or_default()
            .insert(key.into(), colour);
        self
    }

    /// Apply the settings to `catalog`.
    ///
    /// Colour overrides for unknown themes are ignored. An unknown theme id
    /// falls back to the default theme.
    pub fn apply(&self, catalog: &mut StyleCatalog) {
        if let Some(app_id) = &self.app_id {
            catalog.set_app_id(app_id.clone());
        }
        catalog.set_stylesheet_filename(self.stylesheet_filename.clone());
        catalog.set_no_stylesheet(self.no_stylesheet);

        for (theme_id, colours) in &self.colours {
            match catalog.theme_mut(theme_id) {
                Some(theme) => theme.add_colours(colours.iter().map(|(key, colour)| (key.clone(), *colour))),
                None => log::debug!("Ignoring colours of unknown theme '{theme_id}'"),
            }
        }

        if let Some(theme) = &self.theme {
            catalog.select_theme_or_default(theme);
        }
    }
}

impl StyleCatalog {
    /// Create a catalog with the built-in themes and apply `config`.
    pub fn from_config(config: &StyleConfig) -> Self {
        let mut catalog = Self::new();
        config.apply(&mut catalog);
        catalog
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml() {
        let config = StyleConfig::from_toml(
            r#"
[style]
theme = "dark"
no_stylesheet = true
stylesheet_filename = "app-{index}.css"

[style.colours.dark]
"app.Editor.background" = "30, 30, 34"
"#,
        )
        .unwrap();

        assert_eq!(config.theme.as_deref(), Some("dark"));
        assert!(config.no_stylesheet);
        assert_eq!(config.stylesheet_filename.as_deref(), Some("app-{index}.css"));
        assert_eq!(
            config.colours["dark"]["app.Editor.background"],
            Colour::rgb(30, 30, 34)
        );
    }

    #[test]
    fn test_from_toml_without_style_table() {
        assert_eq!(StyleConfig::from_toml("").unwrap(), StyleConfig::default());
        assert!(matches!(
            StyleConfig::from_toml("[style]\ntheme = 3\n"),
            Err(ThemeError::ConfigParse { path: None, .. })
        ));
    }

    #[test]
    fn test_env_vars_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");
        fs::write(&path, "[style]\ntheme = \"dark\"\napp_id = \"FromFile\"\n").unwrap();

        let config = StyleConfig::from_env_vars([
            (ENV_CONFIG, path.to_string_lossy().into_owned()),
            (ENV_THEME, "light".to_string()),
            (ENV_NO_STYLESHEET, "Yes".to_string()),
            (ENV_COLOUR_DIR, "/etc/colours".to_string()),
        ]);
        assert_eq!(config.theme.as_deref(), Some("light"));
        assert_eq!(config.app_id.as_deref(), Some("FromFile"));
        assert!(config.no_stylesheet);
        assert_eq!(config.colour_directory, Some(PathBuf::from("/etc/colours")));
    }

    #[test]
    fn test_missing_config_file_is_ignored() {
        let config = StyleConfig::from_env_vars([
            (ENV_CONFIG, "/nonexistent/stylecat.toml"),
            (ENV_NO_STYLESHEET, "0"),
        ]);
        assert_eq!(config, StyleConfig::default());
    }

    #[test]
    fn test_apply_to_catalog() {
        let config = StyleConfig::new()
            .with_theme("dark")
            .with_app_id("ConfigTest")
            .with_stylesheet_filename("s-{index}.css")
            .with_colour("dark", "app.x", Colour::grey(9))
            .with_colour("sepia", "app.x", Colour::grey(1));
        let catalog = StyleCatalog::from_config(&config);

        assert_eq!(catalog.theme_id(), Some("dark"));
        assert_eq!(catalog.app_id(), Some("ConfigTest"));
        assert_eq!(catalog.stylesheet_filename(), Some("s-{index}.css"));
        assert_eq!(catalog.colour("app.x"), Some(Colour::grey(9)));
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let catalog = StyleCatalog::from_config(&StyleConfig::new().with_theme("sepia"));
        assert_eq!(catalog.theme_id(), Some("light"));
    }

    #[test]
    fn test_to_toml_reloads() {
        let config = StyleConfig::new()
            .with_theme("dark")
            .with_colour("dark", "k", Colour::rgba(1, 2, 3, 0.5));
        let text = config.to_toml().unwrap();
        assert_eq!(StyleConfig::from_toml(&text).unwrap(), config);
    }
}
