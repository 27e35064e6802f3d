use crate::theme::Theme;

/// The id of the light theme.
pub const ID: &str = "light";

/// Key prefix of the colours shared by the base stylesheets.
pub const BASE_KEY_PREFIX: &str = "Base.";

const BASE_STYLESHEET: &str = include_str!("../../resources/themes/light/base.css");
const COLOURS: &str = include_str!("../../resources/themes/light/colours.properties");

impl Theme {
    /// Create the light theme, the default theme.
    pub fn light() -> Self {
        builtin(ID, "Light", BASE_STYLESHEET, COLOURS)
    }
}

/// Assemble a built-in theme from its embedded resources.
pub(crate) fn builtin(id: &str, name: &str, base_stylesheet: &str, colours: &str) -> Theme {
    let mut theme = Theme::new(id, name).with_base_stylesheet(base_stylesheet);
    let source = format!("themes/{id}/colours.properties");
    if let Err(err) = theme.load_default_colours(colours, &source, BASE_KEY_PREFIX) {
        log::error!("Failed to load built-in colours of theme '{id}': {err}");
    }
    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;

    #[test]
    fn test_light_theme_resources() {
        let theme = Theme::light();
        assert_eq!(theme.id(), "light");
        assert_eq!(theme.name(), "Light");
        assert_eq!(theme.colour("Base.text"), Some(Colour::grey(0)));
        assert!(!theme.base_stylesheet().contains("/*"));
        for key in theme.base_template().colour_keys() {
            assert!(theme.has_colour(key), "missing colour for {key}");
        }
    }
}
