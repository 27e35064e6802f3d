use crate::theme::light::builtin;
use crate::theme::Theme;

/// The id of the dark theme.
pub const ID: &str = "dark";

const BASE_STYLESHEET: &str = include_str!("../../resources/themes/dark/base.css");
const COLOURS: &str = include_str!("../../resources/themes/dark/colours.properties");

impl Theme {
    /// Create the dark theme.
    pub fn dark() -> Self {
        builtin(ID, "Dark", BASE_STYLESHEET, COLOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_covers_light_keys() {
        let dark = Theme::dark();
        let light = Theme::light();
        assert_eq!(dark.id(), "dark");
        for key in light.default_colours().keys() {
            assert!(dark.has_default_colour(key), "dark theme lacks {key}");
        }
        assert_ne!(dark.colour("Base.background"), light.colour("Base.background"));
    }
}
