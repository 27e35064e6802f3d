//! # Colours
//!
//! [`Colour`] is an sRGB colour with integer components and a floating-point
//! opacity, as stored in colour resources and written into stylesheets.
//!
//! ## Textual Forms
//!
//! Colour resources use one to four comma separated components, with
//! optional whitespace around each component:
//!
//! | components | meaning |
//! |------------|---------|
//! | `grey` | red, green and blue all equal to `grey`, opaque |
//! | `grey, opacity` | as above with an opacity |
//! | `red, green, blue` | opaque colour |
//! | `red, green, blue, opacity` | colour with an opacity |
//!
//! Integer components lie in `0..=255`, the opacity in `0.0..=1.0`.
//!
//! ```rust
//! use stylecat_theme::colour::Colour;
//!
//! let colour: Colour = "255, 0, 0, 0.5".parse().unwrap();
//! assert_eq!(colour.to_css(), "rgba(255, 0, 0, 0.5)");
//! assert_eq!(colour.to_rgb_string(), "255, 0, 0, 0.5");
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ColourParseError;

/// An sRGB colour with an opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    red: u8,
    green: u8,
    blue: u8,
    opacity: f64,
}

impl Colour {
    /// The colour substituted for colour keys that cannot be resolved.
    pub const PLACEHOLDER: Colour = Colour::grey_with_opacity(128, 0.5);

    /// Opaque black.
    pub const BLACK: Colour = Colour::rgb(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Colour = Colour::rgb(255, 255, 255);

    /// Transparent black.
    pub const TRANSPARENT: Colour = Colour::grey_with_opacity(0, 0.0);

    /// Create an opaque colour.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            opacity: 1.0,
        }
    }

    /// Create a colour with an opacity. The opacity is clamped to `0.0..=1.0`.
    pub fn rgba(red: u8, green: u8, blue: u8, opacity: f64) -> Self {
        Self {
            red,
            green,
            blue,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque grey.
    pub const fn grey(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    const fn grey_with_opacity(value: u8, opacity: f64) -> Self {
        Self {
            red: value,
            green: value,
            blue: value,
            opacity,
        }
    }

    /// The red component.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// The green component.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// The blue component.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// The opacity in `0.0..=1.0`.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Whether the colour is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.opacity >= 1.0
    }

    /// Return this colour with a different opacity.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, opacity)
    }

    /// Format as a CSS colour: `rgb(r, g, b)` or `rgba(r, g, b, opacity)`.
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            format!("rgb({}, {}, {})", self.red, self.green, self.blue)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.red,
                self.green,
                self.blue,
                format_opacity(self.opacity)
            )
        }
    }

    /// Format as a colour resource value: `r, g, b` or `r, g, b, opacity`.
    pub fn to_rgb_string(&self) -> String {
        if self.is_opaque() {
            format!("{}, {}, {}", self.red, self.green, self.blue)
        } else {
            format!(
                "{}, {}, {}, {}",
                self.red,
                self.green,
                self.blue,
                format_opacity(self.opacity)
            )
        }
    }

    /// Parse a colour resource value.
    pub fn parse_rgb(text: &str) -> Result<Self, ColourParseError> {
        let parts: Vec<&str> = text.trim().split(',').map(str::trim).collect();
        let count = parts.len();
        if count > 4 {
            return Err(ColourParseError::ComponentCount { count });
        }

        let mut rgb = [0u8; 3];
        let mut value = 0u8;
        for (index, slot) in rgb.iter_mut().enumerate() {
            if index == 0 || count > 2 {
                value = parse_component(parts[index])?;
            }
            *slot = value;
        }

        let opacity = if count == 2 || count == 4 {
            parse_opacity(parts[count - 1])?
        } else {
            1.0
        };

        Ok(Self {
            red: rgb[0],
            green: rgb[1],
            blue: rgb[2],
            opacity,
        })
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::PLACEHOLDER
    }
}

impl FromStr for Colour {
    type Err = ColourParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_rgb(s)
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn parse_component(text: &str) -> Result<u8, ColourParseError> {
    let value: i64 = text
        .parse()
        .map_err(|_| ColourParseError::InvalidComponent {
            text: text.to_string(),
        })?;
    u8::try_from(value).map_err(|_| ColourParseError::ComponentOutOfRange { value })
}

fn parse_opacity(text: &str) -> Result<f64, ColourParseError> {
    match text.parse::<f64>() {
        Ok(opacity) if (0.0..=1.0).contains(&opacity) => Ok(opacity),
        _ => Err(ColourParseError::InvalidOpacity {
            text: text.to_string(),
        }),
    }
}

/// Format an opacity with at least one and at most three decimals.
pub(crate) fn format_opacity(opacity: f64) -> String {
    let mut text = format!("{opacity:.3}");
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_component_forms() {
        assert_eq!(Colour::parse_rgb("64").unwrap(), Colour::grey(64));
        assert_eq!(
            Colour::parse_rgb(" 64 , 0.25 ").unwrap(),
            Colour::rgba(64, 64, 64, 0.25)
        );
        assert_eq!(Colour::parse_rgb("255,0,10").unwrap(), Colour::rgb(255, 0, 10));
        assert_eq!(
            Colour::parse_rgb("1, 2, 3, 0").unwrap(),
            Colour::rgba(1, 2, 3, 0.0)
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            Colour::parse_rgb("1, 2, 3, 0.5, 9"),
            Err(ColourParseError::ComponentCount { count: 5 })
        );
        assert_eq!(
            Colour::parse_rgb("256"),
            Err(ColourParseError::ComponentOutOfRange { value: 256 })
        );
        assert_eq!(
            Colour::parse_rgb("-1, 0, 0"),
            Err(ColourParseError::ComponentOutOfRange { value: -1 })
        );
        assert!(matches!(
            Colour::parse_rgb("red"),
            Err(ColourParseError::InvalidComponent { .. })
        ));
        assert!(matches!(
            Colour::parse_rgb("10, 1.5"),
            Err(ColourParseError::InvalidOpacity { .. })
        ));
        assert!(matches!(
            Colour::parse_rgb(""),
            Err(ColourParseError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn test_text_forms_round_trip() {
        for text in ["0, 0, 0", "12, 34, 56, 0.5", "200, 200, 200, 0.125"] {
            let colour = Colour::parse_rgb(text).unwrap();
            assert_eq!(colour.to_rgb_string(), text);
            assert_eq!(Colour::parse_rgb(&colour.to_rgb_string()).unwrap(), colour);
        }
    }

    #[test]
    fn test_css_output() {
        assert_eq!(Colour::rgb(255, 0, 0).to_css(), "rgb(255, 0, 0)");
        assert_eq!(Colour::PLACEHOLDER.to_css(), "rgba(128, 128, 128, 0.5)");
        assert_eq!(Colour::TRANSPARENT.to_css(), "rgba(0, 0, 0, 0.0)");
        assert_eq!(Colour::rgba(1, 2, 3, 0.33333).to_css(), "rgba(1, 2, 3, 0.333)");
    }
}
