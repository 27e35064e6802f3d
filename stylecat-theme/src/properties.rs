use std::fmt::{Display, Formatter};

/// Type-safe style attribute names.
///
/// Variants map to the toolkit attribute names with their `-fx-` prefix;
/// [`StyleProperty::Custom`] carries any other attribute name verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    // Backgrounds
    /// `-fx-background-color`
    BackgroundColour,
    /// `-fx-background-insets`
    BackgroundInsets,
    /// `-fx-background-radius`
    BackgroundRadius,
    /// `-fx-background`
    Background,
    /// `-fx-body-color`
    BodyColour,
    /// `-fx-control-inner-background`
    ControlInnerBackground,
    /// `-fx-base`
    Base,

    // Borders
    /// `-fx-border-color`
    BorderColour,
    /// `-fx-border-insets`
    BorderInsets,
    /// `-fx-border-radius`
    BorderRadius,
    /// `-fx-border-style`
    BorderStyle,
    /// `-fx-border-width`
    BorderWidth,
    /// `-fx-inner-border`
    InnerBorder,
    /// `-fx-outer-border`
    OuterBorder,

    // Fonts
    /// `-fx-font-family`
    FontFamily,
    /// `-fx-font-size`
    FontSize,
    /// `-fx-font-smoothing-type`
    FontSmoothingType,
    /// `-fx-font-style`
    FontStyle,
    /// `-fx-font-weight`
    FontWeight,

    // Text and shapes
    /// `-fx-fill`
    Fill,
    /// `-fx-stroke`
    Stroke,
    /// `-fx-text-fill`
    TextFill,
    /// `-fx-text-base-color`
    TextBaseColour,
    /// `-fx-highlight-fill`
    HighlightFill,
    /// `-fx-highlight-text-fill`
    HighlightTextFill,
    /// `-fx-prompt-text-fill`
    PromptTextFill,
    /// `-fx-underline`
    Underline,

    // Layout and misc
    /// `-fx-opacity`
    Opacity,
    /// `-fx-padding`
    Padding,
    /// `-fx-label-padding`
    LabelPadding,
    /// `-fx-spacing`
    Spacing,
    /// `-fx-tab-size`
    TabSize,
    /// `-fx-open-tab-animation`
    OpenTabAnimation,
    /// `-fx-close-tab-animation`
    CloseTabAnimation,

    // Custom attributes (for extensibility)
    /// Any other attribute name, used verbatim.
    Custom(&'static str),
}

impl StyleProperty {
    /// The prefix of toolkit attribute names.
    pub const NAME_PREFIX: &'static str = "-fx-";

    /// The full attribute name as written into a stylesheet.
    pub fn name(&self) -> String {
        match self {
            StyleProperty::Custom(name) => (*name).to_string(),
            _ => format!("{}{}", Self::NAME_PREFIX, self.key()),
        }
    }

    /// The attribute name without its prefix.
    pub fn key(&self) -> &'static str {
        match self {
            StyleProperty::BackgroundColour => "background-color",
            StyleProperty::BackgroundInsets => "background-insets",
            StyleProperty::BackgroundRadius => "background-radius",
            StyleProperty::Background => "background",
            StyleProperty::BodyColour => "body-color",
            StyleProperty::ControlInnerBackground => "control-inner-background",
            StyleProperty::Base => "base",
            StyleProperty::BorderColour => "border-color",
            StyleProperty::BorderInsets => "border-insets",
            StyleProperty::BorderRadius => "border-radius",
            StyleProperty::BorderStyle => "border-style",
            StyleProperty::BorderWidth => "border-width",
            StyleProperty::InnerBorder => "inner-border",
            StyleProperty::OuterBorder => "outer-border",
            StyleProperty::FontFamily => "font-family",
            StyleProperty::FontSize => "font-size",
            StyleProperty::FontSmoothingType => "font-smoothing-type",
            StyleProperty::FontStyle => "font-style",
            StyleProperty::FontWeight => "font-weight",
            StyleProperty::Fill => "fill",
            StyleProperty::Stroke => "stroke",
            StyleProperty::TextFill => "text-fill",
            StyleProperty::TextBaseColour => "text-base-color",
            StyleProperty::HighlightFill => "highlight-fill",
            StyleProperty::HighlightTextFill => "highlight-text-fill",
            StyleProperty::PromptTextFill => "prompt-text-fill",
            StyleProperty::Underline => "underline",
            StyleProperty::Opacity => "opacity",
            StyleProperty::Padding => "padding",
            StyleProperty::LabelPadding => "label-padding",
            StyleProperty::Spacing => "spacing",
            StyleProperty::TabSize => "tab-size",
            StyleProperty::OpenTabAnimation => "open-tab-animation",
            StyleProperty::CloseTabAnimation => "close-tab-animation",
            StyleProperty::Custom(name) => name,
        }
    }
}

impl Display for StyleProperty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_names() {
        assert_eq!(StyleProperty::BackgroundColour.name(), "-fx-background-color");
        assert_eq!(StyleProperty::TextFill.to_string(), "-fx-text-fill");
        assert_eq!(StyleProperty::Custom("color").name(), "color");
        assert_eq!(StyleProperty::BorderWidth.key(), "border-width");
    }
}
