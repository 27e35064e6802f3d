//! Canned rule sets for borders and focus indicators.

use crate::colour::Colour;
use crate::properties::StyleProperty;
use crate::rule_set::RuleSet;
use crate::value::{StyleValue, VALUE_SEPARATOR};

const SOLID: &str = "solid";
const DOTTED: &str = "dotted";

/// Two one-pixel solid borders, the outer at inset 0 and the inner at inset 1.
///
/// Each colour may be a literal colour or a colour key.
pub fn double_solid_border(
    selector: &str,
    outer: impl Into<StyleValue>,
    inner: impl Into<StyleValue>,
) -> RuleSet {
    RuleSet::builder()
        .selector(selector)
        .property(
            StyleProperty::BorderColour,
            StyleValue::join([outer.into(), inner.into()], VALUE_SEPARATOR),
        )
        .border_insets(&[0, 1])
        .build()
}

/// A white solid border under a black dotted border.
pub fn focus_border(selector: &str) -> RuleSet {
    RuleSet::builder()
        .selector(selector)
        .property(
            StyleProperty::BorderColour,
            StyleValue::join(
                [StyleValue::colour(Colour::WHITE), StyleValue::colour(Colour::BLACK)],
                VALUE_SEPARATOR,
            ),
        )
        .property(StyleProperty::BorderStyle, styles(&[SOLID, DOTTED]))
        .border_insets(&[0, 0])
        .build()
}

/// A focus border with a third solid border in the colour `colour_key`
/// drawn inside it.
pub fn outer_focus_border(selector: &str, colour_key: &str) -> RuleSet {
    RuleSet::builder()
        .selector(selector)
        .property(
            StyleProperty::BorderColour,
            StyleValue::join(
                [
                    StyleValue::colour(Colour::WHITE),
                    StyleValue::colour(Colour::BLACK),
                    StyleValue::key(colour_key),
                ],
                VALUE_SEPARATOR,
            ),
        )
        .property(StyleProperty::BorderStyle, styles(&[SOLID, DOTTED, SOLID]))
        .border_insets(&[0, 0, 1])
        .build()
}

/// A solid border in the colour `colour_key` with a focus border inside it.
pub fn inner_focus_border(selector: &str, colour_key: &str) -> RuleSet {
    RuleSet::builder()
        .selector(selector)
        .property(
            StyleProperty::BorderColour,
            StyleValue::join(
                [
                    StyleValue::key(colour_key),
                    StyleValue::colour(Colour::WHITE),
                    StyleValue::colour(Colour::BLACK),
                ],
                VALUE_SEPARATOR,
            ),
        )
        .property(StyleProperty::BorderStyle, styles(&[SOLID, SOLID, DOTTED]))
        .border_insets(&[0, 1, 1])
        .build()
}

fn styles(styles: &[&str]) -> StyleValue {
    StyleValue::text(styles.join(VALUE_SEPARATOR))
}
