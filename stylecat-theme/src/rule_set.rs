//! # Rule Sets
//!
//! A [`RuleSet`] is a selector list plus an ordered map of attribute names to
//! [`StyleValue`]s. Resolving it against a colour lookup yields a
//! [`ResolvedRuleSet`] whose values are plain CSS text; resolved rule sets
//! with identical selector sets are combined by [`merge`].
//!
//! ## Serialization
//!
//! ```text
//! .titled-pane > .title,
//! .titled-pane:focused > .title {
//!     -fx-background-color: rgb(240, 240, 240);
//! }
//! ```

use std::collections::BTreeSet;
use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::colour::Colour;
use crate::properties::StyleProperty;
use crate::value::{StyleValue, VALUE_SEPARATOR};

const INDENT: &str = "    ";

/// A side of a rectangular border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The top edge.
    Top,
    /// The right edge.
    Right,
    /// The bottom edge.
    Bottom,
    /// The left edge.
    Left,
}

/// A selector list with attribute values that may reference colour keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleSet {
    selectors: Vec<String>,
    declarations: IndexMap<String, StyleValue>,
}

impl RuleSet {
    /// Start building a rule set.
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Create a rule set with one selector and one attribute.
    pub fn of(selector: impl Into<String>, property: StyleProperty, value: impl Into<StyleValue>) -> Self {
        Self::builder().selector(selector).property(property, value).build()
    }

    /// The selectors, in declaration order.
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// The attribute declarations, in declaration order.
    pub fn declarations(&self) -> &IndexMap<String, StyleValue> {
        &self.declarations
    }

    /// The value of an attribute.
    pub fn value(&self, name: &str) -> Option<&StyleValue> {
        self.declarations.get(name)
    }

    /// Set an attribute. An existing attribute keeps its position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<StyleValue>) {
        self.declarations.insert(name.into(), value.into());
    }

    /// Resolve every colour key with `lookup`.
    pub fn resolve<F>(&self, mut lookup: F) -> ResolvedRuleSet
    where
        F: FnMut(&str) -> Colour,
    {
        ResolvedRuleSet {
            selectors: self.selectors.clone(),
            declarations: self
                .declarations
                .iter()
                .map(|(name, value)| (name.clone(), value.resolve(&mut lookup)))
                .collect(),
        }
    }
}

/// Builder for [`RuleSet`].
#[derive(Debug, Clone, Default)]
pub struct RuleSetBuilder {
    rule_set: RuleSet,
}

impl RuleSetBuilder {
    /// Add a selector.
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.rule_set.selectors.push(selector.into());
        self
    }

    /// Add several selectors.
    pub fn selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule_set.selectors.extend(selectors.into_iter().map(Into::into));
        self
    }

    /// Set a toolkit attribute.
    pub fn property(self, property: StyleProperty, value: impl Into<StyleValue>) -> Self {
        self.attribute(property.name(), value)
    }

    /// Set an attribute by name.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.rule_set.set(name, value);
        self
    }

    /// Set an attribute to a colour key.
    pub fn colour_key(self, property: StyleProperty, key: impl Into<String>) -> Self {
        self.property(property, StyleValue::key(key))
    }

    /// Remove all borders.
    pub fn empty_border(self) -> Self {
        self.property(StyleProperty::BorderWidth, StyleValue::text("0"))
    }

    /// One pixel borders on `sides`, zero width elsewhere.
    pub fn borders(self, sides: &[Side]) -> Self {
        let mut widths = [0u32; 4];
        for side in sides {
            let index = match side {
                Side::Top => 0,
                Side::Right => 1,
                Side::Bottom => 2,
                Side::Left => 3,
            };
            widths[index] = 1;
        }
        self.border_widths(&widths)
    }

    /// Border widths in top, right, bottom, left order.
    pub fn border_widths(self, widths: &[u32]) -> Self {
        self.property(StyleProperty::BorderWidth, StyleValue::text(join_numbers(widths, " ")))
    }

    /// Border insets, one per border layer.
    pub fn border_insets(self, insets: &[u32]) -> Self {
        self.property(
            StyleProperty::BorderInsets,
            StyleValue::text(join_numbers(insets, VALUE_SEPARATOR)),
        )
    }

    /// Font family; names that contain spaces are quoted.
    pub fn font_family(self, name: &str) -> Self {
        let value = if name.contains(' ') {
            format!("\"{name}\"")
        } else {
            name.to_string()
        };
        self.property(StyleProperty::FontFamily, StyleValue::text(value))
    }

    /// Font size, e.g. `1.1em` or `12px`.
    pub fn font_size(self, size: &str) -> Self {
        self.property(StyleProperty::FontSize, StyleValue::text(size))
    }

    /// Numeric font weight, e.g. 400 or 700.
    pub fn font_weight(self, weight: u16) -> Self {
        self.property(StyleProperty::FontWeight, StyleValue::text(weight.to_string()))
    }

    /// Bold font.
    pub fn bold_font(self) -> Self {
        self.property(StyleProperty::FontWeight, StyleValue::text("bold"))
    }

    /// Italic font.
    pub fn italic_font(self) -> Self {
        self.property(StyleProperty::FontStyle, StyleValue::text("italic"))
    }

    /// Grey-scale font antialiasing.
    pub fn grey_font_smoothing(self) -> Self {
        self.property(StyleProperty::FontSmoothingType, StyleValue::text("gray"))
    }

    /// Underlined text.
    pub fn underlined_text(self) -> Self {
        self.property(StyleProperty::Underline, StyleValue::text("true"))
    }

    /// Finish the rule set.
    pub fn build(self) -> RuleSet {
        self.rule_set
    }
}

fn join_numbers(values: &[u32], separator: &str) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// A rule set whose values are CSS text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedRuleSet {
    selectors: Vec<String>,
    declarations: IndexMap<String, String>,
}

impl ResolvedRuleSet {
    /// Create a resolved rule set.
    pub fn new<I, S>(selectors: I, declarations: IndexMap<String, String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
            declarations,
        }
    }

    /// The selectors, in declaration order.
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// The attribute declarations, in declaration order.
    pub fn declarations(&self) -> &IndexMap<String, String> {
        &self.declarations
    }

    /// The selectors as a set, ignoring order and repetition.
    pub fn selector_set(&self) -> BTreeSet<&str> {
        self.selectors.iter().map(String::as_str).collect()
    }

    /// Serialize as a CSS block terminated by a newline.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.selectors.join(",\n"));
        out.push_str(" {\n");
        for (name, value) in &self.declarations {
            let _ = writeln!(out, "{INDENT}{name}: {value};");
        }
        out.push_str("}\n");
        out
    }
}

/// Combine rule sets that have identical selector sets.
///
/// The first rule set of each selector set keeps its position; attributes of
/// later ones are added to it, and an attribute that is already present is
/// overwritten in place.
pub fn merge(rule_sets: Vec<ResolvedRuleSet>) -> Vec<ResolvedRuleSet> {
    let mut positions: IndexMap<BTreeSet<String>, usize> = IndexMap::new();
    let mut merged: Vec<ResolvedRuleSet> = Vec::with_capacity(rule_sets.len());

    for rule_set in rule_sets {
        let key: BTreeSet<String> = rule_set.selectors.iter().cloned().collect();
        match positions.get(&key) {
            Some(&index) => merged[index].declarations.extend(rule_set.declarations),
            None => {
                positions.insert(key, merged.len());
                merged.push(rule_set);
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(selectors: &[&str], declarations: &[(&str, &str)]) -> ResolvedRuleSet {
        ResolvedRuleSet::new(
            selectors.iter().copied(),
            declarations
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_builder_helpers() {
        let rule_set = RuleSet::builder()
            .selector(".pane")
            .borders(&[Side::Top, Side::Left])
            .border_insets(&[0, 1])
            .font_family("DejaVu Sans")
            .bold_font()
            .build();

        assert_eq!(rule_set.value("-fx-border-width").unwrap().to_string(), "1 0 0 1");
        assert_eq!(rule_set.value("-fx-border-insets").unwrap().to_string(), "0, 1");
        assert_eq!(rule_set.value("-fx-font-family").unwrap().to_string(), "\"DejaVu Sans\"");
        assert_eq!(rule_set.value("-fx-font-weight").unwrap().to_string(), "bold");
    }

    #[test]
    fn test_resolve_and_serialize() {
        let rule_set = RuleSet::builder()
            .selector(".foo")
            .attribute("color", "&red")
            .build();
        let css = rule_set.resolve(|_| Colour::rgb(255, 0, 0)).to_css();
        assert_eq!(css, ".foo {\n    color: rgb(255, 0, 0);\n}\n");
        assert!(!css.contains("&red"));
    }

    #[test]
    fn test_serialize_multiple_selectors() {
        let rule_set = resolved(&[".a", ".b"], &[("x", "1"), ("y", "2")]);
        assert_eq!(rule_set.to_css(), ".a,\n.b {\n    x: 1;\n    y: 2;\n}\n");
    }

    #[test]
    fn test_merge_identical_selector_sets() {
        let merged = merge(vec![
            resolved(&[".a", ".b"], &[("x", "1"), ("y", "2")]),
            resolved(&[".c"], &[("z", "3")]),
            resolved(&[".b", ".a", ".a"], &[("x", "9"), ("w", "4")]),
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].selectors(), [".a", ".b"]);
        let declarations: Vec<(&str, &str)> = merged[0]
            .declarations()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(declarations, [("x", "9"), ("y", "2"), ("w", "4")]);
        assert_eq!(merged[1].selectors(), [".c"]);
    }
}
