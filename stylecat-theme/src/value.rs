//! # Style Values
//!
//! A [`StyleValue`] is an attribute value made of literal text, literal
//! colours and symbolic colour keys. Colour keys are resolved against a
//! theme when a stylesheet is synthesized, so a value never has to be
//! scanned for reserved characters at that point.
//!
//! The legacy textual form marks a colour key with a leading `&` followed by
//! letters, digits or `.`:
//!
//! ```rust
//! use stylecat_theme::value::{StyleValue, ValuePart};
//!
//! let value = StyleValue::parse("&Pane.border, transparent");
//! assert_eq!(value.parts()[0], ValuePart::ColourKey("Pane.border".into()));
//! assert_eq!(value.to_string(), "&Pane.border, transparent");
//! ```

use std::fmt::{Display, Formatter};

use crate::colour::Colour;

/// The character that introduces a colour key in the textual form.
pub const COLOUR_KEY_PREFIX: char = '&';

/// The separator of multi-valued attributes such as border colours.
pub const VALUE_SEPARATOR: &str = ", ";

/// One part of a [`StyleValue`].
#[derive(Debug, Clone, PartialEq)]
pub enum ValuePart {
    /// Literal text, copied verbatim.
    Text(String),
    /// A literal colour, written in CSS form.
    Colour(Colour),
    /// A colour key, resolved against the active theme.
    ColourKey(String),
}

/// An attribute value with typed colour references.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleValue {
    parts: Vec<ValuePart>,
}

impl StyleValue {
    /// Create an empty value.
    pub fn new() -> Self {
        Self::default()
    }

    /// A value consisting of literal text only. No colour keys are recognized.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().with_text(text)
    }

    /// A value consisting of one literal colour.
    pub fn colour(colour: Colour) -> Self {
        Self::new().with_colour(colour)
    }

    /// A value consisting of one colour key.
    pub fn key(key: impl Into<String>) -> Self {
        Self::new().with_key(key)
    }

    /// Parse the textual form, in which `&key` denotes a colour key.
    ///
    /// A `&` that is not followed by a key character is kept as text.
    pub fn parse(text: &str) -> Self {
        let mut value = Self::new();
        let mut rest = text;

        while let Some(pos) = rest.find(COLOUR_KEY_PREFIX) {
            let after = &rest[pos + COLOUR_KEY_PREFIX.len_utf8()..];
            let key_len = after
                .char_indices()
                .find(|(_, ch)| !is_key_char(*ch))
                .map_or(after.len(), |(index, _)| index);

            if key_len == 0 {
                let split = pos + COLOUR_KEY_PREFIX.len_utf8();
                value.push_text(&rest[..split]);
                rest = &rest[split..];
                continue;
            }

            value.push_text(&rest[..pos]);
            value.parts.push(ValuePart::ColourKey(after[..key_len].to_string()));
            rest = &after[key_len..];
        }
        value.push_text(rest);
        value
    }

    /// Join values with `separator`, e.g. the layers of a border colour.
    pub fn join<I>(values: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = StyleValue>,
    {
        let mut joined = Self::new();
        for (index, value) in values.into_iter().enumerate() {
            if index > 0 {
                joined.push_text(separator);
            }
            for part in value.parts {
                match part {
                    ValuePart::Text(text) => joined.push_text(&text),
                    other => joined.parts.push(other),
                }
            }
        }
        joined
    }

    /// Append literal text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(&text.into());
        self
    }

    /// Append a literal colour.
    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.parts.push(ValuePart::Colour(colour));
        self
    }

    /// Append a colour key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.parts.push(ValuePart::ColourKey(key.into()));
        self
    }

    /// The parts of the value in order.
    pub fn parts(&self) -> &[ValuePart] {
        &self.parts
    }

    /// Whether the value is empty.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The colour keys referenced by the value.
    pub fn colour_keys(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|part| match part {
            ValuePart::ColourKey(key) => Some(key.as_str()),
            _ => None,
        })
    }

    /// Whether the value contains no colour keys.
    pub fn is_resolved(&self) -> bool {
        self.colour_keys().next().is_none()
    }

    /// Produce the attribute text, resolving every colour key with `lookup`.
    pub fn resolve<F>(&self, mut lookup: F) -> String
    where
        F: FnMut(&str) -> Colour,
    {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                ValuePart::Text(text) => out.push_str(text),
                ValuePart::Colour(colour) => out.push_str(&colour.to_css()),
                ValuePart::ColourKey(key) => out.push_str(&lookup(key).to_css()),
            }
        }
        out
    }

    /// Replace every colour key that `lookup` can resolve with its colour.
    pub fn resolved_with<F>(&self, mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<Colour>,
    {
        let parts = self
            .parts
            .iter()
            .map(|part| match part {
                ValuePart::ColourKey(key) => match lookup(key) {
                    Some(colour) => ValuePart::Colour(colour),
                    None => part.clone(),
                },
                other => other.clone(),
            })
            .collect();
        Self { parts }
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(ValuePart::Text(last)) = self.parts.last_mut() {
            last.push_str(text);
        } else {
            self.parts.push(ValuePart::Text(text.to_string()));
        }
    }
}

fn is_key_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '.'
}

impl Display for StyleValue {
    /// Writes the textual form, with colour keys as `&key`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            match part {
                ValuePart::Text(text) => f.write_str(text)?,
                ValuePart::Colour(colour) => f.write_str(&colour.to_css())?,
                ValuePart::ColourKey(key) => write!(f, "{COLOUR_KEY_PREFIX}{key}")?,
            }
        }
        Ok(())
    }
}

impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for StyleValue {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<Colour> for StyleValue {
    fn from(colour: Colour) -> Self {
        Self::colour(colour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys_and_text() {
        let value = StyleValue::parse("1px solid &app.Pane.border1, &x");
        assert_eq!(
            value.parts(),
            &[
                ValuePart::Text("1px solid ".into()),
                ValuePart::ColourKey("app.Pane.border1".into()),
                ValuePart::Text(", ".into()),
                ValuePart::ColourKey("x".into()),
            ]
        );
        assert_eq!(value.colour_keys().collect::<Vec<_>>(), ["app.Pane.border1", "x"]);
    }

    #[test]
    fn test_underscore_ends_colour_key() {
        let value = StyleValue::parse("&foo_bar, &app.Pane.border_1");
        assert_eq!(
            value.parts(),
            &[
                ValuePart::ColourKey("foo".into()),
                ValuePart::Text("_bar, ".into()),
                ValuePart::ColourKey("app.Pane.border".into()),
                ValuePart::Text("_1".into()),
            ]
        );
    }

    #[test]
    fn test_lone_ampersand_is_text() {
        let value = StyleValue::parse("a & b&");
        assert_eq!(value.parts(), &[ValuePart::Text("a & b&".into())]);
        assert!(value.is_resolved());
    }

    #[test]
    fn test_resolve_substitutes_css_colours() {
        let value = StyleValue::parse("&red");
        let text = value.resolve(|key| {
            assert_eq!(key, "red");
            Colour::rgb(255, 0, 0)
        });
        assert_eq!(text, "rgb(255, 0, 0)");
    }

    #[test]
    fn test_join_and_partial_resolution() {
        let value = StyleValue::join(
            [StyleValue::colour(Colour::WHITE), StyleValue::key("focus")],
            VALUE_SEPARATOR,
        );
        assert_eq!(value.to_string(), "rgb(255, 255, 255), &focus");

        let unresolved = value.resolved_with(|_| None);
        assert!(!unresolved.is_resolved());
        let resolved = value.resolved_with(|_| Some(Colour::BLACK));
        assert!(resolved.is_resolved());
        assert_eq!(resolved.to_string(), "rgb(255, 255, 255), rgb(0, 0, 0)");
    }
}
