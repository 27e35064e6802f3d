use indexmap::IndexMap;

use crate::colour::Colour;
use crate::properties::StyleProperty;
use crate::rule_set::ResolvedRuleSet;

/// The colour of a [`ColourProperty`]: a literal or a key into the theme.
#[derive(Debug, Clone, PartialEq)]
pub enum ColourSource {
    /// A literal colour.
    Colour(Colour),
    /// A colour key resolved against the active theme.
    Key(String),
}

/// Binds a style attribute to a colour for one or more selectors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourProperty {
    property: StyleProperty,
    source: ColourSource,
    selectors: Vec<String>,
}

impl ColourProperty {
    /// A property whose colour is looked up by key.
    pub fn of_key<I, S>(property: StyleProperty, key: impl Into<String>, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            property,
            source: ColourSource::Key(key.into()),
            selectors: selectors.into_iter().map(Into::into).collect(),
        }
    }

    /// A property with a literal colour.
    pub fn of_colour<I, S>(property: StyleProperty, colour: Colour, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            property,
            source: ColourSource::Colour(colour),
            selectors: selectors.into_iter().map(Into::into).collect(),
        }
    }

    /// Start building a property for `property`.
    pub fn builder(property: StyleProperty) -> ColourPropertyBuilder {
        ColourPropertyBuilder {
            property,
            source: None,
            selectors: Vec::new(),
        }
    }

    /// The style attribute.
    pub fn property(&self) -> StyleProperty {
        self.property
    }

    /// Where the colour comes from.
    pub fn source(&self) -> &ColourSource {
        &self.source
    }

    /// The colour key, if the colour is looked up by key.
    pub fn colour_key(&self) -> Option<&str> {
        match &self.source {
            ColourSource::Key(key) => Some(key),
            ColourSource::Colour(_) => None,
        }
    }

    /// The selectors the attribute applies to.
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// Build the rule set for this property, or `None` if `lookup` cannot
    /// resolve its colour key.
    pub fn to_rule_set<F>(&self, lookup: F) -> Option<ResolvedRuleSet>
    where
        F: FnOnce(&str) -> Option<Colour>,
    {
        let colour = match &self.source {
            ColourSource::Colour(colour) => *colour,
            ColourSource::Key(key) => lookup(key)?,
        };
        let mut declarations = IndexMap::new();
        declarations.insert(self.property.name(), colour.to_css());
        Some(ResolvedRuleSet::new(self.selectors.iter().cloned(), declarations))
    }
}

/// Builder for [`ColourProperty`].
#[derive(Debug, Clone)]
pub struct ColourPropertyBuilder {
    property: StyleProperty,
    source: Option<ColourSource>,
    selectors: Vec<String>,
}

impl ColourPropertyBuilder {
    /// Look the colour up by key.
    pub fn colour_key(mut self, key: impl Into<String>) -> Self {
        self.source = Some(ColourSource::Key(key.into()));
        self
    }

    /// Use a literal colour.
    pub fn colour(mut self, colour: Colour) -> Self {
        self.source = Some(ColourSource::Colour(colour));
        self
    }

    /// Add a selector.
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selectors.push(selector.into());
        self
    }

    /// Add several selectors.
    pub fn selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selectors.extend(selectors.into_iter().map(Into::into));
        self
    }

    /// Finish the property. Without a colour source the placeholder colour
    /// is used.
    pub fn build(self) -> ColourProperty {
        ColourProperty {
            property: self.property,
            source: self.source.unwrap_or(ColourSource::Colour(Colour::PLACEHOLDER)),
            selectors: self.selectors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_resolution() {
        let property = ColourProperty::of_key(StyleProperty::TextFill, "Label.text", [".label"]);
        let rule_set = property
            .to_rule_set(|key| (key == "Label.text").then_some(Colour::grey(32)))
            .unwrap();
        assert_eq!(rule_set.to_css(), ".label {\n    -fx-text-fill: rgb(32, 32, 32);\n}\n");

        assert!(property.to_rule_set(|_| None).is_none());
    }

    #[test]
    fn test_builder_with_literal_colour() {
        let property = ColourProperty::builder(StyleProperty::BackgroundColour)
            .colour(Colour::rgba(0, 0, 0, 0.5))
            .selector(".a")
            .selectors([".b", ".c"])
            .build();
        assert_eq!(property.colour_key(), None);
        assert_eq!(property.selectors(), [".a", ".b", ".c"]);
        let rule_set = property.to_rule_set(|_| unreachable!()).unwrap();
        assert_eq!(
            rule_set.declarations()["-fx-background-color"],
            "rgba(0, 0, 0, 0.5)"
        );
    }
}
