use std::fmt::{Display, Formatter};

/// Identifies a styled UI component.
///
/// A component id is a dotted namespace plus a component name, for example
/// `stylecat.widgets` and `TitledPane`. Colour keys owned by a component are
/// prefixed with [`ComponentId::colour_key_prefix`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId {
    namespace: String,
    name: String,
}

impl ComponentId {
    /// Create a new component id from a namespace and a name.
    pub fn new(namespace: impl ToString, name: impl ToString) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
        }
    }

    /// Parse a fully qualified id such as `stylecat.widgets.TitledPane`.
    ///
    /// The last dot separates the namespace from the name. An id without a
    /// dot has an empty namespace.
    pub fn parse(qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((namespace, name)) => Self::new(namespace, name),
            None => Self::new("", qualified),
        }
    }

    /// The namespace of the component.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The name of the component.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The prefix for colour keys defined by this component, including the
    /// trailing dot.
    pub fn colour_key_prefix(&self) -> String {
        format!("{self}.")
    }
}

impl Display for ComponentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_prefix() {
        let id = ComponentId::parse("stylecat.widgets.TitledPane");
        assert_eq!(id.namespace(), "stylecat.widgets");
        assert_eq!(id.name(), "TitledPane");
        assert_eq!(id.colour_key_prefix(), "stylecat.widgets.TitledPane.");

        let bare = ComponentId::parse("Root");
        assert_eq!(bare.to_string(), "Root");
        assert_eq!(bare.colour_key_prefix(), "Root.");
    }
}
