//! # Theme Error Types
//!
//! Error types for colour parsing, colour resources, theme selection and
//! stylesheet output. Parse errors carry the resource they came from and the
//! 1-based line number so callers can decide whether to abort or log and
//! continue.

use std::path::PathBuf;
use thiserror::Error;

use crate::id::ComponentId;

/// Errors produced while parsing a single colour specifier.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColourParseError {
    /// The specifier did not have 1 to 4 comma separated components.
    #[error("expected 1 to 4 components, found {count}")]
    ComponentCount {
        /// The number of components found.
        count: usize,
    },

    /// A red, green, blue or grey component was not an integer.
    #[error("'{text}' is not an integer component")]
    InvalidComponent {
        /// The offending component text.
        text: String,
    },

    /// An integer component was outside `0..=255`.
    #[error("component {value} is outside 0..=255")]
    ComponentOutOfRange {
        /// The parsed value.
        value: i64,
    },

    /// The opacity was not a number in `0.0..=1.0`.
    #[error("'{text}' is not an opacity between 0 and 1")]
    InvalidOpacity {
        /// The offending opacity text.
        text: String,
    },
}

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// No theme with the requested id exists.
    #[error("Unsupported theme '{id}'")]
    UnsupportedTheme {
        /// The requested theme id.
        id: String,
    },

    /// The catalog has no themes at all.
    #[error("No default theme is available")]
    NoDefaultTheme,

    /// A colour resource line is not a `key = value` pair.
    #[error("{source_name}: Line {line}: The key-value pair is malformed.")]
    MalformedKeyValue {
        /// The resource the line came from.
        source_name: String,
        /// 1-based line number.
        line: usize,
    },

    /// A colour resource defines the same key twice.
    #[error("{source_name}: Line {line}: The key '{key}' appears more than once.")]
    DuplicateKey {
        /// The resource the line came from.
        source_name: String,
        /// 1-based line number of the second occurrence.
        line: usize,
        /// The duplicated key.
        key: String,
    },

    /// A colour resource value is not a valid colour specifier.
    #[error("{source_name}: Line {line}: The colour specifier is invalid: {source}")]
    InvalidColour {
        /// The resource the line came from.
        source_name: String,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the value.
        #[source]
        source: ColourParseError,
    },

    /// A file could not be read.
    #[error("Failed to read {path:?}: {source}")]
    ReadFailed {
        /// The file that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written.
    #[error("Failed to write {path:?}: {source}")]
    WriteFailed {
        /// The file that was written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The temp directory could not be created.
    #[error("Failed to create temp directory: {source}")]
    TempDirectory {
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A stylesheet file was requested but no filename pattern is configured.
    #[error("No stylesheet filename is configured")]
    NoStylesheetFilename,

    /// A stylesheet URI could not be interpreted.
    #[error("Invalid stylesheet URI '{uri}'")]
    InvalidUri {
        /// The offending URI.
        uri: String,
    },

    /// A component depends on itself, directly or transitively.
    #[error("Dependency cycle while registering {component}: {}", format_path(.path))]
    DependencyCycle {
        /// The component whose registration was re-entered.
        component: ComponentId,
        /// The registration path that closed the cycle, outermost first.
        path: Vec<ComponentId>,
    },

    /// A configuration file could not be parsed.
    #[error("Failed to parse configuration {path:?}: {details}")]
    ConfigParse {
        /// The configuration file, if the content came from one.
        path: Option<PathBuf>,
        /// The parser's message.
        details: String,
    },

    /// The colour file watcher could not be set up.
    #[cfg(feature = "hot-reload")]
    #[error("Failed to setup file watcher: {source}")]
    FileWatcher {
        /// The underlying error.
        #[source]
        source: notify::Error,
    },
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

fn format_path(path: &[ComponentId]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl ThemeError {
    /// Create an unsupported theme error.
    pub fn unsupported(id: impl Into<String>) -> Self {
        Self::UnsupportedTheme { id: id.into() }
    }

    /// Create a malformed key-value error.
    pub fn malformed(source_name: impl Into<String>, line: usize) -> Self {
        Self::MalformedKeyValue {
            source_name: source_name.into(),
            line,
        }
    }

    /// Create a duplicate key error.
    pub fn duplicate_key(source_name: impl Into<String>, line: usize, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            source_name: source_name.into(),
            line,
            key: key.into(),
        }
    }

    /// Create an invalid colour error.
    pub fn invalid_colour(source_name: impl Into<String>, line: usize, source: ColourParseError) -> Self {
        Self::InvalidColour {
            source_name: source_name.into(),
            line,
            source,
        }
    }

    /// Create a read error for `path`.
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for `path`.
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid URI error.
    pub fn invalid_uri(uri: impl Into<String>) -> Self {
        Self::InvalidUri { uri: uri.into() }
    }

    /// Create a configuration parse error.
    pub fn config_parse(path: Option<PathBuf>, details: impl Into<String>) -> Self {
        Self::ConfigParse {
            path,
            details: details.into(),
        }
    }

    /// The 1-based line number for located parse errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedKeyValue { line, .. }
            | Self::DuplicateKey { line, .. }
            | Self::InvalidColour { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_message() {
        let err = ThemeError::duplicate_key("colours.properties", 7, "Button.text");
        assert_eq!(
            err.to_string(),
            "colours.properties: Line 7: The key 'Button.text' appears more than once."
        );
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_cycle_message_lists_path() {
        let a = ComponentId::new("app", "A");
        let b = ComponentId::new("app", "B");
        let err = ThemeError::DependencyCycle {
            component: a.clone(),
            path: vec![a.clone(), b, a],
        };
        assert_eq!(
            err.to_string(),
            "Dependency cycle while registering app.A: app.A -> app.B -> app.A"
        );
        assert_eq!(err.line(), None);
    }
}
