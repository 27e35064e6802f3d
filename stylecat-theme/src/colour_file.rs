//! Colour resource files.
//!
//! A colour resource is line oriented text with one `key = value` pair per
//! line. A `#` starts a comment that runs to the end of the line and blank
//! lines are ignored. Values are parsed with [`Colour::parse_rgb`].
//!
//! ```text
//! # Button colours
//! Button.background = 240, 240, 240
//! Button.border     = 0, 0, 0, 0.25
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::colour::Colour;
use crate::error::{ThemeError, ThemeResult};

/// Suffix of colour resource filenames.
pub const COLOUR_FILE_SUFFIX: &str = "-colours.properties";

const COMMENT_CHAR: char = '#';
const SEPARATOR_CHAR: char = '=';
const SEPARATOR_LINE_LENGTH: usize = 80;

const HEADER_LINES: &[&str] = &[
    "A colour value may have 1, 2, 3 or 4 components:",
    "  1 : <grey>",
    "  2 : <grey>, <opacity>",
    "  3 : <red>, <green>, <blue>",
    "  4 : <red>, <green>, <blue>, <opacity>",
    "where",
    "  <grey>, <red>, <green>, <blue> are integers in the interval [0, 255]",
    "  <opacity> is a floating-point number in the interval [0, 1]",
];

/// A table of colours keyed by colour key, in file order.
pub type ColourTable = IndexMap<String, Colour>;

/// Parse the text of a colour resource.
///
/// `source_name` identifies the resource in errors. Line numbers in errors
/// are 1-based.
pub fn parse_colours(text: &str, source_name: &str) -> ThemeResult<ColourTable> {
    let mut colours = ColourTable::new();

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = match raw.find(COMMENT_CHAR) {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        if line.trim().is_empty() {
            continue;
        }

        let (key, value) = line
            .split_once(SEPARATOR_CHAR)
            .ok_or_else(|| ThemeError::malformed(source_name, line_number))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ThemeError::malformed(source_name, line_number));
        }
        if colours.contains_key(key) {
            return Err(ThemeError::duplicate_key(source_name, line_number, key));
        }

        let colour = Colour::parse_rgb(value.trim())
            .map_err(|err| ThemeError::invalid_colour(source_name, line_number, err))?;
        colours.insert(key.to_string(), colour);
    }

    Ok(colours)
}

/// Read and parse a colour file.
pub fn read_colours(path: impl AsRef<Path>) -> ThemeResult<ColourTable> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| ThemeError::read_failed(path, err))?;
    parse_colours(&text, &path.display().to_string())
}

/// Render colours as the text of a colour resource.
///
/// With a header comment, the entries are framed by a comment block that
/// contains the header and a description of the colour value forms.
pub fn format_colours<'a, I>(entries: I, header_comment: Option<&str>) -> String
where
    I: IntoIterator<Item = (&'a str, &'a Colour)>,
{
    let entries: Vec<(&str, &Colour)> = entries.into_iter().collect();
    let separator = format!("{COMMENT_CHAR}{}\n", "-".repeat(SEPARATOR_LINE_LENGTH - 1));
    let mut out = String::with_capacity(4096);

    if let Some(header) = header_comment {
        out.push_str(&separator);
        out.push(COMMENT_CHAR);
        out.push('\n');

        let mut lines: Vec<&str> = header.lines().collect();
        if !lines.is_empty() {
            lines.push("");
        }
        lines.extend_from_slice(HEADER_LINES);

        for line in lines {
            out.push(COMMENT_CHAR);
            if !line.trim().is_empty() {
                out.push_str("  ");
                out.push_str(line);
            }
            out.push('\n');
        }

        out.push(COMMENT_CHAR);
        out.push('\n');
        out.push_str(&separator);
        if !entries.is_empty() {
            out.push('\n');
        }
    }

    for (key, colour) in &entries {
        out.push_str(&format!("{key} {SEPARATOR_CHAR} {}\n", colour.to_rgb_string()));
    }

    if header_comment.is_some() {
        out.push('\n');
        out.push_str(&separator);
    }

    out
}

/// Write colours to a colour file. See [`format_colours`].
pub fn write_colours<'a, I>(
    path: impl AsRef<Path>,
    entries: I,
    header_comment: Option<&str>,
) -> ThemeResult<()>
where
    I: IntoIterator<Item = (&'a str, &'a Colour)>,
{
    let path = path.as_ref();
    let text = format_colours(entries, header_comment);
    fs::write(path, text).map_err(|err| ThemeError::write_failed(path, err))?;
    log::debug!("Wrote colours to {}", path.display());
    Ok(())
}

/// Prefix every key of `colours` with `prefix`.
pub fn prefix_keys(colours: ColourTable, prefix: &str) -> ColourTable {
    if prefix.is_empty() {
        return colours;
    }
    colours
        .into_iter()
        .map(|(key, colour)| (format!("{prefix}{key}"), colour))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColourParseError;

    #[test]
    fn test_parse_comments_and_blank_lines() {
        let text = "# header\n\nred = 255, 0, 0 # trailing\n  shade=128,0.5\n";
        let colours = parse_colours(text, "test").unwrap();
        assert_eq!(colours.len(), 2);
        assert_eq!(colours["red"], Colour::rgb(255, 0, 0));
        assert_eq!(colours["shade"], Colour::rgba(128, 128, 128, 0.5));
        assert_eq!(colours.get_index(0).map(|(k, _)| k.as_str()), Some("red"));
    }

    #[test]
    fn test_duplicate_key_reports_line() {
        let text = "a = 1\nb = 2\n\na = 3\n";
        match parse_colours(text, "dup.properties") {
            Err(ThemeError::DuplicateKey { key, line, source_name }) => {
                assert_eq!(key, "a");
                assert_eq!(line, 4);
                assert_eq!(source_name, "dup.properties");
            }
            other => panic!("expected duplicate key error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(
            parse_colours("ok = 1\nno separator\n", "t"),
            Err(ThemeError::MalformedKeyValue { line: 2, .. })
        ));
        assert!(matches!(
            parse_colours(" = 1\n", "t"),
            Err(ThemeError::MalformedKeyValue { line: 1, .. })
        ));
        assert!(matches!(
            parse_colours("x = 1\ny = 1, 2, 3, 4, 5\n", "t"),
            Err(ThemeError::InvalidColour {
                line: 2,
                source: ColourParseError::ComponentCount { count: 5 },
                ..
            })
        ));
    }

    #[test]
    fn test_write_and_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test-colours.properties");
        let red = Colour::rgb(255, 0, 0);
        let glass = Colour::rgba(0, 0, 0, 0.25);

        write_colours(&path, [("red", &red), ("glass", &glass)], Some("Test colours")).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(&format!("#{}\n#\n#  Test colours\n#\n", "-".repeat(79))));
        assert!(text.contains("red = 255, 0, 0\nglass = 0, 0, 0, 0.25\n"));

        let colours = read_colours(&path).unwrap();
        assert_eq!(colours["red"], red);
        assert_eq!(colours["glass"], glass);
    }

    #[test]
    fn test_format_without_header() {
        let grey = Colour::grey(10);
        assert_eq!(format_colours([("k", &grey)], None), "k = 10, 10, 10\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_colours(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, ThemeError::ReadFailed { .. }));
    }
}
