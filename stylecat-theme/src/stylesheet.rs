//! Stylesheet URIs and managed-stylesheet detection.
//!
//! Every synthesized stylesheet starts with a comment holding [`MARKER`], so
//! a stylesheet reference can be recognized as managed whether it is a
//! `data:` URI or a `file:` URI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{ThemeError, ThemeResult};

/// The delimiter around the marker token.
pub const MARKER_DELIMITER: char = '~';

/// The marker token that identifies managed stylesheets.
pub const MARKER: &str = "~stylecat.StyleCatalog~";

const DATA_SCHEME: &str = "data:";
const FILE_SCHEME: &str = "file:";
const DATA_URI_PREFIX: &str = "data:text/css;charset=utf-8,";
const FILE_URI_PREFIX: &str = "file://";

/// The comment line that starts every managed stylesheet.
pub fn marker_comment() -> String {
    format!("/* {MARKER} */")
}

/// Encode stylesheet text as a `data:` URI.
pub fn data_uri(css: &str) -> String {
    format!("{DATA_URI_PREFIX}{}", urlencoding::encode(css))
}

/// Decode the stylesheet text of a `data:` URI.
pub fn data_uri_text(uri: &str) -> Option<String> {
    let (header, payload) = uri.strip_prefix(DATA_SCHEME)?.split_once(',')?;
    if header.split(';').any(|param| param == "base64") {
        return None;
    }
    urlencoding::decode(payload).ok().map(|text| text.into_owned())
}

/// Convert an absolute path to a `file://` URI.
pub fn file_uri(path: &Path) -> String {
    let text = path.to_string_lossy();
    let encoded: Vec<String> = text
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    let joined = encoded.join("/");
    if joined.starts_with('/') {
        format!("{FILE_URI_PREFIX}{joined}")
    } else {
        format!("{FILE_URI_PREFIX}/{joined}")
    }
}

/// Convert a `file:` URI back to a path.
pub fn uri_to_path(uri: &str) -> Option<PathBuf> {
    let rest = uri.strip_prefix(FILE_SCHEME)?;
    let path_part = match rest.strip_prefix("//") {
        Some(authority_and_path) => {
            let slash = authority_and_path.find('/')?;
            let authority = &authority_and_path[..slash];
            if !(authority.is_empty() || authority == "localhost") {
                return None;
            }
            &authority_and_path[slash..]
        }
        None => rest,
    };
    if !path_part.starts_with('/') {
        return None;
    }
    let decoded = urlencoding::decode(path_part).ok()?;
    Some(PathBuf::from(decoded.as_ref()))
}

/// Whether `uri` refers to a managed stylesheet.
///
/// A `data:` URI is managed if the text between its first two marker
/// delimiters is the marker. A `file:` URI is managed if the first line of
/// the file contains the marker. Other schemes are never managed.
pub fn is_managed_stylesheet(uri: &str) -> ThemeResult<bool> {
    if uri.starts_with(DATA_SCHEME) {
        let Some(start) = uri.find(MARKER_DELIMITER) else {
            return Ok(false);
        };
        let after = start + MARKER_DELIMITER.len_utf8();
        let managed = uri[after..]
            .find(MARKER_DELIMITER)
            .map(|end| &uri[start..after + end + MARKER_DELIMITER.len_utf8()] == MARKER)
            .unwrap_or(false);
        return Ok(managed);
    }

    if uri.starts_with(FILE_SCHEME) {
        let path = uri_to_path(uri).ok_or_else(|| ThemeError::invalid_uri(uri))?;
        let file = File::open(&path).map_err(|err| ThemeError::read_failed(&path, err))?;
        let mut first_line = String::new();
        BufReader::new(file)
            .read_line(&mut first_line)
            .map_err(|err| ThemeError::read_failed(&path, err))?;
        return Ok(first_line.contains(MARKER));
    }

    Ok(false)
}

/// A consumer that holds an ordered list of stylesheet URIs, such as a
/// window's scene.
pub trait StylesheetHost {
    /// The stylesheet URIs, in cascade order.
    fn stylesheets(&self) -> &[String];

    /// Mutable access to the stylesheet URIs.
    fn stylesheets_mut(&mut self) -> &mut Vec<String>;
}

impl StylesheetHost for Vec<String> {
    fn stylesheets(&self) -> &[String] {
        self
    }

    fn stylesheets_mut(&mut self) -> &mut Vec<String> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_is_managed() {
        let css = format!("{}\n\n.a {{\n    x: 1;\n}}\n", marker_comment());
        let uri = data_uri(&css);
        assert!(uri.starts_with("data:text/css"));
        assert!(is_managed_stylesheet(&uri).unwrap());
        assert_eq!(data_uri_text(&uri).as_deref(), Some(css.as_str()));
    }

    #[test]
    fn test_unmanaged_uris() {
        assert!(!is_managed_stylesheet(&data_uri(".a { x: 1; }")).unwrap());
        assert!(!is_managed_stylesheet(&data_uri("/* ~other~ */")).unwrap());
        assert!(!is_managed_stylesheet("https://example.com/app.css").unwrap());
        assert!(!is_managed_stylesheet("app.css").unwrap());
    }

    #[test]
    fn test_file_uri_round_trip() {
        let path = Path::new("/tmp/style cat/sheet-1.css");
        let uri = file_uri(path);
        assert_eq!(uri, "file:///tmp/style%20cat/sheet-1.css");
        assert_eq!(uri_to_path(&uri).as_deref(), Some(path));
        assert_eq!(uri_to_path("file:/tmp/a.css").as_deref(), Some(Path::new("/tmp/a.css")));
        assert_eq!(uri_to_path("file://remote/tmp/a.css"), None);
    }

    #[test]
    fn test_file_uri_managed_check_reads_first_line() {
        let dir = tempfile::tempdir().unwrap();
        let managed = dir.path().join("managed.css");
        let other = dir.path().join("other.css");
        std::fs::write(&managed, format!("{}\n\n.a {{}}\n", marker_comment())).unwrap();
        std::fs::write(&other, format!(".a {{}}\n{}\n", marker_comment())).unwrap();

        assert!(is_managed_stylesheet(&file_uri(&managed)).unwrap());
        assert!(!is_managed_stylesheet(&file_uri(&other)).unwrap());

        let missing = file_uri(&dir.path().join("missing.css"));
        assert!(matches!(
            is_managed_stylesheet(&missing),
            Err(ThemeError::ReadFailed { .. })
        ));
        assert!(matches!(
            is_managed_stylesheet("file:relative.css"),
            Err(ThemeError::InvalidUri { .. })
        ));
    }
}
