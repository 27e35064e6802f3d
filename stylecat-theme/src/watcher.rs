//! User colour file watcher.
//!
//! Watches a colour directory laid out as
//! `themes/<theme-id>/<prefix>-colours.properties` and reloads changed files
//! into the catalog's theme overrides.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::catalog::{StyleCatalog, THEMES_DIRECTORY};
use crate::colour_file::COLOUR_FILE_SUFFIX;
use crate::diagnostics::DiagnosticSink;
use crate::error::{ThemeError, ThemeResult};

/// Watches user colour files and reloads them on change.
pub struct ColourFileWatcher {
    watcher: RecommendedWatcher,
    event_rx: mpsc::Receiver<notify::Result<Event>>,
    directory: PathBuf,
    filename: String,
}

impl ColourFileWatcher {
    /// Watch `directory` for changes to `<filename_prefix>-colours.properties`
    /// files of any theme.
    pub fn new(directory: impl Into<PathBuf>, filename_prefix: &str) -> ThemeResult<Self> {
        let directory = directory.into();
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx).map_err(|source| ThemeError::FileWatcher { source })?;
        watcher
            .watch(&directory, RecursiveMode::Recursive)
            .map_err(|source| ThemeError::FileWatcher { source })?;
        log::debug!("Watching colour directory {}", directory.display());

        Ok(Self {
            watcher,
            event_rx: rx,
            directory,
            filename: format!("{filename_prefix}{COLOUR_FILE_SUFFIX}"),
        })
    }

    /// The watched directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Stop watching.
    pub fn unwatch(&mut self) -> ThemeResult<()> {
        self.watcher
            .unwatch(&self.directory)
            .map_err(|source| ThemeError::FileWatcher { source })
    }

    /// Reload colour files changed since the last call (non-blocking).
    ///
    /// Returns whether any theme was reloaded. Load failures are reported
    /// through the catalog's diagnostic sink.
    pub fn poll(&self, catalog: &mut StyleCatalog, key_prefix: &str) -> bool {
        let mut changed: Vec<(String, PathBuf)> = Vec::new();

        while let Ok(result) = self.event_rx.try_recv() {
            let event = match result {
                Ok(event) => event,
                Err(source) => {
                    catalog
                        .diagnostics()
                        .report("Watch colour files", &ThemeError::FileWatcher { source });
                    continue;
                }
            };
            if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
                continue;
            }
            for path in event.paths {
                if let Some(theme_id) = self.theme_for_path(&path) {
                    if !changed.iter().any(|(_, known)| *known == path) {
                        changed.push((theme_id, path));
                    }
                }
            }
        }

        let mut reloaded = false;
        for (theme_id, path) in changed {
            if !path.is_file() {
                continue;
            }
            match catalog.load_colours([(theme_id.as_str(), path.as_path())], key_prefix) {
                Ok(()) => {
                    log::info!("Reloaded colours of theme '{theme_id}' from {}", path.display());
                    reloaded = true;
                }
                Err(err) => catalog.diagnostics().report("Reload colour file", &err),
            }
        }
        reloaded
    }

    /// The theme id of a watched colour file, or `None` if `path` is not one.
    fn theme_for_path(&self, path: &Path) -> Option<String> {
        if path.file_name()? != self.filename.as_str() {
            return None;
        }
        let theme_dir = path.parent()?;
        if theme_dir.parent()? != self.directory.join(THEMES_DIRECTORY) {
            return None;
        }
        theme_dir.file_name()?.to_str().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use std::time::Duration;

    use crate::colour::Colour;

    #[test]
    fn test_theme_for_path() {
        let dir = tempfile::tempdir().unwrap();
        let watcher = ColourFileWatcher::new(dir.path(), "editor").unwrap();
        let themes = dir.path().join("themes");

        assert_eq!(
            watcher.theme_for_path(&themes.join("dark").join("editor-colours.properties")),
            Some("dark".to_string())
        );
        assert_eq!(
            watcher.theme_for_path(&themes.join("dark").join("other-colours.properties")),
            None
        );
        assert_eq!(
            watcher.theme_for_path(&dir.path().join("dark").join("editor-colours.properties")),
            None
        );
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ColourFileWatcher::new(dir.path().join("missing"), "editor");
        assert!(matches!(result, Err(ThemeError::FileWatcher { .. })));
    }

    #[test]
    fn test_poll_without_changes() {
        let dir = tempfile::tempdir().unwrap();
        let watcher = ColourFileWatcher::new(dir.path(), "editor").unwrap();
        let mut catalog = StyleCatalog::new();
        assert!(!watcher.poll(&mut catalog, "app.Editor."));
    }

    #[test]
    fn test_poll_reloads_changed_colour_file() {
        let dir = tempfile::tempdir().unwrap();
        let theme_dir = dir.path().join("themes").join("dark");
        fs::create_dir_all(&theme_dir).unwrap();
        let watcher = ColourFileWatcher::new(dir.path(), "editor").unwrap();
        let mut catalog = StyleCatalog::new();

        fs::write(theme_dir.join("editor-colours.properties"), "text = 1, 2, 3\n").unwrap();
        fs::write(theme_dir.join("other-colours.properties"), "text = 4, 5, 6\n").unwrap();

        let mut reloaded = false;
        for _ in 0..50 {
            if watcher.poll(&mut catalog, "app.Editor.") {
                reloaded = true;
                break;
            }
            thread::sleep(Duration::from_millis(100));
        }

        assert!(reloaded);
        assert_eq!(
            catalog.find_theme("dark").unwrap().colour("app.Editor.text"),
            Some(Colour::rgb(1, 2, 3))
        );
        assert_eq!(catalog.find_theme("light").unwrap().colour("app.Editor.text"), None);
    }
}
