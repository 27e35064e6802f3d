// SPDX-License-Identifier: LGPL-3.0-only

//! Error types for application plumbing.

use stylecat_theme::error::ThemeError;
use thiserror::Error;

/// Errors raised by the application side.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A task was sent after the UI thread stopped.
    #[error("The UI thread is no longer running")]
    UiThreadClosed,

    /// A theme operation failed.
    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
