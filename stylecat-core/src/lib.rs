#![warn(missing_docs)]

//! Core library for stylecat => See `stylecat` crate.
//!
//! Contains the application side of stylecat: the UI thread queue, windows
//! and their scenes, startup registration of styled components and the
//! [StyledApp](app::StyledApp) composition root.

/// Contains the [StyledApp](app::StyledApp) struct.
pub mod app;

/// Contains the [CoreError](error::CoreError) enum.
pub mod error;

/// Contains the [RegistrationPlan](registration::RegistrationPlan) struct.
pub mod registration;

/// Contains the UI thread task queue.
pub mod ui_thread;

/// Contains windows, scenes and the window registry.
pub mod window;
