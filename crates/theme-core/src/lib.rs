//! # theme-core
//!
//! Shared library for ThemeGuard containing the theme configuration handle,
//! the build manifest data model, and the dark-mode config guard.
//!
//! This crate performs no I/O.  Loading and saving handles is the job of the
//! `theme-bootstrap` crate.
//!
//! # Architecture overview (for beginners)
//!
//! A utility-class CSS build tool reads a *configuration handle*: a small
//! record whose `config.darkMode` field tells it how dark mode is switched on
//! (`"class"` toggles a marker class, `"media"` follows the OS preference).
//! Several initializers may touch that handle, so whoever runs the guard must
//! not clobber what an earlier initializer already wrote.
//!
//! - **`domain`** – The data types: [`DarkMode`], [`ThemeConfig`],
//!   [`ConfigHandle`] and the declarative [`BuildManifest`].
//!
//! - **`guard`** – The check-then-create-or-extend operation
//!   ([`ensure_theme_config`]) and the [`DiagnosticSink`] seam it reports
//!   through.

pub mod domain;
pub mod guard;

pub use domain::dark_mode::{DarkMode, DarkModeSetting};
pub use domain::handle::{ConfigHandle, ThemeConfig};
pub use domain::manifest::{BuildManifest, BuildMode, ContentConfig, ExtendSection};
pub use domain::ThemeError;
pub use guard::{apply_theme_guard, ensure_theme_config, DiagnosticSink, GuardOutcome};
