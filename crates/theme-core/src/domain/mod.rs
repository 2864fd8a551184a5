//! Domain entities for ThemeGuard.
//!
//! This module contains plain data types with no infrastructure dependencies.
//! Everything here can be constructed and tested without a file system.

use thiserror::Error;

pub mod dark_mode;
pub mod handle;
pub mod manifest;

/// Error type for domain-level parsing and validation.
#[derive(Debug, Error, PartialEq)]
pub enum ThemeError {
    /// A dark-mode strategy string was neither `"class"` nor `"media"`.
    #[error("unknown dark mode strategy: {0:?} (expected \"class\" or \"media\")")]
    UnknownDarkMode(String),

    /// The key is owned by a typed field and cannot be set as a free-form field.
    #[error("field {0:?} is reserved and cannot be set directly")]
    ReservedField(String),

    /// The build manifest failed validation.
    #[error("invalid build manifest: {0}")]
    InvalidManifest(String),
}
