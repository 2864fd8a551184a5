//! Cross-checks the build manifest against the guarded handle.
//!
//! The guard always leaves the handle on `darkMode = "class"`.  A manifest that
//! still says `"media"` makes the build tool emit media-query dark styles that
//! the class toggle never activates, so the bootstrap binary warns about it.

use theme_core::{BuildManifest, ConfigHandle, DarkMode};

/// A disagreement between the manifest and the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DarkModeMismatch {
    pub manifest: DarkMode,
    pub handle: Option<DarkMode>,
}

/// Returns the mismatch, or `None` when both sides use the same strategy.
pub fn dark_mode_mismatch(
    manifest: &BuildManifest,
    handle: &ConfigHandle,
) -> Option<DarkModeMismatch> {
    if handle.dark_mode() == Some(manifest.dark_mode) {
        return None;
    }
    Some(DarkModeMismatch {
        manifest: manifest.dark_mode,
        handle: handle.dark_mode(),
    })
}
