//! JSON-file persistence for the theme handle.
//!
//! The file holds exactly the handle record, pretty-printed:
//!
//! ```json
//! {
//!   "config": {
//!     "darkMode": "class"
//!   },
//!   "plugins": []
//! }
//! ```
//!
//! A missing file means "no prior handle".  Fields written by other tools are
//! carried through unchanged.

use std::path::{Path, PathBuf};

use tracing::debug;

use theme_core::ConfigHandle;

use crate::application::bootstrap::{HandleStore, StoreError};

/// [`HandleStore`] backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonHandleStore {
    path: PathBuf,
}

impl JsonHandleStore {
    /// Creates a store for the file at `path`.  Nothing is read until
    /// [`HandleStore::load`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HandleStore for JsonHandleStore {
    fn load(&self) -> Result<Option<ConfigHandle>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let handle =
                    serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                        path: self.path.clone(),
                        source,
                    })?;
                Ok(Some(handle))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "theme handle file not found");
                Ok(None)
            }
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&self, handle: &ConfigHandle) -> Result<(), StoreError> {
        // Ensure directory exists before writing.
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let mut content = serde_json::to_string_pretty(handle).map_err(StoreError::Serialize)?;
        content.push('\n');
        std::fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
