//! Loading the build manifest from disk.
//!
//! The format is chosen by file extension: `.json` or `.toml`.  The manifest
//! is validated after parsing so that a typo in a content glob surfaces at
//! bootstrap rather than as a silently empty stylesheet.

use std::path::{Path, PathBuf};

use thiserror::Error;

use theme_core::{BuildManifest, ThemeError};

/// Error type for manifest loading.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The extension is neither `.json` nor `.toml`.
    #[error("unsupported manifest format for {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    /// A file system I/O error occurred.
    #[error("I/O error reading manifest at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML manifest: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] ThemeError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ManifestFormat {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Option<ManifestFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Some(ManifestFormat::Json),
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(ManifestFormat::Toml),
        _ => None,
    }
}

/// Reads, parses, and validates the manifest at `path`.
///
/// # Errors
///
/// Returns [`ManifestError::UnsupportedFormat`] for unknown extensions,
/// [`ManifestError::Io`] if the file cannot be read, a parse variant for
/// malformed content, and [`ManifestError::Invalid`] if validation fails.
pub fn load_manifest(path: &Path) -> Result<BuildManifest, ManifestError> {
    let format =
        format_of(path).ok_or_else(|| ManifestError::UnsupportedFormat(path.to_path_buf()))?;

    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let manifest = parse_manifest(&content, format)?;
    manifest.validate()?;
    Ok(manifest)
}

fn parse_manifest(content: &str, format: ManifestFormat) -> Result<BuildManifest, ManifestError> {
    Ok(match format {
        ManifestFormat::Json => serde_json::from_str(content)?,
        ManifestFormat::Toml => toml::from_str(content)?,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
