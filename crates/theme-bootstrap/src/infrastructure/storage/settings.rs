//! TOML-based settings for the bootstrap binary.
//!
//! Reads and writes `Settings` from the platform-appropriate config file:
//! - Windows:  `%APPDATA%\ThemeGuard\settings.toml`
//! - Linux:    `~/.config/themeguard/settings.toml`
//! - macOS:    `~/Library/Application Support/ThemeGuard/settings.toml`
//!
//! Example:
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [paths]
//! handle_file = "/srv/app/theme-handle.json"
//! manifest_file = "/srv/app/manifest.toml"
//!
//! [guard]
//! absent_policy = "error"
//! ```
//!
//! # Serde default values
//!
//! Every section and field carries a `#[serde(default)]`, so an empty file,
//! a missing file, or a file written by an older version all load cleanly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::application::bootstrap::AbsentPolicy;

/// File name of the handle inside the config directory when no path is set.
pub const DEFAULT_HANDLE_FILE: &str = "theme-handle.json";

const SETTINGS_FILE: &str = "settings.toml";

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings could not be serialized to TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Settings schema types ─────────────────────────────────────────────────────

/// Top-level settings stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub paths: PathSettings,
    #[serde(default)]
    pub guard: GuardSettings,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// `tracing` level filter: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// File locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathSettings {
    /// Theme handle file.  Defaults to `theme-handle.json` in the config dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_file: Option<PathBuf>,
    /// Build manifest to validate after bootstrap, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_file: Option<PathBuf>,
}

/// Guard behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GuardSettings {
    #[serde(default)]
    pub absent_policy: AbsentPolicy,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Settings {
    /// Resolves the handle file path: `override_path` wins, then the settings
    /// value, then the default location in the config directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoPlatformConfigDir`] only when the default
    /// location is needed and cannot be determined.
    pub fn handle_path(&self, override_path: Option<&Path>) -> Result<PathBuf, ConfigError> {
        self.handle_path_in(override_path, platform_config_dir().as_deref())
    }

    /// [`Settings::handle_path`] against an explicit config directory.
    pub fn handle_path_in(
        &self,
        override_path: Option<&Path>,
        config_dir: Option<&Path>,
    ) -> Result<PathBuf, ConfigError> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.paths.handle_file {
            return Ok(path.clone());
        }
        config_dir
            .map(|dir| dir.join(DEFAULT_HANDLE_FILE))
            .ok_or(ConfigError::NoPlatformConfigDir)
    }
}

// ── Settings repository ───────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the settings file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the settings file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn settings_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(SETTINGS_FILE))
}

/// Loads `Settings` from the platform settings file.
///
/// Falls back to `Settings::default()` when the platform config directory
/// cannot be determined; a handle path given on the command line or in the
/// environment does not need it.
///
/// # Errors
///
/// See [`load_settings_from`].
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_in(platform_config_dir().as_deref())
}

/// Loads `settings.toml` from `config_dir`, or defaults when there is none.
///
/// # Errors
///
/// See [`load_settings_from`].
pub fn load_settings_in(config_dir: Option<&Path>) -> Result<Settings, ConfigError> {
    match config_dir {
        Some(dir) => load_settings_from(&dir.join(SETTINGS_FILE)),
        None => {
            debug!("no platform config directory; using default settings");
            Ok(Settings::default())
        }
    }
}

/// Loads `Settings` from `path`, returning `Settings::default()` if the file
/// does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Persists `settings` to `path`, creating the parent directory if needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(settings)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the platform config base directory including the `ThemeGuard` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("ThemeGuard"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("themeguard"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("ThemeGuard")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_settings_default_values() {
        // Arrange / Act
        let settings = Settings::default();

        // Assert
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.guard.absent_policy, AbsentPolicy::Notice);
        assert!(settings.paths.handle_file.is_none());
        assert!(settings.paths.manifest_file.is_none());
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let settings: Settings = toml::from_str("").expect("deserialize empty");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_deserialize_partial_toml_overrides_defaults() {
        // Arrange
        let toml_str = r#"
[guard]
absent_policy = "error"
"#;

        // Act
        let settings: Settings = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(settings.guard.absent_policy, AbsentPolicy::Error);
        // Unspecified sections keep their defaults
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_deserialize_invalid_toml_returns_parse_error() {
        let dir = std::env::temp_dir().join(format!("themeguard_settings_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "[[[ not valid toml").unwrap();

        let result = load_settings_from(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_settings_returns_default_when_file_absent() {
        let path = PathBuf::from("/nonexistent/path/that/cannot/exist/settings.toml");
        let settings = load_settings_from(&path).expect("absent file is not an error");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load_settings_round_trip_via_temp_dir() {
        // Arrange
        let dir = std::env::temp_dir().join(format!("themeguard_settings_{}", Uuid::new_v4()));
        let path = dir.join("settings.toml");
        let mut settings = Settings::default();
        settings.logging.level = "debug".to_string();
        settings.paths.handle_file = Some(PathBuf::from("/srv/app/theme-handle.json"));
        settings.guard.absent_policy = AbsentPolicy::Error;

        // Act
        save_settings_to(&settings, &path).expect("save");
        let loaded = load_settings_from(&path).expect("load");

        // Assert
        assert_eq!(loaded, settings);

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unset_paths_are_omitted_from_toml() {
        let toml_str = toml::to_string_pretty(&Settings::default()).expect("serialize");
        assert!(!toml_str.contains("handle_file"));
        assert!(!toml_str.contains("manifest_file"));
    }

    #[test]
    fn test_handle_path_precedence() {
        // Arrange
        let mut settings = Settings::default();
        settings.paths.handle_file = Some(PathBuf::from("/from/settings.json"));

        // Act / Assert – explicit override beats the settings value
        let explicit = settings
            .handle_path(Some(Path::new("/from/cli.json")))
            .expect("resolve");
        assert_eq!(explicit, PathBuf::from("/from/cli.json"));

        let configured = settings.handle_path(None).expect("resolve");
        assert_eq!(configured, PathBuf::from("/from/settings.json"));
    }

    #[test]
    fn test_handle_path_defaults_into_config_dir() {
        let settings = Settings::default();
        // If NoPlatformConfigDir is returned (e.g. in a stripped CI env) that is also acceptable.
        if let Ok(path) = settings.handle_path(None) {
            assert!(path.ends_with(DEFAULT_HANDLE_FILE));
        }
    }

    #[test]
    fn test_load_settings_without_config_dir_uses_defaults() {
        let settings = load_settings_in(None).expect("no config dir is not an error");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_reads_file_in_config_dir() {
        // Arrange
        let dir = std::env::temp_dir().join(format!("themeguard_settings_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("settings.toml"), "[logging]\nlevel = \"warn\"\n").unwrap();

        // Act
        let settings = load_settings_in(Some(&dir)).expect("load");

        // Assert
        assert_eq!(settings.logging.level, "warn");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_handle_path_without_config_dir_needs_explicit_path() {
        // Arrange
        let mut settings = Settings::default();

        // Act / Assert – the override and the settings value need no config dir
        let explicit = settings
            .handle_path_in(Some(Path::new("/from/cli.json")), None)
            .expect("override needs no config dir");
        assert_eq!(explicit, PathBuf::from("/from/cli.json"));

        settings.paths.handle_file = Some(PathBuf::from("/from/settings.json"));
        let configured = settings.handle_path_in(None, None).expect("resolve");
        assert_eq!(configured, PathBuf::from("/from/settings.json"));

        // Only the default location fails
        settings.paths.handle_file = None;
        let result = settings.handle_path_in(None, None);
        assert!(matches!(result, Err(ConfigError::NoPlatformConfigDir)));
    }

    #[test]
    fn test_handle_path_in_uses_given_config_dir() {
        let path = Settings::default()
            .handle_path_in(None, Some(Path::new("/etc/themeguard")))
            .expect("resolve");
        assert_eq!(path, PathBuf::from("/etc/themeguard/theme-handle.json"));
    }

    #[test]
    fn test_settings_file_path_ends_with_settings_toml() {
        if let Ok(path) = settings_file_path() {
            assert!(
                path.ends_with("settings.toml"),
                "settings file must be named settings.toml, got {path:?}"
            );
        }
    }
}
