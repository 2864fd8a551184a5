//! Command-line surface of the `themeguard` binary.
//!
//! Parsing lives here rather than in `main.rs` so that precedence between
//! flags, environment variables, and the settings file can be tested.
//!
//! Precedence, highest first:
//!
//! 1. CLI flags (`--handle`, `--manifest`, `--strict`, ...)
//! 2. Environment variables (`THEMEGUARD_HANDLE_PATH`, ...)
//! 3. The settings file
//! 4. Built-in defaults

use std::path::PathBuf;

use clap::Parser;

use crate::application::bootstrap::AbsentPolicy;
use crate::infrastructure::storage::settings::{
    load_settings, load_settings_from, ConfigError, Settings,
};

/// Ensures the theme configuration handle exists with class-based dark mode.
#[derive(Debug, Parser)]
#[command(
    name = "themeguard",
    about = "Create or extend the theme configuration handle at startup",
    version
)]
pub struct Cli {
    /// Theme handle JSON file to create or extend.
    #[arg(long, env = "THEMEGUARD_HANDLE_PATH")]
    pub handle: Option<PathBuf>,

    /// Build manifest to validate after the handle is guarded.
    #[arg(long, env = "THEMEGUARD_MANIFEST_PATH")]
    pub manifest: Option<PathBuf>,

    /// Settings file.  Defaults to `settings.toml` in the platform config dir.
    #[arg(long, env = "THEMEGUARD_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Treat a missing handle as an error instead of creating one.
    #[arg(long)]
    pub strict: bool,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Everything one bootstrap run needs, after precedence is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub handle_path: PathBuf,
    pub policy: AbsentPolicy,
    pub manifest_path: Option<PathBuf>,
    pub log_level: String,
}

impl Cli {
    /// Loads the settings file named by `--settings`, or the platform one.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`] from the settings loader.
    pub fn load_settings(&self) -> Result<Settings, ConfigError> {
        match &self.settings {
            Some(path) => load_settings_from(path),
            None => load_settings(),
        }
    }

    /// Merges the parsed arguments over `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoPlatformConfigDir`] when no handle path was
    /// given anywhere and the default location cannot be determined.
    pub fn resolve(&self, settings: &Settings) -> Result<Invocation, ConfigError> {
        let handle_path = settings.handle_path(self.handle.as_deref())?;
        let policy = if self.strict {
            AbsentPolicy::Error
        } else {
            settings.guard.absent_policy
        };
        let manifest_path = self
            .manifest
            .clone()
            .or_else(|| settings.paths.manifest_file.clone());
        let log_level = self
            .log_level
            .clone()
            .unwrap_or_else(|| settings.logging.level.clone());

        Ok(Invocation {
            handle_path,
            policy,
            manifest_path,
            log_level,
        })
    }
}
