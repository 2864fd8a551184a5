//! ThemeGuard bootstrap binary entry point.
//!
//! Runs once at application startup: loads the theme handle left by any
//! earlier initializer, guarantees `config.darkMode = "class"` on it, writes
//! it back, and optionally validates the build manifest against it.
//!
//! # Usage
//!
//! ```text
//! themeguard [OPTIONS]
//!
//! Options:
//!   --handle    <PATH>   Theme handle JSON file
//!   --manifest  <PATH>   Build manifest (.json or .toml) to validate
//!   --settings  <PATH>   Settings TOML file [default: platform config dir]
//!   --strict             Fail if no prior handle exists
//!   --log-level <LEVEL>  Log level when RUST_LOG is unset
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                    | Description              |
//! |-----------------------------|--------------------------|
//! | `THEMEGUARD_HANDLE_PATH`    | Theme handle JSON file   |
//! | `THEMEGUARD_MANIFEST_PATH`  | Build manifest file      |
//! | `THEMEGUARD_SETTINGS`       | Settings TOML file       |
//!
//! CLI args take precedence over environment variables, which take
//! precedence over the settings file.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use theme_bootstrap::application::bootstrap::BootstrapUseCase;
use theme_bootstrap::application::reconcile::dark_mode_mismatch;
use theme_bootstrap::cli::Cli;
use theme_bootstrap::infrastructure::diagnostics::TracingDiagnostics;
use theme_bootstrap::infrastructure::storage::handle_file::JsonHandleStore;
use theme_bootstrap::infrastructure::storage::manifest_file::load_manifest;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.load_settings().context("failed to load settings")?;
    let invocation = cli
        .resolve(&settings)
        .context("failed to resolve theme handle path")?;

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&invocation.log_level)),
        )
        .init();

    let handle_path = &invocation.handle_path;
    info!(
        path = %handle_path.display(),
        policy = ?invocation.policy,
        "bootstrapping theme configuration"
    );

    let use_case = BootstrapUseCase::new(
        Box::new(JsonHandleStore::new(handle_path)),
        Arc::new(TracingDiagnostics),
        invocation.policy,
    );
    let report = use_case
        .run()
        .with_context(|| format!("theme bootstrap failed for {}", handle_path.display()))?;

    if let Some(path) = &invocation.manifest_path {
        let manifest = load_manifest(path)
            .with_context(|| format!("invalid build manifest {}", path.display()))?;
        info!(
            path = %path.display(),
            patterns = manifest.content.files.len(),
            plugins = manifest.plugins.len(),
            "build manifest validated"
        );
        if let Some(mismatch) = dark_mode_mismatch(&manifest, &report.handle) {
            warn!(
                manifest = %mismatch.manifest,
                handle = ?mismatch.handle,
                "build manifest darkMode disagrees with the theme handle"
            );
        }
    }

    Ok(())
}
