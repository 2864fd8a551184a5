//! BootstrapUseCase: constructs the theme handle once at application startup.
//!
//! The handle is never bound to a process-wide global.  Instead this use case
//! loads whatever a previous initializer left behind through a [`HandleStore`],
//! runs [`ensure_theme_config`] on it, writes the result back, and hands the
//! handle to the caller so it can be passed explicitly to its consumers.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use theme_core::{ensure_theme_config, ConfigHandle, DiagnosticSink};

/// Error type for handle persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing theme handle at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored handle is not valid JSON or has an unrecognized `darkMode`.
    #[error("failed to parse theme handle at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The handle could not be serialized.
    #[error("failed to serialize theme handle: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Error type for the bootstrap use case.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// No prior handle existed and the policy forbids creating one.
    #[error("no prior theme configuration found and absent_policy is \"error\"")]
    MissingHandle,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What to do when no prior handle exists.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AbsentPolicy {
    /// Create the handle and emit an informational notice.
    #[default]
    Notice,
    /// Treat the missing handle as a setup error.
    Error,
}

/// Persistence port for the theme handle.
#[cfg_attr(test, mockall::automock)]
pub trait HandleStore {
    /// Loads the prior handle, or `None` if nothing has been stored yet.
    fn load(&self) -> Result<Option<ConfigHandle>, StoreError>;

    /// Persists `handle`, replacing whatever was stored before.
    fn save(&self, handle: &ConfigHandle) -> Result<(), StoreError>;
}

/// Result of a successful bootstrap run.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapReport {
    /// `true` if no prior handle existed and a new one was created.
    pub created: bool,
    /// The handle as it was persisted.
    pub handle: ConfigHandle,
}

/// The Bootstrap use case.
pub struct BootstrapUseCase {
    store: Box<dyn HandleStore>,
    diagnostics: Arc<dyn DiagnosticSink>,
    policy: AbsentPolicy,
}

impl BootstrapUseCase {
    /// Creates a new use case over the given store and diagnostic sink.
    pub fn new(
        store: Box<dyn HandleStore>,
        diagnostics: Arc<dyn DiagnosticSink>,
        policy: AbsentPolicy,
    ) -> Self {
        Self {
            store,
            diagnostics,
            policy,
        }
    }

    /// Loads, guards, and saves the handle.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::MissingHandle`] when nothing is stored and the
    /// policy is [`AbsentPolicy::Error`]; nothing is written in that case.
    /// Returns [`BootstrapError::Store`] if loading or saving fails.
    pub fn run(&self) -> Result<BootstrapReport, BootstrapError> {
        let prior = self.store.load()?;

        if prior.is_none() && self.policy == AbsentPolicy::Error {
            return Err(BootstrapError::MissingHandle);
        }
        debug!(present = prior.is_some(), "loaded prior theme handle");

        let outcome = ensure_theme_config(prior, self.diagnostics.as_ref());
        let created = outcome.is_fresh();
        let handle = outcome.into_handle();

        self.store.save(&handle)?;
        info!(created, "theme configuration ready");

        Ok(BootstrapReport { created, handle })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use serde_json::json;
    use theme_core::guard::mock::RecordingDiagnostics;
    use theme_core::DarkMode;

    fn use_case(
        store: MockHandleStore,
        policy: AbsentPolicy,
    ) -> (BootstrapUseCase, Arc<RecordingDiagnostics>) {
        let diagnostics = Arc::new(RecordingDiagnostics::new());
        let uc = BootstrapUseCase::new(Box::new(store), diagnostics.clone(), policy);
        (uc, diagnostics)
    }

    #[test]
    fn test_absent_handle_is_created_and_saved() {
        // Arrange
        let mut store = MockHandleStore::new();
        store.expect_load().times(1).returning(|| Ok(None));
        store
            .expect_save()
            .with(eq(ConfigHandle::with_dark_mode(DarkMode::Class)))
            .times(1)
            .returning(|_| Ok(()));
        let (uc, diagnostics) = use_case(store, AbsentPolicy::Notice);

        // Act
        let report = uc.run().expect("bootstrap must succeed");

        // Assert
        assert!(report.created);
        assert_eq!(report.handle.dark_mode(), Some(DarkMode::Class));
        assert_eq!(diagnostics.count(), 1);
    }

    #[test]
    fn test_present_handle_is_merged_and_saved() {
        // Arrange
        let mut prior = ConfigHandle::with_dark_mode(DarkMode::Media);
        prior.set_field("other", json!(42)).expect("free-form key");
        let mut expected = prior.clone();
        expected.set_dark_mode(DarkMode::Class);

        let mut store = MockHandleStore::new();
        store
            .expect_load()
            .times(1)
            .returning(move || Ok(Some(prior.clone())));
        store
            .expect_save()
            .with(eq(expected.clone()))
            .times(1)
            .returning(|_| Ok(()));
        let (uc, diagnostics) = use_case(store, AbsentPolicy::Error);

        // Act
        let report = uc.run().expect("bootstrap must succeed");

        // Assert
        assert!(!report.created);
        assert_eq!(report.handle, expected);
        assert_eq!(diagnostics.count(), 0);
    }

    #[test]
    fn test_error_policy_rejects_absent_handle_without_saving() {
        // Arrange
        let mut store = MockHandleStore::new();
        store.expect_load().times(1).returning(|| Ok(None));
        store.expect_save().never();
        let (uc, diagnostics) = use_case(store, AbsentPolicy::Error);

        // Act
        let result = uc.run();

        // Assert
        assert!(matches!(result, Err(BootstrapError::MissingHandle)));
        assert_eq!(diagnostics.count(), 0);
    }

    #[test]
    fn test_load_failure_is_propagated() {
        let mut store = MockHandleStore::new();
        store.expect_load().returning(|| {
            Err(StoreError::Io {
                path: PathBuf::from("/locked/theme-handle.json"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        });
        store.expect_save().never();
        let (uc, _) = use_case(store, AbsentPolicy::Notice);

        let err = uc.run().unwrap_err();

        assert!(matches!(err, BootstrapError::Store(StoreError::Io { .. })));
        assert!(err.to_string().contains("/locked/theme-handle.json"));
    }

    #[test]
    fn test_absent_policy_deserializes_from_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: AbsentPolicy,
        }
        let w: Wrapper = toml::from_str("policy = \"error\"").expect("deserialize");
        assert_eq!(w.policy, AbsentPolicy::Error);
        assert_eq!(AbsentPolicy::default(), AbsentPolicy::Notice);
    }
}
