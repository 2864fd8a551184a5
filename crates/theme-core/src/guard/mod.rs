//! The theme-config guard: create the handle if absent, otherwise extend it.
//!
//! The guard must be safe to run whether or not a host environment (or another
//! initializer) populated the handle first.  It is a merge, not an
//! authoritative write:
//!
//! ```text
//! prior handle?
//!  ├─ None        → Fresh  { config: { darkMode: "class" } }   + one notice
//!  └─ Some(h)     → Merged h with h.config.darkMode = "class"  (no notice)
//! ```
//!
//! Either way the result satisfies `handle.config.darkMode == Class`, and
//! running the guard again on that result changes nothing.

use tracing::debug;

use crate::domain::dark_mode::DarkMode;
use crate::domain::handle::ConfigHandle;

pub mod mock;

/// The message emitted when no prior handle exists.
pub const NO_PRIOR_CONFIG_NOTICE: &str =
    "no prior theme configuration found; creating one with darkMode = \"class\"";

/// The dark-mode strategy the guard enforces.
pub const ENFORCED_DARK_MODE: DarkMode = DarkMode::Class;

/// Receiver for informational diagnostics raised by the guard.
///
/// The infrastructure layer forwards these to the log; tests record them with
/// [`mock::RecordingDiagnostics`].
pub trait DiagnosticSink: Send + Sync {
    /// Reports an informational notice.  Never an error.
    fn notice(&self, message: &str);
}

/// Which branch the guard took, carrying the resulting handle.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    /// No prior handle existed; a new one was created.
    Fresh(ConfigHandle),
    /// A prior handle existed and was extended in place.
    Merged(ConfigHandle),
}

impl GuardOutcome {
    /// Returns `true` if the handle was created by this run.
    pub fn is_fresh(&self) -> bool {
        matches!(self, GuardOutcome::Fresh(_))
    }

    /// Borrows the resulting handle.
    pub fn handle(&self) -> &ConfigHandle {
        match self {
            GuardOutcome::Fresh(h) | GuardOutcome::Merged(h) => h,
        }
    }

    /// Consumes the outcome, returning the resulting handle.
    pub fn into_handle(self) -> ConfigHandle {
        match self {
            GuardOutcome::Fresh(h) | GuardOutcome::Merged(h) => h,
        }
    }
}

/// Ensures a handle exists with `config.darkMode = "class"`.
///
/// When `prior` is `None` a new handle is created and exactly one notice is
/// sent to `diagnostics`.  When `prior` is `Some`, only `config.darkMode` is
/// overwritten; every other field is left as it was and no notice is sent.
pub fn ensure_theme_config(
    prior: Option<ConfigHandle>,
    diagnostics: &dyn DiagnosticSink,
) -> GuardOutcome {
    match prior {
        None => {
            diagnostics.notice(NO_PRIOR_CONFIG_NOTICE);
            GuardOutcome::Fresh(ConfigHandle::with_dark_mode(ENFORCED_DARK_MODE))
        }
        Some(mut handle) => {
            if handle.dark_mode() != Some(ENFORCED_DARK_MODE) {
                debug!(
                    previous = ?handle.config.dark_mode,
                    "overriding dark mode strategy on existing theme configuration"
                );
            }
            handle.set_dark_mode(ENFORCED_DARK_MODE);
            GuardOutcome::Merged(handle)
        }
    }
}

/// In-place form of [`ensure_theme_config`] for callers holding the handle in
/// an `Option` slot.
///
/// After the call `slot` is always `Some`.  Returns `true` if the handle was
/// freshly created.
pub fn apply_theme_guard(slot: &mut Option<ConfigHandle>, diagnostics: &dyn DiagnosticSink) -> bool {
    let outcome = ensure_theme_config(slot.take(), diagnostics);
    let fresh = outcome.is_fresh();
    *slot = Some(outcome.into_handle());
    fresh
}
