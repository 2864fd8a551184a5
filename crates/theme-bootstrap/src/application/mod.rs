//! Application layer use cases for the bootstrap binary.
//!
//! Use cases here orchestrate `theme_core` types and depend only on traits
//! ([`bootstrap::HandleStore`], [`theme_core::DiagnosticSink`]); the concrete
//! file and logging adapters live in `infrastructure`.
//!
//! - **`bootstrap`** – Loads the prior handle (if any), runs the guard, and
//!   persists the result.
//!
//! - **`reconcile`** – Compares the build manifest's dark-mode strategy with
//!   the guarded handle.

pub mod bootstrap;
pub mod reconcile;
