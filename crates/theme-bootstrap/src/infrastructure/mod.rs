//! Infrastructure layer for the bootstrap binary.
//!
//! Contains file-system adapters (handle file, manifest file, settings file)
//! and the `tracing`-backed diagnostic sink.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `theme_core`, but MUST NOT be imported by the `application` layer.

pub mod diagnostics;
pub mod storage;
