//! Storage infrastructure: handle, manifest, and settings file persistence.
//!
//! - `handle_file` reads and writes the JSON theme handle.
//! - `manifest_file` reads the build manifest in JSON or TOML form.
//! - `settings` reads and writes the TOML settings file from the
//!   platform-appropriate directory, falling back to defaults on first run.

pub mod handle_file;
pub mod manifest_file;
pub mod settings;
