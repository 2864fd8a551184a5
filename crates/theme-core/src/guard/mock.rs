//! Recording diagnostic sink for unit testing.
//!
//! # Why a recording sink?
//!
//! The production sink forwards notices to `tracing`, which tests cannot
//! observe without installing a global subscriber.  `RecordingDiagnostics`
//! pushes each message into a `Mutex<Vec<String>>` so assertions can check
//! exactly which notices were raised and how many.
//!
//! # Usage in tests
//!
//! ```
//! use theme_core::guard::mock::RecordingDiagnostics;
//! use theme_core::ensure_theme_config;
//!
//! let diagnostics = RecordingDiagnostics::new();
//! ensure_theme_config(None, &diagnostics);
//! assert_eq!(diagnostics.count(), 1);
//! ```

use std::sync::Mutex;

use super::DiagnosticSink;

/// A sink that records every notice instead of logging it.
#[derive(Default)]
pub struct RecordingDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded message, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Returns how many notices were recorded.
    pub fn count(&self) -> usize {
        self.messages.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Forgets every recorded message.
    pub fn clear(&self) {
        if let Ok(mut m) = self.messages.lock() {
            m.clear();
        }
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn notice(&self, message: &str) {
        if let Ok(mut m) = self.messages.lock() {
            m.push(message.to_string());
        }
    }
}
