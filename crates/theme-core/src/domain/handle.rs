//! The theme configuration handle.
//!
//! The handle is the record a utility-class build tool consults for its
//! runtime settings.  Its minimal shape is:
//!
//! ```json
//! { "config": { "darkMode": "class" } }
//! ```
//!
//! Any other field, at the top level or inside `config`, belongs to whichever
//! initializer wrote it.  Those fields are captured with `#[serde(flatten)]`
//! into a JSON map so they survive a load/modify/save cycle untouched and in
//! their original order.
//!
//! Loading is lenient: a `darkMode` this crate does not model is kept as
//! [`DarkModeSetting::Other`], and a `config` that is not an object (e.g.
//! `null`) loads as an empty [`ThemeConfig`].  A prior handle therefore never
//! fails to load just because another initializer used a different shape.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::dark_mode::{DarkMode, DarkModeSetting};
use super::ThemeError;

const CONFIG_KEY: &str = "config";
const DARK_MODE_KEY: &str = "darkMode";

/// The nested `config` record of a [`ConfigHandle`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    /// Dark-mode activation strategy.  `None` when a prior initializer never
    /// set it.
    #[serde(rename = "darkMode", default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<DarkModeSetting>,

    /// Every other `config` field, preserved verbatim.  Never holds `darkMode`.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ThemeConfig {
    /// Creates a config holding only the given dark-mode strategy.
    pub fn with_dark_mode(mode: DarkMode) -> Self {
        Self {
            dark_mode: Some(mode.into()),
            extra: Map::new(),
        }
    }

    /// Returns the dark-mode strategy if it is set to a recognized value.
    pub fn dark_mode(&self) -> Option<DarkMode> {
        self.dark_mode.as_ref().and_then(DarkModeSetting::known)
    }

    /// All fields other than `darkMode`.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Returns a field other than `darkMode`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Sets a field other than `darkMode`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ReservedField`] for `darkMode`; use
    /// [`ThemeConfig::dark_mode`] (the field) to change it.
    pub fn set_field(
        &mut self,
        key: impl Into<String>,
        value: Value,
    ) -> Result<Option<Value>, ThemeError> {
        let key = key.into();
        if key == DARK_MODE_KEY {
            return Err(ThemeError::ReservedField(key));
        }
        Ok(self.extra.insert(key, value))
    }
}

/// A shared, named reference to the mutable theme settings record.
///
/// Built once at bootstrap and passed explicitly to whatever needs it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConfigHandle {
    /// Build-tool settings.  A prior handle without a `config` object is
    /// treated as having an empty one.
    #[serde(default, deserialize_with = "lenient_config")]
    pub config: ThemeConfig,

    /// Top-level fields other than `config` (e.g. `plugins`), preserved
    /// verbatim.  Never holds `config`.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ConfigHandle {
    /// Creates a handle whose only content is `config.darkMode = mode`.
    pub fn with_dark_mode(mode: DarkMode) -> Self {
        Self {
            config: ThemeConfig::with_dark_mode(mode),
            extra: Map::new(),
        }
    }

    /// Returns the configured dark-mode strategy, if set to a recognized value.
    pub fn dark_mode(&self) -> Option<DarkMode> {
        self.config.dark_mode()
    }

    /// Overwrites `config.darkMode`, leaving every other field alone.
    pub fn set_dark_mode(&mut self, mode: DarkMode) {
        self.config.dark_mode = Some(mode.into());
    }

    /// All top-level fields other than `config`.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Returns a top-level field other than `config`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Sets a top-level field, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ReservedField`] for `config`; use
    /// [`ConfigHandle::config`] to change it.
    pub fn set_field(
        &mut self,
        key: impl Into<String>,
        value: Value,
    ) -> Result<Option<Value>, ThemeError> {
        let key = key.into();
        if key == CONFIG_KEY {
            return Err(ThemeError::ReservedField(key));
        }
        Ok(self.extra.insert(key, value))
    }
}

/// Accepts any JSON value for `config`; non-objects become an empty config.
fn lenient_config<'de, D>(deserializer: D) -> Result<ThemeConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        debug!(found = %value, "theme handle config is not an object; replacing it");
        return Ok(ThemeConfig::default());
    }
    ThemeConfig::deserialize(value).map_err(serde::de::Error::custom)
}
