//! Dark-mode activation strategy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ThemeError;

/// How the build tool switches the alternate (dark) theme on.
///
/// Serialized as the lowercase strings `"class"` and `"media"`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Dark styles apply when a marker class is present on an ancestor element.
    Class,
    /// Dark styles follow the operating system's colour-scheme media query.
    #[default]
    Media,
}

impl DarkMode {
    /// Returns the wire string for this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            DarkMode::Class => "class",
            DarkMode::Media => "media",
        }
    }
}

impl fmt::Display for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DarkMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(DarkMode::Class),
            "media" => Ok(DarkMode::Media),
            other => Err(ThemeError::UnknownDarkMode(other.to_string())),
        }
    }
}

/// A `darkMode` value as found in a stored handle.
///
/// Other initializers may write strategies this crate does not model, such as
/// `"selector"` or the array form `["class", ".dark"]`.  Those load as
/// [`DarkModeSetting::Other`] and are written back verbatim unless overwritten.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DarkModeSetting {
    Known(DarkMode),
    Other(Value),
}

impl DarkModeSetting {
    /// Returns the strategy if it is one of the recognized ones.
    pub fn known(&self) -> Option<DarkMode> {
        match self {
            DarkModeSetting::Known(mode) => Some(*mode),
            DarkModeSetting::Other(_) => None,
        }
    }
}

impl From<DarkMode> for DarkModeSetting {
    fn from(mode: DarkMode) -> Self {
        DarkModeSetting::Known(mode)
    }
}
