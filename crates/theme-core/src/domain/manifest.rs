//! Declarative build manifest consumed by the external utility-class build tool.
//!
//! The manifest is pure data: this crate models and validates it, but never
//! scans the files it lists or generates any styles.  Example (TOML form):
//!
//! ```toml
//! mode = "jit"
//! darkMode = "class"
//! plugins = ["forms"]
//!
//! [content]
//! files = ["./src/**/*.rs", "./index.html"]
//!
//! [theme.extend.colors]
//! brand = "#0f766e"
//!
//! [variants.extend]
//! opacity = ["disabled"]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::dark_mode::DarkMode;
use super::ThemeError;

/// Generation strategy of the external build tool.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BuildMode {
    /// Styles are generated on demand for the classes actually found.
    #[serde(rename = "jit")]
    OnDemand,
    /// Every utility is generated up front and unused ones purged afterwards.
    #[serde(rename = "full")]
    FullScan,
}

/// The `content` section: which source files the build tool scans.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Ordered glob patterns, relative to the project root.
    #[serde(default)]
    pub files: Vec<String>,
}

/// A section whose only key is `extend`, layered on top of the tool's defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExtendSection<T> {
    #[serde(default = "BTreeMap::new")]
    pub extend: BTreeMap<String, T>,
}

impl<T> Default for ExtendSection<T> {
    fn default() -> Self {
        Self {
            extend: BTreeMap::new(),
        }
    }
}

/// The build manifest record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BuildManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<BuildMode>,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(rename = "darkMode", default)]
    pub dark_mode: DarkMode,

    /// Design-token overrides (`colors`, `spacing`, ...).  Values are kept as
    /// opaque JSON because their shape is defined by the build tool.
    #[serde(default)]
    pub theme: ExtendSection<Value>,

    /// Extra state variants to generate, keyed by utility name.
    #[serde(default)]
    pub variants: ExtendSection<Vec<String>>,

    /// Ordered list of plugin names the build tool loads.
    #[serde(default)]
    pub plugins: Vec<String>,
}

impl BuildManifest {
    /// A manifest for a Rust front-end crate: on-demand generation, class-based
    /// dark mode, scanning Rust sources and the HTML shell.
    pub fn rust_project() -> Self {
        Self {
            mode: Some(BuildMode::OnDemand),
            content: ContentConfig {
                files: vec!["./src/**/*.rs".to_string(), "./index.html".to_string()],
            },
            dark_mode: DarkMode::Class,
            ..Self::default()
        }
    }

    /// Checks the manifest for mistakes the build tool would only report late
    /// or silently ignore.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidManifest`] if `content.files` is empty, if
    /// any entry is not a valid glob pattern, or if a plugin name is blank.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.content.files.is_empty() {
            return Err(ThemeError::InvalidManifest(
                "content.files must list at least one pattern".to_string(),
            ));
        }

        for pattern in &self.content.files {
            if pattern.trim().is_empty() {
                return Err(ThemeError::InvalidManifest(
                    "content.files contains an empty pattern".to_string(),
                ));
            }
            glob::Pattern::new(pattern).map_err(|e| {
                ThemeError::InvalidManifest(format!("content pattern {pattern:?}: {e}"))
            })?;
        }

        if let Some(index) = self.plugins.iter().position(|p| p.trim().is_empty()) {
            return Err(ThemeError::InvalidManifest(format!(
                "plugins[{index}] is blank"
            )));
        }

        Ok(())
    }

    /// Returns `true` if `path` matches any `content.files` pattern.
    ///
    /// Invalid patterns never match; call [`BuildManifest::validate`] first to
    /// surface them.
    pub fn covers(&self, path: &str) -> bool {
        self.content
            .files
            .iter()
            .filter_map(|p| glob::Pattern::new(p).ok())
            .any(|p| p.matches(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rust_project_manifest_is_valid() {
        let manifest = BuildManifest::rust_project();
        assert_eq!(manifest.validate(), Ok(()));
        assert_eq!(manifest.dark_mode, DarkMode::Class);
        assert_eq!(manifest.mode, Some(BuildMode::OnDemand));
    }

    #[test]
    fn test_validate_rejects_empty_content() {
        // Arrange
        let manifest = BuildManifest::default();

        // Act
        let result = manifest.validate();

        // Assert
        assert!(matches!(result, Err(ThemeError::InvalidManifest(_))));
    }

    #[test]
    fn test_validate_rejects_malformed_glob() {
        let mut manifest = BuildManifest::rust_project();
        manifest.content.files.push("./src/[abc".to_string());

        let err = manifest.validate().unwrap_err();
        assert!(
            err.to_string().contains("./src/[abc"),
            "error must name the bad pattern, got {err}"
        );
    }

    #[test]
    fn test_validate_rejects_blank_plugin_name() {
        let mut manifest = BuildManifest::rust_project();
        manifest.plugins = vec!["forms".to_string(), "  ".to_string()];

        let err = manifest.validate().unwrap_err();
        assert_eq!(
            err,
            ThemeError::InvalidManifest("plugins[1] is blank".to_string())
        );
    }

    #[test]
    fn test_covers_matches_content_globs() {
        let manifest = BuildManifest::rust_project();
        assert!(manifest.covers("./src/components/button.rs"));
        assert!(manifest.covers("./index.html"));
        assert!(!manifest.covers("./target/debug/build.rs"));
    }

    #[test]
    fn test_deserialize_json_manifest_with_all_options() {
        // Arrange
        let raw = json!({
            "mode": "jit",
            "content": { "files": ["./src/**/*.rs"] },
            "darkMode": "class",
            "theme": { "extend": { "colors": { "brand": "#0f766e" } } },
            "variants": { "extend": { "opacity": ["disabled"] } },
            "plugins": ["forms", "typography"]
        });

        // Act
        let manifest: BuildManifest = serde_json::from_value(raw).expect("deserialize");

        // Assert
        assert_eq!(manifest.mode, Some(BuildMode::OnDemand));
        assert_eq!(manifest.content.files, vec!["./src/**/*.rs"]);
        assert_eq!(manifest.dark_mode, DarkMode::Class);
        assert_eq!(
            manifest.theme.extend.get("colors"),
            Some(&json!({ "brand": "#0f766e" }))
        );
        assert_eq!(
            manifest.variants.extend.get("opacity"),
            Some(&vec!["disabled".to_string()])
        );
        assert_eq!(manifest.plugins, vec!["forms", "typography"]);
    }

    #[test]
    fn test_deserialize_toml_manifest() {
        let toml_str = r##"
mode = "full"
darkMode = "media"
plugins = []

[content]
files = ["./index.html"]

[theme.extend.spacing]
"128" = "32rem"
"##;

        let manifest: BuildManifest = toml::from_str(toml_str).expect("deserialize");

        assert_eq!(manifest.mode, Some(BuildMode::FullScan));
        assert_eq!(manifest.dark_mode, DarkMode::Media);
        assert_eq!(
            manifest.theme.extend.get("spacing"),
            Some(&json!({ "128": "32rem" }))
        );
        assert!(manifest.variants.extend.is_empty());
    }

    #[test]
    fn test_deserialize_minimal_manifest_uses_defaults() {
        let manifest: BuildManifest = serde_json::from_value(json!({})).expect("deserialize");
        assert_eq!(manifest.mode, None);
        assert_eq!(manifest.dark_mode, DarkMode::Media);
        assert!(manifest.content.files.is_empty());
        assert!(manifest.plugins.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_unknown_option() {
        let result: Result<BuildManifest, _> =
            serde_json::from_value(json!({ "purge": ["./src/**/*.rs"] }));
        assert!(result.is_err(), "unrecognized manifest options must be rejected");
    }
}
