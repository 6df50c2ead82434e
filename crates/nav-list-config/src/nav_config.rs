//! Navigation configuration
//!
//! Configuration loaded from .nav-list.toml, holding any number of named
//! list presets:
//!
//! ```toml
//! [lists.zoom]
//! items = [50.0, 100.0, 200.0]
//! default = 100.0
//! mode = "block"
//!
//! [lists.history]
//! items = [1.0, 2.0, 3.0]
//! mode = "wrap"
//! ```

use anyhow::{bail, Context, Result};
use nav_list::NavigationList;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ListPreset;

/// Name of the built-in zoom level preset
pub const ZOOM_PRESET: &str = "zoom";

/// Navigation configuration loaded from .nav-list.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct NavConfig<T> {
    /// Presets by name
    #[serde(default)]
    pub lists: BTreeMap<String, ListPreset<T>>,
}

impl<T> Default for NavConfig<T> {
    fn default() -> Self {
        Self {
            lists: BTreeMap::new(),
        }
    }
}

impl<T: DeserializeOwned + PartialEq> NavConfig<T> {
    /// Parse and validate a config
    ///
    /// Every preset with a default must contain that default among its items.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse navigation config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from CWD first, then config or home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Loaded {} list presets from file", config.lists.len());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to load config file: {:#}", e);
                }
            }
        }

        log::debug!("Using default navigation config");
        Self::default()
    }
}

impl<T: PartialEq> NavConfig<T> {
    fn validate(&self) -> Result<()> {
        for (name, preset) in &self.lists {
            if let Some(default) = &preset.default {
                if !preset.items.contains(default) {
                    bail!("Preset '{}': default value is not one of its items", name);
                }
            }
        }
        Ok(())
    }
}

impl<T> NavConfig<T> {
    /// Get a preset by name
    pub fn preset(&self, name: &str) -> Option<&ListPreset<T>> {
        self.lists.get(name)
    }

    /// Names of all configured presets, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }
}

impl<T: Clone + PartialEq> NavConfig<T> {
    /// Create the navigation list for a named preset
    pub fn build(&self, name: &str) -> Result<NavigationList<T>> {
        let Some(preset) = self.preset(name) else {
            bail!("Unknown list preset '{}'", name);
        };
        preset
            .build()
            .with_context(|| format!("Invalid list preset '{}'", name))
    }
}

impl NavConfig<f64> {
    /// Add the built-in presets that the config does not define itself
    pub fn with_builtin_presets(mut self) -> Self {
        self.lists
            .entry(ZOOM_PRESET.to_string())
            .or_insert_with(ListPreset::zoom_levels);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_list::BoundaryMode;
    use pretty_assertions::assert_eq;

    const CONFIG: &str = r#"
        [lists.zoom]
        items = [50.0, 100.0, 200.0]
        default = 100.0
        mode = "block"

        [lists.history]
        items = [1.0, 2.0, 3.0]
        mode = "wrap"
    "#;

    #[test]
    fn test_parse_config() {
        let config = NavConfig::<f64>::from_toml_str(CONFIG).unwrap();
        assert_eq!(config.names().collect::<Vec<_>>(), vec!["history", "zoom"]);

        let zoom = config.preset("zoom").unwrap();
        assert_eq!(zoom.items, vec![50.0, 100.0, 200.0]);
        assert_eq!(zoom.default, Some(100.0));
        assert_eq!(zoom.mode, BoundaryMode::Block);

        let history = config.preset("history").unwrap();
        assert_eq!(history.default, None);
        assert_eq!(history.mode, BoundaryMode::Wrap);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = NavConfig::<f64>::from_toml_str("").unwrap();
        assert!(config.lists.is_empty());
    }

    #[test]
    fn test_reject_foreign_default() {
        let toml = r#"
            [lists.broken]
            items = [1.0, 2.0]
            default = 3.0
        "#;
        let err = NavConfig::<f64>::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_reject_invalid_mode() {
        let toml = r#"
            [lists.zoom]
            items = [1.0]
            mode = "bounce"
        "#;
        assert!(NavConfig::<f64>::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_build() {
        let config = NavConfig::<f64>::from_toml_str(CONFIG).unwrap();
        let mut zoom = config.build("zoom").unwrap();
        assert_eq!(zoom.current(), Ok(&100.0));
        assert_eq!(zoom.step(5), Ok(&100.0));

        let mut history = config.build("history").unwrap();
        assert_eq!(history.cursor(), None);
        assert_eq!(history.last(), Ok(&3.0));
        assert_eq!(history.next_item(), Ok(&1.0));
    }

    #[test]
    fn test_build_unknown_preset() {
        let config = NavConfig::<f64>::default();
        let err = config.build("missing").unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_default_has_no_presets() {
        let config = NavConfig::<f64>::default();
        assert_eq!(config.names().count(), 0);
        assert!(config.preset(ZOOM_PRESET).is_none());
    }

    #[test]
    fn test_builtin_presets() {
        let config = NavConfig::<f64>::default().with_builtin_presets();
        assert_eq!(config.preset(ZOOM_PRESET), Some(&ListPreset::zoom_levels()));
    }

    #[test]
    fn test_builtin_presets_do_not_override_config() {
        let config = NavConfig::<f64>::from_toml_str(CONFIG)
            .unwrap()
            .with_builtin_presets();
        assert_eq!(config.preset(ZOOM_PRESET).unwrap().items.len(), 3);
    }

    #[test]
    fn test_string_presets() {
        let toml = r#"
            [lists.quality]
            items = ["low", "medium", "high"]
            default = "low"
        "#;
        let config = NavConfig::<String>::from_toml_str(toml).unwrap();
        let mut quality = config.build("quality").unwrap();
        assert_eq!(quality.next_item().map(String::as_str), Ok("medium"));
    }
}
