//! List presets
//!
//! A preset describes one navigation list in the config file.

use nav_list::{BoundaryMode, NavigationError, NavigationList};
use serde::{Deserialize, Serialize};

/// A named list as written in the config file
///
/// ```toml
/// [lists.zoom]
/// items = [50.0, 100.0, 150.0]
/// default = 100.0
/// mode = "block"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListPreset<T> {
    /// Items to navigate, in order
    pub items: Vec<T>,
    /// Initially selected value, also used on reset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<T>,
    /// Behaviour at the ends of the list (default: raise-error)
    #[serde(default)]
    pub mode: BoundaryMode,
}

impl<T> ListPreset<T> {
    pub fn new(items: Vec<T>, default: Option<T>, mode: BoundaryMode) -> Self {
        Self {
            items,
            default,
            mode,
        }
    }
}

impl<T: Clone + PartialEq> ListPreset<T> {
    /// Create a navigation list from this preset
    pub fn build(&self) -> Result<NavigationList<T>, NavigationError> {
        NavigationList::new(self.items.iter().cloned(), self.default.clone(), self.mode)
    }
}

impl ListPreset<f64> {
    /// Zoom levels in percent, starting at 100%
    pub fn zoom_levels() -> Self {
        Self::new(
            vec![
                25.0, 33.0, 50.0, 67.0, 75.0, 90.0, 100.0, 110.0, 125.0, 150.0, 175.0, 200.0,
                250.0, 300.0, 400.0, 500.0,
            ],
            Some(100.0),
            BoundaryMode::Block,
        )
    }
}
