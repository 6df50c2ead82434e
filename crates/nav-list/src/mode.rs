//! Boundary behaviour of a navigation list.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Behaviour when a relative step would move past the first or last item.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BoundaryMode {
    /// Stay on the edge item.
    Block,
    /// Continue at the other end of the list.
    Wrap,
    /// Fail with `IndexOutOfRange`.
    #[default]
    #[serde(alias = "exception")]
    #[strum(to_string = "raise-error", serialize = "exception")]
    RaiseError,
}
