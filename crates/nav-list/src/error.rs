//! Errors reported by navigation operations.

use thiserror::Error;

/// Errors that can occur while moving through a [`NavigationList`](crate::NavigationList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The list has no items.
    #[error("No items found")]
    EmptyList,

    /// The cursor has not been positioned yet.
    #[error("No current item")]
    NoCurrentItem,

    /// `reset` was called on a list created without a default.
    #[error("No default set")]
    NoDefaultConfigured,

    /// A step or selection crossed the list boundary in `RaiseError` mode.
    #[error("Index out of range")]
    IndexOutOfRange,

    /// The default passed at construction is not one of the items.
    #[error("Default value is not in the list")]
    DefaultNotFound,
}
