//! # nav-list
//!
//! An ordered list of values with a cursor that can be moved by relative
//! offsets. Typical consumers cycle through a fixed set of options, e.g. zoom
//! levels or history entries, in response to user input.
//!
//! ## Boundaries
//!
//! What happens when a step would leave the list is decided by the
//! [`BoundaryMode`] the list was created with:
//!
//! - [`BoundaryMode::Block`] stays on the edge item
//! - [`BoundaryMode::Wrap`] continues at the other end
//! - [`BoundaryMode::RaiseError`] fails with [`NavigationError::IndexOutOfRange`]
//!
//! ## Fuzzy values
//!
//! A value that is not part of the list can be attached with
//! [`NavigationList::set_fuzzy`]. The next step snaps it to the closest item
//! in the direction of travel, and landing there counts as one step of the
//! requested offset.
//!
//! ## Usage
//!
//! ```
//! use nav_list::{BoundaryMode, NavigationList};
//!
//! let mut zoom = NavigationList::new(vec![100, 125, 150, 175], Some(100), BoundaryMode::Block)?;
//! assert_eq!(zoom.next_item()?, &125);
//!
//! // Current zoom was changed externally to 133%
//! zoom.set_fuzzy(133);
//! assert_eq!(zoom.next_item()?, &150);
//!
//! // A value that is already an item is landed on as well
//! zoom.set_fuzzy(125);
//! assert_eq!(zoom.next_item()?, &125);
//! # Ok::<(), nav_list::NavigationError>(())
//! ```

mod error;
mod list;
mod mode;

pub use error::NavigationError;
pub use list::NavigationList;
pub use mode::BoundaryMode;
