//! The navigation list and its cursor movement.

use std::fmt;
use std::ops::Index;

use crate::{BoundaryMode, NavigationError};

/// An ordered list of items which remembers its current position.
///
/// Items are fixed at construction. The cursor starts on the default item if
/// one was given, otherwise it is unset until [`first`](Self::first),
/// [`last`](Self::last), [`select`](Self::select) or a fuzzy step positions it.
#[derive(Debug, Clone)]
pub struct NavigationList<T> {
    items: Vec<T>,
    cursor: Option<usize>,
    /// Index of the default item, resolved once at construction.
    default: Option<usize>,
    mode: BoundaryMode,
    fuzzy: Option<T>,
}

impl<T: PartialEq> NavigationList<T> {
    /// Create a new list.
    ///
    /// # Arguments
    /// * `items` - The items to navigate, copied into the list
    /// * `default` - The initially selected value, also used by [`reset`](Self::reset)
    /// * `mode` - Behaviour when the first or last item is passed
    ///
    /// # Errors
    /// [`NavigationError::DefaultNotFound`] if `default` is not one of the items.
    pub fn new(
        items: impl IntoIterator<Item = T>,
        default: Option<T>,
        mode: BoundaryMode,
    ) -> Result<Self, NavigationError> {
        let items: Vec<T> = items.into_iter().collect();
        let default = match default {
            Some(value) => Some(
                items
                    .iter()
                    .position(|item| *item == value)
                    .ok_or(NavigationError::DefaultNotFound)?,
            ),
            None => None,
        };

        Ok(Self {
            items,
            cursor: default,
            default,
            mode,
            fuzzy: None,
        })
    }
}

impl<T> NavigationList<T> {
    /// All items in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Index of the current item, if the cursor is set.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn mode(&self) -> BoundaryMode {
        self.mode
    }

    /// The value `reset` returns to, if one was configured.
    pub fn default_value(&self) -> Option<&T> {
        self.default.map(|index| &self.items[index])
    }

    /// The pending value the next step will snap in, if any.
    pub fn fuzzy_value(&self) -> Option<&T> {
        self.fuzzy.as_ref()
    }

    /// Mark the list as positioned at a value which is not one of its items.
    ///
    /// The cursor is left alone; the next [`step`](Self::step) resolves the
    /// value to a real position first.
    pub fn set_fuzzy(&mut self, value: T) {
        self.fuzzy = Some(value);
    }

    /// Drop a pending fuzzy value without moving.
    pub fn clear_fuzzy(&mut self) -> Option<T> {
        self.fuzzy.take()
    }

    /// Get the current item.
    pub fn current(&self) -> Result<&T, NavigationError> {
        if self.items.is_empty() {
            return Err(NavigationError::EmptyList);
        }
        self.cursor
            .map(|index| &self.items[index])
            .ok_or(NavigationError::NoCurrentItem)
    }

    /// Jump to the first item.
    pub fn first(&mut self) -> Result<&T, NavigationError> {
        if self.items.is_empty() {
            return Err(NavigationError::EmptyList);
        }
        self.cursor = Some(0);
        Ok(&self.items[0])
    }

    /// Jump to the last item.
    pub fn last(&mut self) -> Result<&T, NavigationError> {
        let Some(index) = self.items.len().checked_sub(1) else {
            return Err(NavigationError::EmptyList);
        };
        self.cursor = Some(index);
        Ok(&self.items[index])
    }

    /// Jump to an absolute position.
    pub fn select(&mut self, index: usize) -> Result<&T, NavigationError> {
        if self.items.is_empty() {
            return Err(NavigationError::EmptyList);
        }
        let item = self
            .items
            .get(index)
            .ok_or(NavigationError::IndexOutOfRange)?;
        self.cursor = Some(index);
        Ok(item)
    }

    /// Move the cursor back to the default item.
    pub fn reset(&mut self) -> Result<&T, NavigationError> {
        let index = self.default.ok_or(NavigationError::NoDefaultConfigured)?;
        self.cursor = Some(index);
        Ok(&self.items[index])
    }

    /// Resolve `start + offset` according to the boundary mode.
    fn resolve(&self, start: usize, offset: isize) -> Result<usize, NavigationError> {
        let len = self.items.len();
        if let Some(target) = start.checked_add_signed(offset).filter(|t| *t < len) {
            return Ok(target);
        }

        match self.mode {
            BoundaryMode::Block => Ok(start),
            BoundaryMode::Wrap => {
                // Both terms are below len, so the sum cannot overflow.
                let shift = offset.rem_euclid(len as isize) as usize;
                Ok((start + shift) % len)
            }
            BoundaryMode::RaiseError => Err(NavigationError::IndexOutOfRange),
        }
    }
}

impl<T: PartialOrd> NavigationList<T> {
    /// Get the item `offset` positions away from the current one and move there.
    ///
    /// A pending fuzzy value is snapped in first: the cursor moves to the
    /// closest item at or above it (`offset >= 0`) or at or below it
    /// (`offset < 0`), and that move counts as one step of `offset`.
    ///
    /// # Errors
    /// - [`NavigationError::EmptyList`] if there are no items
    /// - [`NavigationError::NoCurrentItem`] if neither cursor nor fuzzy value is set
    /// - [`NavigationError::IndexOutOfRange`] when passing a boundary in
    ///   [`BoundaryMode::RaiseError`]; the cursor stays where it was, or on the
    ///   snap target if a fuzzy value was resolved
    pub fn step(&mut self, offset: isize) -> Result<&T, NavigationError> {
        log::debug!(
            "{} items, cursor {:?}, offset {}",
            self.items.len(),
            self.cursor,
            offset
        );
        if self.items.is_empty() {
            return Err(NavigationError::EmptyList);
        }

        let (start, remaining) = match self.fuzzy.take() {
            Some(value) => {
                let (start, remaining) = self.snap_in(&value, offset);
                self.cursor = Some(start);
                (start, remaining)
            }
            None => (self.cursor.ok_or(NavigationError::NoCurrentItem)?, offset),
        };
        let index = self.resolve(start, remaining)?;

        self.cursor = Some(index);
        Ok(&self.items[index])
    }

    /// Get the next item.
    pub fn next_item(&mut self) -> Result<&T, NavigationError> {
        self.step(1)
    }

    /// Get the previous item.
    pub fn prev_item(&mut self) -> Result<&T, NavigationError> {
        self.step(-1)
    }

    /// Find where a fuzzy value lands and how much of `offset` is left.
    ///
    /// Landing on the snap target is one step, whether or not `value` is
    /// itself an item. When no item lies in the direction of travel the value
    /// is past the edge: the outermost item becomes the start and the whole
    /// offset is left to the boundary mode.
    fn snap_in(&self, value: &T, offset: isize) -> (usize, isize) {
        let forward = offset >= 0;
        let nearest = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                if forward {
                    *item >= value
                } else {
                    *item <= value
                }
            })
            .reduce(|best, next| {
                let closer = if forward { next.1 < best.1 } else { next.1 > best.1 };
                if closer {
                    next
                } else {
                    best
                }
            });

        match nearest {
            Some((index, _)) => {
                let remaining = match offset {
                    o if o > 0 => o - 1,
                    o if o < 0 => o + 1,
                    o => o,
                };
                log::debug!("Snapped fuzzy value to index {}", index);
                (index, remaining)
            }
            None => {
                let edge = self.outermost(forward);
                log::debug!("Fuzzy value lies beyond index {}", edge);
                (edge, offset)
            }
        }
    }

    /// Index of the largest (`forward`) or smallest item, first one on ties.
    fn outermost(&self, forward: bool) -> usize {
        self.items
            .iter()
            .enumerate()
            .reduce(|best, next| {
                let further = if forward { next.1 > best.1 } else { next.1 < best.1 };
                if further {
                    next
                } else {
                    best
                }
            })
            .map(|(index, _)| index)
            .unwrap_or(0)
    }
}

impl<T> Index<usize> for NavigationList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a NavigationList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Display for NavigationList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NavigationList({:?})", self.items)
    }
}
