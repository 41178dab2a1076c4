//! Selection state for the picker.
//!
//! A host may hand the picker nothing, a single item, or a list of items as
//! the current selection. [`Selection`] captures all three shapes and
//! normalizes them to an ordered list without duplicates.
//!
//! # Example
//!
//! ```
//! use select_picker::Selection;
//!
//! let mut selection = Selection::from(vec!["Apple"]);
//! selection.toggle("Banana");
//! selection.toggle("Apple");
//! assert_eq!(selection.normalized(), vec!["Banana"]);
//! ```

use crate::item::PickerItem;

/// Whether the picker holds one item or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Choosing an item replaces the selection (default).
    #[default]
    Single,
    /// Choosing an item toggles its membership.
    Multiple,
}

impl SelectionMode {
    /// Map the host's `multiple` flag to a mode.
    pub fn from_multiple(multiple: bool) -> Self {
        if multiple {
            Self::Multiple
        } else {
            Self::Single
        }
    }

    /// Returns true for [`SelectionMode::Multiple`].
    pub fn is_multiple(self) -> bool {
        self == Self::Multiple
    }
}

/// The currently chosen item(s).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection<T> {
    /// Nothing selected.
    #[default]
    None,
    /// A single item, as set by single-selection mode.
    Single(T),
    /// A list of items, as set by multiple-selection mode.
    Multiple(Vec<T>),
}

impl<T: PickerItem> Selection<T> {
    /// The selection as an ordered list.
    ///
    /// Duplicates keep their first position.
    pub fn normalized(&self) -> Vec<T> {
        match self {
            Self::None => Vec::new(),
            Self::Single(item) => vec![item.clone()],
            Self::Multiple(items) => {
                let mut result: Vec<T> = Vec::with_capacity(items.len());
                for item in items {
                    if !result.contains(item) {
                        result.push(item.clone());
                    }
                }
                result
            }
        }
    }

    /// Number of distinct selected items.
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Single(_) => 1,
            Self::Multiple(_) => self.normalized().len(),
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Single(_) => false,
            Self::Multiple(items) => items.is_empty(),
        }
    }

    /// Whether `item` is selected.
    pub fn contains(&self, item: &T) -> bool {
        match self {
            Self::None => false,
            Self::Single(selected) => selected == item,
            Self::Multiple(items) => items.contains(item),
        }
    }

    /// Add `item` if absent, remove it if present.
    ///
    /// The result is always a [`Selection::Multiple`] in normalized form.
    /// Returns `true` if the item is selected afterwards.
    pub fn toggle(&mut self, item: T) -> bool {
        let mut items = self.normalized();
        let added = match items.iter().position(|selected| *selected == item) {
            Some(index) => {
                items.remove(index);
                false
            }
            None => {
                items.push(item);
                true
            }
        };
        *self = Self::Multiple(items);
        added
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(item: Option<T>) -> Self {
        match item {
            Some(item) => Self::Single(item),
            None => Self::None,
        }
    }
}

impl<T> From<Vec<T>> for Selection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Multiple(items)
    }
}
