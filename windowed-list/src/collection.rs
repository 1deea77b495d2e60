use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp;

use crate::VisibleWindow;

/// The full, ordered dataset behind a windowed list.
///
/// The collection is immutable: a new dataset replaces it wholesale. Clones share the same
/// backing storage.
#[derive(Debug)]
pub struct ItemCollection<T> {
    items: Arc<[T]>,
}

impl<T> Clone for ItemCollection<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for ItemCollection<T> {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }
}

impl<T> From<Vec<T>> for ItemCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> ItemCollection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::from(items),
        }
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

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the rows covered by `window`, in index order.
    ///
    /// A window computed against a different length is clamped instead of panicking.
    pub fn slice(&self, window: &VisibleWindow) -> &[T] {
        let len = self.items.len();
        let end = cmp::min(window.end_index, len);
        let start = cmp::min(window.start_index, end);
        if end != window.end_index {
            vwarn!(
                start_index = window.start_index,
                end_index = window.end_index,
                len,
                "ItemCollection: window exceeds collection length"
            );
        }
        &self.items[start..end]
    }
}

impl<'a, T> IntoIterator for &'a ItemCollection<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
