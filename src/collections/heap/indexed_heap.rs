//! `IndexedHeap` — an [`ArrayHeap`] whose elements can be re-keyed in place.
//!
//! Shortest-path relaxation lowers the key of an entry that is already
//! queued. [`IndexedHeap::replace`] finds the entry by equality, overwrites it
//! and restores heap order by sifting the new value up.

use core::fmt;

use super::binary_heap::ArrayHeap;
use super::order::{HeapOrder, Natural, Orientation};
use crate::config::HeapConfig;
use crate::error::{GraphError, Result};

/// A heap that also supports positional lookup and key replacement.
#[derive(Clone)]
pub struct IndexedHeap<T, O = Natural> {
    heap: ArrayHeap<T, O>,
}

impl<T: Ord> IndexedHeap<T, Natural> {
    /// Creates an empty max-heap under the natural ordering.
    pub fn new() -> Self {
        Self { heap: ArrayHeap::new() }
    }

    /// Creates an empty min-heap under the natural ordering.
    pub fn reversed() -> Self {
        Self {
            heap: ArrayHeap::reversed(),
        }
    }
}

impl<T: Ord> Default for IndexedHeap<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O: HeapOrder<T>> IndexedHeap<T, O> {
    /// Creates an empty heap arranged by `order`.
    pub fn with_order(order: O, orientation: Orientation) -> Self {
        Self {
            heap: ArrayHeap::with_order(order, orientation),
        }
    }

    /// Creates an empty heap with an explicit growth policy.
    pub fn with_config(order: O, orientation: Orientation, config: HeapConfig) -> Self {
        Self {
            heap: ArrayHeap::with_config(order, orientation, config),
        }
    }

    /// Number of queued elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Reserved slots.
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Number of tree levels.
    pub fn height(&self) -> usize {
        self.heap.height()
    }

    /// Queues `element`.
    pub fn add(&mut self, element: T) {
        self.heap.add(element);
    }

    /// Returns the root without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Removes and returns the root.
    pub fn poll(&mut self) -> Option<T> {
        self.heap.poll()
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Iterates elements in array order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// Returns the element stored at array position `index`.
    pub fn element_at(&self, index: usize) -> Result<&T> {
        let slice = self.heap.as_slice();
        slice.get(index).ok_or(GraphError::IndexOutOfRange {
            index,
            len: slice.len(),
        })
    }

    /// The underlying heap.
    pub fn as_heap(&self) -> &ArrayHeap<T, O> {
        &self.heap
    }
}

impl<T: PartialEq, O: HeapOrder<T>> IndexedHeap<T, O> {
    /// Array position of the first element equal to `element`.
    pub fn position(&self, element: &T) -> Option<usize> {
        self.heap.as_slice().iter().position(|x| x == element)
    }

    /// Returns `true` if an equal element is queued.
    pub fn contains(&self, element: &T) -> bool {
        self.position(element).is_some()
    }

    /// Overwrites the entry equal to `old` with `new` and sifts it up.
    ///
    /// `new` must not rank below `old`; only upward movement is restored.
    /// When no entry equals `old`, `new` is added instead. Returns `true` if
    /// an existing entry was replaced.
    pub fn replace(&mut self, old: &T, new: T) -> bool {
        match self.position(old) {
            Some(idx) => {
                *self.heap.slot_mut(idx) = new;
                self.heap.sift_up(idx);
                true
            }
            None => {
                self.heap.add(new);
                false
            }
        }
    }
}

impl<T: Clone, O: HeapOrder<T> + Clone> IndexedHeap<T, O> {
    /// Every element in poll order.
    pub fn to_sorted_vec(&self) -> Vec<T> {
        self.heap.to_sorted_vec()
    }
}

impl<T: fmt::Display, O> IndexedHeap<T, O> {
    /// Renders the backing array as `[a, b, c]`.
    pub fn array_string(&self) -> String {
        self.heap.array_string()
    }
}

impl<T: fmt::Display, O> fmt::Display for IndexedHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.heap, f)
    }
}

impl<T: fmt::Debug, O> fmt::Debug for IndexedHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IndexedHeap").field(&self.heap).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_lowers_key_in_min_heap() {
        let mut heap = IndexedHeap::reversed();
        for x in [5, 9, 7, 12] {
            heap.add(x);
        }
        assert_eq!(heap.peek(), Some(&5));

        assert!(heap.replace(&12, 1));
        assert_eq!(heap.peek(), Some(&1));
        assert!(!heap.contains(&12));
        assert_eq!(heap.to_sorted_vec(), vec![1, 5, 7, 9]);
    }

    #[test]
    fn replace_missing_adds() {
        let mut heap = IndexedHeap::new();
        heap.add(3);
        assert!(!heap.replace(&42, 8));
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.peek(), Some(&8));
    }

    #[test]
    fn element_at_bounds() {
        let mut heap = IndexedHeap::new();
        heap.add(4);
        heap.add(6);
        assert_eq!(heap.element_at(0), Ok(&6));
        assert_eq!(heap.position(&4), Some(1));
        assert_eq!(
            heap.element_at(2),
            Err(GraphError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn display_delegates_to_tree() {
        let mut heap = IndexedHeap::reversed();
        heap.add(2);
        heap.add(1);
        assert_eq!(heap.to_string(), "1\n└── 2\n");
        assert_eq!(heap.array_string(), "[1, 2]");
    }
}
