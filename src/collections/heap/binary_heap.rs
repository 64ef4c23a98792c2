//! `ArrayHeap` — a priority queue over a dense, chunk-grown array.
//!
//! The root holds the element ordered highest under the heap's
//! [`HeapOrder`]; [`Orientation::Reverse`] flips that to a min-heap without a
//! second implementation. Storage grows by [`HeapConfig::chunk`] slots once
//! the fill percentage is reached and is released a chunk at a time as the
//! heap drains.

use core::cmp::Ordering;
use core::fmt;

use super::order::{HeapOrder, Natural, Orientation};
use crate::config::HeapConfig;

/// A binary heap stored as `data[0..len)` with `parent(i) = (i - 1) / 2`.
#[derive(Clone)]
pub struct ArrayHeap<T, O = Natural> {
    data: Vec<T>,
    /// Reserved slots, always a whole number of chunks.
    capacity: usize,
    orientation: Orientation,
    order: O,
    config: HeapConfig,
}

impl<T: Ord> ArrayHeap<T, Natural> {
    /// Creates an empty max-heap under the natural ordering.
    pub fn new() -> Self {
        Self::with_order(Natural, Orientation::Normal)
    }

    /// Creates an empty min-heap under the natural ordering.
    pub fn reversed() -> Self {
        Self::with_order(Natural, Orientation::Reverse)
    }
}

impl<T, O: HeapOrder<T>> ArrayHeap<T, O> {
    /// Creates an empty heap arranged by `order`.
    pub fn with_order(order: O, orientation: Orientation) -> Self {
        Self::with_config(order, orientation, HeapConfig::default())
    }

    /// Creates an empty heap with an explicit growth policy.
    pub fn with_config(order: O, orientation: Orientation, config: HeapConfig) -> Self {
        let capacity = config.chunk.max(1);
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            orientation,
            order,
            config,
        }
    }

    /// Number of elements in the heap.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reserved slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether this is a max-heap or a min-heap.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of levels in the tree (0 when empty).
    pub fn height(&self) -> usize {
        (usize::BITS - self.data.len().leading_zeros()) as usize
    }

    /// Inserts `element` and sifts it up past every parent it outranks.
    pub fn add(&mut self, element: T) {
        let chunk = self.config.chunk.max(1);
        if self.data.len() * 100 / self.capacity >= self.config.fill_percent {
            trace_event!(from = self.capacity, to = self.capacity + chunk, "heap grow");
            self.capacity += chunk;
            self.data.reserve_exact(self.capacity - self.data.len());
        }
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the root without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the root.
    ///
    /// The last element takes the root slot and sinks back into place.
    pub fn poll(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let top = self.data.swap_remove(0);
        self.release_chunk();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// Drops every element and returns to a single chunk of storage.
    pub fn clear(&mut self) {
        self.data.clear();
        self.capacity = self.config.chunk.max(1);
        self.data.shrink_to(self.capacity);
    }

    /// Iterates elements in array (level) order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns `true` if `a` ranks strictly above `b` in this heap.
    #[inline(always)]
    pub(super) fn outranks(&self, a: &T, b: &T) -> bool {
        let expected = match self.orientation {
            Orientation::Normal => Ordering::Greater,
            Orientation::Reverse => Ordering::Less,
        };
        self.order.compare(a, b) == expected
    }

    pub(super) fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(super) fn slot_mut(&mut self, idx: usize) -> &mut T {
        &mut self.data[idx]
    }

    pub(super) fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.outranks(&self.data[node], &self.data[parent]) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right >= len {
                left
            } else if self.outranks(&self.data[left], &self.data[right]) {
                left
            } else if self.outranks(&self.data[right], &self.data[left]) {
                right
            } else if is_perfect(left, len) {
                left
            } else {
                right
            };

            if self.outranks(&self.data[child], &self.data[node]) {
                self.data.swap(node, child);
                node = child;
            } else {
                break;
            }
        }
    }

    fn release_chunk(&mut self) {
        let chunk = self.config.chunk.max(1);
        if self.capacity <= chunk {
            return;
        }
        let smaller = self.capacity - chunk;
        if self.data.len() * 100 / smaller < self.config.fill_percent {
            trace_event!(from = self.capacity, to = smaller, "heap shrink");
            self.capacity = smaller;
            self.data.shrink_to(smaller);
        }
    }
}

impl<T: Clone, O: HeapOrder<T> + Clone> ArrayHeap<T, O> {
    /// Returns every element in poll order, leaving the heap untouched.
    pub fn to_sorted_vec(&self) -> Vec<T> {
        let mut copy = self.clone();
        let mut out = Vec::with_capacity(copy.len());
        while let Some(x) = copy.poll() {
            out.push(x);
        }
        out
    }
}

impl<T: PartialEq, O> ArrayHeap<T, O> {
    /// Returns `true` if an element equal to `element` is held.
    pub fn contains(&self, element: &T) -> bool {
        self.data.contains(element)
    }
}

impl<T: fmt::Display, O> ArrayHeap<T, O> {
    /// Renders the backing array as `[a, b, c]`.
    pub fn array_string(&self) -> String {
        let items: Vec<String> = self.data.iter().map(ToString::to_string).collect();
        format!("[{}]", items.join(", "))
    }

    fn paint(&self, f: &mut fmt::Formatter<'_>, idx: usize, lead: &str, rail: &str) -> fmt::Result {
        writeln!(f, "{lead}{}", self.data[idx])?;
        let children: Vec<usize> = [2 * idx + 1, 2 * idx + 2]
            .into_iter()
            .filter(|&c| c < self.data.len())
            .collect();
        for (n, &child) in children.iter().enumerate() {
            let last = n + 1 == children.len();
            let (branch, next_rail) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
            self.paint(
                f,
                child,
                &format!("{rail}{branch}"),
                &format!("{rail}{next_rail}"),
            )?;
        }
        Ok(())
    }
}

/// Returns `true` if the subtree rooted at `root` is a perfect binary tree.
fn is_perfect(root: usize, len: usize) -> bool {
    let (mut leftmost, mut rightmost) = (root, root);
    let (mut left_depth, mut right_depth) = (0usize, 0usize);
    while 2 * leftmost + 1 < len {
        leftmost = 2 * leftmost + 1;
        left_depth += 1;
    }
    while 2 * rightmost + 2 < len {
        rightmost = 2 * rightmost + 2;
        right_depth += 1;
    }
    left_depth == right_depth
}

impl<T: Ord> Default for ArrayHeap<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

/// Tree drawing of the heap, one element per line.
impl<T: fmt::Display, O> fmt::Display for ArrayHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            return Ok(());
        }
        self.paint(f, 0, "", "")
    }
}

impl<T: fmt::Debug, O> fmt::Debug for ArrayHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayHeap")
            .field("len", &self.data.len())
            .field("capacity", &self.capacity)
            .field("orientation", &self.orientation)
            .field("data", &self.data)
            .finish()
    }
}
