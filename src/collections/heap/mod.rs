//! Array-backed binary heaps.
//!
//! - `binary_heap`: the chunked max/min heap with pluggable ordering
//! - `indexed_heap`: adds in-place key replacement for relaxation-style updates

pub mod binary_heap;
pub mod indexed_heap;
pub mod order;

pub use binary_heap::ArrayHeap;
pub use indexed_heap::IndexedHeap;
pub use order::{FnOrder, HeapOrder, Natural, Orientation};
