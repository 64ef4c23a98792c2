//! Hand-rolled collections backing the graph.
//!
//! Collections are organized by data structure type:
//! - `hash`: the open-addressing [`IndexMap`]
//! - `heap`: the array-backed [`ArrayHeap`] and [`IndexedHeap`]

pub mod hash;
pub mod heap;

pub use hash::IndexMap;
pub use heap::{ArrayHeap, FnOrder, HeapOrder, IndexedHeap, Natural, Orientation};
