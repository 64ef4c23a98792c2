//! Hash-based collections.

pub mod index_map;

pub use index_map::{plan_resize, IndexMap, Mutation, Resize};
