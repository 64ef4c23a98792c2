//! Identified-vertex graphs and the traversals that run over them.
//!
//! - `basic`: the adjacency-map [`Graph`] with its vertex, edge and weight records
//! - `algorithms`: BFS, DFS, Dijkstra and lazy Prim, each run eagerly on construction

use core::fmt::Debug;
use core::hash::Hash;

pub mod algorithms;
pub mod basic;

pub use algorithms::{Bfs, Dfs, Dijkstra, LazyPrim};
pub use basic::{Edge, Graph, Vertex, Weight, DEFAULT_CHANNEL};

/// Bound shared by every vertex identifier type.
pub trait VertexId: Hash + Eq + Clone + Debug {}

impl<T: Hash + Eq + Clone + Debug> VertexId for T {}
