//! # `arcgraph` - In-Memory Graph Engine
//!
//! A small graph engine built on two hand-rolled collections: an
//! open-addressing hash map with tombstone deletion and an array-backed
//! binary heap with in-place key replacement. Graphs are keyed by arbitrary
//! identifiers and carry named weight channels on every arc.
//!
//! ## Key Features
//!
//! - **Tombstoned open addressing**: [`IndexMap`] indexes vertices and, per
//!   vertex, outgoing arcs; deletions leave tombstones that are compacted once
//!   they dominate the table
//! - **Replaceable heap keys**: [`IndexedHeap::replace`] lowers a queued key in
//!   place, which is all Dijkstra's relaxation needs
//! - **Weight channels**: every arc carries a default weight plus any number
//!   of named channels; algorithms run over the channel you name
//! - **Eager algorithms**: [`Bfs`], [`Dfs`], [`Dijkstra`] and [`LazyPrim`] run
//!   to completion on construction and then answer queries
//!
//! ## Architecture
//!
//! ### Core Abstractions
//!
//! 1. **Collections** (`collections`):
//!    - [`IndexMap`]: slot array of `Empty | Tombstone | Occupied`, linear probing
//!    - [`ArrayHeap`] / [`IndexedHeap`]: chunk-grown binary heaps with a
//!      pluggable [`HeapOrder`] and a max/min [`Orientation`]
//!
//! 2. **Graph** (`graph::basic`):
//!    - [`Graph`] owns [`Vertex`] records, each owning its outgoing [`Edge`]s
//!    - Directed graphs count arcs; undirected graphs count vertex pairs
//!
//! 3. **Algorithms** (`graph::algorithms`):
//!    - Visited sets, predecessor maps and distance maps are themselves
//!      [`IndexMap`]s
//!
//! ## Example
//!
//! ```rust
//! use arcgraph::{Dijkstra, Graph, DEFAULT_CHANNEL};
//!
//! let mut graph: Graph<&str, ()> = Graph::new(false);
//! for city in ["a", "b", "c"] {
//!     graph.add_vertex(city, ());
//! }
//! graph.add_weighted_edge("a", "b", 2.0)?;
//! graph.add_weighted_edge("b", "c", 2.0)?;
//! graph.add_weighted_edge("a", "c", 5.0)?;
//!
//! let paths = Dijkstra::new(&graph, &"a", DEFAULT_CHANNEL)?;
//! assert_eq!(paths.dist_to(&"c"), 4.0);
//! assert_eq!(paths.path_to(&"c"), Some(vec!["a", "b", "c"]));
//! # Ok::<(), arcgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

#[macro_use]
mod macros;

pub mod collections;
pub mod config;
pub mod error;
pub mod graph;

pub use collections::{ArrayHeap, FnOrder, HeapOrder, IndexMap, IndexedHeap, Natural, Orientation};
pub use config::{GraphConfig, HeapConfig, MapConfig};
pub use error::{GraphError, Result};
pub use graph::{Bfs, Dfs, Dijkstra, Edge, Graph, LazyPrim, Vertex, VertexId, Weight, DEFAULT_CHANNEL};
