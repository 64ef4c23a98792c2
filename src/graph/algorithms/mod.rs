//! Graph algorithms.
//!
//! Every algorithm runs to completion inside its constructor and then answers
//! read-only queries. Vertices a run never reached report "no path" rather
//! than an error.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod prim;

pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use prim::LazyPrim;

use crate::collections::IndexMap;
use crate::graph::VertexId;

/// Walks `predecessor` links back from `to` and returns the path root-first.
pub(crate) fn trace_back<I: VertexId>(predecessor: &IndexMap<I, I>, to: &I) -> Vec<I> {
    let mut path = vec![to.clone()];
    let mut cursor = to;
    while let Some(prev) = predecessor.get(cursor) {
        path.push(prev.clone());
        cursor = prev;
        if path.len() > predecessor.len() + 1 {
            break;
        }
    }
    path.reverse();
    path
}

/// Renders `v | pred` lines, `-` standing in for a missing predecessor.
pub(crate) fn render_predecessors<'a, I>(
    order: impl Iterator<Item = &'a I>,
    predecessor: &IndexMap<I, I>,
) -> String
where
    I: VertexId + core::fmt::Display + 'a,
{
    let mut out = String::new();
    for v in order {
        match predecessor.get(v) {
            Some(p) => out.push_str(&format!("{v} | {p}\n")),
            None => out.push_str(&format!("{v} | -\n")),
        }
    }
    out
}
