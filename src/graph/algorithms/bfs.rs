//! Breadth-first search with full coverage.

use std::collections::VecDeque;

use super::{render_predecessors, trace_back};
use crate::collections::IndexMap;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};

/// A completed breadth-first search.
///
/// The search expands from `start` first and then restarts from every vertex
/// still unvisited, in index order, so every vertex ends up visited. Each
/// vertex's predecessor comes from the root that reached it first, which
/// gives hop-minimal paths from that root.
#[derive(Debug, Clone)]
pub struct Bfs<I> {
    /// Every vertex of the searched graph, in index order.
    vertices: Vec<I>,
    visited: IndexMap<I, bool>,
    predecessor: IndexMap<I, I>,
    order: Vec<I>,
    roots: Vec<I>,
}

impl<I: VertexId> Bfs<I> {
    /// Runs the search from `start`.
    pub fn new<E, P>(graph: &Graph<I, E, P>, start: &I) -> Result<Self> {
        if !graph.exists(start) {
            return Err(GraphError::vertex_not_found(start));
        }
        let mut bfs = Self {
            vertices: graph.ids().cloned().collect(),
            visited: IndexMap::with_capacity(graph.vertex_count().max(1)),
            predecessor: IndexMap::new(),
            order: Vec::with_capacity(graph.vertex_count()),
            roots: Vec::new(),
        };

        bfs.expand(graph, start);
        for id in graph.ids() {
            if !bfs.is_visited(id) {
                bfs.expand(graph, id);
            }
        }
        debug_event!(visited = bfs.order.len(), roots = bfs.roots.len(), "bfs complete");
        Ok(bfs)
    }

    fn expand<E, P>(&mut self, graph: &Graph<I, E, P>, root: &I) {
        let mut queue = VecDeque::new();
        self.visited.put(root.clone(), true);
        self.roots.push(root.clone());
        queue.push_back(root.clone());

        while let Some(u) = queue.pop_front() {
            if let Some(vertex) = graph.vertex(&u) {
                for v in vertex.neighbor_ids() {
                    if !self.is_visited(v) {
                        self.visited.put(v.clone(), true);
                        self.predecessor.put(v.clone(), u.clone());
                        queue.push_back(v.clone());
                    }
                }
            }
            self.order.push(u);
        }
    }

    /// Returns `true` if the search reached `id`.
    pub fn is_visited(&self, id: &I) -> bool {
        self.visited.get(id).copied().unwrap_or(false)
    }

    /// The vertex `id` was discovered from; `None` for roots and unknown ids.
    pub fn predecessor(&self, id: &I) -> Option<&I> {
        self.predecessor.get(id)
    }

    /// Hop-minimal path from the root that reached `to`, root first.
    pub fn path_to(&self, to: &I) -> Option<Vec<I>> {
        self.is_visited(to).then(|| trace_back(&self.predecessor, to))
    }

    /// Vertices in the order they were dequeued.
    pub fn order(&self) -> &[I] {
        &self.order
    }

    /// Every vertex a new expansion started from, `start` first.
    pub fn roots(&self) -> &[I] {
        &self.roots
    }
}

impl<I: VertexId + core::fmt::Display> Bfs<I> {
    /// One `v | pred` line per vertex of the graph, in index order.
    pub fn predecessor_table(&self) -> String {
        render_predecessors(self.vertices.iter(), &self.predecessor)
    }
}
