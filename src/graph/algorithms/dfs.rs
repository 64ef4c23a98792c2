//! Depth-first search driven by an explicit stack.
//!
//! Each stack frame holds a vertex, a snapshot of its neighbor identifiers
//! and a cursor into that snapshot, so the traversal visits vertices in the
//! same order a recursive search would without growing the call stack.

use super::{render_predecessors, trace_back};
use crate::collections::IndexMap;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};

/// Visit state of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current stack.
    Open,
    /// Fully explored.
    Done,
}

struct Frame<I> {
    vertex: I,
    neighbors: Vec<I>,
    cursor: usize,
}

/// A completed depth-first search.
#[derive(Debug, Clone)]
pub struct Dfs<I> {
    /// Every vertex of the searched graph, in index order.
    vertices: Vec<I>,
    marks: IndexMap<I, Mark>,
    predecessor: IndexMap<I, I>,
    postorder: Vec<I>,
    component_count: usize,
    cycle: bool,
    directed: bool,
}

impl<I: VertexId> Dfs<I> {
    /// Searches from every vertex in index order until all are visited.
    pub fn new<E, P>(graph: &Graph<I, E, P>) -> Self {
        let mut dfs = Self::empty(graph);
        dfs.cover_rest(graph);
        dfs
    }

    /// Searches only the vertices reachable from `start`.
    pub fn from_start<E, P>(graph: &Graph<I, E, P>, start: &I) -> Result<Self> {
        Self::with_options(graph, Some(start), false)
    }

    /// Searches from `start` (if any), then, with `full_coverage`, from every
    /// remaining vertex.
    ///
    /// Without a start, full coverage is required.
    pub fn with_options<E, P>(
        graph: &Graph<I, E, P>,
        start: Option<&I>,
        full_coverage: bool,
    ) -> Result<Self> {
        let mut dfs = Self::empty(graph);
        match start {
            Some(start) => {
                if !graph.exists(start) {
                    return Err(GraphError::vertex_not_found(start));
                }
                dfs.explore(graph, start);
            }
            None if !full_coverage => {
                return Err(GraphError::InvalidOperation(
                    "a depth-first search without full coverage needs a start vertex".into(),
                ));
            }
            None => {}
        }
        if full_coverage {
            dfs.cover_rest(graph);
        }
        Ok(dfs)
    }

    fn empty<E, P>(graph: &Graph<I, E, P>) -> Self {
        Self {
            vertices: graph.ids().cloned().collect(),
            marks: IndexMap::with_capacity(graph.vertex_count().max(1)),
            predecessor: IndexMap::new(),
            postorder: Vec::with_capacity(graph.vertex_count()),
            component_count: 0,
            cycle: false,
            directed: graph.is_directed(),
        }
    }

    fn cover_rest<E, P>(&mut self, graph: &Graph<I, E, P>) {
        for id in graph.ids() {
            if !self.is_visited(id) {
                self.explore(graph, id);
            }
        }
        debug_event!(
            visited = self.postorder.len(),
            components = self.component_count,
            "dfs complete"
        );
    }

    fn frame<E, P>(graph: &Graph<I, E, P>, vertex: I) -> Frame<I> {
        let neighbors = graph
            .vertex(&vertex)
            .map(|v| v.neighbor_ids().cloned().collect())
            .unwrap_or_default();
        Frame {
            vertex,
            neighbors,
            cursor: 0,
        }
    }

    fn explore<E, P>(&mut self, graph: &Graph<I, E, P>, root: &I) {
        self.component_count += 1;
        self.marks.put(root.clone(), Mark::Open);
        let mut stack = vec![Self::frame(graph, root.clone())];

        while let Some(top) = stack.last_mut() {
            if top.cursor == top.neighbors.len() {
                if let Some(done) = stack.pop() {
                    self.marks.put(done.vertex.clone(), Mark::Done);
                    self.postorder.push(done.vertex);
                }
                continue;
            }

            let next = top.neighbors[top.cursor].clone();
            top.cursor += 1;
            match self.marks.get(&next).copied() {
                None => {
                    self.predecessor.put(next.clone(), top.vertex.clone());
                    self.marks.put(next.clone(), Mark::Open);
                    stack.push(Self::frame(graph, next));
                }
                Some(Mark::Open) => self.cycle = true,
                Some(Mark::Done) => {}
            }
        }
    }

    /// Returns `true` if the search reached `id`.
    pub fn is_visited(&self, id: &I) -> bool {
        self.marks.contains_key(id)
    }

    /// The vertex `id` was discovered from; `None` for roots and unknown ids.
    pub fn predecessor(&self, id: &I) -> Option<&I> {
        self.predecessor.get(id)
    }

    /// The depth-first tree path from the root that reached `to`, root first.
    pub fn path_to(&self, to: &I) -> Option<Vec<I>> {
        self.is_visited(to).then(|| trace_back(&self.predecessor, to))
    }

    /// Vertices in finishing order.
    pub fn postorder(&self) -> &[I] {
        &self.postorder
    }

    /// Vertices in reverse finishing order.
    pub fn reverse_postorder(&self) -> Vec<I> {
        self.postorder.iter().rev().cloned().collect()
    }

    /// Number of depth-first trees the search grew.
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Returns `true` if an arc reached a vertex still on the stack.
    ///
    /// Every undirected edge looks like such an arc, so undirected graphs
    /// fail with [`GraphError::InvalidOperation`].
    pub fn has_cycle(&self) -> Result<bool> {
        if !self.directed {
            return Err(GraphError::InvalidOperation(
                "cycle detection requires a directed graph".into(),
            ));
        }
        Ok(self.cycle)
    }
}

impl<I: VertexId + core::fmt::Display> Dfs<I> {
    /// One `v | pred` line per vertex of the graph, in index order.
    pub fn predecessor_table(&self) -> String {
        render_predecessors(self.vertices.iter(), &self.predecessor)
    }
}
