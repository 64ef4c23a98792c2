//! Single-source shortest paths over one weight channel.
//!
//! The frontier is an [`IndexedHeap`] in min orientation holding one entry per
//! queued vertex. Relaxing an arc that improves a queued vertex replaces its
//! entry in place instead of pushing a duplicate.

use core::cmp::Ordering;

use super::trace_back;
use crate::collections::{HeapOrder, IndexMap, IndexedHeap, Orientation};
use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};

/// A queued `(distance, vertex)` pair with its insertion sequence number.
#[derive(Debug, Clone, PartialEq)]
struct Frontier<I> {
    distance: f64,
    vertex: I,
    seq: u64,
}

/// Orders frontier entries by distance, earlier insertions first on ties.
struct ByDistance;

impl<I> HeapOrder<Frontier<I>> for ByDistance {
    fn compare(&self, a: &Frontier<I>, b: &Frontier<I>) -> Ordering {
        a.distance
            .total_cmp(&b.distance)
            .then_with(|| a.seq.cmp(&b.seq))
    }
}

/// Shortest distances and predecessors from one source vertex.
///
/// Arcs lacking the chosen channel, or weighing `NaN` on it, are not
/// traversable. Weights are expected
/// to be non-negative; the run is bounded by `vertex_count + arc_count` heap
/// pops and fails with [`GraphError::IterationLimit`] past that.
#[derive(Debug, Clone)]
pub struct Dijkstra<I> {
    source: I,
    distance: IndexMap<I, f64>,
    predecessor: IndexMap<I, I>,
    settled: usize,
}

impl<I: VertexId> Dijkstra<I> {
    /// Runs the search from `source` over `channel`.
    pub fn new<E, P>(graph: &Graph<I, E, P>, source: &I, channel: &str) -> Result<Self> {
        if !graph.exists(source) {
            return Err(GraphError::vertex_not_found(source));
        }

        let mut distance = IndexMap::with_capacity(graph.vertex_count().max(1));
        for id in graph.ids() {
            distance.put(id.clone(), f64::INFINITY);
        }
        distance.put(source.clone(), 0.0);

        let mut predecessor: IndexMap<I, I> = IndexMap::new();
        let mut queued: IndexMap<I, Frontier<I>> = IndexMap::new();
        let mut heap = IndexedHeap::with_order(ByDistance, Orientation::Reverse);
        let mut seq = 0u64;

        let start = Frontier {
            distance: 0.0,
            vertex: source.clone(),
            seq,
        };
        queued.put(source.clone(), start.clone());
        heap.add(start);

        let limit = graph.vertex_count() + graph.arc_count();
        let mut settled = 0usize;
        while let Some(entry) = heap.poll() {
            settled += 1;
            if settled > limit {
                return Err(GraphError::IterationLimit { limit });
            }
            queued.delete(&entry.vertex);

            let Some(vertex) = graph.vertex(&entry.vertex) else {
                continue;
            };
            for edge in vertex.edges() {
                let Some(weight) = edge.weight(channel).filter(|w| !w.is_nan()) else {
                    continue;
                };
                let candidate = entry.distance + weight;
                let current = distance.get(edge.to()).copied().unwrap_or(f64::INFINITY);
                if candidate >= current {
                    continue;
                }

                distance.put(edge.to().clone(), candidate);
                predecessor.put(edge.to().clone(), entry.vertex.clone());
                seq += 1;
                let improved = Frontier {
                    distance: candidate,
                    vertex: edge.to().clone(),
                    seq,
                };
                match queued.put(edge.to().clone(), improved.clone()) {
                    Some(stale) => {
                        heap.replace(&stale, improved);
                    }
                    None => heap.add(improved),
                }
            }
        }

        debug_event!(source = ?source, channel, settled, "dijkstra complete");
        Ok(Self {
            source: source.clone(),
            distance,
            predecessor,
            settled,
        })
    }

    /// The source vertex.
    pub fn source(&self) -> &I {
        &self.source
    }

    /// Shortest distance to `to`; `f64::INFINITY` when unreachable or unknown.
    pub fn dist_to(&self, to: &I) -> f64 {
        self.distance.get(to).copied().unwrap_or(f64::INFINITY)
    }

    /// Returns `true` if `to` is reachable from the source.
    pub fn has_path_to(&self, to: &I) -> bool {
        self.dist_to(to) < f64::INFINITY
    }

    /// A shortest path from the source to `to`, source first.
    pub fn path_to(&self, to: &I) -> Option<Vec<I>> {
        self.has_path_to(to)
            .then(|| trace_back(&self.predecessor, to))
    }

    /// The vertex preceding `to` on its shortest path.
    pub fn predecessor(&self, to: &I) -> Option<&I> {
        self.predecessor.get(to)
    }

    /// Number of frontier entries settled by the run.
    pub fn settled_count(&self) -> usize {
        self.settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DEFAULT_CHANNEL;

    fn six() -> Graph<u32, ()> {
        let mut g = Graph::new(false);
        for i in 0..6 {
            g.add_vertex(i, ());
        }
        for &(a, b, w) in &[
            (0, 1, 2.0),
            (0, 2, 3.0),
            (1, 3, 5.0),
            (1, 4, 2.0),
            (3, 4, 1.0),
            (3, 5, 2.0),
            (4, 5, 4.0),
        ] {
            g.add_weighted_edge(a, b, w).unwrap();
        }
        g
    }

    #[test]
    fn six_vertex_distances() {
        let g = six();
        let sp = Dijkstra::new(&g, &0, DEFAULT_CHANNEL).unwrap();
        assert_eq!(sp.dist_to(&0), 0.0);
        assert_eq!(sp.dist_to(&2), 3.0);
        assert_eq!(sp.path_to(&2), Some(vec![0, 2]));
        assert_eq!(sp.dist_to(&4), 4.0);
        assert_eq!(sp.dist_to(&3), 5.0);
        assert_eq!(sp.dist_to(&5), 7.0);
        assert_eq!(sp.settled_count(), 6);
    }

    #[test]
    fn replace_lowers_queued_entry() {
        let mut g: Graph<char, ()> = Graph::new(true);
        for c in ['s', 'a', 'b', 't'] {
            g.add_vertex(c, ());
        }
        g.add_weighted_edge('s', 't', 10.0).unwrap();
        g.add_weighted_edge('s', 'a', 1.0).unwrap();
        g.add_weighted_edge('a', 'b', 1.0).unwrap();
        g.add_weighted_edge('b', 't', 1.0).unwrap();

        let sp = Dijkstra::new(&g, &'s', DEFAULT_CHANNEL).unwrap();
        assert_eq!(sp.dist_to(&'t'), 3.0);
        assert_eq!(sp.path_to(&'t'), Some(vec!['s', 'a', 'b', 't']));
        assert_eq!(sp.predecessor(&'t'), Some(&'b'));
        assert_eq!(sp.settled_count(), 4);
    }

    #[test]
    fn channel_filters_arcs() {
        let mut g: Graph<u32, ()> = Graph::new(true);
        for i in 0..3 {
            g.add_vertex(i, ());
        }
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.set_weight(&0, &1, "toll", 4.0).unwrap();

        let sp = Dijkstra::new(&g, &0, "toll").unwrap();
        assert_eq!(sp.dist_to(&1), 4.0);
        assert!(!sp.has_path_to(&2));
        assert_eq!(sp.path_to(&2), None);
    }

    #[test]
    fn unknown_source_and_target() {
        let g = six();
        assert!(matches!(
            Dijkstra::new(&g, &99, DEFAULT_CHANNEL),
            Err(GraphError::VertexNotFound(_))
        ));
        let sp = Dijkstra::new(&g, &0, DEFAULT_CHANNEL).unwrap();
        assert_eq!(sp.dist_to(&99), f64::INFINITY);
        assert_eq!(sp.predecessor(&0), None);
    }

    #[test]
    fn negative_cycle_hits_pop_budget() {
        let mut g: Graph<u32, ()> = Graph::new(true);
        g.add_vertex(0, ());
        g.add_vertex(1, ());
        g.add_weighted_edge(0, 1, -1.0).unwrap();
        g.add_weighted_edge(1, 0, -1.0).unwrap();

        assert!(matches!(
            Dijkstra::new(&g, &0, DEFAULT_CHANNEL),
            Err(GraphError::IterationLimit { limit: 4 })
        ));
    }

    #[test]
    fn nan_weight_is_not_traversable() {
        let mut g: Graph<u32, ()> = Graph::new(true);
        for i in 0..3 {
            g.add_vertex(i, ());
        }
        g.add_weighted_edge(0, 1, f64::NAN).unwrap();
        g.add_weighted_edge(0, 2, 2.0).unwrap();

        let sp = Dijkstra::new(&g, &0, DEFAULT_CHANNEL).unwrap();
        assert_eq!(sp.dist_to(&1), f64::INFINITY);
        assert!(!sp.has_path_to(&1));
        assert_eq!(sp.path_to(&1), None);
        assert_eq!(sp.dist_to(&2), 2.0);
    }
}
