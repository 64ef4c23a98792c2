//! Lazy Prim minimum spanning tree.

use core::cmp::Ordering;

use crate::collections::{ArrayHeap, HeapOrder, IndexMap, Orientation};
use crate::graph::{Edge, Graph, VertexId};

/// A crossing arc waiting in the heap.
struct Candidate<'g, I, P> {
    weight: f64,
    seq: u64,
    edge: &'g Edge<I, P>,
}

/// Lightest candidate first, then earliest pushed.
struct Cheapest;

impl<I, P> HeapOrder<Candidate<'_, I, P>> for Cheapest {
    fn compare(&self, a: &Candidate<'_, I, P>, b: &Candidate<'_, I, P>) -> Ordering {
        a.weight.total_cmp(&b.weight).then_with(|| a.seq.cmp(&b.seq))
    }
}

/// Minimum spanning tree of the component holding the first indexed vertex.
///
/// Candidate arcs whose endpoints are both already in the tree are discarded
/// when popped rather than removed eagerly. Arcs lacking the chosen channel
/// or weighing `NaN` on it never become candidates.
pub struct LazyPrim<'g, I, E, P = ()> {
    graph: &'g Graph<I, E, P>,
    mst: Vec<&'g Edge<I, P>>,
    total: f64,
}

impl<'g, I: VertexId, E, P> LazyPrim<'g, I, E, P> {
    /// Grows the tree over `channel`.
    pub fn new(graph: &'g Graph<I, E, P>, channel: &str) -> Self {
        let mut prim = Self {
            graph,
            mst: Vec::new(),
            total: 0.0,
        };
        let Some(start) = graph.ids().next() else {
            return prim;
        };

        let mut marked: IndexMap<I, ()> = IndexMap::with_capacity(graph.vertex_count().max(1));
        let mut heap = ArrayHeap::with_order(Cheapest, Orientation::Reverse);
        let mut seq = 0u64;
        let mut visit = |id: &I, marked: &mut IndexMap<I, ()>, heap: &mut ArrayHeap<_, Cheapest>| {
            marked.put(id.clone(), ());
            let Some(vertex) = graph.vertex(id) else {
                return;
            };
            for edge in vertex.edges() {
                if marked.contains_key(edge.to()) {
                    continue;
                }
                if let Some(weight) = edge.weight(channel).filter(|w| !w.is_nan()) {
                    seq += 1;
                    heap.add(Candidate { weight, seq, edge });
                }
            }
        };

        visit(start, &mut marked, &mut heap);
        while let Some(Candidate { weight, edge, .. }) = heap.poll() {
            let from_in = marked.contains_key(edge.from());
            let to_in = marked.contains_key(edge.to());
            if from_in && to_in {
                continue;
            }
            prim.mst.push(edge);
            prim.total += weight;
            if !from_in {
                visit(edge.from(), &mut marked, &mut heap);
            }
            if !to_in {
                visit(edge.to(), &mut marked, &mut heap);
            }
        }

        debug_event!(edges = prim.mst.len(), total = prim.total, "mst complete");
        prim
    }

    /// Tree arcs in the order they were accepted.
    pub fn edges(&self) -> &[&'g Edge<I, P>] {
        &self.mst
    }

    /// Sum of the chosen channel over the tree arcs.
    pub fn total_weight(&self) -> f64 {
        self.total
    }

    /// Number of tree arcs.
    pub fn len(&self) -> usize {
        self.mst.len()
    }

    /// Returns `true` if the tree has no arcs.
    pub fn is_empty(&self) -> bool {
        self.mst.is_empty()
    }
}

impl<I: VertexId, E: Clone, P: Clone> LazyPrim<'_, I, E, P> {
    /// The tree as an undirected graph over every vertex of the source graph.
    pub fn to_graph(&self) -> Graph<I, E, P> {
        self.graph.subgraph(false, self.mst.iter().copied())
    }
}
