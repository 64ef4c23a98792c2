//! `Graph` — an adjacency-map graph over arbitrary vertex identifiers.
//!
//! Vertices live in an [`IndexMap`] keyed by identifier; each vertex owns a
//! second [`IndexMap`] of outgoing arcs keyed by destination, so there is at
//! most one arc per ordered pair.
//!
//! ### Edge accounting
//! - **Directed**: `edge_count` is the number of stored arcs.
//! - **Undirected**: an undirected edge is stored as two arcs; `edge_count`
//!   is the number of unordered pairs `{a, b}` with at least one stored arc.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | one map insertion |
//! | `add_edge` | \(O(1)\) amortized | first writer wins per ordered pair |
//! | `remove_edge` | \(O(1)\) amortized | leaves the mirror arc alone |
//! | `remove_vertex` | \(O(n)\) | scans every vertex for incoming arcs |
//! | `incoming_ids` | \(O(n)\) | scans every vertex |

use core::fmt;

use super::edge::Edge;
use super::vertex::Vertex;
use super::weight::Weight;
use crate::collections::IndexMap;
use crate::config::{GraphConfig, MapConfig};
use crate::error::{GraphError, Result};
use crate::graph::algorithms::Dfs;
use crate::graph::VertexId;

/// A directed or undirected graph with identified vertices and weighted arcs.
///
/// `E` is the vertex element and `P` the optional per-arc payload. Cloning
/// is deep: the clone owns its own vertex and edge indexes.
#[derive(Debug, Clone)]
pub struct Graph<I, E, P = ()> {
    directed: bool,
    vertices: IndexMap<I, Vertex<I, E, P>>,
    edge_count: usize,
    edge_index: MapConfig,
}

impl<I: VertexId, E, P> Graph<I, E, P> {
    /// Creates an empty graph with the default index policies.
    pub fn new(directed: bool) -> Self {
        Self::from_config(GraphConfig::new(directed))
    }

    /// Creates an empty graph sized for about `vertices` vertices.
    pub fn with_capacity(directed: bool, vertices: usize) -> Self {
        Self::from_config(GraphConfig {
            vertex_capacity: Some(vertices),
            ..GraphConfig::new(directed)
        })
    }

    /// Creates an empty graph after validating `config`.
    pub fn with_config(config: GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: GraphConfig) -> Self {
        Self {
            directed: config.directed,
            vertices: IndexMap::with_config(config.vertex_map_config()),
            edge_count: 0,
            edge_index: config.edge_index,
        }
    }

    /// Returns `true` if arcs are one-way.
    #[inline(always)]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges under this graph's accounting (see module docs).
    #[inline(always)]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of stored arcs, counting both halves of an undirected edge.
    pub fn arc_count(&self) -> usize {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // --- vertices ---------------------------------------------------------

    /// Inserts a vertex, or replaces the element of an existing one.
    ///
    /// Replacing keeps the vertex's arcs and returns the previous element.
    pub fn add_vertex(&mut self, id: I, element: E) -> Option<E> {
        if let Some(vertex) = self.vertices.get_mut(&id) {
            trace_event!(id = ?id, "vertex element replaced");
            return Some(vertex.replace_element(element));
        }
        trace_event!(id = ?id, "vertex added");
        let vertex = Vertex::new(id.clone(), element, self.edge_index);
        self.vertices.put(id, vertex);
        None
    }

    /// Returns `true` if `id` is a vertex of this graph.
    pub fn exists(&self, id: &I) -> bool {
        self.vertices.contains_key(id)
    }

    /// The vertex record for `id`.
    pub fn vertex(&self, id: &I) -> Option<&Vertex<I, E, P>> {
        self.vertices.get(id)
    }

    /// The element stored at `id`.
    pub fn element(&self, id: &I) -> Option<&E> {
        self.vertices.get(id).map(Vertex::element)
    }

    /// Mutable access to the element stored at `id`.
    pub fn element_mut(&mut self, id: &I) -> Option<&mut E> {
        self.vertices.get_mut(id).map(Vertex::element_mut)
    }

    /// Every vertex in index order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<I, E, P>> + '_ {
        self.vertices.values()
    }

    /// Every vertex identifier in index order.
    pub fn ids(&self) -> impl Iterator<Item = &I> + '_ {
        self.vertices.keys()
    }

    /// Removes `id`, every arc leaving it and every arc pointing at it.
    pub fn remove_vertex(&mut self, id: &I) -> Option<Vertex<I, E, P>> {
        let removed = self.vertices.delete(id)?;
        let mut lost = removed.out_degree();
        for vertex in self.vertices.values_mut() {
            if vertex.detach(id).is_some() && (self.directed || removed.edge_to(vertex.id()).is_none()) {
                lost += 1;
            }
        }
        self.edge_count -= lost;
        trace_event!(id = ?id, edges = lost, "vertex removed");
        Some(removed)
    }

    // --- edges ------------------------------------------------------------

    /// Connects `from` and `to` with default weight `1.0`.
    ///
    /// Undirected graphs also store the mirror arc. Returns the number of
    /// arcs actually inserted; existing arcs are left untouched.
    pub fn add_edge(&mut self, from: I, to: I) -> Result<usize> {
        self.add_weighted_edge(from, to, 1.0)
    }

    /// Connects `from` and `to` with `weight` on the default channel.
    pub fn add_weighted_edge(&mut self, from: I, to: I, weight: f64) -> Result<usize> {
        let mirror = !self.directed;
        self.add_edge_between(from, to, mirror, weight, weight)
    }

    /// Inserts `from -> to` and, when `bidirectional`, `to -> from`, each
    /// with its own default-channel weight.
    pub fn add_edge_between(
        &mut self,
        from: I,
        to: I,
        bidirectional: bool,
        forward: f64,
        backward: f64,
    ) -> Result<usize> {
        let backward = bidirectional.then(|| Edge::new(to.clone(), from.clone(), backward));
        self.insert_arcs(Edge::new(from, to, forward), backward)
    }

    /// Inserts arcs carrying full channel lists and an optional payload.
    ///
    /// The payload is attached to both directions.
    pub fn add_edge_with_weights(
        &mut self,
        from: I,
        to: I,
        bidirectional: bool,
        forward: Vec<Weight>,
        backward: Vec<Weight>,
        payload: Option<P>,
    ) -> Result<usize>
    where
        P: Clone,
    {
        let mut there = Edge::with_weights(from.clone(), to.clone(), forward);
        let mut back = bidirectional.then(|| Edge::with_weights(to, from, backward));
        if let Some(payload) = payload {
            if let Some(back) = back.as_mut() {
                *back.payload_mut() = Some(payload.clone());
            }
            *there.payload_mut() = Some(payload);
        }
        self.insert_arcs(there, back)
    }

    fn insert_arcs(&mut self, forward: Edge<I, P>, backward: Option<Edge<I, P>>) -> Result<usize> {
        let (from, to) = (forward.from().clone(), forward.to().clone());
        if !self.exists(&from) {
            return Err(GraphError::vertex_not_found(&from));
        }
        if !self.exists(&to) {
            return Err(GraphError::vertex_not_found(&to));
        }

        let pair_existed = self.has_arc(&from, &to) || self.has_arc(&to, &from);
        let mut inserted = usize::from(self.attach(forward)?);
        if let Some(backward) = backward {
            if from != to {
                inserted += usize::from(self.attach(backward)?);
            }
        }

        if self.directed {
            self.edge_count += inserted;
        } else if inserted > 0 && !pair_existed {
            self.edge_count += 1;
        }
        trace_event!(from = ?from, to = ?to, arcs = inserted, "edge added");
        Ok(inserted)
    }

    fn attach(&mut self, edge: Edge<I, P>) -> Result<bool> {
        let owner = edge.from().clone();
        self.vertices
            .get_mut(&owner)
            .map(|vertex| vertex.attach(edge))
            .ok_or_else(|| GraphError::vertex_not_found(&owner))
    }

    fn has_arc(&self, from: &I, to: &I) -> bool {
        self.vertices
            .get(from)
            .is_some_and(|v| v.edge_to(to).is_some())
    }

    /// Removes the single arc `from -> to`, leaving any mirror arc in place.
    pub fn remove_edge(&mut self, from: &I, to: &I) -> Option<Edge<I, P>> {
        let edge = self.vertices.get_mut(from)?.detach(to)?;
        if self.directed || from == to || !self.has_arc(to, from) {
            self.edge_count -= 1;
        }
        trace_event!(from = ?from, to = ?to, "edge removed");
        Some(edge)
    }

    /// The arc `from -> to`.
    pub fn get_edge(&self, from: &I, to: &I) -> Option<&Edge<I, P>> {
        self.vertices.get(from)?.edge_to(to)
    }

    /// Mutable access to the arc `from -> to`.
    pub fn get_edge_mut(&mut self, from: &I, to: &I) -> Option<&mut Edge<I, P>> {
        self.vertices.get_mut(from)?.edge_to_mut(to)
    }

    fn stored_edge_mut(&mut self, from: &I, to: &I) -> Result<&mut Edge<I, P>> {
        if !self.exists(to) {
            return Err(GraphError::vertex_not_found(to));
        }
        self.vertices
            .get_mut(from)
            .ok_or_else(|| GraphError::vertex_not_found(from))?
            .edge_to_mut(to)
            .ok_or_else(|| GraphError::edge_not_found(from, to))
    }

    // --- weights ----------------------------------------------------------

    /// Value of `channel` on `from -> to`; `Ok(None)` if the arc lacks it.
    pub fn get_weight(&self, from: &I, to: &I, channel: &str) -> Result<Option<f64>> {
        if !self.exists(to) {
            return Err(GraphError::vertex_not_found(to));
        }
        let vertex = self
            .vertices
            .get(from)
            .ok_or_else(|| GraphError::vertex_not_found(from))?;
        vertex
            .edge_to(to)
            .map(|edge| edge.weight(channel))
            .ok_or_else(|| GraphError::edge_not_found(from, to))
    }

    /// Sets `channel` on `from -> to`, returning its previous value.
    pub fn set_weight(&mut self, from: &I, to: &I, channel: &str, value: f64) -> Result<Option<f64>> {
        Ok(self.stored_edge_mut(from, to)?.set_weight(channel, value))
    }

    /// Drops `channel` from `from -> to`; the default channel is rejected.
    pub fn remove_weight(&mut self, from: &I, to: &I, channel: &str) -> Result<Option<f64>> {
        self.stored_edge_mut(from, to)?.remove_weight(channel)
    }

    /// Sum of every channel of every stored arc.
    pub fn total_weight(&self) -> f64 {
        self.vertices.values().map(Vertex::weight).sum()
    }

    // --- adjacency --------------------------------------------------------

    fn require(&self, id: &I) -> Result<&Vertex<I, E, P>> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::vertex_not_found(id))
    }

    /// Arcs leaving `from`.
    pub fn outgoing_edges(&self, from: &I) -> Result<Vec<&Edge<I, P>>> {
        Ok(self.require(from)?.edges().collect())
    }

    /// Destinations of the arcs leaving `from`.
    pub fn outgoing_ids(&self, from: &I) -> Result<Vec<I>> {
        Ok(self.require(from)?.neighbor_ids().cloned().collect())
    }

    /// Elements of the destinations of the arcs leaving `from`.
    pub fn outgoing_elements(&self, from: &I) -> Result<Vec<&E>> {
        Ok(self
            .require(from)?
            .neighbor_ids()
            .filter_map(|id| self.element(id))
            .collect())
    }

    /// Sources of the arcs arriving at `to`, in index order.
    pub fn incoming_ids(&self, to: &I) -> Result<Vec<I>> {
        self.require(to)?;
        Ok(self
            .vertices
            .values()
            .filter(|v| v.edge_to(to).is_some())
            .map(|v| v.id().clone())
            .collect())
    }

    /// Elements of the sources of the arcs arriving at `to`.
    pub fn incoming_elements(&self, to: &I) -> Result<Vec<&E>> {
        self.require(to)?;
        Ok(self
            .vertices
            .values()
            .filter(|v| v.edge_to(to).is_some())
            .map(Vertex::element)
            .collect())
    }

    // --- traversal queries --------------------------------------------------

    /// Number of depth-first trees needed to cover every vertex.
    ///
    /// On an undirected graph this is the number of connected components.
    pub fn components(&self) -> usize {
        Dfs::new(self).component_count()
    }

    /// Returns `true` if `to` is reachable from `from` (including `from == to`).
    pub fn has_path(&self, from: &I, to: &I) -> Result<bool> {
        Ok(Dfs::from_start(self, from)?.is_visited(to))
    }

    /// A depth-first path from `from` to `to`, if `to` is reachable.
    pub fn path(&self, from: &I, to: &I) -> Result<Option<Vec<I>>> {
        Ok(Dfs::from_start(self, from)?.path_to(to))
    }

    /// Returns `true` if a cycle is reachable from `start`.
    ///
    /// Only meaningful on directed graphs; undirected graphs fail with
    /// [`GraphError::InvalidOperation`].
    pub fn is_in_cycle(&self, start: &I) -> Result<bool> {
        if !self.directed {
            return Err(GraphError::InvalidOperation(
                "cycle detection requires a directed graph".into(),
            ));
        }
        Dfs::from_start(self, start)?.has_cycle()
    }

    /// Vertices in reverse depth-first postorder.
    ///
    /// This is a topological order when the graph is a DAG; on a cyclic graph
    /// the order is unspecified and no error is reported.
    pub fn topological_order(&self) -> Vec<I> {
        Dfs::new(self).reverse_postorder()
    }

    /// Elements in [`topological_order`](Self::topological_order).
    pub fn topological_order_elements(&self) -> Vec<&E> {
        self.topological_order()
            .iter()
            .filter_map(|id| self.element(id))
            .collect()
    }
}

impl<I: VertexId, E: Clone, P: Clone> Graph<I, E, P> {
    fn with_vertices_of(&self, directed: bool) -> Self {
        let mut graph = Self::from_config(GraphConfig {
            directed,
            vertex_capacity: Some(self.vertices.capacity()),
            vertex_index: *self.vertices.config(),
            edge_index: self.edge_index,
        });
        for vertex in self.vertices.values() {
            graph.add_vertex(vertex.id().clone(), vertex.element().clone());
        }
        graph
    }

    /// Copies this graph under a different directedness.
    ///
    /// Rebuilding as undirected mirrors every arc. Rebuilding as directed
    /// keeps an arc only if its reverse has not already been copied, so each
    /// mirrored pair collapses to one arc.
    pub fn rebuild(&self, directed: bool) -> Self {
        let mut graph = self.with_vertices_of(directed);
        for vertex in self.vertices.values() {
            for edge in vertex.edges() {
                let backward = if directed {
                    if graph.has_arc(edge.to(), edge.from()) {
                        continue;
                    }
                    None
                } else {
                    Some(edge.mirrored())
                };
                if graph.insert_arcs(edge.clone(), backward).is_err() {
                    trace_event!(from = ?edge.from(), to = ?edge.to(), "rebuild arc skipped");
                }
            }
        }
        debug_event!(directed, edges = graph.edge_count, "graph rebuilt");
        graph
    }

    /// Copies every vertex but only the given arcs.
    ///
    /// In an undirected result every arc is mirrored. Arcs whose endpoints are
    /// not vertices of this graph are skipped.
    pub fn subgraph<'a, A>(&self, directed: bool, arcs: A) -> Self
    where
        A: IntoIterator<Item = &'a Edge<I, P>>,
        I: 'a,
        P: 'a,
    {
        let mut graph = self.with_vertices_of(directed);
        for edge in arcs {
            let backward = (!directed).then(|| edge.mirrored());
            if graph.insert_arcs(edge.clone(), backward).is_err() {
                trace_event!(from = ?edge.from(), to = ?edge.to(), "subgraph arc skipped");
            }
        }
        graph
    }
}

impl<I: VertexId + fmt::Display, E: fmt::Display, P> Graph<I, E, P> {
    /// Adjacency listing with elements in place of identifiers.
    pub fn display_elements(&self) -> String {
        let mut out = String::new();
        for vertex in self.vertices.values() {
            out.push_str(&format!("{}|", vertex.element()));
            for to in vertex.neighbor_ids() {
                if let Some(element) = self.element(to) {
                    out.push_str(&format!(" -> {element}"));
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Adjacency listing: one `id| -> a -> b` line per vertex, in index order.
impl<I: VertexId + fmt::Display, E, P> fmt::Display for Graph<I, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices.values() {
            write!(f, "{}|", vertex.id())?;
            for to in vertex.neighbor_ids() {
                write!(f, " -> {to}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DEFAULT_CHANNEL;

    fn line(directed: bool, n: u32) -> Graph<u32, String> {
        let mut g = Graph::new(directed);
        for i in 0..n {
            g.add_vertex(i, format!("v{i}"));
        }
        g
    }

    #[test]
    fn add_vertex_overwrites_element() {
        let mut g = line(true, 2);
        g.add_edge(0, 1).unwrap();
        assert_eq!(g.add_vertex(0, "zero".into()), Some("v0".to_string()));
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.element(&0).map(String::as_str), Some("zero"));
        assert!(g.get_edge(&0, &1).is_some());
    }

    #[test]
    fn edge_requires_both_endpoints() {
        let mut g = line(true, 1);
        assert_eq!(
            g.add_edge(0, 9),
            Err(GraphError::VertexNotFound("9".into()))
        );
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn directed_accounting() {
        let mut g = line(true, 3);
        assert_eq!(g.add_edge(0, 1).unwrap(), 1);
        assert_eq!(g.add_edge(0, 1).unwrap(), 0);
        assert_eq!(g.add_edge_between(1, 2, true, 2.0, 3.0).unwrap(), 2);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.arc_count(), 3);
        assert_eq!(g.get_weight(&2, &1, DEFAULT_CHANNEL), Ok(Some(3.0)));

        assert!(g.remove_edge(&1, &2).is_some());
        assert_eq!(g.edge_count(), 2);
        assert!(g.remove_edge(&1, &2).is_none());
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn undirected_counts_pairs() {
        let mut g = line(false, 3);
        assert_eq!(g.add_edge(0, 1).unwrap(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.arc_count(), 2);

        // Dropping one half keeps the pair alive.
        g.remove_edge(&0, &1);
        assert_eq!(g.edge_count(), 1);
        // Re-adding restores the missing half without recounting.
        assert_eq!(g.add_edge(0, 1).unwrap(), 1);
        assert_eq!(g.edge_count(), 1);

        g.remove_edge(&0, &1);
        g.remove_edge(&1, &0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn self_loop_is_one_arc() {
        let mut g = line(false, 1);
        assert_eq!(g.add_edge(0, 0).unwrap(), 1);
        assert_eq!(g.edge_count(), 1);
        assert!(g.remove_edge(&0, &0).is_some());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn remove_vertex_cascades() {
        let mut g = line(true, 3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(2, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(0, 2).unwrap();

        let removed = g.remove_vertex(&1).unwrap();
        assert_eq!(removed.out_degree(), 1);
        assert!(!g.exists(&1));
        assert!(g.vertices().all(|v| v.edge_to(&1).is_none()));
        assert_eq!(g.edge_count(), 1);
        assert!(g.remove_vertex(&1).is_none());
    }

    #[test]
    fn remove_vertex_undirected() {
        let mut g = line(false, 3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(0, 2).unwrap();
        g.remove_vertex(&1);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.arc_count(), 2);
    }

    #[test]
    fn weight_errors() {
        let mut g = line(true, 3);
        g.add_weighted_edge(0, 1, 4.0).unwrap();

        assert_eq!(g.get_weight(&0, &1, "toll"), Ok(None));
        assert_eq!(g.set_weight(&0, &1, "toll", 2.0), Ok(None));
        assert_eq!(g.get_weight(&0, &1, "toll"), Ok(Some(2.0)));
        assert_eq!(g.total_weight(), 6.0);
        assert_eq!(g.remove_weight(&0, &1, "toll"), Ok(Some(2.0)));

        assert!(matches!(
            g.remove_weight(&0, &1, DEFAULT_CHANNEL),
            Err(GraphError::InvalidOperation(_))
        ));
        assert!(matches!(
            g.get_weight(&1, &2, DEFAULT_CHANNEL),
            Err(GraphError::EdgeNotFound { .. })
        ));
        assert!(matches!(
            g.set_weight(&0, &7, DEFAULT_CHANNEL, 1.0),
            Err(GraphError::VertexNotFound(_))
        ));
    }

    #[test]
    fn payload_travels_with_both_arcs() {
        let mut g: Graph<u32, (), &str> = Graph::new(false);
        g.add_vertex(1, ());
        g.add_vertex(2, ());
        g.add_edge_with_weights(
            1,
            2,
            true,
            vec![Weight::new("km", 3.0)],
            vec![Weight::new("km", 5.0)],
            Some("bridge"),
        )
        .unwrap();
        assert_eq!(g.get_edge(&2, &1).and_then(Edge::payload), Some(&"bridge"));
        assert_eq!(g.get_weight(&2, &1, "km"), Ok(Some(5.0)));
        assert_eq!(g.get_weight(&1, &2, DEFAULT_CHANNEL), Ok(Some(1.0)));
    }

    #[test]
    fn adjacency_queries() {
        let mut g = line(true, 3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(2, 1).unwrap();

        assert_eq!(g.outgoing_ids(&0).unwrap(), vec![1]);
        assert_eq!(g.outgoing_elements(&0).unwrap(), vec!["v1"]);
        let mut incoming = g.incoming_ids(&1).unwrap();
        incoming.sort_unstable();
        assert_eq!(incoming, vec![0, 2]);
        assert_eq!(g.incoming_elements(&1).unwrap().len(), 2);
        assert!(g.outgoing_edges(&5).is_err());
    }

    #[test]
    fn rebuild_changes_directedness() {
        let mut g = line(false, 3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();

        let directed = g.rebuild(true);
        assert!(directed.is_directed());
        assert_eq!(directed.edge_count(), 2);
        assert_eq!(directed.arc_count(), 2);

        let back = directed.rebuild(false);
        assert_eq!(back.edge_count(), 2);
        assert_eq!(back.arc_count(), 4);
        assert_eq!(back.element(&2).map(String::as_str), Some("v2"));
    }

    #[test]
    fn subgraph_keeps_vertices() {
        let mut g = line(true, 3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        let keep: Vec<&Edge<u32>> = g.get_edge(&0, &1).into_iter().collect();

        let sub = g.subgraph(false, keep);
        assert_eq!(sub.vertex_count(), 3);
        assert_eq!(sub.edge_count(), 1);
        assert!(sub.get_edge(&1, &0).is_some());
    }

    #[test]
    fn clone_is_deep() {
        let mut g = line(true, 2);
        let copy = g.clone();
        g.add_edge(0, 1).unwrap();
        assert_eq!(copy.edge_count(), 0);
        assert!(copy.get_edge(&0, &1).is_none());
    }

    #[test]
    fn display_lists_adjacency() {
        let mut g: Graph<u32, &str> = Graph::new(true);
        g.add_vertex(1, "a");
        g.add_vertex(2, "b");
        g.add_edge(1, 2).unwrap();

        let text = g.to_string();
        assert!(text.contains("1| -> 2\n"));
        assert!(text.contains("2|\n"));
        assert!(g.display_elements().contains("a| -> b\n"));
    }

    #[test]
    fn with_config_validates() {
        let bad = GraphConfig {
            edge_index: MapConfig {
                growth_increment: 0,
                ..MapConfig::default()
            },
            ..GraphConfig::new(true)
        };
        assert!(Graph::<u32, ()>::with_config(bad).is_err());
    }
}
