//! `Vertex` — an identified payload and its outgoing-edge index.

use super::edge::Edge;
use crate::collections::IndexMap;
use crate::config::MapConfig;
use crate::graph::VertexId;

/// A vertex record: identifier, element and outgoing arcs keyed by destination.
#[derive(Debug, Clone)]
pub struct Vertex<I, E, P = ()> {
    id: I,
    element: E,
    edges: IndexMap<I, Edge<I, P>>,
}

impl<I: VertexId, E, P> Vertex<I, E, P> {
    pub(crate) fn new(id: I, element: E, edge_index: MapConfig) -> Self {
        Self {
            id,
            element,
            edges: IndexMap::with_config(edge_index),
        }
    }

    /// The vertex identifier.
    #[inline(always)]
    pub fn id(&self) -> &I {
        &self.id
    }

    /// The stored element.
    #[inline(always)]
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Mutable access to the stored element.
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    /// Outgoing arcs in index order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<I, P>> + '_ {
        self.edges.values()
    }

    /// Identifiers of the outgoing arcs' destinations.
    pub fn neighbor_ids(&self) -> impl Iterator<Item = &I> + '_ {
        self.edges.keys()
    }

    /// The arc towards `to`, if stored.
    pub fn edge_to(&self, to: &I) -> Option<&Edge<I, P>> {
        self.edges.get(to)
    }

    /// Mutable access to the arc towards `to`.
    pub fn edge_to_mut(&mut self, to: &I) -> Option<&mut Edge<I, P>> {
        self.edges.get_mut(to)
    }

    /// Number of outgoing arcs.
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Sum of the total weights of every outgoing arc.
    pub fn weight(&self) -> f64 {
        self.edges.values().map(Edge::total_weight).sum()
    }

    pub(crate) fn replace_element(&mut self, element: E) -> E {
        core::mem::replace(&mut self.element, element)
    }

    /// Stores `edge` unless an arc to the same destination exists.
    pub(crate) fn attach(&mut self, edge: Edge<I, P>) -> bool {
        if self.edges.contains_key(edge.to()) {
            return false;
        }
        self.edges.put(edge.to().clone(), edge);
        true
    }

    pub(crate) fn detach(&mut self, to: &I) -> Option<Edge<I, P>> {
        self.edges.delete(to)
    }
}
