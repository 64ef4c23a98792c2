//! Tuning knobs for the hand-rolled containers and the graph built on them.
//!
//! Every config type deserializes from partial documents (`#[serde(default)]`)
//! and is checked with `validate()` before a container adopts it.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Capacity and rehash policy for [`IndexMap`](crate::collections::IndexMap).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Slot count of a freshly created map.
    pub initial_capacity: usize,
    /// Slots added or removed by a single grow/shrink step.
    pub growth_increment: usize,
    /// Live-entries / capacity ratio above which the table grows.
    pub load_factor: f32,
    /// Tombstones / capacity ratio at which a compaction rehash runs.
    pub tombstone_ratio: f32,
}

impl MapConfig {
    /// Returns a copy with a different starting capacity.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Checks that the policy can keep probe sequences bounded.
    pub fn validate(&self) -> Result<()> {
        if self.growth_increment == 0 {
            return Err(GraphError::InvalidConfig(
                "map growth_increment must be non-zero".into(),
            ));
        }
        if !(self.load_factor > 0.0 && self.load_factor < 1.0) {
            return Err(GraphError::InvalidConfig(format!(
                "map load_factor must lie in (0, 1), got {}",
                self.load_factor
            )));
        }
        if !(self.tombstone_ratio > 0.0 && self.tombstone_ratio <= 1.0) {
            return Err(GraphError::InvalidConfig(format!(
                "map tombstone_ratio must lie in (0, 1], got {}",
                self.tombstone_ratio
            )));
        }
        Ok(())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 20,
            growth_increment: 20,
            load_factor: 0.75,
            tombstone_ratio: 0.30,
        }
    }
}

/// Chunked growth policy for [`ArrayHeap`](crate::collections::ArrayHeap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeapConfig {
    /// Slots added or released per resize.
    pub chunk: usize,
    /// Fill percentage that triggers growth before an insertion.
    pub fill_percent: usize,
}

impl HeapConfig {
    /// Checks chunk and threshold bounds.
    pub fn validate(&self) -> Result<()> {
        if self.chunk == 0 {
            return Err(GraphError::InvalidConfig(
                "heap chunk must be non-zero".into(),
            ));
        }
        if !(1..=100).contains(&self.fill_percent) {
            return Err(GraphError::InvalidConfig(format!(
                "heap fill_percent must lie in 1..=100, got {}",
                self.fill_percent
            )));
        }
        Ok(())
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            chunk: 1024,
            fill_percent: 80,
        }
    }
}

/// Construction parameters for a [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Whether arcs are one-way.
    pub directed: bool,
    /// Expected vertex count; overrides `vertex_index.initial_capacity`.
    pub vertex_capacity: Option<usize>,
    /// Policy for the vertex index.
    pub vertex_index: MapConfig,
    /// Policy for every vertex's outgoing-edge index.
    pub edge_index: MapConfig,
}

impl GraphConfig {
    /// Default policies with the given directedness.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Self::default()
        }
    }

    /// Validates both index policies.
    pub fn validate(&self) -> Result<()> {
        self.vertex_index.validate()?;
        self.edge_index.validate()
    }

    pub(crate) fn vertex_map_config(&self) -> MapConfig {
        match self.vertex_capacity {
            Some(hint) => self.vertex_index.with_initial_capacity(hint),
            None => self.vertex_index,
        }
    }
}
