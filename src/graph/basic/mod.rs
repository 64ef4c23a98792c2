//! Graph records.
//!
//! [`Graph`] owns an index of [`Vertex`] records; each vertex owns its
//! outgoing [`Edge`]s, and each edge carries one or more [`Weight`] channels.

pub mod adjacency_graph;
pub mod edge;
pub mod vertex;
pub mod weight;

pub use adjacency_graph::Graph;
pub use edge::Edge;
pub use vertex::Vertex;
pub use weight::{Weight, DEFAULT_CHANNEL};
