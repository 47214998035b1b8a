//! Adjacency-map graphs and the value types they consume.
//!
//! - `kind`: the four graph kinds and their capabilities
//! - `edge`: order-sensitive keys for the edge registry
//! - `adjacency`: the graph itself
//! - `error`: errors shared by every graph operation

pub mod adjacency;
pub mod edge;
pub mod error;
pub mod kind;

pub use adjacency::{AdjacencyGraph, Link, Weight};
pub use edge::EdgeKey;
pub use error::{ErrorCategory, GraphError, GraphResult};
pub use kind::GraphKind;
