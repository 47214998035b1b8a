//! Graph kinds.
//!
//! A [`GraphKind`] is fixed when an [`AdjacencyGraph`](crate::graph::AdjacencyGraph)
//! is constructed and decides which edge operations are legal, whether edges
//! carry caller-supplied weights, and whether adding an edge records a parent
//! on its destination.

use core::fmt;

/// The four graph kinds backed by the shared adjacency-map representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    /// Unweighted edges with a direction.
    SimpleDirected,
    /// Unweighted symmetric edges.
    SimpleUndirected,
    /// Non-negative weighted edges with a direction.
    WeightedDirected,
    /// Weighted symmetric edges. Negative weights are accepted.
    WeightedUndirected,
}

impl GraphKind {
    /// Every kind, in declaration order.
    pub const ALL: [GraphKind; 4] = [
        GraphKind::SimpleDirected,
        GraphKind::SimpleUndirected,
        GraphKind::WeightedDirected,
        GraphKind::WeightedUndirected,
    ];

    /// Returns `true` if edges of this kind have a direction.
    #[inline]
    pub const fn is_directed(self) -> bool {
        matches!(self, GraphKind::SimpleDirected | GraphKind::WeightedDirected)
    }

    /// Returns `true` if edges of this kind carry a caller-supplied weight.
    #[inline]
    pub const fn is_weighted(self) -> bool {
        matches!(self, GraphKind::WeightedDirected | GraphKind::WeightedUndirected)
    }

    const fn name(self) -> &'static str {
        match self {
            GraphKind::SimpleDirected => "simple-directed",
            GraphKind::SimpleUndirected => "simple-undirected",
            GraphKind::WeightedDirected => "weighted-directed",
            GraphKind::WeightedUndirected => "weighted-undirected",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
