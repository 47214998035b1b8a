//! # `adjgraph` - Adjacency-Map Graphs
//!
//! A small in-memory graph supporting four kinds of graph (simple directed,
//! simple undirected, weighted directed, weighted undirected) on top of one
//! adjacency-map representation.
//!
//! ## Key Features
//!
//! - **One representation**: every kind shares [`AdjacencyGraph`]; the kind
//!   only changes which operations are legal and how links are mirrored
//! - **Parent tracking**: directed edges leave a back-link on their
//!   destination, so `has_parents` never scans other rows
//! - **Start nodes**: the set of parentless vertices is maintained on every
//!   mutation
//! - **Edge registry**: primary-direction edges and their weights are indexed
//!   separately for weight changes and enumeration
//!
//! ## Architecture
//!
//! ### Link encoding
//!
//! Adding `i -> j` stores a forward link in row `i`. Directed kinds also store
//! a back-link in row `j`; its signed value is the negated weight, which is
//! what [`AdjacencyGraph::weight`] reports for that slot. Undirected kinds
//! store a forward link in both rows and never record parents.
//!
//! ### Invariants
//!
//! After every public operation:
//! 1. The edge count equals the number of registered edges
//! 2. Every vertex in `0..size` has a row
//! 3. Start nodes are exactly the vertices without parents
//! 4. Registered weights match the stored forward links
//! 5. Undirected graphs hold no back-links
//!
//! Debug builds check all of them on exit from each mutator.
//!
//! ## Example
//!
//! ```
//! use adjgraph::{AdjacencyGraph, GraphKind};
//!
//! let mut graph = AdjacencyGraph::new(3, GraphKind::WeightedDirected)?;
//! graph.add_weighted_edge(0, 1, 5)?;
//! graph.add_weighted_edge(1, 2, 2)?;
//!
//! assert_eq!(graph.weight(0, 1)?, 5);
//! assert_eq!(graph.weight(1, 0)?, -5);
//! assert!(graph.neighbours(1).contains(&2));
//! assert_eq!(graph.start_nodes().iter().copied().collect::<Vec<_>>(), vec![0]);
//! # Ok::<(), adjgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod concurrency;
pub mod graph;

pub use concurrency::SharedGraph;
pub use graph::{
    AdjacencyGraph, EdgeKey, ErrorCategory, GraphError, GraphKind, GraphResult, Link, Weight,
};
