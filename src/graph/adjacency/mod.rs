//! A growable adjacency-map graph shared by all four [`GraphKind`]s.
//!
//! Each vertex owns a row mapping neighbour ids to a [`Link`]. Adding the edge
//! `i -> j` writes the forward weight into row `i`; on directed graphs it also
//! writes a back-link into row `j`, which is how parents are tracked without a
//! reverse scan. Undirected graphs write the forward weight into both rows.
//!
//! Alongside the rows the graph keeps:
//! - a registry of primary-direction edges (the direction the caller gave),
//! - the number of registered edges,
//! - the set of start nodes, i.e. vertices without a parent.
//!
//! All three are updated inside the same call that mutates the rows.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::{EdgeKey, GraphError, GraphKind, GraphResult};

mod invariants;
mod link;

pub use link::{Link, Weight};

/// An adjacency-map graph over the vertices `0..size`.
///
/// Vertices are only ever added. Edge weights are `W` (any primitive signed
/// integer); unweighted kinds store a weight of one.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends an empty row |
/// | `add_edge` | \(O(1)\) expected | Two row writes plus a registry insert |
/// | `remove_edge` | \(O(\text{degree})\) | Re-derives the destination's parent flag |
/// | `neighbours` | \(O(\text{degree})\) | Filters out back-links |
/// | `has_parents` | \(O(\text{degree})\) | Scans one row |
/// | `start_nodes` | \(O(1)\) | Maintained incrementally |
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W = i32> {
    rows: Vec<HashMap<usize, Link<W>>>,
    kind: GraphKind,
    edge_count: usize,
    edges: HashMap<EdgeKey, Option<W>>,
    start_nodes: BTreeSet<usize>,
}

impl AdjacencyGraph<i32> {
    /// Creates a graph with `size` isolated vertices and `i32` weights.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidSize`] if `size` is zero.
    pub fn new(size: usize, kind: GraphKind) -> GraphResult<Self> {
        Self::with_weight_type(size, kind)
    }
}

impl<W: Weight> AdjacencyGraph<W> {
    /// Creates a graph with `size` isolated vertices and weights of type `W`.
    ///
    /// Every vertex starts out as a start node.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidSize`] if `size` is zero.
    pub fn with_weight_type(size: usize, kind: GraphKind) -> GraphResult<Self> {
        if size < 1 {
            #[cfg(feature = "tracing")]
            tracing::debug!(%kind, "rejected empty graph");
            return Err(GraphError::InvalidSize);
        }

        let graph = Self {
            rows: (0..size).map(|_| HashMap::new()).collect(),
            kind,
            edge_count: 0,
            edges: HashMap::new(),
            start_nodes: (0..size).collect(),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(size, %kind, "created adjacency graph");

        Ok(graph)
    }

    /// Returns the kind chosen at construction.
    #[inline]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of registered edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Adds the unweighted edge `i -> j`.
    ///
    /// Re-adding an existing edge leaves the edge count unchanged. On
    /// undirected graphs `j -> i` is the same edge as `i -> j`.
    ///
    /// # Errors
    /// - [`GraphError::Unsupported`] if the graph is weighted.
    /// - [`GraphError::VertexOutOfBounds`] if `i` or `j` is not a vertex.
    pub fn add_edge(&mut self, i: usize, j: usize) -> GraphResult<()> {
        if self.kind.is_weighted() {
            return Err(self.unsupported("add_edge"));
        }
        self.check_vertex(i)?;
        self.check_vertex(j)?;

        self.insert_edge(i, j, W::one(), None);
        Ok(())
    }

    /// Adds the edge `i -> j` carrying `weight`.
    ///
    /// Re-adding an existing edge replaces its weight, including the
    /// back-link recorded on the destination.
    ///
    /// # Errors
    /// - [`GraphError::Unsupported`] if the graph is unweighted.
    /// - [`GraphError::VertexOutOfBounds`] if `i` or `j` is not a vertex.
    /// - [`GraphError::NegativeWeight`] if `weight < 0` on a weighted-directed graph.
    pub fn add_weighted_edge(&mut self, i: usize, j: usize, weight: W) -> GraphResult<()> {
        if !self.kind.is_weighted() {
            return Err(self.unsupported("add_weighted_edge"));
        }
        self.check_vertex(i)?;
        self.check_vertex(j)?;
        if weight.is_negative() && self.kind.is_directed() {
            return Err(self.reject(GraphError::NegativeWeight { from: i, to: j }));
        }

        self.insert_edge(i, j, weight, Some(weight));
        Ok(())
    }

    /// Removes the edge `i -> j`.
    ///
    /// Returns `false` (and changes nothing) if no such edge is registered. On
    /// directed graphs an independent `j -> i` edge survives the removal.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] if `i` or `j` is not a vertex.
    pub fn remove_edge(&mut self, i: usize, j: usize) -> GraphResult<bool> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;

        let Some(key) = self.registered_key(i, j) else {
            return Ok(false);
        };
        self.edges.remove(&key);
        self.edge_count -= 1;

        let EdgeKey {
            source,
            destination,
        } = key;
        if self.kind.is_directed() {
            self.detach(source, destination, |link| link.forward = None);
            self.detach(destination, source, |link| link.back = None);
            if !self.has_parents(destination) {
                self.start_nodes.insert(destination);
            }
        } else {
            self.detach(source, destination, |link| link.forward = None);
            self.detach(destination, source, |link| link.forward = None);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(source, destination, edges = self.edge_count, "removed edge");

        self.debug_validate();
        Ok(true)
    }

    /// Replaces the weight of the registered edge `source -> destination`.
    ///
    /// Only weighted-directed graphs support weight changes.
    ///
    /// # Errors
    /// - [`GraphError::Unsupported`] unless the graph is weighted-directed.
    /// - [`GraphError::VertexOutOfBounds`] if either vertex is not in the graph.
    /// - [`GraphError::EdgeNotFound`] if the edge was never added (or was removed).
    /// - [`GraphError::NegativeWeight`] if `weight < 0`.
    pub fn change_weight(&mut self, source: usize, destination: usize, weight: W) -> GraphResult<()> {
        if self.kind != GraphKind::WeightedDirected {
            return Err(self.unsupported("change_weight"));
        }
        self.check_vertex(source)?;
        self.check_vertex(destination)?;

        let key = EdgeKey::new(source, destination);
        if !self.edges.contains_key(&key) {
            return Err(self.reject(GraphError::EdgeNotFound {
                from: source,
                to: destination,
            }));
        }
        if weight.is_negative() {
            return Err(self.reject(GraphError::NegativeWeight {
                from: source,
                to: destination,
            }));
        }

        self.edges.insert(key, Some(weight));
        self.rows[source].entry(destination).or_default().forward = Some(weight);
        self.rows[destination].entry(source).or_default().back = Some(weight);

        #[cfg(feature = "tracing")]
        tracing::trace!(source, destination, %weight, "changed edge weight");

        self.debug_validate();
        Ok(())
    }

    /// Appends a new isolated vertex and returns its id.
    ///
    /// The id equals the previous [`size`](Self::size). The new vertex is a
    /// start node.
    pub fn add_vertex(&mut self) -> usize {
        let id = self.rows.len();
        self.rows.push(HashMap::new());
        self.start_nodes.insert(id);

        #[cfg(feature = "tracing")]
        tracing::trace!(vertex = id, "added vertex");

        self.debug_validate();
        id
    }

    /// Returns the vertices reachable from `vertex` over one edge.
    ///
    /// Back-links are bookkeeping and are never reported. An unknown vertex
    /// has no neighbours.
    pub fn neighbours(&self, vertex: usize) -> BTreeSet<usize> {
        self.successors(vertex).collect()
    }

    /// Iterates the vertices reachable from `vertex`, in no particular order.
    pub fn successors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .get(vertex)
            .into_iter()
            .flat_map(|row| row.iter().filter(|(_, link)| link.is_forward()))
            .map(|(&n, _)| n)
    }

    /// Iterates the parents of `vertex`, in no particular order.
    ///
    /// Always empty on undirected graphs.
    pub fn predecessors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .get(vertex)
            .into_iter()
            .flat_map(|row| row.iter().filter(|(_, link)| link.is_back()))
            .map(|(&n, _)| n)
    }

    /// Returns `true` if row `i` holds any link to `j`.
    ///
    /// This includes back-links, so on a directed graph `is_adjacent(j, i)` is
    /// `true` after adding `i -> j`. Use [`neighbours`](Self::neighbours) for
    /// successors only.
    pub fn is_adjacent(&self, i: usize, j: usize) -> bool {
        self.rows.get(i).is_some_and(|row| row.contains_key(&j))
    }

    /// Returns the link stored in row `source` for `destination`, if any.
    pub fn link(&self, source: usize, destination: usize) -> Option<&Link<W>> {
        self.rows.get(source).and_then(|row| row.get(&destination))
    }

    /// Returns the signed link value stored at `adjacency[source][destination]`.
    ///
    /// This is the edge weight for an outgoing edge and the negated weight for
    /// a back-link.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingLink`] if no link is stored there.
    pub fn weight(&self, source: usize, destination: usize) -> GraphResult<W> {
        self.link(source, destination)
            .and_then(Link::value)
            .ok_or(GraphError::MissingLink {
                from: source,
                to: destination,
            })
    }

    /// Returns `true` if some directed edge ends at `vertex`.
    pub fn has_parents(&self, vertex: usize) -> bool {
        self.rows
            .get(vertex)
            .is_some_and(|row| row.values().any(Link::is_back))
    }

    /// Returns the vertices that have no parent.
    #[inline]
    pub fn start_nodes(&self) -> &BTreeSet<usize> {
        &self.start_nodes
    }

    /// Returns the primary-direction edge registry.
    ///
    /// Values are the last weight set for weighted kinds and `None` for
    /// unweighted kinds.
    #[inline]
    pub fn edges(&self) -> &HashMap<EdgeKey, Option<W>> {
        &self.edges
    }

    /// Returns a deep copy of every row with signed link values.
    pub fn adjacency_snapshot(&self) -> BTreeMap<usize, BTreeMap<usize, W>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(vertex, row)| {
                let copy = row
                    .iter()
                    .filter_map(|(&n, link)| link.value().map(|value| (n, value)))
                    .collect();
                (vertex, copy)
            })
            .collect()
    }

    /// The registry key `i -> j` is stored under, if the edge exists.
    ///
    /// Undirected graphs match either orientation.
    fn registered_key(&self, i: usize, j: usize) -> Option<EdgeKey> {
        let key = EdgeKey::new(i, j);
        if self.edges.contains_key(&key) {
            Some(key)
        } else if !self.kind.is_directed() && self.edges.contains_key(&key.reversed()) {
            Some(key.reversed())
        } else {
            None
        }
    }

    fn insert_edge(&mut self, i: usize, j: usize, weight: W, registered: Option<W>) {
        let key = self.registered_key(i, j).unwrap_or(EdgeKey::new(i, j));
        if self.edges.insert(key, registered).is_none() {
            self.edge_count += 1;
        }

        let EdgeKey {
            source,
            destination,
        } = key;
        self.rows[source].entry(destination).or_default().forward = Some(weight);
        if self.kind.is_directed() {
            self.rows[destination].entry(source).or_default().back = Some(weight);
            self.start_nodes.remove(&destination);
        } else {
            self.rows[destination].entry(source).or_default().forward = Some(weight);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(source, destination, %weight, edges = self.edge_count, "added edge");

        self.debug_validate();
    }

    /// Applies `clear` to `rows[owner][neighbour]` and drops the entry once empty.
    fn detach(&mut self, owner: usize, neighbour: usize, clear: impl FnOnce(&mut Link<W>)) {
        let row = &mut self.rows[owner];
        if let Some(link) = row.get_mut(&neighbour) {
            clear(link);
            if link.is_empty() {
                row.remove(&neighbour);
            }
        }
    }

    fn check_vertex(&self, vertex: usize) -> GraphResult<()> {
        if vertex < self.size() {
            Ok(())
        } else {
            Err(self.reject(GraphError::VertexOutOfBounds {
                vertex,
                size: self.size(),
            }))
        }
    }

    fn unsupported(&self, operation: &'static str) -> GraphError {
        self.reject(GraphError::Unsupported {
            operation,
            kind: self.kind,
        })
    }

    #[allow(clippy::unused_self)]
    fn reject(&self, error: GraphError) -> GraphError {
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = %self.kind, %error, "rejected graph operation");
        error
    }
}
