//! A graph shared between threads behind one exclusive lock.
//!
//! Start-node tracking is maintained incrementally by every mutator, so the
//! whole graph is guarded by a single mutex instead of finer-grained locks.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::graph::{AdjacencyGraph, GraphResult, Weight};

/// A cloneable handle to an [`AdjacencyGraph`] guarded by a mutex.
///
/// Clones refer to the same graph. Each forwarding method takes the lock for
/// the duration of one graph operation; use [`with_mut`](Self::with_mut) to
/// apply several operations atomically.
#[derive(Debug)]
pub struct SharedGraph<W = i32> {
    inner: Arc<Mutex<AdjacencyGraph<W>>>,
}

impl<W> Clone for SharedGraph<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: Weight> From<AdjacencyGraph<W>> for SharedGraph<W> {
    fn from(graph: AdjacencyGraph<W>) -> Self {
        Self::new(graph)
    }
}

impl<W: Weight> SharedGraph<W> {
    /// Wraps `graph` for shared access.
    pub fn new(graph: AdjacencyGraph<W>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(graph)),
        }
    }

    /// Runs `f` with shared access to the graph.
    pub fn with<R>(&self, f: impl FnOnce(&AdjacencyGraph<W>) -> R) -> R {
        let guard = self.inner.lock();
        f(&*guard)
    }

    /// Runs `f` with exclusive access to the graph.
    ///
    /// No other handle observes the graph until `f` returns.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut AdjacencyGraph<W>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    /// See [`AdjacencyGraph::add_edge`].
    ///
    /// # Errors
    /// Propagates the graph's error.
    pub fn add_edge(&self, i: usize, j: usize) -> GraphResult<()> {
        self.inner.lock().add_edge(i, j)
    }

    /// See [`AdjacencyGraph::add_weighted_edge`].
    ///
    /// # Errors
    /// Propagates the graph's error.
    pub fn add_weighted_edge(&self, i: usize, j: usize, weight: W) -> GraphResult<()> {
        self.inner.lock().add_weighted_edge(i, j, weight)
    }

    /// See [`AdjacencyGraph::remove_edge`].
    ///
    /// # Errors
    /// Propagates the graph's error.
    pub fn remove_edge(&self, i: usize, j: usize) -> GraphResult<bool> {
        self.inner.lock().remove_edge(i, j)
    }

    /// See [`AdjacencyGraph::change_weight`].
    ///
    /// # Errors
    /// Propagates the graph's error.
    pub fn change_weight(&self, source: usize, destination: usize, weight: W) -> GraphResult<()> {
        self.inner.lock().change_weight(source, destination, weight)
    }

    /// See [`AdjacencyGraph::add_vertex`].
    pub fn add_vertex(&self) -> usize {
        self.inner.lock().add_vertex()
    }

    /// Returns the successors of `vertex` at the time of the call.
    pub fn neighbours(&self, vertex: usize) -> BTreeSet<usize> {
        self.inner.lock().neighbours(vertex)
    }

    /// Returns a copy of the current start nodes.
    pub fn start_nodes(&self) -> BTreeSet<usize> {
        self.inner.lock().start_nodes().clone()
    }

    /// Returns the current number of vertices.
    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    /// Returns the current number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.lock().edge_count()
    }

    /// Unwraps the graph if this is the last handle.
    ///
    /// # Errors
    /// Returns the handle unchanged while other clones are alive.
    pub fn try_into_inner(self) -> Result<AdjacencyGraph<W>, Self> {
        Arc::try_unwrap(self.inner)
            .map(|mutex| mutex.into_inner())
            .map_err(|inner| Self { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphKind;
    use std::thread;

    #[test]
    fn test_clones_share_the_graph() {
        let shared = SharedGraph::new(AdjacencyGraph::new(2, GraphKind::SimpleDirected).unwrap());
        let other = shared.clone();

        other.add_edge(0, 1).unwrap();
        assert_eq!(shared.edge_count(), 1);
        assert_eq!(shared.start_nodes().into_iter().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_concurrent_edge_insertion() {
        let threads = 4;
        let per_thread = 16;
        let shared = SharedGraph::new(
            AdjacencyGraph::new(threads * per_thread + 1, GraphKind::WeightedDirected).unwrap(),
        );

        thread::scope(|s| {
            for t in 0..threads {
                let handle = shared.clone();
                s.spawn(move || {
                    for k in 0..per_thread {
                        let target = 1 + t * per_thread + k;
                        handle.add_weighted_edge(0, target, k as i32).unwrap();
                    }
                });
            }
        });

        assert_eq!(shared.edge_count(), threads * per_thread);
        assert_eq!(shared.neighbours(0).len(), threads * per_thread);

        let graph = shared.try_into_inner().unwrap();
        assert_eq!(graph.start_nodes().iter().copied().collect::<Vec<_>>(), vec![0]);
        assert!(graph.validate_invariants());
    }

    #[test]
    fn test_with_mut_is_atomic() {
        let shared = SharedGraph::new(AdjacencyGraph::new(1, GraphKind::SimpleUndirected).unwrap());
        let id = shared.with_mut(|g| {
            let v = g.add_vertex();
            g.add_edge(0, v).map(|()| v)
        });
        assert_eq!(id, Ok(1));
        assert!(shared.with(|g| g.is_adjacent(1, 0)));
    }

    #[test]
    fn test_try_into_inner_with_live_clone() {
        let shared = SharedGraph::new(AdjacencyGraph::new(1, GraphKind::SimpleDirected).unwrap());
        let clone = shared.clone();
        let shared = shared.try_into_inner().unwrap_err();
        drop(clone);
        assert!(shared.try_into_inner().is_ok());
    }
}
