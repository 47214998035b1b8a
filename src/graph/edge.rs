//! Edge keys for the primary-direction edge registry.

use core::fmt;

/// An ordered `(source, destination)` pair identifying a registered edge.
///
/// Equality is order-sensitive: `(1, 2)` and `(2, 1)` are distinct keys, so
/// the registry records the direction the caller specified even for
/// undirected graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    /// The vertex the edge was added from.
    pub source: usize,
    /// The vertex the edge was added to.
    pub destination: usize,
}

impl EdgeKey {
    /// Creates a key for the edge `source -> destination`.
    #[inline]
    pub const fn new(source: usize, destination: usize) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Returns the key with source and destination swapped.
    #[inline]
    pub const fn reversed(self) -> Self {
        Self::new(self.destination, self.source)
    }

    /// Returns `true` if the edge starts and ends at the same vertex.
    #[inline]
    pub const fn is_self_loop(self) -> bool {
        self.source == self.destination
    }
}

impl From<(usize, usize)> for EdgeKey {
    fn from((source, destination): (usize, usize)) -> Self {
        Self::new(source, destination)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {})", self.source, self.destination)
    }
}
