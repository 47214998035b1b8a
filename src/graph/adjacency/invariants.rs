//! Structural invariants of [`AdjacencyGraph`].
//!
//! Mutators call `debug_validate` on exit; release builds skip the check.

use super::{AdjacencyGraph, Link, Weight};

/// Debug-asserts a graph invariant with a message.
#[inline(always)]
fn invariant_assert(condition: bool, message: &str) {
    debug_assert!(condition, "Graph invariant violated: {}", message);
}

impl<W: Weight> AdjacencyGraph<W> {
    /// Checks every structural invariant of the graph.
    ///
    /// This verifies that:
    /// 1. The edge count equals the number of registered edges
    /// 2. Every link points at an existing vertex and is non-empty
    /// 3. Forward entries and their mirrors agree on both rows
    /// 4. Start nodes are exactly the vertices without parents
    /// 5. Registered weights match the stored forward weights
    /// 6. Undirected graphs hold no back-links
    ///
    /// Returns `true` if all invariants hold.
    pub fn validate_invariants(&self) -> bool {
        self.invariant_violation().is_none()
    }

    #[inline]
    pub(super) fn debug_validate(&self) {
        if cfg!(debug_assertions) {
            let violation = self.invariant_violation();
            invariant_assert(violation.is_none(), violation.unwrap_or_default());
        }
    }

    fn invariant_violation(&self) -> Option<&'static str> {
        if self.edge_count != self.edges.len() {
            return Some("edge count must equal the number of registered edges");
        }

        let directed = self.kind.is_directed();
        let size = self.rows.len();
        let mut forward_links = 0usize;

        for (owner, row) in self.rows.iter().enumerate() {
            for (&neighbour, link) in row {
                if neighbour >= size {
                    return Some("link target out of bounds");
                }
                if link.is_empty() {
                    return Some("empty links must not be stored");
                }
                if !directed && link.is_back() {
                    return Some("undirected graphs never record back-links");
                }
                if link.is_forward() {
                    forward_links += 1;
                }

                let mirror = self.rows[neighbour].get(&owner);
                let mirrored = if directed {
                    mirror.and_then(Link::back)
                } else {
                    mirror.and_then(Link::forward)
                };
                if link.forward != mirrored {
                    return Some("forward entry and its mirror disagree");
                }
                if directed && link.back != mirror.and_then(Link::forward) {
                    return Some("back-link without a matching forward entry");
                }
            }

            let has_parents = row.values().any(Link::is_back);
            if self.start_nodes.contains(&owner) == has_parents {
                return Some("start nodes must be exactly the vertices without parents");
            }
        }

        if self.start_nodes.range(size..).next().is_some() {
            return Some("start node out of bounds");
        }

        let mut expected_links = 0usize;
        for (key, registered) in &self.edges {
            if registered.is_some() != self.kind.is_weighted() {
                return Some("registry weights must be present exactly for weighted kinds");
            }
            let weight = registered.unwrap_or_else(W::one);
            let stored = self.link(key.source, key.destination).and_then(Link::forward);
            if stored != Some(weight) {
                return Some("registered weight must match the forward link");
            }
            expected_links += if directed || key.is_self_loop() { 1 } else { 2 };
        }
        if forward_links != expected_links {
            return Some("every forward link must belong to a registered edge");
        }

        None
    }
}
