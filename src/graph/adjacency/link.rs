//! Per-neighbour link entries.
//!
//! A row in the adjacency map records two independent facts about each
//! neighbour: whether the row owner has an outgoing edge to it (`forward`),
//! and whether the neighbour has a directed edge into the row owner (`back`).
//! Keeping them in separate slots lets a directed graph hold both `i -> j`
//! and `j -> i` without one overwriting the other.

use core::fmt;

use num_traits::{PrimInt, Signed};

/// Integer types usable as edge weights.
pub trait Weight: PrimInt + Signed + fmt::Debug + fmt::Display {}

impl<T> Weight for T where T: PrimInt + Signed + fmt::Debug + fmt::Display {}

/// The link stored in `adjacency[owner][neighbour]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<W> {
    pub(super) forward: Option<W>,
    pub(super) back: Option<W>,
}

impl<W> Default for Link<W> {
    fn default() -> Self {
        Self {
            forward: None,
            back: None,
        }
    }
}

impl<W: Weight> Link<W> {
    /// Weight of the owner's outgoing edge to the neighbour, if any.
    #[inline]
    pub fn forward(&self) -> Option<W> {
        self.forward
    }

    /// Weight of the neighbour's directed edge into the owner, if any.
    #[inline]
    pub fn back(&self) -> Option<W> {
        self.back
    }

    /// Returns `true` if the neighbour is reachable from the owner.
    #[inline]
    pub fn is_forward(&self) -> bool {
        self.forward.is_some()
    }

    /// Returns `true` if the entry records a parent of the owner.
    #[inline]
    pub fn is_back(&self) -> bool {
        self.back.is_some()
    }

    #[inline]
    pub(super) fn is_empty(&self) -> bool {
        self.forward.is_none() && self.back.is_none()
    }

    /// The signed link value: the forward weight if present, otherwise the
    /// negated back-link weight.
    pub fn value(&self) -> Option<W> {
        self.forward.or_else(|| self.back.map(|w| -w))
    }
}
