//! Sharing graphs across threads.
//!
//! Graphs themselves are single-threaded. This module provides a lock-guarded
//! handle for hosts that need concurrent access.

pub mod shared;

pub use shared::SharedGraph;
