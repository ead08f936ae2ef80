//! Index structures.
//!
//! - [`mtree`] - In-memory M-way search tree

pub mod mtree;

pub use mtree::{MTree, TreeStats, Violation};
