//! M-way search tree.
//!
//! # Structure
//! Every [`MTree`] node is itself a tree. Leaves hold keys, internal nodes
//! hold separators that route lookups to exactly one child.
//!
//! # Operations
//! - [`MTree::search`] / [`MTree::insert`] / [`MTree::remove`] - point operations
//! - [`MTree::bulk_build`] / [`MTree::rebuild`] - balanced construction
//! - [`MTree::collect_values`] - every key in ascending order
//!
//! # Balance
//! A leaf that fills up to `M` keys is split in place into `M` leaves, so
//! inserts deepen the tree only where they land. Removal never merges.
//! [`MTree::rebuild`] restores a balanced shape.

mod build;
mod node;
mod stats;

pub use node::MTree;
pub use stats::{TreeStats, Violation};
