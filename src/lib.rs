//! mwaytree - an in-memory M-way ordered search tree.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          mwaytree                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────────────────────────────────────────────────┐  │
//! │  │            Driver (driver/)  [bin: mtree]             │  │
//! │  │     Script → Command → Session → Outcome lines        │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! │                             ↓                               │
//! │  ┌───────────────────────────────────────────────────────┐  │
//! │  │               Index Layer (index/mtree/)              │  │
//! │  │   routing · search/insert/remove · split · bulk build │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! │                             ↓                               │
//! │  ┌───────────────────────────────────────────────────────┐  │
//! │  │           Common (common/)  config + Error            │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Configuration and error types
//! - [`index`] - The M-way tree
//! - [`driver`] - Text command driver
//!
//! # Quick Start
//! ```
//! use mwaytree::{Error, MTree};
//!
//! let mut tree = MTree::from_keys(3, vec![5, 1, 9, 3]).unwrap();
//!
//! tree.insert(7).unwrap();
//! assert_eq!(tree.insert(7), Err(Error::DuplicateKey));
//!
//! tree.remove(&5).unwrap();
//! assert!(!tree.search(&5));
//!
//! tree.rebuild();
//! assert_eq!(tree.collect_values(), vec![1, 3, 7, 9]);
//! ```

pub mod common;
pub mod driver;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_ORDER, MIN_ORDER};
pub use common::{Error, Result, TreeConfig};
pub use index::{MTree, TreeStats, Violation};
