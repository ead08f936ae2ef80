//! Common types shared across mwaytree.
//!
//! - Configuration constants and [`TreeConfig`]
//! - Error types

pub mod config;
pub mod error;

pub use config::TreeConfig;
pub use error::{Error, Result};
