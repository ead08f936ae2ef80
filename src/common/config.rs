//! Configuration for M-way trees.

use crate::common::{Error, Result};

/// Smallest legal order.
///
/// An order of 1 would make every leaf split into a single child holding
/// the same keys, so construction refuses anything below 2.
pub const MIN_ORDER: usize = 2;

/// Order used by [`TreeConfig::default`].
pub const DEFAULT_ORDER: usize = 3;

/// Validated construction parameters for an [`MTree`](crate::MTree).
///
/// The order `M` is both the leaf size that triggers a split and the
/// fan-out that a split or bulk build produces.
///
/// # Example
/// ```
/// use mwaytree::TreeConfig;
///
/// let config = TreeConfig::new(4).unwrap();
/// assert_eq!(config.order(), 4);
/// assert!(TreeConfig::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    order: usize,
}

impl TreeConfig {
    /// Create a config with the given order.
    ///
    /// # Errors
    /// `Error::InvalidOrder` if `order < MIN_ORDER`.
    pub fn new(order: usize) -> Result<Self> {
        if order < MIN_ORDER {
            return Err(Error::InvalidOrder { order });
        }
        Ok(Self { order })
    }

    /// The branching factor `M`.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
        }
    }
}
