//! Error types for mwaytree.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything a tree operation can fail with.
///
/// Only three things can go wrong. `search`, `collect_values` and
/// `bulk_build` never fail; failing operations never mutate the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested order is below [`MIN_ORDER`](crate::common::config::MIN_ORDER).
    ///
    /// Raised only at construction. Callers should treat it as fatal.
    #[error("invalid order {order}: must be at least 2")]
    InvalidOrder { order: usize },

    /// `insert` was given a key that is already stored somewhere in the tree.
    #[error("value already exists in tree")]
    DuplicateKey,

    /// `remove` was given a key that is not stored in the tree.
    #[error("value not found in tree")]
    KeyNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidOrder { order: 1 };
        assert_eq!(format!("{}", err), "invalid order 1: must be at least 2");

        assert_eq!(format!("{}", Error::DuplicateKey), "value already exists in tree");
        assert_eq!(format!("{}", Error::KeyNotFound), "value not found in tree");
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
