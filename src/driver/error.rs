//! Error types for the command driver.

use thiserror::Error;

/// Errors from reading and running a command script.
///
/// Kept apart from the tree's [`Error`](crate::Error) so the tree itself
/// only ever reports its own three failure kinds.
#[derive(Debug, Error)]
pub enum DriverError {
    /// I/O error on the input or output stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while `what` was still expected.
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    /// A token could not be parsed as `what`.
    #[error("cannot parse {what} from {token:?}")]
    Parse { what: &'static str, token: String },

    /// Command letter is not one of `I`, `R`, `F`, `B`.
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),

    /// `I`, `R` or `F` without a key.
    #[error("missing key in command: {0:?}")]
    MissingKey(String),

    /// A tree error that ends the session (only `InvalidOrder` does).
    #[error(transparent)]
    Tree(#[from] crate::Error),
}

impl DriverError {
    /// Whether the error concerns one command line only, so the session can
    /// report it and carry on.
    pub fn is_per_command(&self) -> bool {
        matches!(
            self,
            DriverError::Parse { .. } | DriverError::UnknownCommand(_) | DriverError::MissingKey(_)
        )
    }
}
