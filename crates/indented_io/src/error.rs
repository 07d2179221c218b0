//! Errors raised while building indentation chains.
//!
//! Writing never produces an `IndentError`: write-family operations return
//! `std::io::Result` and pass the device's own errors through untouched.

use thiserror::Error;

/// Error when a node cannot be placed in a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndentError {
    /// Outdent requested directly on a raw device, which has no levels to remove.
    #[error("cannot outdent a raw device: there is no enclosing indentation")]
    InvalidOperation,

    /// Outdent by more levels than the receiving node holds.
    #[error("cannot outdent {requested} level(s): the node only holds {available}")]
    OutOfRange { requested: usize, available: usize },

    /// The accumulated depth or width of the new node does not fit in a `usize`.
    #[error("indentation too deep: {levels} more level(s) overflow the chain")]
    TooDeep { levels: usize },
}
