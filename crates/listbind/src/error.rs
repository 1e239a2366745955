//! Error types for list and value binding operations.

use listbind_support::{AccessorError, TransducerError};
use thiserror::Error;

/// Errors returned by [`TransducedAccessor`](crate::TransducedAccessor) operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListError {
    /// The host property could not be read or written.
    #[error(transparent)]
    Accessor(#[from] AccessorError),

    /// A token of a list value could not be parsed. Nothing was committed.
    #[error("list token {index} (`{token}`) is invalid: {source}")]
    Item {
        index: usize,
        token: String,
        #[source]
        source: TransducerError,
    },

    /// A single (non-list) value could not be converted.
    #[error(transparent)]
    Transducer(#[from] TransducerError),
}

/// Result type alias for binding operations
pub type Result<T> = std::result::Result<T, ListError>;
