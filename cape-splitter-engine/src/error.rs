//! Layered error types

use cape_splitter_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// Document ids and texts of different lengths
    #[error("got {ids} document ids but {texts} document texts")]
    LengthMismatch {
        /// Number of ids supplied
        ids: usize,
        /// Number of texts supplied
        texts: usize,
    },

    /// The same id supplied twice
    #[error("duplicate document id '{id}'")]
    DuplicateDocumentId {
        /// The repeated id
        id: String,
    },

    /// Chunk count that cannot be used as a divisor
    #[error("number of chunks must be greater than 0, got {requested}")]
    InvalidChunkCount {
        /// The requested number of chunks
        requested: usize,
    },

    /// Lookup of a document that was never split
    #[error("unknown document '{id}'")]
    UnknownDocument {
        /// The requested id
        id: String,
    },

    /// Lookup of a group index past the end of a document
    #[error("document '{id}' has no group {idx}")]
    UnknownGroup {
        /// The document id
        id: String,
        /// The requested group index
        idx: usize,
    },

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
