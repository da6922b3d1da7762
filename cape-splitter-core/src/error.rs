//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Grouping parameters rejected by validation
    #[error("invalid grouping configuration: {0}")]
    InvalidConfig(String),

    /// Tokenizer rule file could not be parsed or is inconsistent
    #[error("invalid tokenizer configuration: {0}")]
    TokenizerConfig(String),
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
