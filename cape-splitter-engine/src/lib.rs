//! Batch orchestration for sentence-aligned document splitting
//!
//! This crate runs the grouper of `cape-splitter-core` over a batch of
//! documents, keeps the per-document groups in input order and packs them
//! into word-balanced chunks for downstream workers.
//!
//! ```
//! use cape_splitter_engine::{Splitter, SplitterConfig};
//!
//! let config = SplitterConfig::builder()
//!     .words_per_group(3)
//!     .build()
//!     .unwrap();
//! let splitter = Splitter::with_config(["a"], ["One sentence. Two sentence."], config).unwrap();
//!
//! assert_eq!(splitter.total_number_words(), 4);
//! assert_eq!(splitter.get_chunks(2).unwrap().len(), 2);
//! ```

#![warn(missing_docs)]

pub mod balance;
pub mod config;
pub mod error;
pub mod executor;
pub mod splitter;

// Re-export key types
pub use balance::{balance_chunks, ideal_words_per_chunk, Chunk, GroupRef};
pub use config::{SplitterConfig, SplitterConfigBuilder, DEFAULT_PARALLEL_THRESHOLD};
pub use error::{EngineError, Result};
#[cfg(feature = "parallel")]
pub use executor::ParallelExecutor;
pub use executor::{auto_select, ExecutionMode, Executor, SequentialExecutor};
pub use splitter::{DocumentGroupMap, Splitter};

// Re-export from core for convenience
pub use cape_splitter_core::{GroupConfig, RuleTokenizer, TextGroup, Tokenizer, TokenizerConfig};
