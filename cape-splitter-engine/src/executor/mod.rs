//! Execution strategies for splitting a batch of documents

use crate::error::Result;
use cape_splitter_core::{DocumentGroups, Grouper, Tokenizer};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Single-threaded sequential processing
    Sequential,
    /// Documents split concurrently on a thread pool
    Parallel,
    /// Choose per batch based on its size
    #[default]
    Adaptive,
}

/// Trait for execution strategies
///
/// Implementations must return one entry per document, in input order.
pub trait Executor: Send + Sync {
    /// Tokenize and group every document
    fn split<T: Tokenizer>(
        &self,
        ids: &[String],
        texts: &[String],
        grouper: &Grouper<T>,
    ) -> Result<Vec<DocumentGroups>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select an execution mode for a batch
pub fn auto_select(total_bytes: usize, documents: usize, threshold: usize) -> ExecutionMode {
    if documents < 2 {
        // Documents are the unit of parallelism
        ExecutionMode::Sequential
    } else if total_bytes < threshold {
        // Small batches: thread pool overhead dominates
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}
