//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
};
use cape_splitter_core::{DocumentGroups, Grouper, Tokenizer};
use rayon::prelude::*;

/// Parallel multi-threaded executor
///
/// Documents are independent, so each one is tokenized and grouped on its own
/// task. The indexed collect keeps the results in input order.
#[derive(Debug, Clone, Default)]
pub struct ParallelExecutor {
    threads: Option<usize>,
}

impl ParallelExecutor {
    /// Create a new parallel executor (None = global rayon pool)
    pub fn new(threads: Option<usize>) -> Self {
        Self { threads }
    }

    /// Number of worker threads this executor will use
    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}

impl Executor for ParallelExecutor {
    fn split<T: Tokenizer>(
        &self,
        ids: &[String],
        texts: &[String],
        grouper: &Grouper<T>,
    ) -> Result<Vec<DocumentGroups>> {
        let run = || {
            ids.par_iter()
                .zip(texts.par_iter())
                .map(|(id, text)| grouper.group(id, text))
                .collect::<Vec<_>>()
        };

        match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EngineError::ParallelError(e.to_string()))?;
                log::debug!("Splitting {} documents on {} threads", ids.len(), threads);
                Ok(pool.install(run))
            }
            None => {
                log::debug!(
                    "Splitting {} documents on the global pool ({} threads)",
                    ids.len(),
                    rayon::current_num_threads()
                );
                Ok(run())
            }
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
