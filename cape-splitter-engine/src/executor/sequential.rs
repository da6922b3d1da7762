//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor},
};
use cape_splitter_core::{DocumentGroups, Grouper, Tokenizer};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn split<T: Tokenizer>(
        &self,
        ids: &[String],
        texts: &[String],
        grouper: &Grouper<T>,
    ) -> Result<Vec<DocumentGroups>> {
        Ok(ids
            .iter()
            .zip(texts)
            .map(|(id, text)| {
                let groups = grouper.group(id, text);
                log::trace!(
                    "Document '{}': {} groups, {} words",
                    id,
                    groups.groups.len(),
                    groups.total_words
                );
                groups
            })
            .collect())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
