//! Batch splitting of documents into groups and chunks
//!
//! A [`Splitter`] is built once from a batch of documents. Construction
//! tokenizes and groups every document, keeps the groups in an insertion
//! ordered map keyed by document id and sums the word counts. After that the
//! state is read-only: [`Splitter::get_chunks`] can be called any number of
//! times with different chunk counts.

use crate::{
    balance::{balance_chunks, Chunk, GroupRef},
    config::SplitterConfig,
    error::{EngineError, Result},
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
};
use cape_splitter_core::{DocumentGroups, Grouper, RuleTokenizer, TextGroup, Tokenizer};
use indexmap::IndexMap;
use std::collections::HashSet;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Ordered mapping from document id to its groups
pub type DocumentGroupMap = IndexMap<String, Vec<TextGroup>>;

/// Sentence-aligned grouping of a document batch
#[derive(Debug, Clone)]
pub struct Splitter {
    document_ids: Vec<String>,
    document_texts: Vec<String>,
    document_groups: DocumentGroupMap,
    total_number_words: usize,
    config: SplitterConfig,
}

impl Splitter {
    /// Split documents with the default window parameters (500 / 50 / 50)
    pub fn new<I, S, J, U>(document_ids: I, document_texts: J) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        J: IntoIterator<Item = U>,
        U: Into<String>,
    {
        Self::with_config(document_ids, document_texts, SplitterConfig::default())
    }

    /// Split documents with an explicit configuration and the rule tokenizer
    pub fn with_config<I, S, J, U>(
        document_ids: I,
        document_texts: J,
        config: SplitterConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        J: IntoIterator<Item = U>,
        U: Into<String>,
    {
        Self::with_tokenizer(document_ids, document_texts, config, RuleTokenizer::new())
    }

    /// Split documents with a caller supplied tokenizer
    pub fn with_tokenizer<I, S, J, U, T>(
        document_ids: I,
        document_texts: J,
        config: SplitterConfig,
        tokenizer: T,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        J: IntoIterator<Item = U>,
        U: Into<String>,
        T: Tokenizer,
    {
        let document_ids: Vec<String> = document_ids.into_iter().map(Into::into).collect();
        let document_texts: Vec<String> = document_texts.into_iter().map(Into::into).collect();

        config.validate()?;
        validate_documents(&document_ids, &document_texts)?;

        let grouper = Grouper::new(tokenizer, config.grouping)?;
        let mode = resolve_mode(&config, &document_texts);
        log::debug!(
            "Splitting {} documents in {:?} mode",
            document_ids.len(),
            mode
        );
        let split = run(mode, config.threads, &document_ids, &document_texts, &grouper)?;

        let mut document_groups = DocumentGroupMap::with_capacity(document_ids.len());
        let mut total_number_words = 0;
        for (id, groups) in document_ids.iter().zip(split) {
            total_number_words += groups.total_words;
            document_groups.insert(id.clone(), groups.groups);
        }

        log::debug!(
            "Split {} documents with {} words",
            document_ids.len(),
            total_number_words
        );

        Ok(Self {
            document_ids,
            document_texts,
            document_groups,
            total_number_words,
            config,
        })
    }

    /// Sum of the core word counts over all documents
    pub fn total_number_words(&self) -> usize {
        self.total_number_words
    }

    /// Groups per document, in input order
    pub fn document_groups(&self) -> &DocumentGroupMap {
        &self.document_groups
    }

    /// Document ids, in input order
    pub fn document_ids(&self) -> &[String] {
        &self.document_ids
    }

    /// Document texts, in input order
    pub fn document_texts(&self) -> &[String] {
        &self.document_texts
    }

    /// Configuration the batch was split with
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Groups of one document
    pub fn groups(&self, doc_id: &str) -> Option<&[TextGroup]> {
        self.document_groups.get(doc_id).map(Vec::as_slice)
    }

    /// Resolve a group reference
    pub fn group(&self, group_ref: &GroupRef) -> Result<&TextGroup> {
        let groups = self
            .document_groups
            .get(&group_ref.doc_id)
            .ok_or_else(|| EngineError::UnknownDocument {
                id: group_ref.doc_id.clone(),
            })?;

        groups
            .get(group_ref.idx)
            .ok_or_else(|| EngineError::UnknownGroup {
                id: group_ref.doc_id.clone(),
                idx: group_ref.idx,
            })
    }

    /// All groups in document order, then group order
    pub fn iter_groups(&self) -> impl Iterator<Item = &TextGroup> + '_ {
        self.document_groups.values().flatten()
    }

    /// Number of groups over all documents
    pub fn number_of_groups(&self) -> usize {
        self.document_groups.values().map(Vec::len).sum()
    }

    /// Pack all groups into chunks of roughly equal word count
    ///
    /// The ideal chunk size is `total_number_words / number_of_chunks`. The
    /// number of chunks returned is not guaranteed to equal
    /// `number_of_chunks`. Fails when `number_of_chunks` is 0.
    pub fn get_chunks(&self, number_of_chunks: usize) -> Result<Vec<Chunk>> {
        let chunks = balance_chunks(
            self.iter_groups(),
            self.total_number_words,
            number_of_chunks,
        )?;

        log::debug!(
            "Obtained {} chunks from {} groups",
            chunks.len(),
            self.number_of_groups()
        );

        Ok(chunks)
    }

    /// Core word count of a chunk
    pub fn chunk_words(&self, chunk: &Chunk) -> Result<usize> {
        chunk
            .iter()
            .map(|group_ref| self.group(group_ref).map(|g| g.number_of_words))
            .sum()
    }

    /// Resolve every reference of a chunk
    pub fn resolve_chunk(&self, chunk: &Chunk) -> Result<Vec<&TextGroup>> {
        chunk.iter().map(|group_ref| self.group(group_ref)).collect()
    }
}

fn validate_documents(ids: &[String], texts: &[String]) -> Result<()> {
    if ids.len() != texts.len() {
        return Err(EngineError::LengthMismatch {
            ids: ids.len(),
            texts: texts.len(),
        });
    }

    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(EngineError::DuplicateDocumentId { id: id.clone() });
        }
    }

    Ok(())
}

fn resolve_mode(config: &SplitterConfig, texts: &[String]) -> ExecutionMode {
    match config.execution_mode {
        ExecutionMode::Adaptive => {
            let total_bytes = texts.iter().map(String::len).sum();
            auto_select(total_bytes, texts.len(), config.parallel_threshold)
        }
        mode => mode,
    }
}

#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
fn run<T: Tokenizer>(
    mode: ExecutionMode,
    threads: Option<usize>,
    ids: &[String],
    texts: &[String],
    grouper: &Grouper<T>,
) -> Result<Vec<DocumentGroups>> {
    match mode {
        #[cfg(feature = "parallel")]
        ExecutionMode::Parallel => ParallelExecutor::new(threads).split(ids, texts, grouper),
        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Parallel => {
            log::warn!("Parallel feature disabled, splitting sequentially");
            SequentialExecutor.split(ids, texts, grouper)
        }
        ExecutionMode::Sequential | ExecutionMode::Adaptive => {
            SequentialExecutor.split(ids, texts, grouper)
        }
    }
}
