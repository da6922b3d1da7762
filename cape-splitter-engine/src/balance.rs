//! Word-balanced packing of groups into chunks
//!
//! Groups are visited once, in document order and then group order, and
//! packed greedily: a group joins the open chunk while the chunk stays within
//! the ideal word budget `total_words / number_of_chunks`, otherwise it opens
//! a new chunk. Groups are never split, merged back or reordered, so the
//! number of chunks is emergent and may differ from the requested count.

use crate::error::{EngineError, Result};
use cape_splitter_core::TextGroup;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to one group: its document id and index within the document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupRef {
    /// Identifier of the owning document
    pub doc_id: String,
    /// Index of the group within the document
    pub idx: usize,
}

impl GroupRef {
    /// Create a new reference
    pub fn new(doc_id: impl Into<String>, idx: usize) -> Self {
        Self {
            doc_id: doc_id.into(),
            idx,
        }
    }
}

impl From<&TextGroup> for GroupRef {
    fn from(group: &TextGroup) -> Self {
        Self::new(group.parent_doc_id.clone(), group.idx)
    }
}

impl fmt::Display for GroupRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.doc_id, self.idx)
    }
}

/// Ordered list of group references handed to one downstream worker
pub type Chunk = Vec<GroupRef>;

/// Ideal words per chunk (integer division)
pub fn ideal_words_per_chunk(total_words: usize, number_of_chunks: usize) -> Result<usize> {
    total_words
        .checked_div(number_of_chunks)
        .ok_or(EngineError::InvalidChunkCount {
            requested: number_of_chunks,
        })
}

/// Pack groups into chunks of roughly `total_words / number_of_chunks` words
///
/// With an ideal of zero (more chunks requested than words available) every
/// group opens its own chunk.
pub fn balance_chunks<'a, I>(
    groups: I,
    total_words: usize,
    number_of_chunks: usize,
) -> Result<Vec<Chunk>>
where
    I: IntoIterator<Item = &'a TextGroup>,
{
    let ideal = ideal_words_per_chunk(total_words, number_of_chunks)?;

    let mut chunks: Vec<Chunk> = Vec::new();
    let mut current_words = 0;

    for group in groups {
        match chunks.last_mut() {
            Some(open) if ideal > 0 && current_words + group.number_of_words <= ideal => {
                open.push(GroupRef::from(group));
                current_words += group.number_of_words;
            }
            _ => {
                chunks.push(vec![GroupRef::from(group)]);
                current_words = group.number_of_words;
            }
        }
    }

    Ok(chunks)
}
