//! Data model shared by the tokenizer, the grouper and the splitter

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Default configuration constants
pub mod defaults {
    /// Target number of words in the core span of a group
    pub const WORDS_PER_GROUP: usize = 500;

    /// Maximum words borrowed from the end of the previous group
    pub const MAX_OVERLAP_BEFORE: usize = 50;

    /// Maximum words borrowed from the start of the next group
    pub const MAX_OVERLAP_AFTER: usize = 50;
}

/// Half-open byte range into a document's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the first byte
    pub start: usize,
    /// Byte offset one past the last byte
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} after end {end}");
        Self { start, end }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `other` lies entirely inside this span
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Borrow the covered slice of `text`
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// A tokenized sentence: its byte span and the number of words inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence {
    /// Byte span in the document, trailing whitespace included
    pub span: Span,
    /// Word count reported by the tokenizer
    pub words: usize,
}

/// A contiguous, sentence-aligned window over one document
///
/// The core span is the part of the document owned by this group; the full
/// span additionally covers the overlap borrowed from the neighbouring
/// groups. `number_of_words` only counts the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextGroup {
    /// Identifier of the owning document
    pub parent_doc_id: String,
    /// Zero-based position within the parent document's groups
    pub idx: usize,
    /// Words in the core span
    pub number_of_words: usize,
    /// Document text covered by the full span (overlap included)
    pub text: String,
    /// Byte range of the full span in the document
    pub span: Span,
    /// Byte range of the core span in the document
    pub core: Span,
    /// Index range of the core sentences in the document
    pub sentences: Range<usize>,
    /// Words borrowed from the tail of the previous group
    pub overlap_words_before: usize,
    /// Words borrowed from the head of the next group
    pub overlap_words_after: usize,
}

impl TextGroup {
    /// Text of the core span, without any overlap
    pub fn core_text(&self) -> &str {
        let start = self.core.start - self.span.start;
        let end = self.core.end - self.span.start;
        &self.text[start..end]
    }

    /// Text borrowed from the previous group
    pub fn overlap_before_text(&self) -> &str {
        &self.text[..self.core.start - self.span.start]
    }

    /// Text borrowed from the next group
    pub fn overlap_after_text(&self) -> &str {
        &self.text[self.core.end - self.span.start..]
    }

    /// Words covered by the full span, overlap included
    pub fn span_words(&self) -> usize {
        self.overlap_words_before + self.number_of_words + self.overlap_words_after
    }
}

/// Window parameters for the grouper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Target words in each group's core span
    pub words_per_group: usize,
    /// Maximum overlap taken from the end of the previous group
    pub max_overlap_before: usize,
    /// Maximum overlap taken from the start of the next group
    pub max_overlap_after: usize,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            words_per_group: defaults::WORDS_PER_GROUP,
            max_overlap_before: defaults::MAX_OVERLAP_BEFORE,
            max_overlap_after: defaults::MAX_OVERLAP_AFTER,
        }
    }
}

impl GroupConfig {
    /// Create a configuration with explicit values
    pub fn new(words_per_group: usize, max_overlap_before: usize, max_overlap_after: usize) -> Self {
        Self {
            words_per_group,
            max_overlap_before,
            max_overlap_after,
        }
    }

    /// Configuration without any overlap between groups
    pub fn without_overlap(words_per_group: usize) -> Self {
        Self::new(words_per_group, 0, 0)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.words_per_group == 0 {
            return Err(CoreError::InvalidConfig(
                "words_per_group must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
