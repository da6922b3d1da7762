//! Sentence and word tokenization
//!
//! The grouper only depends on the [`Tokenizer`] trait: sentence spans that
//! tile the document and a word count per sentence. [`RuleTokenizer`] is the
//! rule-based implementation used by default.

pub mod config;
mod rules;

pub use config::TokenizerConfig;
pub use rules::RuleTokenizer;

use crate::types::{Sentence, Span};

/// Segments text into sentences and sentences into words
pub trait Tokenizer: Send + Sync {
    /// Split `text` into sentence spans
    ///
    /// The spans are in reading order and cover the text with no gaps and no
    /// overlaps, except that text without any words may yield no spans.
    fn sentences(&self, text: &str) -> Vec<Span>;

    /// Split a sentence into word tokens
    fn words<'a>(&self, sentence: &'a str) -> Vec<&'a str>;

    /// Number of words in a sentence
    fn word_count(&self, sentence: &str) -> usize {
        self.words(sentence).len()
    }

    /// Sentence spans of `text` paired with their word counts
    fn tokenize(&self, text: &str) -> Vec<Sentence> {
        self.sentences(text)
            .into_iter()
            .map(|span| Sentence {
                span,
                words: self.word_count(span.slice(text)),
            })
            .collect()
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn sentences(&self, text: &str) -> Vec<Span> {
        (**self).sentences(text)
    }

    fn words<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        (**self).words(sentence)
    }

    fn word_count(&self, sentence: &str) -> usize {
        (**self).word_count(sentence)
    }
}
