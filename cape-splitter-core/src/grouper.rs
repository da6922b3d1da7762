//! Sentence-aligned, overlapping word windows
//!
//! Grouping is a pure function of the sentence list and the window
//! parameters. It runs in two passes:
//!
//! 1. A greedy fold assigns every sentence to exactly one core span. A core
//!    keeps growing while its word count stays within `words_per_group`; a
//!    sentence that does not fit starts the next core. A sentence longer than
//!    the budget becomes a core of its own.
//! 2. Each core is widened with whole sentences from its neighbours: up to
//!    `max_overlap_before` words from the tail of the previous core and up to
//!    `max_overlap_after` words from the head of the next one.

use crate::error::Result;
use crate::tokenizer::Tokenizer;
use crate::types::{GroupConfig, Sentence, Span, TextGroup};
use std::ops::Range;

/// Groups of one document together with its word count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentGroups {
    /// Groups in document order, `idx` matching the position
    pub groups: Vec<TextGroup>,
    /// Sum of the core word counts
    pub total_words: usize,
}

/// A run of sentences forming one core span
#[derive(Debug, Clone, PartialEq, Eq)]
struct Core {
    sentences: Range<usize>,
    words: usize,
}

/// State carried through the core fold
#[derive(Debug, Default)]
struct CoreAccumulator {
    closed: Vec<Core>,
    start: usize,
    words: usize,
}

impl CoreAccumulator {
    fn push(mut self, index: usize, sentence: &Sentence, budget: usize) -> Self {
        if index > self.start && self.words + sentence.words > budget {
            self.closed.push(Core {
                sentences: self.start..index,
                words: self.words,
            });
            self.start = index;
            self.words = 0;
        }
        self.words += sentence.words;
        self
    }

    fn finish(mut self, sentence_count: usize) -> Vec<Core> {
        if self.start < sentence_count {
            self.closed.push(Core {
                sentences: self.start..sentence_count,
                words: self.words,
            });
        }
        self.closed
    }
}

/// Splits documents into groups with a fixed tokenizer and configuration
#[derive(Debug, Clone)]
pub struct Grouper<T> {
    tokenizer: T,
    config: GroupConfig,
}

impl<T: Tokenizer> Grouper<T> {
    /// Create a grouper, validating the configuration
    pub fn new(tokenizer: T, config: GroupConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { tokenizer, config })
    }

    /// The window parameters in use
    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// The tokenizer in use
    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Tokenize and group one document
    pub fn group(&self, doc_id: &str, text: &str) -> DocumentGroups {
        let sentences = self.tokenizer.tokenize(text);
        build_groups(doc_id, text, &sentences, &self.config)
    }
}

/// Tokenize and group one document in a single call
pub fn make_groups<T: Tokenizer + ?Sized>(
    doc_id: &str,
    text: &str,
    tokenizer: &T,
    config: &GroupConfig,
) -> Result<DocumentGroups> {
    config.validate()?;
    let sentences = tokenizer.tokenize(text);
    Ok(build_groups(doc_id, text, &sentences, config))
}

/// Group an already tokenized document
pub fn group_sentences(
    doc_id: &str,
    text: &str,
    sentences: &[Sentence],
    config: &GroupConfig,
) -> Result<DocumentGroups> {
    config.validate()?;
    Ok(build_groups(doc_id, text, sentences, config))
}

fn build_groups(
    doc_id: &str,
    text: &str,
    sentences: &[Sentence],
    config: &GroupConfig,
) -> DocumentGroups {
    let cores = sentences
        .iter()
        .enumerate()
        .fold(CoreAccumulator::default(), |acc, (i, sentence)| {
            acc.push(i, sentence, config.words_per_group)
        })
        .finish(sentences.len());

    let last = cores.len().saturating_sub(1);
    let groups: Vec<TextGroup> = cores
        .iter()
        .enumerate()
        .map(|(idx, core)| {
            let (first, words_before) = match idx {
                0 => (core.sentences.start, 0),
                _ => tail_overlap(sentences, &cores[idx - 1], config.max_overlap_before),
            };
            let (end, words_after) = if idx < last {
                head_overlap(sentences, &cores[idx + 1], config.max_overlap_after)
            } else {
                (core.sentences.end, 0)
            };

            let span = byte_span(sentences, first..end);
            TextGroup {
                parent_doc_id: doc_id.to_string(),
                idx,
                number_of_words: core.words,
                text: span.slice(text).to_string(),
                span,
                core: byte_span(sentences, core.sentences.clone()),
                sentences: core.sentences.clone(),
                overlap_words_before: words_before,
                overlap_words_after: words_after,
            }
        })
        .collect();

    let total_words = cores.iter().map(|core| core.words).sum();
    DocumentGroups {
        groups,
        total_words,
    }
}

/// Whole sentences from the end of `previous`, at most `limit` words
///
/// Returns the index of the first borrowed sentence (the end of the core when
/// nothing is borrowed) and the number of borrowed words.
fn tail_overlap(sentences: &[Sentence], previous: &Core, limit: usize) -> (usize, usize) {
    let mut first = previous.sentences.end;
    let mut words = 0;
    if limit == 0 {
        return (first, words);
    }
    for i in previous.sentences.clone().rev() {
        if words + sentences[i].words > limit {
            break;
        }
        words += sentences[i].words;
        first = i;
    }
    (first, words)
}

/// Whole sentences from the start of `next`, at most `limit` words
///
/// Returns the exclusive end index of the borrowed sentences and the number
/// of borrowed words.
fn head_overlap(sentences: &[Sentence], next: &Core, limit: usize) -> (usize, usize) {
    let mut end = next.sentences.start;
    let mut words = 0;
    if limit == 0 {
        return (end, words);
    }
    for i in next.sentences.clone() {
        if words + sentences[i].words > limit {
            break;
        }
        words += sentences[i].words;
        end = i + 1;
    }
    (end, words)
}

fn byte_span(sentences: &[Sentence], range: Range<usize>) -> Span {
    Span::new(
        sentences[range.start].span.start,
        sentences[range.end - 1].span.end,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::tokenizer::RuleTokenizer;

    const FIVE: &str = "Aa bb. Cc dd. Ee ff. Gg hh. Ii jj.";

    fn group(text: &str, config: GroupConfig) -> DocumentGroups {
        make_groups("doc", text, &RuleTokenizer::new(), &config).unwrap()
    }

    #[test]
    fn test_two_sentence_example() {
        let result = group("One sentence. Two sentence.", GroupConfig::new(3, 50, 50));

        assert_eq!(result.total_words, 4);
        assert_eq!(result.groups.len(), 2);
        assert_eq!(result.groups[0].core_text(), "One sentence. ");
        assert_eq!(result.groups[1].core_text(), "Two sentence.");
        assert_eq!(result.groups[0].number_of_words, 2);
        assert_eq!(result.groups[1].number_of_words, 2);

        // Each group borrows its neighbour entirely
        assert_eq!(result.groups[0].text, "One sentence. Two sentence.");
        assert_eq!(result.groups[1].text, "One sentence. Two sentence.");
    }

    #[test]
    fn test_empty_document() {
        let result = group("", GroupConfig::default());
        assert!(result.groups.is_empty());
        assert_eq!(result.total_words, 0);

        let result = group("   \n ", GroupConfig::default());
        assert!(result.groups.is_empty());
        assert_eq!(result.total_words, 0);
    }

    #[test]
    fn test_long_sentence_forms_single_group() {
        let text = "This single sentence has clearly more than five words in it.";
        let result = group(text, GroupConfig::new(5, 50, 50));

        assert_eq!(result.groups.len(), 1);
        assert_eq!(result.groups[0].number_of_words, 11);
        assert_eq!(result.total_words, 11);
        assert_eq!(result.groups[0].text, text);
    }

    #[test]
    fn test_long_sentence_between_short_ones() {
        let text = "Short one. This sentence is far longer than the budget allows. Tiny.";
        let result = group(text, GroupConfig::without_overlap(4));

        let cores: Vec<&str> = result.groups.iter().map(|g| g.core_text()).collect();
        assert_eq!(
            cores,
            vec![
                "Short one. ",
                "This sentence is far longer than the budget allows. ",
                "Tiny."
            ]
        );
        assert_eq!(result.groups[1].number_of_words, 9);
    }

    #[test]
    fn test_cores_fill_up_to_budget() {
        let result = group(FIVE, GroupConfig::without_overlap(4));

        let words: Vec<usize> = result.groups.iter().map(|g| g.number_of_words).collect();
        assert_eq!(words, vec![4, 4, 2]);
        let idx: Vec<usize> = result.groups.iter().map(|g| g.idx).collect();
        assert_eq!(idx, vec![0, 1, 2]);
        assert_eq!(result.groups[1].sentences, 2..4);
        assert!(result.groups.iter().all(|g| g.text == g.core_text()));
    }

    #[test]
    fn test_overlap_on_both_sides() {
        let result = group(FIVE, GroupConfig::new(4, 2, 2));

        let first = &result.groups[0];
        assert_eq!(first.overlap_words_before, 0);
        assert_eq!(first.overlap_words_after, 2);
        assert_eq!(first.text, "Aa bb. Cc dd. Ee ff. ");

        let middle = &result.groups[1];
        assert_eq!(middle.overlap_before_text(), "Cc dd. ");
        assert_eq!(middle.core_text(), "Ee ff. Gg hh. ");
        assert_eq!(middle.overlap_after_text(), "Ii jj.");

        let last = &result.groups[2];
        assert_eq!(last.overlap_words_before, 2);
        assert_eq!(last.overlap_words_after, 0);
        assert_eq!(last.text, "Gg hh. Ii jj.");
    }

    #[test]
    fn test_overlap_stops_at_sentence_boundary() {
        // Three words allowed, sentences hold two: only one sentence fits
        let result = group(FIVE, GroupConfig::new(4, 3, 3));
        assert_eq!(result.groups[1].overlap_words_before, 2);
        assert_eq!(result.groups[1].overlap_words_after, 2);
    }

    #[test]
    fn test_overlap_clamped_to_neighbour_core() {
        let result = group(FIVE, GroupConfig::new(4, 50, 50));

        // The last core only has two words to lend
        assert_eq!(result.groups[1].overlap_words_after, 2);
        assert_eq!(result.groups[2].overlap_words_before, 4);
        assert_eq!(result.groups[0].overlap_words_after, 4);
    }

    #[test]
    fn test_sentence_larger_than_overlap_is_not_borrowed() {
        let text = "One two three four five. Six.";
        let result = group(text, GroupConfig::new(5, 3, 3));

        assert_eq!(result.groups.len(), 2);
        assert_eq!(result.groups[1].overlap_words_before, 0);
        assert_eq!(result.groups[1].text, "Six.");
        assert_eq!(result.groups[0].overlap_words_after, 1);
    }

    #[test]
    fn test_cores_partition_sentences() {
        let text = "First sentence here. Second one. Third sentence is longer than others. \
                    Fourth. Fifth sentence now. Sixth and last one.";
        let tokenizer = RuleTokenizer::new();
        let sentences = tokenizer.tokenize(text);
        let result = group_sentences("doc", text, &sentences, &GroupConfig::new(6, 3, 3)).unwrap();

        let rebuilt: String = result.groups.iter().map(|g| g.core_text()).collect();
        assert_eq!(rebuilt, text);

        let mut next = 0;
        for group in &result.groups {
            assert_eq!(group.sentences.start, next);
            next = group.sentences.end;
            assert!(group.span.contains(&group.core));
        }
        assert_eq!(next, sentences.len());

        let sum: usize = result.groups.iter().map(|g| g.number_of_words).sum();
        assert_eq!(sum, result.total_words);
    }

    #[test]
    fn test_grouper_reuses_configuration() {
        let grouper = Grouper::new(RuleTokenizer::new(), GroupConfig::without_overlap(2)).unwrap();
        let a = grouper.group("a", "One sentence. Two sentence.");
        let b = grouper.group("b", "Three.");

        assert_eq!(a.groups.len(), 2);
        assert!(a.groups.iter().all(|g| g.parent_doc_id == "a"));
        assert_eq!(b.groups[0].parent_doc_id, "b");
        assert_eq!(grouper.config().words_per_group, 2);
    }

    #[test]
    fn test_zero_words_per_group_is_rejected() {
        let err = make_groups("doc", "Text.", &RuleTokenizer::new(), &GroupConfig::new(0, 0, 0))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
        assert!(Grouper::new(RuleTokenizer::new(), GroupConfig::new(0, 1, 1)).is_err());
    }

    #[test]
    fn test_empty_document_id_is_allowed() {
        let result = group("", GroupConfig::default());
        assert!(result.groups.is_empty());
        let result = make_groups("", "Hello there.", &RuleTokenizer::new(), &GroupConfig::default())
            .unwrap();
        assert_eq!(result.groups[0].parent_doc_id, "");
    }
}
