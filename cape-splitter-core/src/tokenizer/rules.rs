//! Rule-based sentence tokenizer

use super::{config::TokenizerConfig, Tokenizer};
use crate::error::Result;
use crate::types::Span;
use std::collections::HashSet;

/// Punctuation-driven tokenizer configured from a [`TokenizerConfig`]
///
/// A terminator run (`.`, `?!`, `...`, `."`) ends a sentence only when it is
/// followed by whitespace or the end of the text. Periods additionally pass
/// through the abbreviation and capitalization checks. Each sentence span
/// absorbs the whitespace that follows it, so consecutive spans tile the
/// document.
#[derive(Debug, Clone)]
pub struct RuleTokenizer {
    terminators: HashSet<char>,
    closing: HashSet<char>,
    titles: HashSet<String>,
    abbreviations: HashSet<String>,
    break_on_blank_line: bool,
}

impl RuleTokenizer {
    /// Tokenizer with the embedded English rules
    pub fn new() -> Self {
        Self::build(TokenizerConfig::english())
    }

    /// Tokenizer from a custom rule set
    pub fn from_config(config: &TokenizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &TokenizerConfig) -> Self {
        Self {
            terminators: config.terminators.chars.iter().copied().collect(),
            closing: config.terminators.closing.iter().copied().collect(),
            titles: config.abbreviations.titles.iter().cloned().collect(),
            abbreviations: config.abbreviations.common.iter().cloned().collect(),
            break_on_blank_line: config.paragraphs.break_on_blank_line,
        }
    }

    /// End of the terminator run starting at `pos`, closing punctuation included
    fn terminator_run_end(&self, text: &str, pos: usize) -> usize {
        let mut end = pos;
        for ch in text[pos..].chars() {
            if self.terminators.contains(&ch) || self.closing.contains(&ch) {
                end += ch.len_utf8();
            } else {
                break;
            }
        }
        end
    }

    /// Decide whether the terminator at `pos`, whose run ends at `end`, closes a sentence
    fn ends_sentence(&self, text: &str, pos: usize, end: usize) -> bool {
        let next = text[end..].chars().next();
        match next {
            Some(ch) if !ch.is_whitespace() => return false,
            None => return true,
            _ => {}
        }

        if !text[pos..].starts_with('.') {
            return true;
        }

        let following = text[end..].trim_start().chars().next();
        let word = preceding_word(text, pos);
        if word.is_empty() {
            return true;
        }

        if self.titles.contains(word) || is_initial(word) {
            return false;
        }

        if following.is_some_and(char::is_lowercase) {
            return false;
        }

        if self.abbreviations.contains(word) || word.contains('.') {
            return following.map_or(true, char::is_uppercase);
        }

        true
    }
}

impl Default for RuleTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for RuleTokenizer {
    fn sentences(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        if text.trim().is_empty() {
            return spans;
        }

        let mut start = 0;
        let mut pos = 0;

        while let Some(ch) = text[pos..].chars().next() {
            let ch_end = pos + ch.len_utf8();

            let boundary = if self.terminators.contains(&ch) {
                let end = self.terminator_run_end(text, ch_end);
                if !self.ends_sentence(text, pos, end) {
                    pos = end;
                    continue;
                }
                end
            } else if ch == '\n' && self.break_on_blank_line && blank_line_ahead(text, ch_end) {
                ch_end
            } else {
                pos = ch_end;
                continue;
            };

            let next = skip_whitespace(text, boundary);
            // Leading blank lines belong to the first sentence
            if !text[start..boundary].trim().is_empty() {
                spans.push(Span::new(start, next));
                start = next;
            }
            pos = next;
        }

        if start < text.len() {
            match spans.last_mut() {
                Some(last) if text[start..].trim().is_empty() => last.end = text.len(),
                _ => spans.push(Span::new(start, text.len())),
            }
        }

        spans
    }

    fn words<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        sentence
            .split_whitespace()
            .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|token| !token.is_empty())
            .collect()
    }
}

/// Word immediately before byte `pos`, without leading punctuation
fn preceding_word(text: &str, pos: usize) -> &str {
    let before = &text[..pos];
    let start = before
        .rfind(char::is_whitespace)
        .map(|p| p + before[p..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    before[start..].trim_start_matches(|c: char| !c.is_alphanumeric())
}

/// Single uppercase letter, as in "J. R. R. Tolkien"
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

/// Whether another newline follows before any non-whitespace character
fn blank_line_ahead(text: &str, from: usize) -> bool {
    for ch in text[from..].chars() {
        if ch == '\n' {
            return true;
        }
        if !ch.is_whitespace() {
            return false;
        }
    }
    false
}

fn skip_whitespace(text: &str, from: usize) -> usize {
    let rest = &text[from..];
    from + (rest.len() - rest.trim_start().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(text: &str) -> Vec<&str> {
        RuleTokenizer::new()
            .sentences(text)
            .iter()
            .map(|span| span.slice(text))
            .collect()
    }

    #[test]
    fn test_basic_sentences() {
        assert_eq!(
            sentences("Hello world. This is a test."),
            vec!["Hello world. ", "This is a test."]
        );
    }

    #[test]
    fn test_spans_tile_the_text() {
        let text = "  First one!  Second one?\tThird one.\n";
        let spans = RuleTokenizer::new().sentences(text);
        assert_eq!(spans.first().map(|s| s.start), Some(0));
        assert_eq!(spans.last().map(|s| s.end), Some(text.len()));
        for pair in spans.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(spans.len(), 3);
    }

    #[test]
    fn test_empty_and_blank_text() {
        assert!(sentences("").is_empty());
        assert!(sentences(" \n\t ").is_empty());
    }

    #[test]
    fn test_text_without_terminator() {
        assert_eq!(sentences("no terminator here"), vec!["no terminator here"]);
    }

    #[test]
    fn test_titles_do_not_end_sentences() {
        assert_eq!(
            sentences("Dr. Smith went home. Mrs. Jones stayed."),
            vec!["Dr. Smith went home. ", "Mrs. Jones stayed."]
        );
    }

    #[test]
    fn test_initials_do_not_end_sentences() {
        assert_eq!(
            sentences("J. R. R. Tolkien wrote books. They sold well."),
            vec!["J. R. R. Tolkien wrote books. ", "They sold well."]
        );
    }

    #[test]
    fn test_abbreviation_before_capital_ends_sentence() {
        assert_eq!(
            sentences("He moved to the U.S.A. He liked it."),
            vec!["He moved to the U.S.A. ", "He liked it."]
        );
        assert_eq!(
            sentences("Bring pens, paper, etc. and a ruler."),
            vec!["Bring pens, paper, etc. and a ruler."]
        );
    }

    #[test]
    fn test_lowercase_continuation_is_not_a_boundary() {
        assert_eq!(
            sentences("The value was approx. three. Then it grew."),
            vec!["The value was approx. three. ", "Then it grew."]
        );
    }

    #[test]
    fn test_decimals_and_inner_periods() {
        assert_eq!(
            sentences("Pi is 3.14 roughly. See example.com for more."),
            vec!["Pi is 3.14 roughly. ", "See example.com for more."]
        );
    }

    #[test]
    fn test_terminator_runs_and_closing_quotes() {
        assert_eq!(
            sentences("Really?! Yes. \"Stop.\" She left..."),
            vec!["Really?! ", "Yes. ", "\"Stop.\" ", "She left..."]
        );
    }

    #[test]
    fn test_paragraph_breaks() {
        assert_eq!(
            sentences("Introduction\n\nThe body starts here."),
            vec!["Introduction\n\n", "The body starts here."]
        );
        assert_eq!(
            sentences("line one\nline two."),
            vec!["line one\nline two."]
        );
    }

    #[test]
    fn test_leading_blank_lines_join_first_sentence() {
        assert_eq!(sentences("\n\nHello there."), vec!["\n\nHello there."]);
    }

    #[test]
    fn test_paragraph_breaks_can_be_disabled() {
        let mut config = TokenizerConfig::minimal();
        config.paragraphs.break_on_blank_line = false;
        let tokenizer = RuleTokenizer::from_config(&config).unwrap();
        let text = "Heading\n\nBody text.";
        assert_eq!(tokenizer.sentences(text).len(), 1);
    }

    #[test]
    fn test_multibyte_text() {
        let text = "Café au lait. Crème brûlée! Ça va?";
        assert_eq!(sentences(text), vec!["Café au lait. ", "Crème brûlée! ", "Ça va?"]);
    }

    #[test]
    fn test_words() {
        let tokenizer = RuleTokenizer::new();
        assert_eq!(
            tokenizer.words("\"Hello,\" she said -- it's U.S.A. time!"),
            vec!["Hello", "she", "said", "it's", "U.S.A", "time"]
        );
        assert_eq!(tokenizer.word_count("One sentence. "), 2);
        assert_eq!(tokenizer.word_count("... !!"), 0);
    }

    #[test]
    fn test_tokenize_pairs_spans_with_counts() {
        let text = "One sentence. Two sentence here.";
        let sentences = RuleTokenizer::new().tokenize(text);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].words, 2);
        assert_eq!(sentences[1].words, 3);
    }
}
