//! Sentence-aligned word windows for document splitting
//!
//! This crate holds the deterministic building blocks of the splitter:
//!
//! - **Tokenizer**: segments text into sentence spans and counts words
//! - **Grouper**: folds sentences into fixed-size, overlapping windows
//!   ("groups") that never split a sentence
//!
//! Batch orchestration and chunk balancing live in `cape-splitter-engine`.
//!
//! # Example
//!
//! ```rust
//! use cape_splitter_core::{make_groups, GroupConfig, RuleTokenizer};
//!
//! let tokenizer = RuleTokenizer::new();
//! let config = GroupConfig::new(3, 50, 50);
//!
//! let result = make_groups("a", "One sentence. Two sentence.", &tokenizer, &config).unwrap();
//!
//! assert_eq!(result.groups.len(), 2);
//! assert_eq!(result.total_words, 4);
//! assert_eq!(result.groups[1].core_text(), "Two sentence.");
//! ```

pub mod error;
pub mod grouper;
pub mod tokenizer;
pub mod types;

pub use error::{CoreError, Result};
pub use grouper::{group_sentences, make_groups, DocumentGroups, Grouper};
pub use tokenizer::{RuleTokenizer, Tokenizer, TokenizerConfig};
pub use types::{defaults, GroupConfig, Sentence, Span, TextGroup};
