//! Output formatting module

use anyhow::Result;
use cape_splitter_engine::{Chunk, TextGroup};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one block per group then one line per chunk
    #[default]
    Text,
    /// JSON document with groups, chunks and totals
    Json,
    /// Markdown formatted output
    Markdown,
}

/// Totals printed after the groups and chunks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of input documents
    pub documents: usize,
    /// Number of groups over all documents
    pub groups: usize,
    /// Total core words
    pub total_words: usize,
    /// Chunk count that was asked for
    pub chunks_requested: usize,
    /// Chunk count that was produced
    pub chunks: usize,
}

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output a single group
    fn format_group(&mut self, group: &TextGroup) -> Result<()>;

    /// Format and output one chunk with its word count
    fn format_chunk(&mut self, index: usize, chunk: &Chunk, words: usize) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON)
    fn finish(&mut self, summary: &Summary) -> Result<()>;
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Collapse whitespace runs into single spaces
pub(crate) fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `a#0, a#1, b#0`
pub(crate) fn join_refs(chunk: &Chunk) -> String {
    chunk
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
