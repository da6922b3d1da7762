//! Markdown output formatter

use super::{single_line, OutputFormatter, Summary};
use anyhow::Result;
use cape_splitter_engine::{Chunk, TextGroup};
use std::io::Write;

/// Markdown formatter - groups as sections, chunks as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    groups_started: bool,
    chunks_started: bool,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            groups_started: false,
            chunks_started: false,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn format_group(&mut self, group: &TextGroup) -> Result<()> {
        if !self.groups_started {
            writeln!(self.writer, "## Groups")?;
            writeln!(self.writer)?;
            self.groups_started = true;
        }
        writeln!(self.writer, "### `{}#{}`", group.parent_doc_id, group.idx)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "*{} words, overlap {} before and {} after*",
            group.number_of_words, group.overlap_words_before, group.overlap_words_after
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "> {}", single_line(&group.text))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_chunk(&mut self, index: usize, chunk: &Chunk, words: usize) -> Result<()> {
        if !self.chunks_started {
            writeln!(self.writer, "## Chunks")?;
            writeln!(self.writer)?;
            self.chunks_started = true;
        }
        let refs: Vec<String> = chunk.iter().map(|r| format!("`{r}`")).collect();
        writeln!(
            self.writer,
            "{}. **{} words**: {}",
            index + 1,
            words,
            refs.join(", ")
        )?;
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Documents: {}, groups: {}, words: {}, chunks: {}*",
            summary.documents, summary.groups, summary.total_words, summary.chunks
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
