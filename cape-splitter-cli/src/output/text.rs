//! Plain text output formatter

use super::{join_refs, single_line, OutputFormatter, Summary};
use anyhow::Result;
use cape_splitter_engine::{Chunk, TextGroup};
use std::io::Write;

/// Plain text formatter
///
/// Each group is a header line followed by its text on one line; chunks are
/// listed one per line after the groups.
pub struct TextFormatter<W: Write> {
    writer: W,
    chunks_started: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunks_started: false,
        }
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_group(&mut self, group: &TextGroup) -> Result<()> {
        writeln!(
            self.writer,
            "[{}#{}] {} words (overlap {} before, {} after)",
            group.parent_doc_id,
            group.idx,
            group.number_of_words,
            group.overlap_words_before,
            group.overlap_words_after
        )?;
        writeln!(self.writer, "{}", single_line(&group.text))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_chunk(&mut self, index: usize, chunk: &Chunk, words: usize) -> Result<()> {
        if !self.chunks_started {
            writeln!(self.writer, "Chunks:")?;
            self.chunks_started = true;
        }
        writeln!(self.writer, "chunk {} ({} words): {}", index, words, join_refs(chunk))?;
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        writeln!(
            self.writer,
            "{} documents, {} groups, {} words, {} chunks (requested {})",
            summary.documents,
            summary.groups,
            summary.total_words,
            summary.chunks,
            summary.chunks_requested
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
