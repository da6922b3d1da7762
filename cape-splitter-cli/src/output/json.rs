//! JSON output formatter

use super::{OutputFormatter, Summary};
use anyhow::Result;
use cape_splitter_engine::{Chunk, GroupRef, TextGroup};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - collects everything and writes a single document
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    report: Report,
}

/// Data structure for JSON output
#[derive(Debug, Default, Serialize)]
struct Report {
    groups: Vec<TextGroup>,
    chunks: Vec<ChunkData>,
    summary: Summary,
}

/// One chunk in the JSON output
#[derive(Debug, Serialize)]
pub struct ChunkData {
    /// Position of the chunk
    pub index: usize,
    /// Core words of the chunk
    pub words: usize,
    /// References to the chunk's groups
    pub groups: Vec<GroupRef>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            report: Report::default(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_group(&mut self, group: &TextGroup) -> Result<()> {
        self.report.groups.push(group.clone());
        Ok(())
    }

    fn format_chunk(&mut self, index: usize, chunk: &Chunk, words: usize) -> Result<()> {
        self.report.chunks.push(ChunkData {
            index,
            words,
            groups: chunk.clone(),
        });
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        self.report.summary = summary.clone();
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.report)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.report)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
