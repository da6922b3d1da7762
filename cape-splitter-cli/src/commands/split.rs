//! Split command implementation

use super::{build_splitter, init_logging, InputArgs, SplitterArgs};
use crate::output::{create_formatter, OutputFormat, Summary};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub splitter: SplitterArgs,

    /// Number of chunks to balance the groups into
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub chunks: Option<usize>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let file_config = self.splitter.load_config()?;
        let mut config = file_config.splitter_config();
        self.splitter.apply(&mut config);

        let documents = self.input.load(self.quiet)?;
        let splitter = build_splitter(documents, config)?;

        let number_of_chunks = self.chunks.unwrap_or(file_config.output.number_of_chunks);
        let chunks = splitter.get_chunks(number_of_chunks)?;

        let format = self.format.unwrap_or(file_config.output.default_format);
        let mut formatter = create_formatter(format, self.writer()?, file_config.output.pretty_json);

        for group in splitter.iter_groups() {
            formatter.format_group(group)?;
        }
        for (index, chunk) in chunks.iter().enumerate() {
            formatter.format_chunk(index, chunk, splitter.chunk_words(chunk)?)?;
        }
        formatter.finish(&Summary {
            documents: splitter.document_ids().len(),
            groups: splitter.number_of_groups(),
            total_words: splitter.total_number_words(),
            chunks_requested: number_of_chunks,
            chunks: chunks.len(),
        })?;

        if let Some(path) = &self.output {
            log::info!("Wrote output to {}", path.display());
        }
        Ok(())
    }

    fn writer(&self) -> Result<Box<dyn Write + Send>> {
        Ok(match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        })
    }
}
