//! CLI command implementations

use crate::config::CliConfig;
use crate::input::{load_dataset, load_files, resolve_patterns, Document};
use crate::progress::ProgressReporter;
use anyhow::Result;
use cape_splitter_engine::{ExecutionMode, Splitter, SplitterConfig};
use clap::{Args, Subcommand};
use std::path::PathBuf;

pub mod generate_config;
pub mod inspect;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split documents into groups and balance them into chunks
    Split(split::SplitArgs),

    /// Print every attribute of selected groups together with batch totals
    Inspect(inspect::InspectArgs),

    /// Write a configuration file with the default settings
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Inspect(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Where the documents come from
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Input files or patterns (supports glob), one document per file
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        num_args = 1..,
        required_unless_present = "dataset",
        conflicts_with = "dataset"
    )]
    pub input: Vec<String>,

    /// JSON dataset: array of {"id", "text"} records or object of id to text
    #[arg(long, value_name = "FILE")]
    pub dataset: Option<PathBuf>,
}

impl InputArgs {
    /// Load the documents, in input order
    pub fn load(&self, quiet: bool) -> Result<Vec<Document>> {
        match &self.dataset {
            Some(path) => load_dataset(path),
            None => {
                let files = resolve_patterns(&self.input)?;
                log::info!("Found {} files to split", files.len());
                let mut progress = ProgressReporter::new(quiet);
                load_files(&files, &mut progress)
            }
        }
    }
}

/// Splitting parameters that override the configuration file
#[derive(Debug, Clone, Default, Args)]
pub struct SplitterArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Target number of words in each group
    #[arg(short, long, value_name = "WORDS")]
    pub words_per_group: Option<usize>,

    /// Maximum words borrowed from the previous group
    #[arg(long, value_name = "WORDS")]
    pub overlap_before: Option<usize>,

    /// Maximum words borrowed from the next group
    #[arg(long, value_name = "WORDS")]
    pub overlap_after: Option<usize>,

    /// Force parallel splitting even for small batches
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (default: all cores)
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,
}

impl SplitterArgs {
    /// Load the configuration file (if any)
    pub fn load_config(&self) -> Result<CliConfig> {
        CliConfig::load_or_default(self.config.as_deref())
    }

    /// Apply command-line overrides to a splitter configuration
    pub fn apply(&self, config: &mut SplitterConfig) {
        if let Some(words) = self.words_per_group {
            config.grouping.words_per_group = words;
        }
        if let Some(words) = self.overlap_before {
            config.grouping.max_overlap_before = words;
        }
        if let Some(words) = self.overlap_after {
            config.grouping.max_overlap_after = words;
        }
        if self.parallel {
            config.execution_mode = ExecutionMode::Parallel;
        }
        if let Some(threads) = self.threads {
            config.threads = Some(threads);
        }
    }
}

/// Build a splitter over the documents
pub fn build_splitter(documents: Vec<Document>, config: SplitterConfig) -> Result<Splitter> {
    let (ids, texts): (Vec<String>, Vec<String>) =
        documents.into_iter().map(|d| (d.id, d.text)).unzip();
    let splitter = Splitter::with_config(ids, texts, config)?;
    Ok(splitter)
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A second initialization only happens when commands run in-process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
