//! Configuration module
//!
//! The configuration file is TOML with three optional sections:
//!
//! ```toml
//! [grouping]
//! words_per_group = 500
//! max_overlap_before = 50
//! max_overlap_after = 50
//!
//! [performance]
//! execution_mode = "adaptive"
//! parallel_threshold = 100000
//! worker_threads = 0
//!
//! [output]
//! default_format = "text"
//! number_of_chunks = 1
//! pretty_json = true
//! ```
//!
//! Command-line flags take precedence over values from the file.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use cape_splitter_core::GroupConfig;
use cape_splitter_engine::{ExecutionMode, SplitterConfig, DEFAULT_PARALLEL_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Window parameters
    #[serde(default)]
    pub grouping: GroupConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// How documents are distributed over threads
    pub execution_mode: ExecutionMode,

    /// Batch size in bytes from which adaptive mode splits in parallel
    pub parallel_threshold: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            worker_threads: 0,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Default number of chunks to request
    pub number_of_chunks: usize,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            number_of_chunks: 1,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load a configuration file if a path is given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Splitter configuration described by this file
    pub fn splitter_config(&self) -> SplitterConfig {
        SplitterConfig {
            grouping: self.grouping,
            execution_mode: self.performance.execution_mode,
            threads: match self.performance.worker_threads {
                0 => None,
                n => Some(n),
            },
            parallel_threshold: self.performance.parallel_threshold,
        }
    }
}
