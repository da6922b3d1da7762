//! Configuration types for the engine

use crate::{
    error::{EngineError, Result},
    ExecutionMode,
};
use cape_splitter_core::GroupConfig;
use serde::{Deserialize, Serialize};

/// Default batch size in bytes above which documents are split in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100_000;

/// Splitter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Window parameters handed to the grouper
    pub grouping: GroupConfig,
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Minimum batch size in bytes for adaptive parallel processing
    pub parallel_threshold: usize,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            grouping: GroupConfig::default(),
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SplitterConfig {
    /// Create a configuration builder
    pub fn builder() -> SplitterConfigBuilder {
        SplitterConfigBuilder::default()
    }

    /// Default execution settings with the given window parameters
    pub fn with_grouping(grouping: GroupConfig) -> Self {
        Self {
            grouping,
            ..Default::default()
        }
    }

    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX,
            ..Default::default()
        }
    }

    /// Configuration that splits any batch of two or more documents in parallel
    pub fn fast() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 0,
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.grouping.validate()?;

        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "threads must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`SplitterConfig`]
#[derive(Debug, Default)]
pub struct SplitterConfigBuilder {
    config: SplitterConfig,
}

impl SplitterConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target words per group
    pub fn words_per_group(mut self, words: usize) -> Self {
        self.config.grouping.words_per_group = words;
        self
    }

    /// Set the maximum overlap borrowed from the previous group
    pub fn max_overlap_before(mut self, words: usize) -> Self {
        self.config.grouping.max_overlap_before = words;
        self
    }

    /// Set the maximum overlap borrowed from the next group
    pub fn max_overlap_after(mut self, words: usize) -> Self {
        self.config.grouping.max_overlap_after = words;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the adaptive parallel threshold in bytes
    pub fn parallel_threshold(mut self, bytes: usize) -> Self {
        self.config.parallel_threshold = bytes;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<SplitterConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cape_splitter_core::CoreError;

    #[test]
    fn test_defaults() {
        let config = SplitterConfig::default();
        assert_eq!(config.grouping, GroupConfig::new(500, 50, 50));
        assert_eq!(config.execution_mode, ExecutionMode::Adaptive);
        assert_eq!(config.parallel_threshold, 100_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        let sequential = SplitterConfig::sequential();
        assert_eq!(sequential.threads, Some(1));
        assert_eq!(sequential.execution_mode, ExecutionMode::Sequential);

        let fast = SplitterConfig::fast();
        assert_eq!(fast.parallel_threshold, 0);
        assert_eq!(fast.threads, None);
    }

    #[test]
    fn test_builder() {
        let config = SplitterConfig::builder()
            .words_per_group(120)
            .max_overlap_before(10)
            .max_overlap_after(5)
            .execution_mode(ExecutionMode::Sequential)
            .threads(Some(2))
            .parallel_threshold(1024)
            .build()
            .unwrap();

        assert_eq!(config.grouping, GroupConfig::new(120, 10, 5));
        assert_eq!(config.threads, Some(2));
        assert_eq!(config.parallel_threshold, 1024);
    }

    #[test]
    fn test_builder_rejects_zero_words_per_group() {
        let err = SplitterConfig::builder().words_per_group(0).build().unwrap_err();
        assert!(matches!(err, EngineError::Core(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_rejects_zero_threads() {
        let err = SplitterConfig::builder().threads(Some(0)).build().unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SplitterConfig = serde_json::from_str(
            r#"{"grouping": {"words_per_group": 200}, "execution_mode": "sequential"}"#,
        )
        .unwrap();
        assert_eq!(config.grouping, GroupConfig::new(200, 50, 50));
        assert_eq!(config.execution_mode, ExecutionMode::Sequential);
        assert_eq!(config.threads, None);
    }
}
