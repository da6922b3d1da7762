//! Tokenizer rule files
//!
//! Rules are described in TOML. The English rules ship embedded in the crate;
//! custom rule files follow the same schema.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Embedded English rule file
const ENGLISH_RULES: &str = include_str!("../../configs/english.toml");

static ENGLISH: OnceLock<TokenizerConfig> = OnceLock::new();

/// Root tokenizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerConfig {
    pub metadata: Metadata,
    pub terminators: Terminators,
    #[serde(default)]
    pub paragraphs: Paragraphs,
    #[serde(default)]
    pub abbreviations: Abbreviations,
}

/// Rule set metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Sentence terminator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminators {
    pub chars: Vec<char>,
    #[serde(default)]
    pub closing: Vec<char>,
}

/// Paragraph handling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraphs {
    #[serde(default = "default_true")]
    pub break_on_blank_line: bool,
}

impl Default for Paragraphs {
    fn default() -> Self {
        Self {
            break_on_blank_line: true,
        }
    }
}

/// Abbreviation lists
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub common: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl TokenizerConfig {
    /// The embedded English rules
    pub fn english() -> &'static TokenizerConfig {
        ENGLISH.get_or_init(|| {
            Self::from_toml_str(ENGLISH_RULES).unwrap_or_else(|e| {
                log::warn!("Embedded English rules rejected ({e}), using minimal rules");
                Self::minimal()
            })
        })
    }

    /// Parse and validate a TOML rule file
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: TokenizerConfig =
            toml::from_str(source).map_err(|e| CoreError::TokenizerConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Terminators only, no abbreviation handling
    pub fn minimal() -> Self {
        Self {
            metadata: Metadata {
                code: "minimal".to_string(),
                name: "Minimal".to_string(),
            },
            terminators: Terminators {
                chars: vec!['.', '!', '?'],
                closing: vec!['"', '\'', ')', ']'],
            },
            paragraphs: Paragraphs::default(),
            abbreviations: Abbreviations::default(),
        }
    }

    /// Check the rule file for inconsistencies
    pub fn validate(&self) -> Result<()> {
        if self.terminators.chars.is_empty() {
            return Err(CoreError::TokenizerConfig(
                "at least one terminator character is required".into(),
            ));
        }

        if let Some(ch) = self
            .terminators
            .chars
            .iter()
            .find(|ch| ch.is_whitespace() || ch.is_alphanumeric())
        {
            return Err(CoreError::TokenizerConfig(format!(
                "terminator {ch:?} must be a punctuation character"
            )));
        }

        let terminators: HashSet<char> = self.terminators.chars.iter().copied().collect();
        if let Some(ch) = self
            .terminators
            .closing
            .iter()
            .find(|ch| terminators.contains(ch))
        {
            return Err(CoreError::TokenizerConfig(format!(
                "{ch:?} cannot be both a terminator and a closing character"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_english_rules_parse() {
        let config = TokenizerConfig::from_toml_str(ENGLISH_RULES).unwrap();
        assert_eq!(config.metadata.code, "en");
        assert_eq!(config.terminators.chars, vec!['.', '!', '?']);
        assert!(config.abbreviations.titles.iter().any(|t| t == "Dr"));
        assert!(config.abbreviations.common.iter().any(|t| t == "etc"));
        assert!(config.paragraphs.break_on_blank_line);
    }

    #[test]
    fn test_optional_sections_default() {
        let config = TokenizerConfig::from_toml_str(
            r#"
[metadata]
code = "x"
name = "Custom"

[terminators]
chars = ["."]
"#,
        )
        .unwrap();
        assert!(config.terminators.closing.is_empty());
        assert!(config.abbreviations.titles.is_empty());
        assert!(config.paragraphs.break_on_blank_line);
    }

    #[test]
    fn test_rejects_empty_terminators() {
        let err = TokenizerConfig::from_toml_str(
            r#"
[metadata]
code = "x"
name = "Custom"

[terminators]
chars = []
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::TokenizerConfig(_)));
    }

    #[test]
    fn test_rejects_terminator_also_closing() {
        let mut config = TokenizerConfig::minimal();
        config.terminators.closing.push('.');
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = TokenizerConfig::from_toml_str("[metadata\ncode = ").unwrap_err();
        assert!(matches!(err, CoreError::TokenizerConfig(_)));
    }
}
