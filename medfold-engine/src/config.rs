//! Analyzer configuration
//!
//! This module defines the TOML schema for analyzer configuration and the
//! embedded presets.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::tokenizer::DEFAULT_MAX_TOKEN_LENGTH;

/// Name of the preset used by [`Analyzer::new`](crate::Analyzer::new)
pub const DEFAULT_PRESET: &str = "dmlbs";

/// Embedded presets as `(name, toml)`
const EMBEDDED: &[(&str, &str)] = &[
    ("dmlbs", include_str!("../configs/presets/dmlbs.toml")),
    ("folding", include_str!("../configs/presets/folding.toml")),
];

static PRESETS: OnceLock<HashMap<&'static str, AnalyzerConfig>> = OnceLock::new();

/// Root analyzer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
    #[serde(default)]
    pub filters: FilterConfig,
    #[serde(default)]
    pub stop_words: StopWordsConfig,
}

/// Analyzer metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Tokenizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default = "default_max_token_length")]
    pub max_token_length: usize,
    /// Custom token regex; the built-in pattern is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
            pattern: None,
        }
    }
}

/// Which filters run, in fixed order: standard, lowercase, fold, stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_true")]
    pub standard: bool,
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default = "default_true")]
    pub fold_accents: bool,
    #[serde(default = "default_true")]
    pub stop_words: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            standard: true,
            lowercase: true,
            fold_accents: true,
            stop_words: true,
        }
    }
}

/// Stop-word list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopWordsConfig {
    #[serde(default)]
    pub words: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_max_token_length() -> usize {
    DEFAULT_MAX_TOKEN_LENGTH
}

impl AnalyzerConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading analyzer configuration from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Look up an embedded preset by name
    pub fn preset(name: &str) -> Result<Self> {
        presets()
            .get(name)
            .cloned()
            .ok_or_else(|| {
                log::warn!("unknown analyzer preset '{name}'");
                EngineError::UnknownPreset {
                    name: name.to_string(),
                }
            })
    }

    /// Names of the embedded presets
    pub fn preset_names() -> Vec<&'static str> {
        EMBEDDED.iter().map(|(name, _)| *name).collect()
    }

    /// Check the configuration for values the analyzer cannot use
    pub fn validate(&self) -> Result<()> {
        if self.metadata.name.trim().is_empty() {
            return Err(EngineError::InvalidConfig(
                "metadata.name must not be empty".to_string(),
            ));
        }
        if self.tokenizer.max_token_length == 0 {
            return Err(EngineError::InvalidConfig(
                "tokenizer.max_token_length must be greater than zero".to_string(),
            ));
        }
        if let Some(pattern) = &self.tokenizer.pattern {
            regex::Regex::new(pattern)?;
        }
        if let Some(index) = self
            .stop_words
            .words
            .iter()
            .position(|w| w.trim().is_empty())
        {
            return Err(EngineError::InvalidConfig(format!(
                "stop_words.words[{index}] is empty"
            )));
        }
        Ok(())
    }
}

fn presets() -> &'static HashMap<&'static str, AnalyzerConfig> {
    PRESETS.get_or_init(|| {
        let mut map = HashMap::new();
        for (name, text) in EMBEDDED {
            match AnalyzerConfig::from_toml_str(text) {
                Ok(config) => {
                    map.insert(*name, config);
                }
                Err(e) => log::warn!("failed to load embedded preset {name}: {e}"),
            }
        }
        map
    })
}
