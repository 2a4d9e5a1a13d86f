//! Engine error types

use thiserror::Error;

/// Errors raised while building or configuring an analyzer
///
/// Token processing itself never fails; these only come from configuration
/// and I/O.
#[derive(Error, Debug)]
pub enum EngineError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed
    #[error("failed to parse analyzer configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("failed to serialize analyzer configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// No embedded preset with this name
    #[error("unknown analyzer preset '{name}'")]
    UnknownPreset {
        /// The requested preset name
        name: String,
    },

    /// Configuration parsed but is not usable
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Tokenizer pattern failed to compile
    #[error("invalid token pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
