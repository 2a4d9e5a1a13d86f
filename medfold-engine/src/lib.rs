//! Text analysis pipeline with accent folding
//!
//! This crate wires the folding transducer from `medfold-core` into a token
//! pipeline: tokenizer, possessive/acronym cleanup, lowercasing, accent
//! folding and stop-word removal, configured from TOML.
//!
//! # Example
//!
//! ```rust
//! use medfold_engine::Analyzer;
//!
//! let mut analyzer = Analyzer::new().unwrap();
//! let terms = analyzer.terms("The Café of Müller—Schmidt");
//! assert_eq!(terms, vec!["cafe", "muller", "schmidt"]);
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod filters;
pub mod token;
pub mod tokenizer;

// Re-export key types
pub use analyzer::Analyzer;
pub use config::{AnalyzerConfig, FilterConfig, DEFAULT_PRESET};
pub use error::{EngineError, Result};
pub use filters::{AccentFoldingFilter, LowerCaseFilter, StandardFilter, StopFilter, StopWords};
pub use token::{BoxTokenStream, PreTokenizedStream, Token, TokenKind, TokenStream};
pub use tokenizer::Tokenizer;

// Re-export from core for convenience
pub use medfold_core::{fold_char, fold_str, Folded, FoldingTransducer};
