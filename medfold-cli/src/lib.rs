//! medfold CLI library
//!
//! This library provides the command-line interface for the medfold
//! accent folding and text analysis tools.

pub mod commands;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
