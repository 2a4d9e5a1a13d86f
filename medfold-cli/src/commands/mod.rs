//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::error::CliError;

pub mod analyze;
pub mod fold;
pub mod generate_config;
pub mod table;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fold accents and diacritics in text files, line by line
    Fold(fold::FoldArgs),

    /// Tokenize, normalize and filter text files with an analyzer
    Analyze(analyze::AnalyzeArgs),

    /// Print the folding table
    Table(table::TableArgs),

    /// Write an analyzer configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check an analyzer configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Fold(args) => args.execute(quiet),
            Commands::Analyze(args) => args.execute(quiet),
            Commands::Table(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Run `op` on a dedicated pool of `threads` workers, or on the global pool
pub(crate) fn with_thread_pool<R, F>(threads: Option<usize>, op: F) -> Result<R>
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    match threads {
        None => Ok(op()),
        Some(0) => Err(CliError::InvalidThreadCount.into()),
        Some(n) => {
            log::debug!("Using {} worker threads", n);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .context("Failed to build thread pool")?;
            Ok(pool.install(op))
        }
    }
}
