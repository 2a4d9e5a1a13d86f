//! Analyze command implementation

use anyhow::{Context, Result};
use clap::Args;
use medfold_engine::{Analyzer, AnalyzerConfig};
use rayon::prelude::*;
use std::path::PathBuf;

use super::with_thread_pool;
use crate::input::{resolve_patterns, InputSource};
use crate::output::{create_formatter, open_output, AnalyzedDocument, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Embedded analyzer preset (default: dmlbs)
    #[arg(short, long, value_name = "NAME", conflicts_with = "config")]
    pub preset: Option<String>,

    /// Analyzer configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: one per CPU)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Starting text analysis");

        let analyzer = self.build_analyzer()?;
        log::info!("Using analyzer '{}'", analyzer.config().metadata.name);

        let sources = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(sources.len() as u64);

        let documents = with_thread_pool(self.threads, || {
            sources
                .par_iter()
                .map_init(
                    || analyzer.clone(),
                    |analyzer, source| {
                        let document = analyze_source(analyzer, source);
                        progress.file_completed(&source.name());
                        document
                    },
                )
                .collect::<Result<Vec<_>>>()
        })??;
        progress.finish();

        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(self.format, writer);
        for document in &documents {
            formatter.format_analyzed(document)?;
        }
        formatter.finish()?;

        let terms: usize = documents.iter().map(|d| d.tokens.len()).sum();
        log::info!("Analyzed {} input(s), {} terms", documents.len(), terms);
        Ok(())
    }

    /// Build the analyzer from `--config`, `--preset` or the default preset
    fn build_analyzer(&self) -> Result<Analyzer> {
        match (&self.config, &self.preset) {
            (Some(path), _) => {
                let config = AnalyzerConfig::from_file(path).with_context(|| {
                    format!("Failed to load analyzer config: {}", path.display())
                })?;
                Analyzer::from_config(config)
                    .with_context(|| format!("Invalid analyzer config: {}", path.display()))
            }
            (None, Some(name)) => Analyzer::from_preset(name).with_context(|| {
                format!(
                    "Failed to load preset '{}' (available: {})",
                    name,
                    AnalyzerConfig::preset_names().join(", ")
                )
            }),
            (None, None) => Analyzer::new().context("Failed to load the default analyzer"),
        }
    }
}

/// Analyze one input with the worker's analyzer
fn analyze_source(analyzer: &mut Analyzer, source: &InputSource) -> Result<AnalyzedDocument> {
    let text = source.read_text()?;
    let tokens = analyzer.analyze(&text);

    Ok(AnalyzedDocument {
        source: source.name(),
        tokens,
    })
}
