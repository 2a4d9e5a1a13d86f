//! Fold command implementation

use anyhow::Result;
use clap::Args;
use medfold_core::FoldingTransducer;
use rayon::prelude::*;
use std::path::PathBuf;

use super::with_thread_pool;
use crate::input::{resolve_patterns, InputSource};
use crate::output::{create_formatter, open_output, FoldedDocument, PlainFormat};
use crate::progress::ProgressReporter;

/// Arguments for the fold command
#[derive(Debug, Args)]
pub struct FoldArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: PlainFormat,

    /// Number of worker threads (default: one per CPU)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,
}

impl FoldArgs {
    /// Execute the fold command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Starting accent folding");

        let sources = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(sources.len() as u64);

        let documents = with_thread_pool(self.threads, || {
            sources
                .par_iter()
                .map_init(FoldingTransducer::new, |transducer, source| {
                    let document = fold_source(transducer, source);
                    progress.file_completed(&source.name());
                    document
                })
                .collect::<Result<Vec<_>>>()
        })??;
        progress.finish();

        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(self.format.into(), writer);
        for document in &documents {
            formatter.format_folded(document)?;
        }
        formatter.finish()?;

        log::info!("Folded {} input(s)", documents.len());
        Ok(())
    }
}

/// Fold one input line by line, reusing the worker's transducer
fn fold_source(transducer: &mut FoldingTransducer, source: &InputSource) -> Result<FoldedDocument> {
    let text = source.read_text()?;
    let lines = text
        .lines()
        .map(|line| transducer.fold(line).to_owned())
        .collect();

    log::debug!(
        "Folded {} (buffer capacity {}, grown {} times)",
        source.name(),
        transducer.capacity(),
        transducer.grow_count()
    );

    Ok(FoldedDocument {
        source: source.name(),
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fold_source_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sample.txt");
        fs::write(&path, "Müller—Schmidt\r\nþing\n\nplain\n").unwrap();

        let mut transducer = FoldingTransducer::new();
        let document = fold_source(&mut transducer, &InputSource::File(path.clone())).unwrap();

        assert_eq!(document.source, path.display().to_string());
        assert_eq!(document.lines, vec!["Muller-Schmidt", "þing", "", "plain"]);
    }

    #[test]
    fn test_fold_source_missing_file() {
        let mut transducer = FoldingTransducer::new();
        let source = InputSource::File(PathBuf::from("/nonexistent/psalter.txt"));
        assert!(fold_source(&mut transducer, &source).is_err());
    }

    #[test]
    fn test_transducer_reused_across_sources() {
        let temp_dir = TempDir::new().unwrap();
        let long = temp_dir.path().join("long.txt");
        let short = temp_dir.path().join("short.txt");
        fs::write(&long, "é".repeat(200)).unwrap();
        fs::write(&short, "é").unwrap();

        let mut transducer = FoldingTransducer::new();
        fold_source(&mut transducer, &InputSource::File(long)).unwrap();
        let capacity = transducer.capacity();
        let document = fold_source(&mut transducer, &InputSource::File(short)).unwrap();

        assert_eq!(document.lines, vec!["e"]);
        assert_eq!(transducer.capacity(), capacity);
    }
}
