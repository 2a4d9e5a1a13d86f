//! Output formatting module

use anyhow::{Context, Result};
use medfold_engine::Token;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// An input folded line by line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoldedDocument {
    pub source: String,
    pub lines: Vec<String>,
}

/// An input run through the analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedDocument {
    pub source: String,
    pub tokens: Vec<Token>,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Write one folded document
    fn format_folded(&mut self, document: &FoldedDocument) -> Result<()>;

    /// Write one analyzed document
    fn format_analyzed(&mut self, document: &AnalyzedDocument) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Every supported output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one line or term per line
    Text,
    /// JSON array with one object per input
    Json,
    /// Markdown sections with a term table per input
    Markdown,
}

/// Output formats for commands without a markdown rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlainFormat {
    /// Plain text
    Text,
    /// JSON
    Json,
}

impl From<PlainFormat> for OutputFormat {
    fn from(format: PlainFormat) -> Self {
        match format {
            PlainFormat::Text => OutputFormat::Text,
            PlainFormat::Json => OutputFormat::Json,
        }
    }
}

/// Open the output file, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_plain_format_conversion() {
        assert_eq!(OutputFormat::from(PlainFormat::Text), OutputFormat::Text);
        assert_eq!(OutputFormat::from(PlainFormat::Json), OutputFormat::Json);
    }

    #[test]
    fn test_open_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        {
            let mut writer = open_output(Some(&path)).unwrap();
            writeln!(writer, "aelfric").unwrap();
        }

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "aelfric\n");
    }

    #[test]
    fn test_open_output_missing_directory() {
        let err = open_output(Some(Path::new("/nonexistent/dir/out.txt"))).err().unwrap();
        assert!(err.to_string().contains("Failed to create output file"));
    }

    #[test]
    fn test_create_formatter_writes_through() {
        let mut buffer = Vec::new();
        {
            let mut formatter = create_formatter(OutputFormat::Text, Box::new(&mut buffer));
            formatter
                .format_folded(&FoldedDocument {
                    source: "<stdin>".to_string(),
                    lines: vec!["cafe".to_string()],
                })
                .unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "cafe\n");
    }
}
