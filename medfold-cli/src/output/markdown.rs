//! Markdown output formatter

use super::{AnalyzedDocument, FoldedDocument, OutputFormatter};
use anyhow::Result;
use medfold_engine::TokenKind;
use std::io::Write;

/// Markdown formatter - one section per input, analyzed terms as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
    term_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
            term_count: 0,
        }
    }

    fn heading(&mut self, source: &str) -> Result<()> {
        if self.document_count > 0 {
            writeln!(self.writer)?;
        }
        self.document_count += 1;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        Ok(())
    }
}

fn kind_label(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Word => "word",
        TokenKind::Number => "number",
        TokenKind::Apostrophe => "apostrophe",
        TokenKind::Acronym => "acronym",
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_folded(&mut self, document: &FoldedDocument) -> Result<()> {
        self.heading(&document.source)?;
        writeln!(self.writer, "```text")?;
        for line in &document.lines {
            writeln!(self.writer, "{line}")?;
        }
        writeln!(self.writer, "```")?;
        Ok(())
    }

    fn format_analyzed(&mut self, document: &AnalyzedDocument) -> Result<()> {
        self.heading(&document.source)?;
        writeln!(self.writer, "| position | term | kind | offsets |")?;
        writeln!(self.writer, "|---:|---|---|---|")?;
        for token in &document.tokens {
            writeln!(
                self.writer,
                "| {} | {} | {} | {}..{} |",
                token.position,
                escape_cell(&token.text),
                kind_label(token.kind),
                token.offset_from,
                token.offset_to
            )?;
        }
        self.term_count += document.tokens.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Documents: {}, terms: {}*",
            self.document_count, self.term_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
