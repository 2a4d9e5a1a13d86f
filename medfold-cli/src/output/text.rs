//! Text output formatter

use super::{AnalyzedDocument, FoldedDocument, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Text formatter - folded lines as-is, analyzed terms one per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_folded(&mut self, document: &FoldedDocument) -> Result<()> {
        for line in &document.lines {
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }

    fn format_analyzed(&mut self, document: &AnalyzedDocument) -> Result<()> {
        for token in &document.tokens {
            writeln!(self.writer, "{}", token.text)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medfold_engine::Token;

    #[test]
    fn test_folded_lines() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        formatter
            .format_folded(&FoldedDocument {
                source: "a.txt".to_string(),
                lines: vec!["Muller-Schmidt".to_string(), String::new(), "þing".to_string()],
            })
            .unwrap();
        formatter.finish().unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Muller-Schmidt\n\nþing\n"
        );
    }

    #[test]
    fn test_analyzed_terms() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        let tokens = ["cafe", "muller"]
            .iter()
            .enumerate()
            .map(|(position, text)| Token {
                text: text.to_string(),
                position,
                ..Token::default()
            })
            .collect();
        formatter
            .format_analyzed(&AnalyzedDocument {
                source: "a.txt".to_string(),
                tokens,
            })
            .unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "cafe\nmuller\n");
    }
}
