//! JSON output formatter

use super::{AnalyzedDocument, FoldedDocument, OutputFormatter};
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

/// JSON formatter - outputs one object per input as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<Value>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_folded(&mut self, document: &FoldedDocument) -> Result<()> {
        self.documents.push(serde_json::to_value(document)?);
        Ok(())
    }

    fn format_analyzed(&mut self, document: &AnalyzedDocument) -> Result<()> {
        self.documents.push(serde_json::to_value(document)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medfold_engine::{Token, TokenKind};

    #[test]
    fn test_folded_documents() {
        let mut buffer = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buffer);
        formatter
            .format_folded(&FoldedDocument {
                source: "a.txt".to_string(),
                lines: vec!["Aelfric".to_string()],
            })
            .unwrap();
        formatter
            .format_folded(&FoldedDocument {
                source: "b.txt".to_string(),
                lines: vec![],
            })
            .unwrap();
        formatter.finish().unwrap();

        let value: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"source": "a.txt", "lines": ["Aelfric"]},
                {"source": "b.txt", "lines": []}
            ])
        );
    }

    #[test]
    fn test_analyzed_tokens_carry_offsets() {
        let mut buffer = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buffer);
        formatter
            .format_analyzed(&AnalyzedDocument {
                source: "<stdin>".to_string(),
                tokens: vec![Token {
                    text: "cafe".to_string(),
                    offset_from: 4,
                    offset_to: 9,
                    position: 1,
                    kind: TokenKind::Word,
                }],
            })
            .unwrap();
        formatter.finish().unwrap();

        let value: Value = serde_json::from_slice(&buffer).unwrap();
        let token = &value[0]["tokens"][0];
        assert_eq!(value[0]["source"], "<stdin>");
        assert_eq!(token["text"], "cafe");
        assert_eq!(token["offset_from"], 4);
        assert_eq!(token["offset_to"], 9);
        assert_eq!(token["position"], 1);
        assert_eq!(token["kind"], "word");
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut buffer = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buffer);
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }
}
