//! Table command implementation

use anyhow::Result;
use clap::Args;
use medfold_core::table::entries;
use medfold_core::Folded;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use crate::output::{open_output, PlainFormat};

/// Arguments for the table command
#[derive(Debug, Args)]
pub struct TableArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: PlainFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// One row of the folding table
#[derive(Debug, Serialize)]
struct TableEntry {
    code_point: String,
    source: char,
    folded: String,
}

impl TableEntry {
    fn new(source: char, folded: &Folded) -> Self {
        Self {
            code_point: format!("U+{:04X}", u32::from(source)),
            source,
            folded: folded.to_string(),
        }
    }
}

impl TableArgs {
    /// Execute the table command
    pub fn execute(&self) -> Result<()> {
        let mut writer = open_output(self.output.as_deref())?;
        write_table(&mut writer, self.format)?;
        writer.flush()?;
        Ok(())
    }
}

fn write_table<W: Write>(writer: &mut W, format: PlainFormat) -> Result<()> {
    let rows = entries()
        .iter()
        .map(|(source, folded)| TableEntry::new(*source, folded));

    match format {
        PlainFormat::Text => {
            for row in rows {
                let folded = if row.folded.is_empty() {
                    "(removed)"
                } else {
                    row.folded.as_str()
                };
                writeln!(writer, "{}\t{}\t{}", row.code_point, row.source, folded)?;
            }
        }
        PlainFormat::Json => {
            let rows: Vec<TableEntry> = rows.collect();
            serde_json::to_writer_pretty(&mut *writer, &rows)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_table() {
        let mut buffer = Vec::new();
        write_table(&mut buffer, PlainFormat::Text).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(output.lines().count(), entries().len());
        assert!(output.starts_with("U+00C0\tÀ\tA\n"));
        assert!(output.contains("U+00C6\tÆ\tAe\n"));
        assert!(output.contains("U+0301\t\u{0301}\t(removed)\n"));
    }

    #[test]
    fn test_json_table() {
        let mut buffer = Vec::new();
        write_table(&mut buffer, PlainFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), entries().len());
        assert_eq!(rows[0]["code_point"], "U+00C0");
        assert_eq!(rows[0]["source"], "À");
        assert_eq!(rows[0]["folded"], "A");
    }
}
