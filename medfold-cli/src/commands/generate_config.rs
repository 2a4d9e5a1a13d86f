//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use medfold_engine::{AnalyzerConfig, DEFAULT_PRESET};
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Analyzer name written to `[metadata]`
    #[arg(short, long, value_name = "NAME", default_value = "custom")]
    pub name: String,

    /// Preset the template starts from
    #[arg(long, value_name = "PRESET", default_value = DEFAULT_PRESET)]
    pub from: String,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating analyzer configuration template...");
        println!("  Analyzer name: {}", self.name);
        println!("  Based on preset: {}", self.from);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the filters and stop words to suit your corpus");
        println!("2. Validate your configuration:");
        println!("   medfold validate -c {}", self.output.display());
        println!("3. Use it for analysis:");
        println!("   medfold analyze -i input.txt -c {}", self.output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> Result<String> {
        let mut config = AnalyzerConfig::preset(&self.from)
            .with_context(|| format!("Unknown preset: {}", self.from))?;
        config.metadata.name = self.name.clone();
        config.metadata.description = format!("Custom analyzer based on the {} preset", self.from);

        let body = config
            .to_toml_string()
            .context("Failed to serialize configuration")?;

        Ok(format!(
            "# Analyzer configuration for {}\n\
             #\n\
             # Filters run in a fixed order: standard, lowercase, fold_accents, stop_words.\n\
             # Stop words are normalized with the enabled lowercase and folding steps,\n\
             # so they may be written with or without diacritics.\n\
             # Set tokenizer.pattern to replace the built-in token regex.\n\n{}",
            self.name, body
        ))
    }
}
