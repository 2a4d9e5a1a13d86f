//! Validate command implementation

use anyhow::Result;
use clap::Args;
use medfold_engine::{Analyzer, AnalyzerConfig};
use std::path::PathBuf;

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to analyzer configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating analyzer configuration: {}", self.config.display());

        // Building the analyzer also compiles the tokenizer pattern.
        let loaded = AnalyzerConfig::from_file(&self.config)
            .and_then(|config| Analyzer::from_config(config.clone()).map(|_| config));

        match loaded {
            Ok(config) => {
                let filters = config.filters;
                let enabled: Vec<&str> = [
                    ("standard", filters.standard),
                    ("lowercase", filters.lowercase),
                    ("fold_accents", filters.fold_accents),
                    ("stop_words", filters.stop_words),
                ]
                .iter()
                .filter(|(_, on)| *on)
                .map(|(name, _)| *name)
                .collect();

                println!("✓ Configuration is valid!");
                println!("  Analyzer name: {}", config.metadata.name);
                println!("  Filters: {}", enabled.join(", "));
                println!("  Stop words: {}", config.stop_words.words.len());
                println!(
                    "  Max token length: {}",
                    config.tokenizer.max_token_length
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(CliError::ConfigError(e.to_string()).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let file = config_file(
            r#"
[metadata]
name = "valid"

[filters]
stop_words = false
"#,
        );

        let args = ValidateArgs {
            config: file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_empty_stop_word() {
        let file = config_file(
            r#"
[metadata]
name = "broken"

[stop_words]
words = ["et", ""]
"#,
        );

        let args = ValidateArgs {
            config: file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
        assert!(err.to_string().contains("stop_words.words[1] is empty"));
    }

    #[test]
    fn test_validate_bad_pattern() {
        let file = config_file(
            r#"
[metadata]
name = "broken"

[tokenizer]
pattern = "(unclosed"
"#,
        );

        let args = ValidateArgs {
            config: file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_nonexistent_file() {
        let args = ValidateArgs {
            config: PathBuf::from("/nonexistent/config.toml"),
        };
        assert!(args.execute().is_err());
    }
}
