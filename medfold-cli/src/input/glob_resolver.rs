//! File pattern resolution using glob

use super::InputSource;
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;

/// Pattern that selects standard input
pub const STDIN_PATTERN: &str = "-";

/// Resolve file patterns to input sources
///
/// Matching files are sorted and deduplicated. `-` selects standard input,
/// which is read once and listed first.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut files = Vec::new();
    let mut use_stdin = false;

    for pattern in patterns {
        if pattern == STDIN_PATTERN {
            use_stdin = true;
            continue;
        }

        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() && !use_stdin {
        return Err(CliError::NoFilesFound(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();
    log::debug!(
        "Resolved {} file(s){}",
        files.len(),
        if use_stdin { " plus standard input" } else { "" }
    );

    let mut sources = Vec::with_capacity(files.len() + usize::from(use_stdin));
    if use_stdin {
        sources.push(InputSource::Stdin);
    }
    sources.extend(files.into_iter().map(InputSource::File));

    Ok(sources)
}
