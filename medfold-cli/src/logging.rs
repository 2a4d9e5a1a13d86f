//! Logger initialization

/// Map the `-v` count to an `env_logger` filter
pub fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` still takes precedence over the verbosity flag. Quiet mode
/// installs no logger at all.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = verbosity_level(verbose);
    // A second init (tests, embedding) is harmless.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(verbosity_level(0), "warn");
        assert_eq!(verbosity_level(1), "info");
        assert_eq!(verbosity_level(2), "debug");
        assert_eq!(verbosity_level(3), "trace");
        assert_eq!(verbosity_level(200), "trace");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(1, false);
        init_logging(2, false);
        init_logging(0, true);
    }
}
