use anyhow::Result;
use clap::Parser;
use medfold_cli::commands::Commands;
use medfold_cli::logging::init_logging;

/// Accent and diacritic folding for medieval Latin and Greek text
#[derive(Debug, Parser)]
#[command(name = "medfold", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    log::debug!("Arguments: {:?}", cli);
    cli.command.execute(cli.quiet)
}
