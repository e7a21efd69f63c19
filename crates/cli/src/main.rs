//! Datefix CLI - datefix command

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Datefix - Reset implausibly old file modification dates
///
/// Walks ROOT (or every mounted drive) for files matching PATTERN whose
/// last-modified year is before 2000, and sets them to 2000-01-01.
#[derive(Parser)]
#[command(name = "datefix")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File or directory to scan (default: all mounted drives)
    root: Option<String>,

    /// Glob matched against file names, case-insensitively
    #[arg(short, long, default_value = walker::DEFAULT_PATTERN)]
    pattern: String,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    cli_lib::scan::run(cli.root.as_deref(), &cli.pattern)
}
