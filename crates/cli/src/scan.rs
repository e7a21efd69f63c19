//! Scan one root, or every mounted drive

use crate::console::ConsoleReporter;
use crate::drives;
use crate::util;
use anyhow::{Context, Result};
use repair::{RepairConfig, RepairSummary};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Entry point for a `datefix` run
///
/// `root` is the raw positional argument; when it is missing or blank
/// every mounted drive is scanned in turn.
pub fn run(root: Option<&str>, pattern: &str) -> Result<()> {
    let config = RepairConfig::with_pattern(pattern).context("Failed to parse search pattern")?;
    // Surface a bad target date before the first drive is touched
    config.target_time()?;

    let mut reporter = ConsoleReporter::stdout();

    match util::resolve_root(root) {
        Some(root) => {
            scan_root(&root, &config, &mut reporter)?;
        }
        None => {
            let mounted = drives::mounted_roots();
            info!(
                "Scanning {} mounted drive(s), excluding {} pseudo filesystem(s)",
                mounted.roots.len(),
                mounted.excluded.len()
            );
            let config = RepairConfig {
                excluded_dirs: mounted.excluded,
                ..config
            };

            for root in mounted.roots {
                reporter.line(&format!("Scanning {}", root.display()));
                scan_root(&root, &config, &mut reporter)?;
                reporter.line(&format!("{}\nCompleted.", util::separator()));
            }
        }
    }

    Ok(())
}

/// Run the repair pass against one root, printing progress as it goes
pub fn scan_root<W: Write>(
    root: &Path,
    config: &RepairConfig,
    reporter: &mut ConsoleReporter<W>,
) -> Result<RepairSummary> {
    let summary = repair::scan_and_fix(root, config, reporter)
        .with_context(|| format!("Failed to scan {}", root.display()))?;
    Ok(summary)
}
