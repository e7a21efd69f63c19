//! Scan a tree for implausible modification times and rewrite them

use crate::config::RepairConfig;
use crate::error::RepairError;
use crate::report::{RepairSummary, Reporter, ScanResult};
use crate::timestamp;
use crate::Result;
use filetime::FileTime;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Scan `root` and repair every invalid file found
///
/// Fails only if the configured target date cannot be resolved, which is
/// checked before anything on disk is touched.
pub fn scan_and_fix(
    root: &Path,
    config: &RepairConfig,
    reporter: &mut dyn Reporter,
) -> Result<RepairSummary> {
    let target = config.target_time()?;

    reporter.scan_started(root);
    let scan = find_invalid(root, config);
    reporter.invalid_found(scan.invalid.len());

    let (repaired, failed) = apply(&scan.invalid, target, reporter);

    let summary = RepairSummary {
        scanned: scan.scanned,
        invalid: scan.invalid.len(),
        repaired,
        failed,
        skipped: scan.skipped,
    };

    info!(
        "Finished {}: {} scanned, {} invalid, {} repaired, {} failed, {} skipped",
        root.display(),
        summary.scanned,
        summary.invalid,
        summary.repaired,
        summary.failed,
        summary.skipped
    );

    reporter.completed(&summary);
    Ok(summary)
}

/// Walk `root` and collect matching files written before the minimum year
pub fn find_invalid(root: &Path, config: &RepairConfig) -> ScanResult {
    let mut files = walker::walk(root, &config.pattern, true)
        .excluding(config.excluded_dirs.iter().cloned());
    let mut result = ScanResult::default();

    for path in files.by_ref() {
        result.scanned += 1;

        match timestamp::is_invalid(&path, config.min_valid_year) {
            Ok(true) => {
                debug!("Invalid modified time: {}", path.display());
                result.invalid.push(path);
            }
            Ok(false) => {}
            Err(e) => {
                warn!("Cannot read modified time of {}: {}", path.display(), e);
                result.skipped += 1;
            }
        }
    }

    result.skipped += files.skipped();
    result
}

/// Rewrite the modification time of each file, continuing past failures
///
/// Returns the number of files repaired and the number that failed.
pub fn repair(
    files: &[PathBuf],
    config: &RepairConfig,
    reporter: &mut dyn Reporter,
) -> Result<(usize, usize)> {
    let target = config.target_time()?;
    Ok(apply(files, target, reporter))
}

fn apply(files: &[PathBuf], target: FileTime, reporter: &mut dyn Reporter) -> (usize, usize) {
    let total = files.len();
    let mut repaired = 0;
    let mut failed = 0;

    for (i, path) in files.iter().enumerate() {
        reporter.progress(i + 1, total, path);

        let written = timestamp::set_modified(path, target).map_err(|source| {
            RepairError::SetModified {
                path: path.clone(),
                source,
            }
        });

        match written {
            Ok(()) => repaired += 1,
            Err(e) => {
                warn!("{}", e);
                reporter.repair_failed(path, &e);
                failed += 1;
            }
        }
    }

    (repaired, failed)
}
