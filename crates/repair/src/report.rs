//! Reporting sink for scan progress and outcomes

use crate::error::RepairError;
use std::path::{Path, PathBuf};

/// Receives progress events from a scan
///
/// Events for one root arrive in order: `scan_started`, `invalid_found`,
/// then one `progress` per invalid file (each possibly followed by
/// `repair_failed`), and finally `completed`.
pub trait Reporter {
    /// A scan of `root` is about to begin
    fn scan_started(&mut self, root: &Path);

    /// The walk finished and `count` files need repair
    fn invalid_found(&mut self, count: usize);

    /// About to repair file `index` (1-based) of `total`
    fn progress(&mut self, index: usize, total: usize, path: &Path);

    /// Writing the new timestamp to `path` failed
    fn repair_failed(&mut self, path: &Path, error: &RepairError);

    /// All repairs for the root have been attempted
    fn completed(&mut self, summary: &RepairSummary);
}

/// Files found invalid by a walk, in discovery order
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Files whose modification year is too early
    pub invalid: Vec<PathBuf>,
    /// Matching files examined
    pub scanned: usize,
    /// Entries the walker or the timestamp read could not access
    pub skipped: usize,
}

/// Outcome of one scan-and-repair pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairSummary {
    pub scanned: usize,
    pub invalid: usize,
    pub repaired: usize,
    pub failed: usize,
    pub skipped: usize,
}
