//! Repair errors
//!
//! `Pattern` and `TargetDate` stop a run before it starts. `SetModified`
//! covers a single file and is handed to the reporter while the run goes on.

use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;
use walker::PatternError;

/// Repair error
#[derive(Debug, thiserror::Error)]
pub enum RepairError {
    /// Search pattern could not be compiled
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Target date has no valid local midnight (e.g. skipped by a DST jump)
    #[error("target date {0} cannot be represented in local time")]
    TargetDate(NaiveDate),

    /// Writing the new modified time failed
    #[error("cannot set modified time of {}: {source}", path.display())]
    SetModified {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
