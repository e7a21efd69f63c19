//! Repair configuration
//!
//! Built once at startup and passed by reference to every scan.

use crate::error::RepairError;
use crate::Result;
use chrono::{Local, NaiveDate, TimeZone};
use filetime::FileTime;
use std::path::PathBuf;
use walker::FilePattern;

/// Files last written before this year are considered corrupt
pub const MIN_VALID_YEAR: i32 = 2000;

/// Settings shared by every scan in one run
#[derive(Debug, Clone)]
pub struct RepairConfig {
    /// Glob applied to file names
    pub pattern: FilePattern,

    /// First year accepted as a plausible modification time
    pub min_valid_year: i32,

    /// Date written to invalid files, at local midnight
    pub target_date: NaiveDate,

    /// Directories the walk never enters, such as pseudo filesystem mounts
    pub excluded_dirs: Vec<PathBuf>,
}

impl RepairConfig {
    /// Default configuration with a custom search pattern
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: FilePattern::new(pattern)?,
            ..Self::default()
        })
    }

    /// Resolve the target date to the instant written to disk
    pub fn target_time(&self) -> Result<FileTime> {
        let midnight = self.target_date.and_hms_opt(0, 0, 0);
        let local = midnight.and_then(|naive| Local.from_local_datetime(&naive).earliest());

        match local {
            Some(dt) => Ok(FileTime::from_unix_time(
                dt.timestamp(),
                dt.timestamp_subsec_nanos(),
            )),
            None => Err(RepairError::TargetDate(self.target_date)),
        }
    }
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            pattern: FilePattern::default(),
            min_valid_year: MIN_VALID_YEAR,
            target_date: NaiveDate::from_ymd_opt(MIN_VALID_YEAR, 1, 1)
                .expect("January 1st is always a valid date"),
            excluded_dirs: Vec::new(),
        }
    }
}
