//! Reading and writing last-modified times

use chrono::{Datelike, Local, TimeZone};
use filetime::FileTime;
use std::io;
use std::path::Path;

/// Calendar year of an instant in the local timezone
///
/// Returns `None` when the instant is outside the range chrono can
/// represent, which happens with badly corrupted metadata.
pub fn year_of(time: FileTime) -> Option<i32> {
    Local
        .timestamp_opt(time.unix_seconds(), time.nanoseconds())
        .earliest()
        .map(|dt| dt.year())
}

/// Last-modified time of a file, following links
pub fn modified(path: &Path) -> io::Result<FileTime> {
    let metadata = std::fs::metadata(path)?;
    Ok(FileTime::from_last_modification_time(&metadata))
}

/// Check whether a file was last written before `min_year`
pub fn is_invalid(path: &Path, min_year: i32) -> io::Result<bool> {
    is_before(modified(path)?, min_year)
}

/// Check whether `time` falls in a year before `min_year`
///
/// An unrepresentable time before the epoch is always too early. One after
/// the epoch cannot be judged and is returned as an error.
pub fn is_before(time: FileTime, min_year: i32) -> io::Result<bool> {
    match year_of(time) {
        Some(year) => Ok(year < min_year),
        None if time.unix_seconds() < 0 => Ok(true),
        None => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("modified time {}s is out of range", time.unix_seconds()),
        )),
    }
}

/// Overwrite the last-modified time, leaving the access time alone
pub fn set_modified(path: &Path, time: FileTime) -> io::Result<()> {
    filetime::set_file_mtime(path, time)
}
