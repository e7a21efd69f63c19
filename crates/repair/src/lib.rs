//! Timestamp repair for datefix
//!
//! This crate provides:
//! - Repair configuration (pattern, minimum year, target date)
//! - Detection of files with implausibly old modification times
//! - The repair pass, which keeps going when individual writes fail
//! - A `Reporter` trait for surfacing progress to the caller

pub mod config;
pub mod driver;
pub mod error;
pub mod report;
pub mod timestamp;

// Re-exports
pub use config::{RepairConfig, MIN_VALID_YEAR};
pub use driver::{find_invalid, repair, scan_and_fix};
pub use error::RepairError;
pub use report::{RepairSummary, Reporter, ScanResult};

/// Result type for repair operations
pub type Result<T> = std::result::Result<T, RepairError>;
