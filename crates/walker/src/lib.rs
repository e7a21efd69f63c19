//! Resilient directory walking for datefix
//!
//! This crate provides a lazy file walk that:
//! - Matches direct children against a case-insensitive glob
//! - Lists a directory's files before descending into its subdirectories
//! - Skips entries it cannot read instead of failing
//! - Releases a directory's handle before walking its subdirectories

pub mod pattern;
pub mod walk;

// Re-exports
pub use pattern::{FilePattern, PatternError, DEFAULT_PATTERN};
pub use walk::{walk, AccessibleFiles};
