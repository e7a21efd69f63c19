//! File name patterns for directory listings
//!
//! A pattern is matched against the bare file name of a direct child,
//! never against the full path. Matching ignores case so that `*.dll`
//! also selects `KERNEL32.DLL`.

use glob::{MatchOptions, Pattern};
use std::fmt;
use std::path::Path;

/// Pattern used when none is given
pub const DEFAULT_PATTERN: &str = "*.dll";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Error raised when a glob pattern cannot be parsed
#[derive(Debug, thiserror::Error)]
#[error("invalid file pattern '{pattern}': {source}")]
pub struct PatternError {
    pattern: String,
    #[source]
    source: glob::PatternError,
}

/// Compiled glob applied to file names during a walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePattern {
    inner: Pattern,
}

impl FilePattern {
    /// Compile a glob such as `*.dll` or `lib?.so`
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let inner = Pattern::new(pattern).map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { inner })
    }

    /// Check a file name (not a full path) against the pattern
    ///
    /// Names that are not valid UTF-8 never match.
    pub fn matches(&self, file_name: &Path) -> bool {
        self.inner.matches_path_with(file_name, MATCH_OPTIONS)
    }

    /// Pattern text as given
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }
}

impl Default for FilePattern {
    fn default() -> Self {
        Self {
            inner: Pattern::new(DEFAULT_PATTERN).expect("default pattern is valid"),
        }
    }
}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
