//! Shared utilities for the CLI

use std::path::{Path, PathBuf};

/// Interpret the positional root argument
///
/// Returns `None` when the argument is missing or only whitespace, which
/// means every mounted drive should be scanned.
pub fn resolve_root(arg: Option<&str>) -> Option<PathBuf> {
    let arg = arg?;
    if arg.trim().is_empty() {
        return None;
    }
    Some(make_absolute(Path::new(arg)))
}

/// Anchor a relative path at the current directory
///
/// Falls back to the path unchanged if the current directory is unknown.
pub fn make_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Horizontal rule printed between drives
pub fn separator() -> String {
    "-".repeat(30)
}
