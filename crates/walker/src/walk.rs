//! Tolerant depth-first file walk
//!
//! Lists the files of one directory at a time and only then descends into
//! its subdirectories. Any entry that cannot be read is skipped and counted;
//! nothing that happens below the root stops the walk.

use crate::pattern::FilePattern;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Walk `root` and yield every accessible file whose name matches `pattern`
///
/// A root that is itself a file is yielded as-is without checking the
/// pattern. A root that does not exist yields nothing. With `recurse` set,
/// subdirectories are visited depth-first after the files of their parent.
pub fn walk(root: &Path, pattern: &FilePattern, recurse: bool) -> AccessibleFiles {
    let mut files = AccessibleFiles {
        pattern: pattern.clone(),
        recurse,
        root_file: None,
        listing: None,
        pending: Vec::new(),
        excluded: HashSet::new(),
        skipped: 0,
    };

    if root.is_file() {
        files.root_file = Some(root.to_path_buf());
    } else if root.is_dir() {
        files.pending.push(root.to_path_buf());
    } else {
        debug!("Root {} is neither a file nor a directory", root.display());
    }

    files
}

/// Lazy, single-pass sequence of matching file paths
///
/// Only the directory being listed holds a handle. Its subdirectories are
/// buffered as paths and walked once its files are exhausted, so open
/// handles do not accumulate with depth.
pub struct AccessibleFiles {
    pattern: FilePattern,
    recurse: bool,

    /// Set when the root is a plain file
    root_file: Option<PathBuf>,

    /// Directory currently being listed
    listing: Option<Listing>,

    /// Directories not yet listed; the next one to visit is last
    pending: Vec<PathBuf>,

    /// Subdirectories that are never entered
    excluded: HashSet<PathBuf>,

    /// Entries dropped because they could not be read
    skipped: usize,
}

impl AccessibleFiles {
    /// Never descend into the given directories
    ///
    /// Paths are compared as the walk produces them (the root joined with
    /// each child name). The root itself is always listed.
    pub fn excluding<I>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.excluded.extend(dirs);
        self
    }

    /// Number of entries skipped so far because they could not be read
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn skip(&mut self, err: &walkdir::Error) {
        self.skipped += 1;
        debug!("Skipping unreadable entry: {}", err);
    }
}

struct Listing {
    dir: PathBuf,
    entries: walkdir::IntoIter,
    subdirs: Vec<PathBuf>,
}

impl Listing {
    /// Lists direct children only; a directory that cannot be opened
    /// surfaces as a single error entry from the iterator.
    fn open(dir: PathBuf) -> Self {
        let entries = WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter();

        Self {
            dir,
            entries,
            subdirs: Vec::new(),
        }
    }
}

impl Iterator for AccessibleFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        if let Some(file) = self.root_file.take() {
            return Some(file);
        }

        loop {
            let Some(listing) = self.listing.as_mut() else {
                let dir = self.pending.pop()?;
                trace!("Listing {}", dir.display());
                self.listing = Some(Listing::open(dir));
                continue;
            };

            let entry = match listing.entries.next() {
                Some(Ok(entry)) => entry,
                Some(Err(err)) => {
                    self.skip(&err);
                    continue;
                }
                None => {
                    let done = self.listing.take()?;
                    trace!(
                        "Finished {} ({} subdirectories)",
                        done.dir.display(),
                        done.subdirs.len()
                    );
                    // Reverse so the first listed subdirectory is visited first
                    self.pending.extend(done.subdirs.into_iter().rev());
                    continue;
                }
            };

            let file_type = entry.file_type();

            if file_type.is_file() {
                if self.pattern.matches(Path::new(entry.file_name())) {
                    return Some(entry.into_path());
                }
            } else if file_type.is_dir() && self.recurse {
                if entry.path_is_symlink() {
                    debug!("Not following directory link {}", entry.path().display());
                } else if self.excluded.contains(entry.path()) {
                    debug!("Not entering excluded directory {}", entry.path().display());
                } else {
                    listing.subdirs.push(entry.into_path());
                }
            }
        }
    }
}
