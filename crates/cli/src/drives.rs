//! Mounted volume discovery
//!
//! Used when no root is given on the command line. Pseudo filesystems are
//! never scanned: they are dropped from the root list and handed back as
//! exclusions so the walk of a parent mount does not descend into them.
//! A mount nested inside another selected mount is dropped because the
//! walk of its parent already covers it.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use sysinfo::Disks;
use tracing::debug;

/// Well-known kernel and runtime trees, excluded even when not listed as mounts
#[cfg(unix)]
const PSEUDO_DIRS: &[&str] = &["/proc", "/sys", "/dev", "/run", "/snap"];

#[cfg(not(unix))]
const PSEUDO_DIRS: &[&str] = &[];

/// Volumes to scan and directories to keep out of the walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountedRoots {
    pub roots: Vec<PathBuf>,
    pub excluded: Vec<PathBuf>,
}

/// Root directories of every mounted volume worth scanning
pub fn mounted_roots() -> MountedRoots {
    let disks = Disks::new_with_refreshed_list();
    let mounts = disks
        .list()
        .iter()
        .map(|disk| {
            (
                disk.mount_point().to_path_buf(),
                disk.file_system().to_string_lossy().into_owned(),
            )
        })
        .collect();

    let mut mounted = classify(mounts);
    if mounted.roots.is_empty() && cfg!(unix) {
        // Containers often expose only pseudo mounts
        mounted.roots.push(PathBuf::from("/"));
    }
    mounted
}

/// Split `(mount point, filesystem type)` pairs into roots and exclusions
pub fn classify(mounts: Vec<(PathBuf, String)>) -> MountedRoots {
    let mut roots = BTreeSet::new();
    let mut excluded: BTreeSet<PathBuf> = PSEUDO_DIRS.iter().map(PathBuf::from).collect();

    for (mount_point, fs_type) in mounts {
        if is_pseudo_filesystem(&mount_point, &fs_type) {
            debug!("Skipping {} ({})", mount_point.display(), fs_type);
            excluded.insert(mount_point);
        } else {
            roots.insert(mount_point);
        }
    }

    MountedRoots {
        roots: collapse_nested(roots),
        excluded: excluded.into_iter().collect(),
    }
}

/// Drop roots that live under another root in the set
///
/// Relies on `BTreeSet` ordering: a parent sorts before its children.
pub fn collapse_nested(roots: BTreeSet<PathBuf>) -> Vec<PathBuf> {
    let mut kept: Vec<PathBuf> = Vec::new();
    for root in roots {
        if kept.iter().any(|parent| root.starts_with(parent)) {
            continue;
        }
        kept.push(root);
    }
    kept
}

/// Check whether a mount holds kernel or runtime state rather than files
fn is_pseudo_filesystem(mount_point: &Path, fs_type: &str) -> bool {
    if PSEUDO_DIRS.iter().any(|dir| mount_point.starts_with(dir)) {
        return true;
    }

    matches!(
        fs_type.to_lowercase().as_str(),
        "proc"
            | "procfs"
            | "sysfs"
            | "devfs"
            | "devtmpfs"
            | "devpts"
            | "tmpfs"
            | "squashfs"
            | "autofs"
            | "cgroup"
            | "cgroup2"
            | "debugfs"
            | "tracefs"
            | "securityfs"
            | "configfs"
            | "fusectl"
            | "mqueue"
            | "pstore"
            | "bpf"
            | "hugetlbfs"
            | "binfmt_misc"
    )
}
