//! Filesystem existence prober - the only environment boundary

use std::path::{Path, PathBuf};

/// Answer whether a filesystem entry (file or directory) exists at `path`.
///
/// Read-only; never mutates the filesystem and never returns an error.
/// Conditions that prevent the lookup itself (permission denied on a parent,
/// I/O faults) count as "does not exist", so one inaccessible path cannot
/// abort a run.
pub fn probe(path: &Path) -> bool {
    path.exists()
}

/// Resolve a manifest target path against the run's root directory.
///
/// Absolute targets are taken as-is; relative targets are joined onto `root`.
pub fn resolve_target(root: &Path, target: &str) -> PathBuf {
    let target_path = Path::new(target);
    if target_path.is_absolute() {
        target_path.to_path_buf()
    } else {
        root.join(target_path)
    }
}
