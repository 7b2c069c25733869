use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects every non-directory entry below `root`.
///
/// Symlinks are reported without being followed. Entries that cannot be
/// read, including whole directories, are skipped.
pub fn collect_files(root: impl AsRef<Path>) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root.as_ref()).min_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            files.push(entry.into_path());
        }
    }

    files
}
