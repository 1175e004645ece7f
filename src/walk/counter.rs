//! TreeCounter - walks a directory tree and counts matching files

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::config::WalkConfig;
use super::matcher::SuffixMatcher;

/// Result of a counting walk.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CountSummary {
    /// Normalized suffix the walk matched against
    pub suffix: String,
    /// Number of files whose name matched the suffix
    pub matched: usize,
    /// Total number of files seen
    pub files: usize,
    /// Total number of directories seen (excluding the root)
    pub directories: usize,
}

/// Tree counter that visits every entry under a root directory and counts
/// files whose name ends with the configured suffix.
///
/// Traversal uses an explicit stack of pending directories plus the lazy
/// per-directory `read_dir` iterator, so memory stays proportional to the
/// number of pending directories rather than the tree size. Unreadable
/// subdirectories are skipped and the walk continues over remaining work.
pub struct TreeCounter {
    matcher: SuffixMatcher,
}

impl TreeCounter {
    pub fn new(config: WalkConfig) -> Self {
        Self {
            matcher: SuffixMatcher::new(&config.suffix),
        }
    }

    /// Walk `root` and count matching files.
    ///
    /// Returns `None` if `root` is not an existing directory. A walk over a
    /// valid root always produces a summary; per-subdirectory I/O errors
    /// shrink the reachable set instead of failing the walk.
    pub fn count(&self, root: &Path) -> Option<CountSummary> {
        if !root.is_dir() {
            return None;
        }

        let mut summary = CountSummary {
            suffix: self.matcher.suffix().to_string(),
            ..Default::default()
        };
        let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let entries = match std::fs::read_dir(&dir) {
                Ok(e) => e,
                // Permission denied, or the directory vanished mid-walk:
                // skip this subtree and keep going
                Err(_) => continue,
            };

            for entry in entries.filter_map(|e| e.ok()) {
                let file_type = match entry.file_type() {
                    Ok(t) => t,
                    Err(_) => continue,
                };

                if file_type.is_dir() {
                    summary.directories += 1;
                    pending.push(entry.path());
                    continue;
                }

                // Symlinked directories are neither counted nor descended,
                // so link cycles cannot form
                if file_type.is_symlink() && entry.path().is_dir() {
                    continue;
                }

                summary.files += 1;
                if self.matcher.matches(&entry.file_name().to_string_lossy()) {
                    summary.matched += 1;
                }
            }
        }

        Some(summary)
    }
}
