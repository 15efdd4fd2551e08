//! Resolution of input paths into the files to lint.
//!
//! A missing path is reported as such, a file is taken as-is, and a directory
//! is walked recursively. Hidden entries (names starting with `.`) are pruned
//! during the walk, together with files whose extension is not allowed.
//!
//! A hidden file named explicitly on the command line is not pruned: only the
//! directory walk applies the hidden-entry rule.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::filter::{ExtensionFilter, extension_of};

/// Outcome of resolving one input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    Missing(PathBuf),
    SingleFile(PathBuf),
    DirectoryExpansion(Vec<PathBuf>),
}

/// Classifies input paths and expands directories.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    filter: ExtensionFilter,
}

impl PathResolver {
    pub fn new(filter: ExtensionFilter) -> Self {
        Self { filter }
    }

    pub fn resolve(&self, input: impl AsRef<Path>) -> ResolvedTarget {
        let path = input.as_ref();

        let Ok(metadata) = fs::metadata(path) else {
            debug!("{} does not exist", path.display());
            return ResolvedTarget::Missing(path.to_path_buf());
        };

        if !metadata.is_dir() {
            if is_hidden_name(path) {
                debug!("Linting explicitly named hidden file {}", path.display());
            }
            return ResolvedTarget::SingleFile(path.to_path_buf());
        }

        let files = self.discover(path);
        info!("Discovered {} files in {}", files.len(), path.display());
        ResolvedTarget::DirectoryExpansion(files)
    }

    /// Walks `root` and returns every visible file with an allowed extension.
    fn discover(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    None
                }
            })
            .map(DirEntry::into_path)
            .filter(|path| path.is_file() && self.filter.is_allowed(&extension_of(path)))
            .collect()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn is_hidden_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
