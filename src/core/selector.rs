//! Candidate file enumeration.
//!
//! Walks a directory tree and produces the ordered set of file paths a run
//! will act on, relative to the root. Version-control metadata and the
//! ignore file itself are never candidates.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants::{IGNORE_FILE, VCS_DIR};
use crate::error::Result;

/// File selection criteria for a run.
#[derive(Debug, Clone)]
pub struct Selector {
    recursive: bool,
    /// Lowercased extension suffixes, e.g. ".yml". Empty means all files.
    filetypes: Vec<String>,
}

impl Selector {
    /// Create a selector.
    ///
    /// Extensions are matched case-insensitively as filename suffixes;
    /// a missing leading dot is added (`yml` and `.yml` are equivalent).
    pub fn new(recursive: bool, filetypes: &[String]) -> Self {
        let filetypes = filetypes
            .iter()
            .map(|ft| {
                let ft = ft.to_lowercase();
                if ft.starts_with('.') {
                    ft
                } else {
                    format!(".{}", ft)
                }
            })
            .collect();
        Self {
            recursive,
            filetypes,
        }
    }

    /// List candidate files under `root`, relative to `root`, in sorted order.
    ///
    /// Zero matches is a valid, silent outcome.
    pub fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(crate::error::Error::NotADirectory(root.to_path_buf()));
        }
        let mut files = Vec::new();
        self.walk(root, Path::new(""), &mut files)?;
        debug!("selected {} candidate file(s)", files.len());
        Ok(files)
    }

    fn walk(&self, dir: &Path, rel: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<std::io::Result<_>>()?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let name = entry.file_name();
            let name_str = name.to_string_lossy();
            let file_type = entry.file_type()?;

            if file_type.is_dir() {
                if self.recursive && name_str != VCS_DIR {
                    self.walk(&entry.path(), &rel.join(&name), files)?;
                }
                continue;
            }
            if !file_type.is_file() {
                // Symlinks and other special entries are not candidates
                continue;
            }
            if self.matches(&name_str) {
                files.push(rel.join(&name));
            }
        }
        Ok(())
    }

    /// Whether a file name passes the exclusion and extension checks.
    fn matches(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        if lower == IGNORE_FILE {
            return false;
        }
        if self.filetypes.is_empty() {
            return true;
        }
        self.filetypes.iter().any(|ft| lower.ends_with(ft.as_str()))
    }
}
