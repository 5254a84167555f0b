//! Per-run orchestration.
//!
//! A session holds the immutable configuration for one invocation and
//! applies a vault transformation to every candidate file in turn. One
//! failing file never aborts the rest; outcomes are collected into a
//! summary and failures become a non-zero exit at the end of the run.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::selector::Selector;
use crate::core::vault::{Mode, VaultTool};
use crate::error::{Error, Result};

/// What happened to a single candidate file.
#[derive(Debug)]
pub enum Outcome {
    /// Transformed by the external tool.
    Done,
    /// Already in the target state; not an error.
    Skipped,
    /// Reported only; preview never mutates.
    Previewed,
    /// The tool or the filesystem rejected the file. The run continues.
    Failed(String),
}

/// Per-file record of one pass, in processing order.
#[derive(Debug)]
pub struct FileReport {
    pub file: PathBuf,
    pub outcome: Outcome,
}

/// Collected outcomes of one pass over the candidate files.
#[derive(Debug, Default)]
pub struct Summary {
    pub reports: Vec<FileReport>,
}

impl Summary {
    /// Files actually transformed, relative to the session root.
    pub fn done(&self) -> Vec<&Path> {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Done))
            .map(|r| r.file.as_path())
            .collect()
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    pub fn previewed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Previewed))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }

    /// Convert collected failures into the run's final result.
    pub fn into_result(self) -> Result<()> {
        match self.failed() {
            0 => Ok(()),
            failed => Err(Error::Partial { failed }),
        }
    }
}

/// Immutable configuration for one invocation.
pub struct Session {
    root: PathBuf,
    selector: Selector,
    preview: bool,
}

impl Session {
    pub fn new(root: PathBuf, recursive: bool, filetypes: &[String], preview: bool) -> Self {
        Self {
            root,
            selector: Selector::new(recursive, filetypes),
            preview,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn preview(&self) -> bool {
        self.preview
    }

    /// Apply `mode` to every candidate file under the session root.
    ///
    /// Files already in the target state are skipped. In preview mode the
    /// intended action is recorded and nothing is mutated.
    pub fn apply_all(&self, tool: &VaultTool, mode: Mode, password: &str) -> Result<Summary> {
        let files = self.selector.list_files(&self.root)?;
        debug!("{} pass over {} file(s)", mode, files.len());

        let mut summary = Summary::default();
        for file in files {
            let outcome = self.apply(tool, &file, mode, password);
            summary.reports.push(FileReport { file, outcome });
        }
        Ok(summary)
    }

    /// Apply `mode` to a single file.
    fn apply(&self, tool: &VaultTool, file: &Path, mode: Mode, password: &str) -> Outcome {
        let target_state = mode == Mode::Encrypt;
        match VaultTool::is_encrypted(&self.root.join(file)) {
            Ok(encrypted) if encrypted == target_state => return Outcome::Skipped,
            Ok(_) => {}
            Err(e) => {
                warn!("cannot read {}: {}", file.display(), e);
                return Outcome::Failed(format!("cannot read {}: {}", file.display(), e));
            }
        }

        if self.preview {
            return Outcome::Previewed;
        }

        match tool.run(&self.root, file, mode, password) {
            Ok(()) => Outcome::Done,
            Err(e) => {
                warn!("failed to {} {}: {}", mode, file.display(), e);
                Outcome::Failed(e.to_string())
            }
        }
    }
}
