use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("ansible-vault not found on PATH")]
    ToolNotFound(#[from] which::Error),

    #[error("ansible-vault failed on {}: {detail}", .file.display())]
    ExternalTool { file: PathBuf, detail: String },

    #[error("{failed} file(s) failed")]
    Partial { failed: usize },

    #[error("aborted: confirmation wait interrupted, files remain decrypted")]
    Aborted,

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
