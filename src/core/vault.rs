//! External ansible-vault invocation and encryption-state probing.
//!
//! The vault tool is an opaque collaborator: given a password and a file
//! path it transforms the file between plaintext and ciphertext. The only
//! thing vaultwalk reads from its output format is the header marker, to
//! decide whether a file is already in the target state.

use std::fmt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::core::constants::{VAULT_BIN, VAULT_HEADER};
use crate::error::{Error, Result};

/// Direction of a vault transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Subcommand passed to ansible-vault.
    pub fn as_arg(&self) -> &'static str {
        match self {
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
        }
    }

    /// The opposite direction, used by temporary sessions.
    pub fn reverse(&self) -> Self {
        match self {
            Self::Encrypt => Self::Decrypt,
            Self::Decrypt => Self::Encrypt,
        }
    }

    /// Present-participle label for progress output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Encrypt => "encrypting",
            Self::Decrypt => "decrypting",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

/// Handle to the external ansible-vault binary.
pub struct VaultTool {
    bin: PathBuf,
}

impl VaultTool {
    /// Locate ansible-vault on PATH.
    pub fn locate() -> Result<Self> {
        let bin = which::which(VAULT_BIN)?;
        debug!("using vault tool at {}", bin.display());
        Ok(Self { bin })
    }

    /// Build a handle to a known binary path. Used by tests.
    #[cfg(test)]
    pub fn at(bin: PathBuf) -> Self {
        Self { bin }
    }

    /// Whether the file carries the vault ciphertext header.
    pub fn is_encrypted(path: &Path) -> Result<bool> {
        let mut file = File::open(path)?;
        let mut buf = [0u8; VAULT_HEADER.len()];
        let mut read = 0;
        while read < buf.len() {
            match file.read(&mut buf[read..])? {
                0 => break,
                n => read += n,
            }
        }
        Ok(&buf[..read] == VAULT_HEADER.as_bytes())
    }

    /// Run one transformation on a file relative to `root`.
    ///
    /// The password is written to the child's stdin and handed to the tool
    /// via `--vault-password-file /dev/stdin`; it never touches disk.
    pub fn run(&self, root: &Path, file: &Path, mode: Mode, password: &str) -> Result<()> {
        trace!("{} {}", mode, file.display());

        let mut child = Command::new(&self.bin)
            .arg(mode.as_arg())
            .arg(file)
            .args(["--vault-password-file", "/dev/stdin"])
            .current_dir(root)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            // A tool that exits before reading its stdin closes the pipe;
            // let the exit status and stderr report that failure instead
            let wrote = stdin
                .write_all(password.as_bytes())
                .and_then(|_| stdin.write_all(b"\n"));
            if let Err(e) = wrote {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ExternalTool {
                file: file.to_path_buf(),
                detail: stderr.trim().to_string(),
            });
        }
        Ok(())
    }
}
