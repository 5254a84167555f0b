//! Decrypt command.
//!
//! Decrypts every matching vault-encrypted file under the directory and
//! records the resulting plaintext paths in .gitignore.

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{prompt, report, RunArgs};
use crate::core::gitignore;
use crate::core::session::Summary;
use crate::core::vault::{Mode, VaultTool};
use crate::error::Result;

/// Decrypt a tree.
pub fn execute(args: RunArgs, verbose: bool) -> Result<()> {
    let tool = VaultTool::locate()?;
    let session = args.into_session();

    let password = if session.preview() {
        Zeroizing::new(String::new())
    } else {
        prompt::vault_password(false)?
    };

    info!("decrypt pass over {}", session.root().display());
    let summary = session.apply_all(&tool, Mode::Decrypt, &password)?;

    if !session.preview() {
        gitignore::ensure(session.root(), &ignore_entries(&summary))?;
    }
    report(Mode::Decrypt, &summary, session.preview(), verbose);

    summary.into_result()
}

/// Ignore-file patterns for the plaintext files a pass produced.
pub(crate) fn ignore_entries(summary: &Summary) -> Vec<String> {
    summary
        .done()
        .iter()
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .collect()
}
