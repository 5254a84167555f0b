//! Encrypt command.
//!
//! Encrypts every matching plaintext file under the directory.

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{prompt, report, RunArgs};
use crate::core::vault::{Mode, VaultTool};
use crate::error::Result;

/// Encrypt a tree.
pub fn execute(args: RunArgs, verbose: bool) -> Result<()> {
    let tool = VaultTool::locate()?;
    let session = args.into_session();

    // Preview never invokes the tool, so there is nothing to prompt for
    let password = if session.preview() {
        Zeroizing::new(String::new())
    } else {
        prompt::vault_password(true)?
    };

    info!("encrypt pass over {}", session.root().display());
    let summary = session.apply_all(&tool, Mode::Encrypt, &password)?;
    report(Mode::Encrypt, &summary, session.preview(), verbose);

    summary.into_result()
}
