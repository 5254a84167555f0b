//! Temporary command.
//!
//! Decrypts the tree for a working session, blocks until the user presses
//! Enter, then re-encrypts. If the process dies during the session the
//! plaintext stays on disk; the command warns about this window up front
//! because there is no automatic recovery.

use std::io::{self, BufRead};

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{decrypt, output, prompt, report, RunArgs};
use crate::core::gitignore;
use crate::core::vault::{Mode, VaultTool};
use crate::error::{Error, Result};

/// Run a decrypt-edit-reencrypt session.
pub fn execute(args: RunArgs, verbose: bool) -> Result<()> {
    let tool = VaultTool::locate()?;
    let session = args.into_session();

    if session.preview() {
        // Both phases are reported; nothing is mutated and nothing blocks
        let password = Zeroizing::new(String::new());
        let down = session.apply_all(&tool, Mode::Decrypt, &password)?;
        report(Mode::Decrypt, &down, true, verbose);
        let up = session.apply_all(&tool, Mode::Encrypt, &password)?;
        report(Mode::Encrypt, &up, true, verbose);
        return Ok(());
    }

    let password = prompt::vault_password(false)?;

    info!("temporary session over {}", session.root().display());
    let down = session.apply_all(&tool, Mode::Decrypt, &password)?;
    gitignore::ensure(session.root(), &decrypt::ignore_entries(&down))?;
    report(Mode::Decrypt, &down, false, verbose);

    output::warn("files are decrypted on disk; if this process is killed they stay decrypted");
    wait_for_enter()?;

    let up = session.apply_all(&tool, Mode::Encrypt, &password)?;
    report(Mode::Encrypt, &up, false, verbose);

    let failed = down.failed() + up.failed();
    if failed > 0 {
        return Err(Error::Partial { failed });
    }
    Ok(())
}

/// Block until the user presses Enter.
///
/// EOF or a read error counts as an abort: the decrypt phase has already
/// run, so the caller surfaces the residual plaintext state to the user.
fn wait_for_enter() -> Result<()> {
    output::hint("press Enter to re-encrypt files");
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => Err(Error::Aborted),
        Ok(_) => Ok(()),
    }
}
