//! Vault password prompting.
//!
//! Interactive prompts use hidden input; piped stdin falls back to reading
//! a single line so the tool stays scriptable.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Password;
use zeroize::Zeroizing;

use crate::error::Result;

/// Prompt for the vault password.
///
/// With `confirm` set the password is entered twice and must match, which
/// is what encrypting new ciphertext wants. The returned buffer is wiped
/// from memory when dropped.
pub fn vault_password(confirm: bool) -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        // Read from stdin (piped input)
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
        return Ok(Zeroizing::new(trimmed));
    }

    let mut prompt = Password::new().with_prompt("Enter Ansible Vault password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    Ok(Zeroizing::new(prompt.interact()?))
}
