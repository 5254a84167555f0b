//! .gitignore entry management.
//!
//! Keeps decrypted artifacts out of version control by ensuring their
//! patterns exist as literal lines in the ignore file.

use std::path::Path;

use tracing::debug;

use crate::core::constants::IGNORE_FILE;
use crate::error::Result;

/// Ensure each entry exists as a literal line in `<root>/.gitignore`.
///
/// Idempotent: entries already present are left alone, new entries are
/// appended in first-appearance order. The file is only rewritten when
/// something changed.
pub fn ensure(root: &Path, entries: &[String]) -> Result<()> {
    if entries.is_empty() {
        return Ok(());
    }

    let gitignore = root.join(IGNORE_FILE);

    let existing = if gitignore.exists() {
        std::fs::read_to_string(&gitignore)?
    } else {
        String::new()
    };

    let mut updated = existing.clone();
    for entry in entries {
        if !updated.lines().any(|l| l.trim() == entry.as_str()) {
            if !updated.is_empty() && !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(entry);
            updated.push('\n');
        }
    }

    if updated != existing {
        debug!("updating {}", gitignore.display());
        std::fs::write(&gitignore, updated)?;
    }

    Ok(())
}
