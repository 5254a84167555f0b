//! Constants used throughout vaultwalk.
//!
//! Centralizes magic strings and configuration values.

/// External encryption tool invoked per file.
pub const VAULT_BIN: &str = "ansible-vault";

/// Header marker ansible-vault writes at the start of encrypted files.
pub const VAULT_HEADER: &str = "$ANSIBLE_VAULT;";

/// Version-control ignore file patched with decrypted-file patterns.
pub const IGNORE_FILE: &str = ".gitignore";

/// Version-control metadata directory skipped during traversal.
pub const VCS_DIR: &str = ".git";
