//! Vaultwalk - bulk Ansible Vault operations for directory trees.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── encrypt       # Encrypt a tree
//! │   ├── decrypt       # Decrypt a tree
//! │   ├── temporary     # Decrypt, wait for Enter, re-encrypt
//! │   ├── prompt        # Vault password prompting
//! │   ├── output        # Terminal output helpers
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── selector      # Candidate file enumeration
//!     ├── vault         # ansible-vault invocation + state probing
//!     ├── session       # Per-run orchestration and summary
//!     └── gitignore     # .gitignore entry management
//! ```
//!
//! # Features
//!
//! - Encrypt or decrypt every matching file under a directory
//! - Temporary sessions: decrypt for editing, re-encrypt on Enter
//! - Extension filtering and recursive traversal
//! - Keeps decrypted artifacts out of version control via .gitignore

pub mod cli;
pub mod core;
pub mod error;
