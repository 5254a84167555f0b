//! Command-line interface.

pub mod completions;
pub mod decrypt;
pub mod encrypt;
pub mod output;
pub mod prompt;
pub mod temporary;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::session::{Outcome, Session, Summary};
use crate::core::vault::Mode;

/// Vaultwalk - bulk Ansible Vault operations for directory trees.
#[derive(Parser)]
#[command(
    name = "vaultwalk",
    about = "Bulk encrypt, decrypt, and temporarily decrypt directory trees with Ansible Vault",
    version,
    after_help = "Walk the tree. Keep it sealed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log every file action and skip
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options shared by the tree-walking commands.
#[derive(Args)]
pub struct RunArgs {
    /// Directory to operate on
    #[arg(short = 'C', long = "dir", value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// Report intended actions without making any changes
    #[arg(short, long)]
    pub preview: bool,

    /// Recursively process files in subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Only act on files with these extensions (e.g. .yml .env)
    #[arg(
        short = 'i',
        long = "include-filetypes",
        value_name = "EXT",
        num_args = 1..
    )]
    pub include_filetypes: Vec<String>,
}

impl RunArgs {
    /// Build the immutable session configuration for this invocation.
    pub fn into_session(self) -> Session {
        Session::new(
            self.dir,
            self.recursive,
            &self.include_filetypes,
            self.preview,
        )
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Encrypt every matching plaintext file under the directory
    Encrypt {
        #[command(flatten)]
        args: RunArgs,
    },

    /// Decrypt every matching vault-encrypted file under the directory
    Decrypt {
        #[command(flatten)]
        args: RunArgs,
    },

    /// Decrypt for a session, then re-encrypt after pressing Enter
    Temporary {
        #[command(flatten)]
        args: RunArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    use Command::*;

    match cli.command {
        Encrypt { args } => encrypt::execute(args, cli.verbose),
        Decrypt { args } => decrypt::execute(args, cli.verbose),
        Temporary { args } => temporary::execute(args, cli.verbose),
        Completions { shell } => completions::execute(shell),
    }
}

/// Print the per-file lines and the closing line for one pass.
pub(crate) fn report(mode: Mode, summary: &Summary, preview: bool, verbose: bool) {
    for r in &summary.reports {
        match &r.outcome {
            Outcome::Failed(detail) => output::error(detail),
            Outcome::Skipped if verbose => output::dimmed(&format!(
                "already {}ed: {} (skip)",
                mode,
                r.file.display()
            )),
            Outcome::Done | Outcome::Previewed if verbose || preview => {
                output::dimmed(&format!("{}: {}", mode.label(), r.file.display()))
            }
            _ => {}
        }
    }

    if preview {
        output::warn(&format!(
            "preview: {} file(s) would be {}ed, {} skipped, nothing changed",
            summary.previewed(),
            mode,
            summary.skipped()
        ));
        return;
    }
    output::success(&format!(
        "{}ed {} file(s), {} skipped",
        mode,
        summary.done().len(),
        summary.skipped()
    ));
    if summary.failed() > 0 {
        output::warn(&format!("{} file(s) failed", summary.failed()));
    }
}
