//! Vaultwalk - bulk Ansible Vault operations for directory trees.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vaultwalk::cli::output;
use vaultwalk::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("VAULTWALK_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vaultwalk=debug")
        } else {
            EnvFilter::new("vaultwalk=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            vaultwalk::error::Error::ToolNotFound(_) => {
                Some("install it with: pipx install ansible-core")
            }
            vaultwalk::error::Error::Aborted => {
                Some("re-run `vaultwalk encrypt` to re-encrypt the tree")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
