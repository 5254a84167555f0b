//! Tests for `vaultwalk completions`.

use crate::support::Test;
use predicates::prelude::*;

#[test]
fn test_bash_completions_mention_subcommands() {
    let t = Test::new();
    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vaultwalk"))
        .stdout(predicate::str::contains("encrypt"))
        .stdout(predicate::str::contains("temporary"));
}

#[test]
fn test_zsh_completions_generate() {
    let t = Test::new();
    t.cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vaultwalk"));
}
