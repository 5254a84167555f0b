//! Tests for `vaultwalk temporary`.

use crate::support::*;

#[test]
fn test_temporary_session_round_trips() {
    let t = Test::new();
    let original = "secret: 1\n";
    t.write_cipher("a.yml", original, "pw");

    // First stdin line is the password, second is the Enter keypress
    let output = t.run(&["temporary"], "pw\n\n");
    assert_success(&output);
    assert_stdout_contains(&output, "decrypted 1 file(s)");
    assert_stdout_contains(&output, "encrypted 1 file(s)");

    assert!(t.is_encrypted("a.yml"));
    // Round-trip back to plaintext proves content survived the session
    assert_success(&t.run(&["decrypt"], "pw\n"));
    assert_eq!(t.read("a.yml"), original);
}

#[test]
fn test_temporary_warns_about_plaintext_window() {
    let t = Test::new();
    t.write_cipher("a.yml", "secret: 1\n", "pw");

    let output = t.run(&["temporary"], "pw\n\n");
    assert_success(&output);
    assert_stdout_contains(&output, "decrypted on disk");
}

#[test]
fn test_temporary_aborted_wait_leaves_plaintext_and_fails() {
    let t = Test::new();
    t.write_cipher("a.yml", "secret: 1\n", "pw");

    // Password only, then EOF: the confirmation wait is interrupted
    let output = t.run(&["temporary"], "pw\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "aborted");
    assert_stderr_contains(&output, "remain decrypted");

    // Known residual-risk state: plaintext stays on disk but is gitignored
    assert_eq!(t.read("a.yml"), "secret: 1\n");
    assert!(t.gitignore().lines().any(|l| l == "a.yml"));
}

#[test]
fn test_temporary_gitignores_before_the_wait() {
    let t = Test::new();
    t.write_cipher("a.yml", "secret: 1\n", "pw");

    assert_success(&t.run(&["temporary"], "pw\n\n"));

    // Entry persists even though the session re-encrypted everything
    assert!(t.gitignore().lines().any(|l| l == "a.yml"));
}

#[test]
fn test_temporary_preview_does_not_block_or_mutate() {
    let t = Test::new();
    t.write_cipher("a.yml", "secret: 1\n", "pw");
    let before = t.read_bytes("a.yml");

    // Empty stdin: preview must neither prompt nor wait for Enter
    let output = t.run(&["temporary", "--preview"], "");
    assert_success(&output);
    assert_stdout_contains(&output, "preview");
    assert_eq!(t.read_bytes("a.yml"), before);
    assert!(t.gitignore().is_empty());
}

#[test]
fn test_temporary_respects_extension_filter() {
    let t = Test::new();
    t.write_cipher("a.yml", "secret: 1\n", "pw");
    t.write_cipher("b.env", "TOKEN=1\n", "pw");

    let output = t.run(&["temporary", "-i", ".env"], "pw\n\n");
    assert_success(&output);
    assert_stdout_contains(&output, "decrypted 1 file(s)");

    assert!(t.is_encrypted("a.yml"));
    assert!(t.is_encrypted("b.env"));
}
