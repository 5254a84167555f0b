//! Tests for `vaultwalk encrypt`.

use crate::support::*;

#[test]
fn test_encrypt_mixed_tree() {
    let t = Test::new();
    t.write("a.yml", "plain: a\n");
    t.write_cipher("b.yml", "already: sealed\n", "pw");
    t.write("c.txt", "notes\n");
    let b_before = t.read_bytes("b.yml");
    let c_before = t.read_bytes("c.txt");

    let output = t.run(&["encrypt", "-i", ".yml", "-v"], "pw\n");
    assert_success(&output);

    // a.yml encrypted, b.yml skipped untouched, c.txt outside the filter
    assert!(t.is_encrypted("a.yml"));
    assert_eq!(t.read_bytes("b.yml"), b_before);
    assert_eq!(t.read_bytes("c.txt"), c_before);
    assert_stdout_contains(&output, "skip");
    assert_stdout_contains(&output, "encrypted 1 file(s), 1 skipped");
}

#[test]
fn test_encrypt_twice_is_idempotent() {
    let t = Test::new();
    t.write("a.yml", "plain: a\n");

    assert_success(&t.run(&["encrypt"], "pw\n"));
    let after_first = t.read_bytes("a.yml");

    let output = t.run(&["encrypt"], "pw\n");
    assert_success(&output);
    assert_stdout_contains(&output, "encrypted 0 file(s), 1 skipped");
    assert_eq!(t.read_bytes("a.yml"), after_first);
}

#[test]
fn test_encrypt_preview_changes_nothing() {
    let t = Test::new();
    t.write("a.yml", "plain: a\n");
    let before = t.read_bytes("a.yml");

    // No password on stdin: preview must not prompt
    let output = t.run(&["encrypt", "--preview"], "");
    assert_success(&output);
    assert_stdout_contains(&output, "preview");
    assert_stdout_contains(&output, "nothing changed");
    assert_eq!(t.read_bytes("a.yml"), before);
    assert!(t.gitignore().is_empty());
}

#[test]
fn test_encrypt_non_recursive_ignores_subdirs() {
    let t = Test::new();
    t.write("top.yml", "top: 1\n");
    t.write("sub/nested.yml", "nested: 1\n");

    assert_success(&t.run(&["encrypt"], "pw\n"));

    assert!(t.is_encrypted("top.yml"));
    assert!(!t.is_encrypted("sub/nested.yml"));
}

#[test]
fn test_encrypt_recursive_descends() {
    let t = Test::new();
    t.write("top.yml", "top: 1\n");
    t.write("sub/nested.yml", "nested: 1\n");
    t.write("sub/deeper/leaf.yml", "leaf: 1\n");

    let output = t.run(&["encrypt", "--recursive"], "pw\n");
    assert_success(&output);
    assert_stdout_contains(&output, "encrypted 3 file(s)");

    assert!(t.is_encrypted("top.yml"));
    assert!(t.is_encrypted("sub/nested.yml"));
    assert!(t.is_encrypted("sub/deeper/leaf.yml"));
}

#[test]
fn test_encrypt_never_touches_gitignore_or_git_dir() {
    let t = Test::new();
    t.write(".gitignore", "target/\n");
    t.write(".git/config", "[core]\n");
    t.write("a.yml", "plain: a\n");

    assert_success(&t.run(&["encrypt", "--recursive"], "pw\n"));

    assert_eq!(t.read(".gitignore"), "target/\n");
    assert_eq!(t.read(".git/config"), "[core]\n");
    assert!(t.is_encrypted("a.yml"));
}

#[test]
fn test_encrypt_empty_tree_is_silent_success() {
    let t = Test::new();
    let output = t.run(&["encrypt"], "pw\n");
    assert_success(&output);
    assert_stdout_contains(&output, "encrypted 0 file(s), 0 skipped");
}

#[test]
fn test_encrypt_extension_filter_without_dot() {
    let t = Test::new();
    t.write("a.yml", "plain: a\n");
    t.write("b.txt", "notes\n");

    assert_success(&t.run(&["encrypt", "-i", "yml"], "pw\n"));

    assert!(t.is_encrypted("a.yml"));
    assert!(!t.is_encrypted("b.txt"));
}
