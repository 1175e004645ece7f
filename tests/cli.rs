//! CLI contract tests for fcount

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fcount() -> Command {
    Command::cargo_bin("fcount").expect("binary should build")
}

#[test]
fn test_missing_directory_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    fcount()
        .current_dir(dir.path())
        .arg("no_such_dir")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot access"))
        .stderr(predicate::str::contains("No such file or directory"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_file_root_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("app.exe"), "").unwrap();

    fcount()
        .current_dir(dir.path())
        .arg("app.exe")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_defaults_to_current_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("app.exe"), "").unwrap();

    fcount()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1"));
}

#[test]
fn test_zero_matches_is_success() {
    let dir = TempDir::new().unwrap();

    fcount()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0"));
}

#[test]
fn test_color_never_has_no_escape_codes() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("app.exe"), "").unwrap();

    fcount()
        .current_dir(dir.path())
        .args(["--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_help_mentions_usage() {
    fcount()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory to search"))
        .stdout(predicate::str::contains("--ext"));
}

#[test]
fn test_version_flag() {
    fcount()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fcount"));
}
