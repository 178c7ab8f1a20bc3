//! Command-line tests for the toast-demo binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn demo() -> Command {
    Command::cargo_bin("toast-demo").unwrap()
}

fn missing_config(dir: &TempDir) -> String {
    dir.path().join("absent.toml").display().to_string()
}

#[test]
fn test_help_lists_flags() {
    demo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--edge"))
        .stdout(predicate::str::contains("--no-auto-dismiss"))
        .stdout(predicate::str::contains("--print-config"));
}

#[test]
fn test_print_config_defaults() {
    let dir = TempDir::new().unwrap();

    demo()
        .args(["--print-config", "--config", &missing_config(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("edge = \"top\""))
        .stdout(predicate::str::contains("length = \"short\""))
        .stdout(predicate::str::contains("auto_dismiss = true"));
}

#[test]
fn test_flags_override_defaults() {
    let dir = TempDir::new().unwrap();

    demo()
        .args(["--print-config", "--edge", "bottom", "--length", "7"])
        .args(["--config", &missing_config(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("edge = \"bottom\""))
        .stdout(predicate::str::contains("length = 7.0"));
}

#[test]
fn test_no_auto_dismiss_flag() {
    let dir = TempDir::new().unwrap();

    demo()
        .args(["--print-config", "--no-auto-dismiss"])
        .args(["--config", &missing_config(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("auto_dismiss = false"));
}

#[test]
fn test_config_file_is_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[toast]\nedge = \"bottom\"\nlength = \"long\"\n").unwrap();

    demo()
        .args(["--print-config", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("edge = \"bottom\""))
        .stdout(predicate::str::contains("length = \"long\""));
}

#[test]
fn test_flag_beats_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[toast]\nedge = \"bottom\"\n").unwrap();

    demo()
        .args(["--print-config", "--edge", "top", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("edge = \"top\""));
}

#[test]
fn test_broken_config_falls_back_with_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[toast\nedge = ").unwrap();

    demo()
        .args(["--print-config", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("edge = \"top\""))
        .stderr(predicate::str::contains("using defaults"));
}

#[test]
fn test_invalid_length_rejected() {
    demo()
        .args(["--print-config", "--length", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("toast length"));
}

#[test]
fn test_invalid_edge_rejected() {
    demo()
        .args(["--print-config", "--edge", "left"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("top"));
}
