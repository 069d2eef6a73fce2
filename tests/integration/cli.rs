//! Integration tests for the `minifilter` binary

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn minifilter_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_minifilter"))
}

/// Helper function to create a test file
fn create_test_file(
    dir: &TempDir,
    name: &str,
    content: &str,
) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_lex_valid_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "valid.mf", "SELECT a FROM t WHERE a == 1;");

    let output = Command::new(minifilter_bin())
        .current_dir(temp_dir.path())
        .arg("lex")
        .arg(&file)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--- Program Internal Form (PIF) ---"));
    assert!(stdout.contains("OP_EQ         | -1"));
    assert!(stdout.contains("2   | 1"));
}

#[test]
fn test_eval_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(minifilter_bin())
        .current_dir(temp_dir.path())
        .args(["eval", "--format", "json", "x != \"y\""])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["pif"][1]["kind"], "OP_NEQ");
    assert_eq!(json["symbols"][1]["class"], "string");
}

#[test]
fn test_lexical_error_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(minifilter_bin())
        .current_dir(temp_dir.path())
        .args(["eval", "SELECT x # 1"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Lexical Error: Unexpected character '#' at line 1, col 10"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_comments_flag() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(minifilter_bin())
        .current_dir(temp_dir.path())
        .args(["eval", "--comments", "SELECT x # 1"])
        .output()
        .unwrap();

    assert!(output.status.success());
}

#[test]
fn test_project_config_enables_comments() {
    let temp_dir = TempDir::new().unwrap();
    create_test_file(
        &temp_dir,
        "minifilter.toml",
        "[lexer]\nline_comments = true\n[output]\nformat = \"json\"\n",
    );

    let output = Command::new(minifilter_bin())
        .current_dir(temp_dir.path())
        .args(["eval", "a # b"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["pif"].as_array().unwrap().len(), 1);
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(minifilter_bin())
        .current_dir(temp_dir.path())
        .args(["lex", "does-not-exist.mf"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to lex"));
}

#[test]
fn test_version() {
    let output = Command::new(minifilter_bin())
        .arg("version")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("MiniFilter "));
}
