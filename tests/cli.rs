//! End-to-end runs of the `parserdoc` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn parserdoc(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_parserdoc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run parserdoc")
}

#[test]
fn test_duplicate_enum_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let first = write(&dir, "First.cs", "enum Status { Ok }");
    let second = write(&dir, "Second.cs", "enum Status { Ok }");

    let output = parserdoc(&[&first, &second]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "unexpected stdout: {:?}", output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Status"), "stderr was: {}", stderr);
}

#[test]
fn test_skipped_input_does_not_fail_the_run() {
    let dir = TempDir::new().unwrap();
    let notes = write(&dir, "notes.txt", "class Hidden {}");
    let source = write(
        &dir,
        "Shapes.cs",
        "class Shape { public abstract double Area(); } enum Color { Red, Green }",
    );

    let output = parserdoc(&[&notes, &source]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["classes"]["Shape"]["methods"],
        serde_json::json!(["public abstract double Area();"])
    );
    assert_eq!(json["enums"]["Color"]["constants"], serde_json::json!(["Red", "Green"]));
    assert!(json["classes"].get("Hidden").is_none());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("notes.txt"), "stderr was: {}", stderr);
}

#[test]
fn test_no_inputs_yields_empty_catalogs() {
    let output = parserdoc(&[]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!({ "classes": {}, "enums": {} }));
}
