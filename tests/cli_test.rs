//! Integration tests for the json-model binary.
//!
//! These create JSON files on the fly and run the full executable
//! against them.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Helper to get the binary command for testing.
fn get_cmd() -> Command {
    Command::cargo_bin("json-model").unwrap()
}

fn get_test_document() -> Value {
    json!({
        "zeta": {"beta": 2, "alpha": 1},
        "homepage": "https://example.com/a",
        "items": [3, 1, 2]
    })
}

#[test]
fn test_pretty_sorted_to_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    fs::write(&input, get_test_document().to_string()).unwrap();

    get_cmd()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    let homepage = text.find("\"homepage\"").unwrap();
    let items = text.find("\"items\"").unwrap();
    let zeta = text.find("\"zeta\"").unwrap();
    assert!(homepage < items && items < zeta);
    assert!(!text.contains("\\/"));

    // Content survives the reformat
    let reparsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, get_test_document());
}

#[test]
fn test_pretty_sorted_to_stdout() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");
    fs::write(&input, r#"{"b":1,"a":2}"#).unwrap();

    get_cmd()
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("{\n  \"a\": 2,\n  \"b\": 1\n}"));
}

#[test]
fn test_compact_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");
    fs::write(&input, "{\n  \"a\": 1\n}").unwrap();

    get_cmd()
        .arg("--input")
        .arg(&input)
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"a":1}"#));
}

#[test]
fn test_missing_input_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    get_cmd()
        .arg("--input")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O Error"));
}

#[test]
fn test_malformed_input_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.json");
    fs::write(&input, "{not json").unwrap();

    get_cmd()
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON Codec Error"));
}
