//! Integration tests for the load-and-render pipeline.
//!
//! These tests go through real files on disk, the way the CLI does.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use confdoc::{load_document, render, DocgenError, ROOT_DEPTH};

/// Writes a config file into a temp dir and returns its path.
fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("default-config.json");
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn test_minimal_document() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"{"docs": {"description": "x", "settings": {"timeout": "30s"}}}"#,
    );

    let document = load_document(&path).expect("Failed to load config");
    let lines = render(&document.root, ROOT_DEPTH);

    assert_eq!(lines, vec!["#### Settings", "", "- `timeout`: 30s"]);
}

#[test]
fn test_full_document() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"{
            "name": "some tool",
            "docs": {
                "description": ["ignored", "entirely"],
                "overview": "what the tool does",
                "usage": [
                    "```bash",
                    "tool --help",
                    "```"
                ],
                "http_client": {
                    "timeout": "max wait in seconds",
                    "retries": "attempts before giving up"
                },
                "output_format": {
                    "nested": {
                        "color": "ansi color toggle"
                    }
                }
            }
        }"#,
    );

    let document = load_document(&path).expect("Failed to load config");
    let lines = render(&document.root, ROOT_DEPTH);

    assert_eq!(
        lines,
        vec![
            "- `overview`: what the tool does",
            "```bash",
            "tool --help",
            "```",
            "#### Http Client",
            "",
            "- `timeout`: max wait in seconds",
            "- `retries`: attempts before giving up",
            "",
            "#### Output Format",
            "",
            "##### Nested",
            "",
            "- `color`: ansi color toggle",
        ]
    );
}

#[test]
fn test_rendering_twice_is_identical() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"{"docs": {"a": {"b": "1"}, "c": {"d": ["x", "y"]}}}"#,
    );

    let document = load_document(&path).expect("Failed to load config");
    let first = render(&document.root, ROOT_DEPTH);
    let second = render(&document.root, ROOT_DEPTH);

    assert_eq!(first, second);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("does-not-exist.json");

    let err = load_document(&path).unwrap_err();
    assert!(matches!(err, DocgenError::Io(_)));
}

#[test]
fn test_malformed_json_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "{not json");

    let err = load_document(&path).unwrap_err();
    assert!(matches!(err, DocgenError::Json(_)));
}

#[test]
fn test_missing_docs_key_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, r#"{"settings": {"timeout": "30s"}}"#);

    let err = load_document(&path).unwrap_err();
    assert!(matches!(err, DocgenError::MissingDocs(_)));
}

#[test]
fn test_unsupported_leaf_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, r#"{"docs": {"settings": {"timeout": 30}}}"#);

    let err = load_document(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("docs.settings.timeout"), "{message}");
    assert!(message.contains("number"), "{message}");
}
