//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Write a JSONL input file with the given raw lines into a fresh temp dir
pub fn write_input(lines: &[&str]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("context.jsonl");
    let content: String = lines.iter().map(|line| format!("{line}\n")).collect();
    fs::write(&path, content).expect("Failed to write input file");
    (dir, path)
}

/// Read an output file back as parsed JSON values, one per line
pub fn read_output(path: &Path) -> Vec<serde_json::Value> {
    let content = fs::read_to_string(path).expect("Failed to read output file");
    content
        .lines()
        .map(|line| serde_json::from_str(line).expect("output line is not valid JSON"))
        .collect()
}

/// Read an output file back as raw lines
pub fn read_output_lines(path: &Path) -> Vec<String> {
    let content = fs::read_to_string(path).expect("Failed to read output file");
    content.lines().map(String::from).collect()
}
