#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;

pub fn cmd() -> Command {
    Command::cargo_bin("charmapgen").unwrap()
}

/// Directory holding the shared UCM fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../charmap-parse/tests/fixtures")
}

/// Write a manifest into `dir` and return its path.
pub fn write_manifest(dir: &std::path::Path, json: &str) -> PathBuf {
    let path = dir.join("encodings.json");
    std::fs::write(&path, json).unwrap();
    path
}

/// Manifest with both fixtures, the first carrying an alias.
pub const TWO_ENCODINGS: &str = r#"{
  "encodings": [
    {
      "name": "IBM037",
      "comment": "US/Canada EBCDIC.",
      "var_name": "IBM037",
      "aliases": ["CP037"],
      "mapping": "ibm-037.ucm"
    },
    {
      "name": "Windows-1252",
      "var_name": "WINDOWS_1252",
      "replacement": 63,
      "mapping": "file:windows-1252.ucm"
    }
  ]
}"#;
