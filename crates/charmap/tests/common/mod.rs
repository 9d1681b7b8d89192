//! Shared test utilities for the pipeline integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use charmap::{EncodingDef, FileSource};

/// Directory holding the UCM fixtures shared with charmap-parse.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../charmap-parse/tests/fixtures")
}

/// A file source rooted at the fixture directory.
pub fn fixture_source() -> FileSource {
    FileSource::new(fixtures_dir())
}

/// An encoding definition with no comment or aliases.
pub fn def(name: &str, var_name: &str, mapping: &str, replacement: Option<u8>) -> EncodingDef {
    EncodingDef {
        name: name.to_string(),
        comment: String::new(),
        var_name: var_name.to_string(),
        aliases: Vec::new(),
        replacement,
        mapping: mapping.to_string(),
    }
}
