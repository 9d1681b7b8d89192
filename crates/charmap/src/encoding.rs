//! Encoding definitions and the manifest that lists them.
//!
//! A manifest is a JSON document:
//!
//! ```json
//! {
//!   "encodings": [
//!     {
//!       "name": "EBCDIC-K",
//!       "var_name": "EBCDIC_K",
//!       "replacement": 63,
//!       "mapping": "file:ebcdic-k.ucm"
//!     }
//!   ]
//! }
//! ```
//!
//! `comment`, `aliases` and `replacement` are optional.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Replacement byte used when neither the definition nor the UCM header
/// provides one (`?`).
pub const DEFAULT_REPLACEMENT: u8 = 0x3f;

/// One encoding to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingDef {
    /// Human-readable name, e.g. `"EBCDIC-K"`.
    pub name: String,
    /// Extra documentation emitted with the table.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    /// Name of the generated static, e.g. `"EBCDIC_K"`.
    pub var_name: String,
    /// Additional static names referring to the same table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Byte substituted for unencodable characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<u8>,
    /// Locator of the UCM mapping file (path, `file:` or `http(s)://` URL).
    pub mapping: String,
}

impl EncodingDef {
    /// The primary variable name followed by all aliases.
    pub fn var_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.var_name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// The list of encodings to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Encodings in output order.
    pub encodings: Vec<EncodingDef>,
}

impl Manifest {
    /// The built-in manifest: EBCDIC-K from `ebcdic-k.ucm` in the working directory.
    pub fn builtin() -> Self {
        Self {
            encodings: vec![EncodingDef {
                name: "EBCDIC-K".to_string(),
                comment: String::new(),
                var_name: "EBCDIC_K".to_string(),
                aliases: Vec::new(),
                replacement: Some(DEFAULT_REPLACEMENT),
                mapping: "file:ebcdic-k.ucm".to_string(),
            }],
        }
    }

    /// Parse and validate a JSON manifest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Manifest`] for malformed JSON, invalid identifiers,
    /// or duplicate variable names.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let manifest: Manifest =
            serde_json::from_str(json).map_err(|e| Error::Manifest(e.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read, parse and validate a JSON manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise as
    /// [`Manifest::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Check that every variable name is a valid identifier and unique.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Manifest`] describing the first problem found.
    pub fn validate(&self) -> Result<(), Error> {
        if self.encodings.is_empty() {
            return Err(Error::Manifest("no encodings listed".to_string()));
        }
        let mut seen = HashSet::new();
        for def in &self.encodings {
            if def.mapping.trim().is_empty() {
                return Err(Error::Manifest(format!("{}: empty mapping locator", def.name)));
            }
            for var in def.var_names() {
                if !is_identifier(var) {
                    return Err(Error::Manifest(format!(
                        "{}: {var:?} is not a valid identifier",
                        def.name
                    )));
                }
                if !seen.insert(var) {
                    return Err(Error::Manifest(format!("duplicate variable name {var}")));
                }
            }
        }
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    name != "_" && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
