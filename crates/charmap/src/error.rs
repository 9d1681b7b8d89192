//! Error type for the facade crate.

use charmap_parse::ParseError;
use thiserror::Error;

/// Error type for manifest loading and the build pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Building one encoding failed. The whole run is aborted.
    #[error("{name}: {source}")]
    Encoding {
        /// Name of the encoding that failed.
        name: String,
        /// What went wrong.
        source: ParseError,
    },

    /// The manifest is malformed or inconsistent.
    #[error("invalid manifest: {0}")]
    Manifest(String),

    /// Error reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn encoding_error_prefixes_name() {
        let err = Error::Encoding {
            name: "EBCDIC-K".to_string(),
            source: ParseError::SourceFormat {
                locator: "file:ebcdic-k.ucm".to_string(),
                found: 3,
            },
        };
        assert!(err.to_string().starts_with("EBCDIC-K: file:ebcdic-k.ucm: only 3 bytes"));
        assert!(err.source().is_some());
    }

    #[test]
    fn manifest_error_display() {
        let err = Error::Manifest("duplicate variable name FOO".to_string());
        assert_eq!(
            err.to_string(),
            "invalid manifest: duplicate variable name FOO"
        );
    }
}
