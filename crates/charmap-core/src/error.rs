//! Error types for charmap construction.
//!
//! Provides [`CharmapError`] for fatal conditions that abort the
//! construction of a [`Charmap`](crate::Charmap). There is no partial or
//! degraded construction mode: every variant is terminal for the table.

use std::fmt;

/// Fatal error while building a charmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharmapError {
    /// A mapped character needs more than 3 UTF-8 bytes.
    ///
    /// Single-byte codepages must map into the Basic Multilingual Plane.
    EncodingRange {
        /// Byte value whose character is out of range.
        byte: u8,
        /// The offending character.
        ch: char,
    },
    /// Every byte maps to the unmapped sentinel, leaving nothing to encode.
    EmptyEncodeTable {
        /// Name of the table being built.
        name: String,
    },
}

impl fmt::Display for CharmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharmapError::EncodingRange { byte, ch } => write!(
                f,
                "character {ch:?} (U+{:04X}) at byte 0x{byte:02x} is too long: needs {} UTF-8 bytes, at most 3 allowed",
                *ch as u32,
                ch.len_utf8()
            ),
            CharmapError::EmptyEncodeTable { name } => {
                write!(f, "{name}: no byte maps to an encodable character")
            }
        }
    }
}

impl std::error::Error for CharmapError {}
