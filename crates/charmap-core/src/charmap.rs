//! The finished bidirectional table for one codepage.

use crate::raw::UNMAPPED;
use crate::table::{EncodeTable, TABLE_SIZE, Utf8Enc};

/// A static decode/encode table pair for a single-byte codepage.
///
/// Built once by [`build_charmap`](crate::build_charmap) and immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Charmap {
    pub(crate) name: String,
    pub(crate) ascii_superset: bool,
    pub(crate) low: u8,
    pub(crate) replacement: u8,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_array"))]
    pub(crate) decode: [Utf8Enc; TABLE_SIZE],
    pub(crate) encode: EncodeTable,
}

impl Charmap {
    /// Table name, e.g. `"EBCDIC-K"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether bytes 0x00–0x7F decode to the identical ASCII characters.
    pub fn ascii_superset(&self) -> bool {
        self.ascii_superset
    }

    /// First byte that needs a table lookup (0x80 for ASCII supersets, else 0x00).
    pub fn low(&self) -> u8 {
        self.low
    }

    /// Byte substituted for characters with no mapping.
    pub fn replacement(&self) -> u8 {
        self.replacement
    }

    /// The decode table, indexed by byte value.
    pub fn decode_table(&self) -> &[Utf8Enc; TABLE_SIZE] {
        &self.decode
    }

    /// The sorted encode table.
    pub fn encode_table(&self) -> &EncodeTable {
        &self.encode
    }

    /// The character `byte` decodes to.
    pub fn decode_byte(&self, byte: u8) -> Option<char> {
        self.decode[byte as usize].to_char()
    }

    /// The byte `ch` encodes to, or [`replacement`](Self::replacement) if it has none.
    pub fn encode_char(&self, ch: char) -> u8 {
        if self.ascii_superset && u32::from(ch) < 0x80 {
            return ch as u8;
        }
        self.encode.find(ch).unwrap_or(self.replacement)
    }

    /// Number of distinct characters in the encode table.
    pub fn distinct_chars(&self) -> usize {
        self.encode.entries().count()
    }

    /// Bytes that decode to the unmapped sentinel.
    pub fn unmapped_bytes(&self) -> Vec<u8> {
        (0..=u8::MAX)
            .filter(|&b| self.decode_byte(b) == Some(UNMAPPED))
            .collect()
    }

    /// A compact description of this table.
    pub fn summary(&self) -> CharmapSummary {
        let unmapped = self.unmapped_bytes();
        CharmapSummary {
            name: self.name.clone(),
            ascii_superset: self.ascii_superset,
            low: self.low,
            replacement: self.replacement,
            mapped_bytes: TABLE_SIZE - unmapped.len(),
            distinct_chars: self.distinct_chars(),
            unmapped_bytes: unmapped,
        }
    }
}

/// Summary statistics for a [`Charmap`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharmapSummary {
    /// Table name.
    pub name: String,
    /// ASCII-superset flag.
    pub ascii_superset: bool,
    /// Low boundary offset.
    pub low: u8,
    /// Replacement byte.
    pub replacement: u8,
    /// Bytes with a real (non-sentinel) character.
    pub mapped_bytes: usize,
    /// Distinct characters reachable through the encode table.
    pub distinct_chars: usize,
    /// Bytes mapped to the sentinel.
    pub unmapped_bytes: Vec<u8>,
}
