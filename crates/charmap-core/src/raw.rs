//! The raw byte -> character mapping produced by a mapping parser.

use std::ops::Index;

/// Sentinel character for a byte with no mapping (U+FFFD REPLACEMENT CHARACTER).
pub const UNMAPPED: char = '\u{FFFD}';

/// A 256-entry mapping from byte value to character.
///
/// Every byte has an entry; bytes that were never assigned hold [`UNMAPPED`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMapping {
    chars: [char; 256],
}

impl Default for RawMapping {
    fn default() -> Self {
        Self {
            chars: [UNMAPPED; 256],
        }
    }
}

impl RawMapping {
    /// Create a mapping with every byte set to [`UNMAPPED`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapping from a complete 256-entry table.
    pub fn from_chars(chars: [char; 256]) -> Self {
        Self { chars }
    }

    /// Create a mapping from `(byte, char)` pairs.
    ///
    /// Later pairs for the same byte overwrite earlier ones.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u8, char)>,
    {
        let mut raw = Self::new();
        for (byte, ch) in pairs {
            raw.set(byte, ch);
        }
        raw
    }

    /// Assign `ch` to `byte`, replacing any previous assignment.
    pub fn set(&mut self, byte: u8, ch: char) {
        self.chars[byte as usize] = ch;
    }

    /// The character assigned to `byte`.
    pub fn get(&self, byte: u8) -> char {
        self.chars[byte as usize]
    }

    /// The full table, indexed by byte value.
    pub fn as_chars(&self) -> &[char; 256] {
        &self.chars
    }

    /// Iterate over `(byte, char)` in ascending byte order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, char)> + '_ {
        (0..=u8::MAX).zip(self.chars.iter().copied())
    }

    /// Number of bytes whose character is not [`UNMAPPED`].
    pub fn mapped_count(&self) -> usize {
        self.chars.iter().filter(|&&ch| ch != UNMAPPED).count()
    }
}

impl Index<u8> for RawMapping {
    type Output = char;

    fn index(&self, byte: u8) -> &char {
        &self.chars[byte as usize]
    }
}
