//! Decode and encode table entries.
//!
//! The decode side stores each character pre-encoded as UTF-8 (at most three
//! bytes) so a decoder can copy bytes without re-encoding. The encode side
//! packs a byte value and a character into one `u32` key:
//!
//! ```text
//!  31      24 23                     0
//! +----------+------------------------+
//! |   byte   |  Unicode scalar value  |
//! +----------+------------------------+
//! ```
//!
//! Keys are sorted by the scalar portion so a character can be found by
//! binary search.

/// Number of entries in both tables.
pub const TABLE_SIZE: usize = 256;

/// Mask selecting the character portion of a packed encode key.
pub const CHAR_MASK: u32 = 0x00FF_FFFF;

/// A character pre-encoded as UTF-8, at most 3 bytes long.
///
/// Unused trailing bytes of `data` are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utf8Enc {
    /// Number of meaningful bytes in `data` (1, 2 or 3).
    pub len: u8,
    /// The UTF-8 bytes, zero padded.
    pub data: [u8; 3],
}

impl Utf8Enc {
    /// Encode `ch` as UTF-8.
    ///
    /// Returns `None` if `ch` needs 4 bytes (outside the Basic Multilingual Plane).
    pub fn from_char(ch: char) -> Option<Self> {
        let mut buf = [0u8; 4];
        let len = ch.encode_utf8(&mut buf).len();
        if len > 3 {
            return None;
        }
        Some(Self {
            len: len as u8,
            data: [buf[0], buf[1], buf[2]],
        })
    }

    /// The meaningful UTF-8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..usize::from(self.len).min(3)]
    }

    /// Decode the stored bytes back into a character.
    pub fn to_char(&self) -> Option<char> {
        std::str::from_utf8(self.as_bytes()).ok()?.chars().next()
    }
}

/// One encode-table entry viewed as a `(character, byte)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeKey {
    /// The character being encoded.
    pub ch: char,
    /// The byte it encodes to.
    pub byte: u8,
}

impl EncodeKey {
    /// Pack into the `byte << 24 | scalar` representation.
    pub fn pack(self) -> u32 {
        (u32::from(self.byte) << 24) | u32::from(self.ch)
    }

    /// Unpack a `byte << 24 | scalar` key.
    ///
    /// Returns `None` if the low 24 bits are not a Unicode scalar value.
    pub fn unpack(key: u32) -> Option<Self> {
        Some(Self {
            ch: char::from_u32(key & CHAR_MASK)?,
            byte: (key >> 24) as u8,
        })
    }
}

/// A 256-entry encode table of packed keys, sorted by character.
///
/// When fewer than 256 distinct characters exist, the trailing slots repeat
/// the last real key. Repeats compare equal, so binary search is unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeTable(#[cfg_attr(feature = "serde", serde(with = "crate::serde_array"))] pub(crate) [u32; TABLE_SIZE]);

impl EncodeTable {
    /// Wrap an already sorted and padded key array.
    pub fn from_keys(keys: [u32; TABLE_SIZE]) -> Self {
        Self(keys)
    }

    /// The packed keys.
    pub fn keys(&self) -> &[u32; TABLE_SIZE] {
        &self.0
    }

    /// Binary-search for `ch` and return the byte it encodes to.
    pub fn find(&self, ch: char) -> Option<u8> {
        let target = u32::from(ch);
        self.0
            .binary_search_by_key(&target, |key| key & CHAR_MASK)
            .ok()
            .map(|index| (self.0[index] >> 24) as u8)
    }

    /// Iterate the distinct entries, skipping padding repeats.
    pub fn entries(&self) -> impl Iterator<Item = EncodeKey> + '_ {
        let mut previous: Option<u32> = None;
        self.0.iter().filter_map(move |&key| {
            if previous == Some(key) {
                return None;
            }
            previous = Some(key);
            EncodeKey::unpack(key)
        })
    }

    /// Returns whether the keys are non-decreasing by character.
    pub fn is_sorted(&self) -> bool {
        self.0
            .windows(2)
            .all(|pair| pair[0] & CHAR_MASK <= pair[1] & CHAR_MASK)
    }
}
