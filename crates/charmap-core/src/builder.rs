//! Table construction from a [`RawMapping`].
//!
//! Builds the decode table (byte -> UTF-8 bytes), the encode table
//! (character -> byte, sorted for binary search), and detects whether the
//! mapping is an ASCII superset. Construction is a pure, single pass that
//! either yields a complete [`Charmap`] or fails.

use std::collections::HashSet;

use crate::ascii::{is_ascii_superset, low_offset};
use crate::charmap::Charmap;
use crate::error::CharmapError;
use crate::raw::{RawMapping, UNMAPPED};
use crate::table::{CHAR_MASK, EncodeKey, EncodeTable, TABLE_SIZE, Utf8Enc};

/// Build a [`Charmap`] named `name` from `raw`, using `replacement` for
/// characters that cannot be encoded.
///
/// # Errors
///
/// Returns [`CharmapError::EncodingRange`] if any character needs more than
/// 3 UTF-8 bytes, and [`CharmapError::EmptyEncodeTable`] if every byte is
/// unmapped.
pub fn build_charmap(
    raw: &RawMapping,
    name: &str,
    replacement: u8,
) -> Result<Charmap, CharmapError> {
    let ascii_superset = is_ascii_superset(raw);
    let low = low_offset(ascii_superset);
    #[cfg(feature = "tracing")]
    tracing::debug!(name, ascii_superset, low, "detected ASCII superset");

    let decode = build_decode_table(raw)?;
    let encode = build_encode_table(raw).ok_or_else(|| CharmapError::EmptyEncodeTable {
        name: name.to_string(),
    })?;

    Ok(Charmap {
        name: name.to_string(),
        ascii_superset,
        low,
        replacement,
        decode,
        encode,
    })
}

/// Encode every byte's character as UTF-8.
///
/// # Errors
///
/// Returns [`CharmapError::EncodingRange`] for the first byte whose
/// character needs more than 3 bytes.
pub fn build_decode_table(raw: &RawMapping) -> Result<[Utf8Enc; TABLE_SIZE], CharmapError> {
    let mut decode = [Utf8Enc::default(); TABLE_SIZE];
    for (byte, ch) in raw.entries() {
        decode[byte as usize] =
            Utf8Enc::from_char(ch).ok_or(CharmapError::EncodingRange { byte, ch })?;
    }
    Ok(decode)
}

/// Build the sorted, padded encode table.
///
/// Bytes are scanned in ascending order and only the first byte for each
/// character is kept, so the lowest byte wins. [`UNMAPPED`] is never
/// encoded. Returns `None` if no byte has an encodable character.
pub fn build_encode_table(raw: &RawMapping) -> Option<EncodeTable> {
    let mut seen = HashSet::with_capacity(TABLE_SIZE);
    let mut keys: Vec<u32> = raw
        .entries()
        .filter(|&(_, ch)| ch != UNMAPPED && seen.insert(ch))
        .map(|(byte, ch)| EncodeKey { ch, byte }.pack())
        .collect();
    // Characters are unique here, so an unstable sort is deterministic.
    keys.sort_unstable_by_key(|key| key & CHAR_MASK);

    let last = *keys.last()?;
    let mut table = [last; TABLE_SIZE];
    table[..keys.len()].copy_from_slice(&keys);
    Some(EncodeTable::from_keys(table))
}
