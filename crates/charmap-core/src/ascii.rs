//! 7-bit ASCII superset detection.
//!
//! A codepage whose bytes 0x00–0x7F decode to the identical ASCII characters
//! lets decoders skip the table for that range. Such tables carry
//! `low = 0x80`.

use crate::raw::RawMapping;

/// The canonical 7-bit ASCII sequence, `ASCII[b] == b as char`.
pub const ASCII: [char; 128] = {
    let mut table = ['\0'; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = i as u8 as char;
        i += 1;
    }
    table
};

/// Returns whether the first 128 entries of `raw` are exactly [`ASCII`].
pub fn is_ascii_superset(raw: &RawMapping) -> bool {
    raw.as_chars()[..128] == ASCII
}

/// The first byte that needs a table lookup: 0x80 for ASCII supersets, 0x00 otherwise.
pub fn low_offset(ascii_superset: bool) -> u8 {
    if ascii_superset { 0x80 } else { 0x00 }
}
