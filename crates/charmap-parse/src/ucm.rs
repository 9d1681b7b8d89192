//! UCM mapping-file parser for single-byte codepages.
//!
//! Reads the line-oriented ICU UCM format and extracts the exact
//! (fallback level `0`) mappings of the form
//!
//! ```text
//! <U00C1> \xC1 |0
//! ```
//!
//! into a [`RawMapping`]. The parse is tolerant: comments (`#`), blank
//! lines, `CHARMAP` markers, fallback entries (`|1`, `|3`), multi-byte
//! sequences and any other syntax are skipped. The `<code_set_name>` and
//! `<subchar>` header values are picked up when present but never required.

use std::io::BufRead;
use std::sync::LazyLock;

use charmap_core::{RawMapping, UNMAPPED};
use regex::Regex;

use crate::error::ParseError;

/// Minimum number of distinct bytes a source must map to be trusted.
pub const MIN_MAPPED_BYTES: usize = 128;

static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<U([0-9A-Fa-f]+)>\s*\\x([0-9A-Fa-f]+)\s*\|0").expect("entry pattern is valid")
});

static CODE_SET_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^<code_set_name>\s+"([^"]*)""#).expect("code_set_name pattern is valid")
});

static SUBCHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<subchar>\s+\\x([0-9A-Fa-f]{1,2})\s*$").expect("subchar pattern is valid")
});

/// Header values found in a UCM file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UcmHeader {
    /// Value of `<code_set_name>`, e.g. `"ibm-037_P100-1995"`.
    pub code_set_name: Option<String>,
    /// Value of `<subchar>`, the codepage's own substitution byte.
    pub subchar: Option<u8>,
}

/// The result of parsing one UCM file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UcmMapping {
    /// Byte -> character table, [`UNMAPPED`] where no line matched.
    pub raw: RawMapping,
    /// Header values.
    pub header: UcmHeader,
    /// Number of distinct bytes that received an explicit mapping.
    pub mapped_bytes: usize,
}

impl UcmMapping {
    /// Parse UCM text read from `locator`.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, since only the ASCII
    /// mapping syntax matters.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::SourceFormat`] if fewer than
    /// [`MIN_MAPPED_BYTES`] distinct bytes are mapped.
    pub fn parse(data: &[u8], locator: &str) -> Result<Self, ParseError> {
        Self::parse_str(&String::from_utf8_lossy(data), locator)
    }

    /// Parse UCM text already decoded to a string.
    ///
    /// # Errors
    ///
    /// See [`UcmMapping::parse`].
    pub fn parse_str(text: &str, locator: &str) -> Result<Self, ParseError> {
        let mut parser = LineParser::default();
        for line in text.lines() {
            parser.feed(line, locator);
        }
        parser.finish(locator)
    }

    /// Parse UCM text from a buffered reader, line by line.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if reading fails, otherwise as
    /// [`UcmMapping::parse`].
    pub fn parse_reader<R: BufRead>(reader: R, locator: &str) -> Result<Self, ParseError> {
        let mut parser = LineParser::default();
        for line in reader.lines() {
            parser.feed(&line?, locator);
        }
        parser.finish(locator)
    }
}

/// Incremental state shared by the string and reader entry points.
struct LineParser {
    raw: RawMapping,
    header: UcmHeader,
    seen: [bool; 256],
}

impl Default for LineParser {
    fn default() -> Self {
        Self {
            raw: RawMapping::new(),
            header: UcmHeader::default(),
            seen: [false; 256],
        }
    }
}

impl LineParser {
    fn feed(&mut self, line: &str, locator: &str) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        if let Some((byte, ch)) = parse_entry(line, locator) {
            self.raw.set(byte, ch);
            self.seen[byte as usize] = true;
            return;
        }

        if let Some(caps) = CODE_SET_NAME.captures(line) {
            self.header.code_set_name = Some(caps[1].to_string());
        } else if let Some(caps) = SUBCHAR.captures(line) {
            self.header.subchar = u8::from_str_radix(&caps[1], 16).ok();
        }
    }

    fn finish(self, locator: &str) -> Result<UcmMapping, ParseError> {
        let mapped_bytes = self.seen.iter().filter(|&&seen| seen).count();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            locator,
            mapped_bytes,
            code_set_name = self.header.code_set_name.as_deref(),
            "parsed UCM mapping"
        );
        if mapped_bytes < MIN_MAPPED_BYTES {
            return Err(ParseError::SourceFormat {
                locator: locator.to_string(),
                found: mapped_bytes,
            });
        }
        Ok(UcmMapping {
            raw: self.raw,
            header: self.header,
            mapped_bytes,
        })
    }
}

/// Match one `<Uxxxx> \xNN |0` line.
///
/// A byte value that does not fit in `u8` makes the line non-matching. A
/// code point that is not a Unicode scalar value is kept as [`UNMAPPED`].
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn parse_entry(line: &str, locator: &str) -> Option<(u8, char)> {
    let caps = ENTRY.captures(line)?;
    let code_point = u32::from_str_radix(&caps[1], 16).ok()?;
    let byte = u8::from_str_radix(&caps[2], 16).ok()?;
    let ch = match char::from_u32(code_point) {
        Some(ch) => ch,
        None => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                locator,
                byte,
                code_point,
                "code point is not a Unicode scalar value; byte left unmapped"
            );
            UNMAPPED
        }
    };
    Some((byte, ch))
}
