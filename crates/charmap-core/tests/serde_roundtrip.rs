//! Serde serialization/deserialization round-trip tests.
//!
//! These tests verify that the public table types can be serialized to JSON
//! and deserialized back, producing equal values.

#![cfg(feature = "serde")]

use charmap_core::*;

/// Helper: serialize to JSON string, deserialize back, assert equality.
fn roundtrip<T>(value: &T)
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let json = serde_json::to_string(value).expect("serialize failed");
    let restored: T = serde_json::from_str(&json).expect("deserialize failed");
    assert_eq!(*value, restored, "round-trip mismatch for JSON: {json}");
}

fn sample() -> Charmap {
    let mut raw = RawMapping::from_pairs((0u8..0x80).map(|b| (b, b as char)));
    raw.set(0x80, '€');
    raw.set(0xc1, 'Á');
    build_charmap(&raw, "sample", 0x3f).unwrap()
}

#[test]
fn test_serde_utf8_enc() {
    roundtrip(&Utf8Enc::from_char('€').unwrap());
}

#[test]
fn test_serde_charmap() {
    roundtrip(&sample());
}

#[test]
fn test_serde_summary() {
    roundtrip(&sample().summary());
}

#[test]
fn test_serde_encode_table_rejects_short_array() {
    let result: Result<EncodeTable, _> = serde_json::from_str("[1, 2, 3]");
    assert!(result.is_err());
}
