//! charmap-core: Backend-independent data types and table construction.
//!
//! This crate provides the foundational types ([`RawMapping`], [`Utf8Enc`],
//! [`EncodeTable`], [`Charmap`]) and the table builder that turns a 256-entry
//! byte -> character mapping into static decode and encode tables for a
//! single-byte codepage. It performs no I/O.

pub mod ascii;
pub mod builder;
pub mod charmap;
pub mod error;
pub mod raw;
pub mod table;

#[cfg(feature = "serde")]
mod serde_array;

pub use ascii::{ASCII, is_ascii_superset};
pub use builder::{build_charmap, build_decode_table, build_encode_table};
pub use charmap::{Charmap, CharmapSummary};
pub use error::CharmapError;
pub use raw::{RawMapping, UNMAPPED};
pub use table::{CHAR_MASK, EncodeKey, EncodeTable, TABLE_SIZE, Utf8Enc};
