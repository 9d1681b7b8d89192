//! charmap-parse: mapping-file parsing and mapping sources.
//!
//! This crate turns UCM-style mapping text into a
//! [`RawMapping`](charmap_core::RawMapping) and fetches that text from local
//! files or (with the `http` feature) over the network. It depends on
//! charmap-core for shared data types.

pub mod error;
pub mod source;
pub mod ucm;

pub use charmap_core;
pub use error::ParseError;
pub use source::{DefaultSource, FileSource, MappingSource, MemorySource, load_ucm};
pub use ucm::{MIN_MAPPED_BYTES, UcmHeader, UcmMapping};

#[cfg(feature = "http")]
pub use source::HttpSource;
