//! charmap: build static single-byte codepage tables and emit them as Rust.
//!
//! This is the public API facade crate for charmap-rs. It re-exports types
//! from charmap-core and charmap-parse, and adds encoding definitions, the
//! fetch -> parse -> build pipeline, and a Rust source emitter.
//!
//! # Architecture
//!
//! - **charmap-core**: table data types and the table builder
//! - **charmap-parse**: UCM parser and mapping sources
//! - **charmap** (this crate): manifest, pipeline and code emission
//!
//! # Example
//!
//! ```no_run
//! use charmap::{DefaultSource, Manifest, RustEmitter, EmitOptions, build_all};
//!
//! let manifest = Manifest::load("encodings.json")?;
//! let built = build_all(&manifest, &DefaultSource::new("."))?;
//! let source = RustEmitter::new(EmitOptions::default()).to_rust(&built);
//! std::fs::write("tables.rs", source)?;
//! # Ok::<(), charmap::Error>(())
//! ```

pub mod emit;
pub mod encoding;
pub mod error;
pub mod pipeline;

pub use charmap_core;
pub use charmap_parse;

pub use charmap_core::{
    Charmap, CharmapError, CharmapSummary, EncodeKey, EncodeTable, RawMapping, UNMAPPED, Utf8Enc,
    build_charmap,
};
pub use charmap_parse::{
    DefaultSource, FileSource, MappingSource, MemorySource, ParseError, UcmHeader, UcmMapping,
};
pub use emit::{EmitOptions, RustEmitter};
pub use encoding::{DEFAULT_REPLACEMENT, EncodingDef, Manifest};
pub use error::Error;
pub use pipeline::{BuiltEncoding, build_all, build_encoding};
