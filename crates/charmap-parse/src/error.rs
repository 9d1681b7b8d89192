//! Error types for the parsing and fetching layers.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides [`ParseError`]
//! which also wraps [`CharmapError`] so a whole fetch -> parse -> build
//! pipeline can share one error type.

use charmap_core::CharmapError;
use thiserror::Error;

use crate::ucm::MIN_MAPPED_BYTES;

/// Error type for mapping sources and the UCM parser.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Too few bytes received an explicit mapping; the source is probably
    /// not a single-byte UCM file.
    #[error("{locator}: only {found} bytes mapped, need at least {min} (wrong page format?)", min = MIN_MAPPED_BYTES)]
    SourceFormat {
        /// Where the mapping text came from.
        locator: String,
        /// Number of distinct bytes that were mapped.
        found: usize,
    },

    /// The mapping source could not retrieve the data.
    #[error("{locator}: fetch failed: {reason}")]
    Fetch {
        /// The path or URL that was requested.
        locator: String,
        /// Underlying cause.
        reason: String,
    },

    /// Error reading mapping data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A table construction error.
    #[error(transparent)]
    Core(#[from] CharmapError),
}
