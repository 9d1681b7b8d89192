//! Mapping sources: where UCM text comes from.
//!
//! A locator is either a filesystem path, a `file:` URL (`file:ebcdic-k.ucm`,
//! `file:///usr/share/ucm/ibm-037.ucm`), or, with the `http` feature, an
//! `http://`/`https://` URL. Relative paths resolve against the source's
//! root directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ParseError;
use crate::ucm::UcmMapping;

/// Retrieves raw mapping text for a locator.
pub trait MappingSource {
    /// Fetch the bytes behind `locator`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Fetch`] if the data cannot be retrieved.
    fn fetch(&self, locator: &str) -> Result<Vec<u8>, ParseError>;
}

impl<S: MappingSource + ?Sized> MappingSource for &S {
    fn fetch(&self, locator: &str) -> Result<Vec<u8>, ParseError> {
        (**self).fetch(locator)
    }
}

/// Fetch `locator` from `source` and parse it as UCM.
///
/// # Errors
///
/// Propagates fetch errors and [`ParseError::SourceFormat`].
pub fn load_ucm<S: MappingSource + ?Sized>(
    source: &S,
    locator: &str,
) -> Result<UcmMapping, ParseError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(locator, "fetching mapping");
    let data = source.fetch(locator)?;
    UcmMapping::parse(&data, locator)
}

fn fetch_error(locator: &str, reason: impl ToString) -> ParseError {
    ParseError::Fetch {
        locator: locator.to_string(),
        reason: reason.to_string(),
    }
}

/// Returns whether `locator` names a network resource.
pub fn is_network_locator(locator: &str) -> bool {
    locator.starts_with("http://") || locator.starts_with("https://")
}

/// Reads mapping files from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(".")
    }
}

impl FileSource {
    /// Create a source resolving relative locators against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory relative locators resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a path or `file:` locator to a filesystem path.
    pub fn resolve(&self, locator: &str) -> PathBuf {
        let path = locator
            .strip_prefix("file://")
            .or_else(|| locator.strip_prefix("file:"))
            .unwrap_or(locator);
        // Absolute paths replace the root on join.
        self.root.join(path)
    }
}

impl MappingSource for FileSource {
    fn fetch(&self, locator: &str) -> Result<Vec<u8>, ParseError> {
        let path = self.resolve(locator);
        std::fs::read(&path).map_err(|e| fetch_error(locator, format!("{}: {e}", path.display())))
    }
}

/// Fetches mapping files over HTTP(S) with a blocking client.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpSource {
    /// Create a source with a default client.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "http")]
impl MappingSource for HttpSource {
    fn fetch(&self, locator: &str) -> Result<Vec<u8>, ParseError> {
        let response = self
            .client
            .get(locator)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| fetch_error(locator, e))?;
        let body = response.bytes().map_err(|e| fetch_error(locator, e))?;
        Ok(body.to_vec())
    }
}

/// Dispatches by locator scheme: network URLs to HTTP, everything else to
/// the filesystem.
#[derive(Debug, Clone, Default)]
pub struct DefaultSource {
    file: FileSource,
    #[cfg(feature = "http")]
    http: HttpSource,
}

impl DefaultSource {
    /// Create a source whose relative paths resolve against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            file: FileSource::new(root),
            #[cfg(feature = "http")]
            http: HttpSource::new(),
        }
    }
}

impl MappingSource for DefaultSource {
    fn fetch(&self, locator: &str) -> Result<Vec<u8>, ParseError> {
        if is_network_locator(locator) {
            #[cfg(feature = "http")]
            return self.http.fetch(locator);
            #[cfg(not(feature = "http"))]
            return Err(fetch_error(
                locator,
                "network locators require the `http` feature",
            ));
        }
        self.file.fetch(locator)
    }
}

/// An in-memory source keyed by locator.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `data` under `locator`.
    pub fn insert(&mut self, locator: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.entries.insert(locator.into(), data.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, locator: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(locator, data);
        self
    }
}

impl MappingSource for MemorySource {
    fn fetch(&self, locator: &str) -> Result<Vec<u8>, ParseError> {
        self.entries
            .get(locator)
            .cloned()
            .ok_or_else(|| fetch_error(locator, "no such entry"))
    }
}
