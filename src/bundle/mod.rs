//! Embedded file bundles
//!
//! A [`Bundle`] is an immutable, named set of files with a uniform
//! compression policy. Bundles are produced by
//! [`BundleBuilder`](crate::BundleBuilder) and are read-only afterwards,
//! except for the plaintext cache that buffered reads may populate.
//!
//! There are two read paths:
//! - [`Bundle::read_bytes`] materializes the file and, for bundles that
//!   retain plaintext, caches the inflated bytes on first use.
//! - [`Bundle::open_reader`] streams the file and never touches the cache.

mod reader;
mod record;

use std::borrow::Cow;
use std::collections::HashMap;

use crate::codec;
use crate::error::Result;
use crate::error::bundle::file_not_found;

pub use reader::BundleReader;
pub(crate) use record::FileRecord;

/// Named, immutable collection of embedded files
pub struct Bundle {
    name: String,
    files: HashMap<String, FileRecord>,
    paths: Vec<String>,
    compressed: bool,
    retain_uncompressed: bool,
}

impl Bundle {
    pub(crate) fn new(
        name: String,
        files: HashMap<String, FileRecord>,
        compressed: bool,
        retain_uncompressed: bool,
    ) -> Self {
        let mut paths: Vec<String> = files.keys().cloned().collect();
        paths.sort();

        Self {
            name,
            files,
            paths,
            compressed,
            retain_uncompressed,
        }
    }

    /// Bundle name, used as the registry key
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All paths in lexicographic order
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Whether entries are stored compressed and inflated on read
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Whether buffered reads cache their inflated bytes
    pub fn retains_uncompressed(&self) -> bool {
        self.retain_uncompressed
    }

    /// Number of files
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Size of the entry as embedded, before any inflating
    pub fn stored_len(&self, path: &str) -> Result<usize> {
        Ok(self.record(path)?.stored().len())
    }

    /// Read a whole file into memory
    ///
    /// Raw bundles and cache hits borrow; a fresh inflate returns owned bytes
    /// unless the bundle retains plaintext, in which case the result is
    /// cached on the entry and borrowed from there on every later call.
    ///
    /// # Errors
    ///
    /// [`FileNotFound`](crate::EmbundleError::FileNotFound) when `path` is
    /// absent, [`DecodeFailed`](crate::EmbundleError::DecodeFailed) when the
    /// stored bytes are not a valid zlib stream.
    pub fn read_bytes(&self, path: &str) -> Result<Cow<'_, [u8]>> {
        let record = self.record(path)?;

        if !self.compressed {
            return Ok(Cow::Borrowed(record.stored()));
        }
        if let Some(plain) = record.cached() {
            return Ok(Cow::Borrowed(plain));
        }

        let plain = codec::decompress(path, record.stored())?;
        tracing::debug!(
            bundle = %self.name,
            path,
            stored = record.stored().len(),
            inflated = plain.len(),
            "inflated bundle entry"
        );

        if self.retain_uncompressed {
            return Ok(Cow::Borrowed(record.retain(plain)));
        }
        Ok(Cow::Owned(plain))
    }

    /// Open a file as a byte stream
    ///
    /// Compressed entries without a cached copy are inflated lazily while
    /// the reader is consumed. Only the zlib header is checked up front.
    /// This never populates the plaintext cache.
    pub fn open_reader(&self, path: &str) -> Result<BundleReader<'_>> {
        let record = self.record(path)?;

        if !self.compressed {
            return Ok(BundleReader::buffered(record.stored()));
        }
        if let Some(plain) = record.cached() {
            return Ok(BundleReader::buffered(plain));
        }

        codec::check_header(path, record.stored())?;
        Ok(BundleReader::inflating(record.stored()))
    }

    fn record(&self, path: &str) -> Result<&FileRecord> {
        self.files
            .get(path)
            .ok_or_else(|| file_not_found(&self.name, path))
    }
}

impl std::fmt::Debug for Bundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bundle")
            .field("name", &self.name)
            .field("files", &self.paths.len())
            .field("compressed", &self.compressed)
            .field("retain_uncompressed", &self.retain_uncompressed)
            .finish()
    }
}
