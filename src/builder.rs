//! Bundle construction
//!
//! [`BundleBuilder`] is consumed by every step, so a chain like
//!
//! ```
//! use embundle::{BundleBuilder, Registry};
//!
//! # fn main() -> embundle::Result<()> {
//! let registry = Registry::new();
//! let bundle = BundleBuilder::new("assets")
//!     .add_file("b.txt", b"second" as &[u8])?
//!     .add_file("a.txt", b"first" as &[u8])?
//!     .build_into(&registry)?;
//!
//! assert_eq!(bundle.paths(), ["a.txt", "b.txt"]);
//! # Ok(())
//! # }
//! ```
//!
//! is the only way to mutate one, and nothing is shared between steps.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::bundle::{Bundle, FileRecord};
use crate::codec;
use crate::error::Result;
use crate::registry::Registry;

/// Accumulates files and policy for a [`Bundle`]
#[derive(Debug)]
pub struct BundleBuilder {
    name: String,
    files: BTreeMap<String, StagedFile>,
    compressed: bool,
    retain_uncompressed: bool,
    decompress_on_finalize: bool,
}

#[derive(Debug)]
struct StagedFile {
    bytes: Cow<'static, [u8]>,
    /// Already inflated by `add_file`
    inflated: bool,
}

impl BundleBuilder {
    /// Start a bundle that will be registered under `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: BTreeMap::new(),
            compressed: false,
            retain_uncompressed: false,
            decompress_on_finalize: false,
        }
    }

    /// Input bytes are zlib streams, inflated on read
    #[must_use]
    pub fn compressed(mut self) -> Self {
        self.compressed = true;
        self
    }

    /// Cache inflated bytes on the first buffered read of each path
    #[must_use]
    pub fn retain_uncompressed(mut self) -> Self {
        self.retain_uncompressed = true;
        self
    }

    /// Inflate compressed input once, during construction
    ///
    /// The finished bundle reports itself as uncompressed and never inflates
    /// at read time.
    #[must_use]
    pub fn decompress_on_finalize(mut self) -> Self {
        self.decompress_on_finalize = true;
        self
    }

    fn inflates_input(&self) -> bool {
        self.compressed && self.decompress_on_finalize
    }

    /// Stage a file. Re-adding a path replaces the earlier entry.
    ///
    /// # Errors
    ///
    /// With both [`compressed`](Self::compressed) and
    /// [`decompress_on_finalize`](Self::decompress_on_finalize) set, the bytes
    /// are inflated right away and corrupt input fails with
    /// [`DecodeFailed`](crate::EmbundleError::DecodeFailed).
    pub fn add_file(
        mut self,
        path: impl Into<String>,
        bytes: impl Into<Cow<'static, [u8]>>,
    ) -> Result<Self> {
        let path = path.into();
        let bytes = bytes.into();

        let staged = if self.inflates_input() {
            StagedFile {
                bytes: Cow::Owned(codec::decompress(&path, &bytes)?),
                inflated: true,
            }
        } else {
            StagedFile {
                bytes,
                inflated: false,
            }
        };

        if self.files.insert(path, staged).is_some() {
            tracing::debug!(bundle = %self.name, "replaced duplicate bundle path");
        }
        Ok(self)
    }

    /// Finish the bundle and register it in [`Registry::global`]
    pub fn build(self) -> Result<Arc<Bundle>> {
        self.build_into(Registry::global())
    }

    /// Finish the bundle and register it in `registry`
    ///
    /// A bundle already registered under the same name is replaced.
    pub fn build_into(self, registry: &Registry) -> Result<Arc<Bundle>> {
        let bundle = Arc::new(self.finish()?);
        registry.register(Arc::clone(&bundle));
        Ok(bundle)
    }

    /// Finalize without registering
    pub(crate) fn finish(self) -> Result<Bundle> {
        let inflate = self.inflates_input();
        let mut files = HashMap::with_capacity(self.files.len());

        for (path, staged) in self.files {
            // Entries staged before the policy was complete are still compressed
            let bytes = if inflate && !staged.inflated {
                Cow::Owned(codec::decompress(&path, &staged.bytes)?)
            } else {
                staged.bytes
            };
            files.insert(path, FileRecord::new(bytes));
        }

        tracing::debug!(
            bundle = %self.name,
            files = files.len(),
            compressed = self.compressed && !inflate,
            retain_uncompressed = self.retain_uncompressed,
            "built bundle"
        );

        Ok(Bundle::new(
            self.name,
            files,
            self.compressed && !inflate,
            self.retain_uncompressed,
        ))
    }
}
