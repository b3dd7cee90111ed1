//! Storage for a single embedded file

use std::borrow::Cow;
use std::sync::OnceLock;

/// One embedded file: its bytes at rest plus an optional plaintext cache
///
/// `stored` is compressed or raw depending on the owning bundle's policy.
/// `cache` is only ever set by a decompressing buffered read of a bundle
/// that retains plaintext.
pub(crate) struct FileRecord {
    pub(super) stored: Cow<'static, [u8]>,
    pub(super) cache: OnceLock<Vec<u8>>,
}

impl FileRecord {
    pub(crate) fn new(stored: Cow<'static, [u8]>) -> Self {
        Self {
            stored,
            cache: OnceLock::new(),
        }
    }

    pub(crate) fn stored(&self) -> &[u8] {
        &self.stored
    }

    pub(crate) fn cached(&self) -> Option<&[u8]> {
        self.cache.get().map(Vec::as_slice)
    }

    /// Populate the cache unless another reader got there first.
    ///
    /// Returns whichever plaintext ended up cached; both are identical
    /// since inflating is deterministic.
    pub(crate) fn retain(&self, plain: Vec<u8>) -> &[u8] {
        self.cache.get_or_init(|| plain)
    }
}
