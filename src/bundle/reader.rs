//! Streaming access to bundle entries

use std::io::{self, Cursor, Read};

use flate2::read::ZlibDecoder;

/// Readable stream over one bundle entry, returned by
/// [`Bundle::open_reader`](super::Bundle::open_reader).
///
/// An inflating reader decodes lazily as it is consumed and cannot be
/// rewound; call `open_reader` again for a fresh pass. Corruption past the
/// stream header surfaces as an [`io::Error`] from `read`.
pub struct BundleReader<'a> {
    inner: Inner<'a>,
}

enum Inner<'a> {
    Buffered(Cursor<&'a [u8]>),
    Inflating(ZlibDecoder<&'a [u8]>),
}

impl<'a> BundleReader<'a> {
    pub(crate) fn buffered(bytes: &'a [u8]) -> Self {
        Self {
            inner: Inner::Buffered(Cursor::new(bytes)),
        }
    }

    pub(crate) fn inflating(stored: &'a [u8]) -> Self {
        Self {
            inner: Inner::Inflating(ZlibDecoder::new(stored)),
        }
    }

    /// Whether bytes are being inflated on the fly
    pub fn is_inflating(&self) -> bool {
        matches!(self.inner, Inner::Inflating(_))
    }
}

impl Read for BundleReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.inner {
            Inner::Buffered(cursor) => cursor.read(buf),
            Inner::Inflating(decoder) => decoder.read(buf),
        }
    }
}

impl std::fmt::Debug for BundleReader<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundleReader")
            .field("inflating", &self.is_inflating())
            .finish_non_exhaustive()
    }
}
