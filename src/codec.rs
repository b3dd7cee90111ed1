//! Zlib compression shared by the runtime and the generator
//!
//! Bundles use a single fixed format: a zlib stream (RFC 1950) wrapping raw
//! deflate data. The generator compresses with [`compress`], the runtime
//! inflates with [`decompress`] or streams through [`flate2::read::ZlibDecoder`].

use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

use crate::error::Result;
use crate::error::codec::{decode_failed, encode_failed};

/// Default compression level (best compression)
pub const DEFAULT_LEVEL: u32 = 9;

/// Highest level accepted by [`compress`]
pub const MAX_LEVEL: u32 = 9;

/// Compress `data` into a zlib stream
///
/// `label` names the input in error messages (usually the bundle path).
pub fn compress(label: &str, data: &[u8], level: u32) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level.min(MAX_LEVEL)));
    encoder
        .write_all(data)
        .map_err(|e| encode_failed(label, e))?;
    encoder.finish().map_err(|e| encode_failed(label, e))
}

/// Inflate a complete zlib stream into memory
pub fn decompress(label: &str, data: &[u8]) -> Result<Vec<u8>> {
    check_header(label, data)?;

    let mut decoder = ZlibDecoder::new(data);
    let mut plain = Vec::with_capacity(data.len().saturating_mul(2));
    decoder
        .read_to_end(&mut plain)
        .map_err(|e| decode_failed(label, e))?;

    Ok(plain)
}

/// Validate the two-byte zlib header without inflating anything
///
/// Streaming readers decode lazily, so this is the only point where a
/// corrupt entry can be rejected before the caller starts reading.
pub fn check_header(label: &str, data: &[u8]) -> Result<()> {
    let [cmf, flg, ..] = data else {
        return Err(decode_failed(label, "truncated zlib header"));
    };

    if cmf & 0x0f != 8 {
        return Err(decode_failed(label, "unsupported compression method"));
    }
    if cmf >> 4 > 7 {
        return Err(decode_failed(label, "invalid window size"));
    }
    if (u16::from(*cmf) << 8 | u16::from(*flg)) % 31 != 0 {
        return Err(decode_failed(label, "header checksum mismatch"));
    }
    if flg & 0x20 != 0 {
        return Err(decode_failed(label, "preset dictionaries are not supported"));
    }

    Ok(())
}
