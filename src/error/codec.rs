//! Compression errors

use super::EmbundleError;

/// Creates a decode error for stored bytes that fail to inflate
pub fn decode_failed(path: impl Into<String>, reason: impl ToString) -> EmbundleError {
    EmbundleError::DecodeFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates an encode error for input that fails to compress
pub fn encode_failed(path: impl Into<String>, reason: impl ToString) -> EmbundleError {
    EmbundleError::EncodeFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}
