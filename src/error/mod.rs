//! Error types and handling for embundle
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Bundle and registry lookup errors
//! - [`codec`]: Compression errors
//! - [`config`]: Generator configuration errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod codec;
pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for embundle operations
#[derive(Error, Diagnostic, Debug)]
pub enum EmbundleError {
    // Bundle errors
    #[error("File '{path}' not found in bundle '{bundle}'")]
    #[diagnostic(
        code(embundle::bundle::file_not_found),
        help("Paths are matched exactly; use Bundle::paths() to list what was embedded")
    )]
    FileNotFound { bundle: String, path: String },

    #[error("Bundle '{name}' not found")]
    #[diagnostic(
        code(embundle::registry::not_found),
        help("Bundles are registered when they are built; make sure the bundle was built first")
    )]
    BundleNotFound { name: String },

    // Codec errors
    #[error("Failed to decompress '{path}': {reason}")]
    #[diagnostic(
        code(embundle::codec::decode_failed),
        help("The stored bytes are not a valid zlib stream; regenerate the bundle")
    )]
    DecodeFailed { path: String, reason: String },

    #[error("Failed to compress '{path}': {reason}")]
    #[diagnostic(code(embundle::codec::encode_failed))]
    EncodeFailed { path: String, reason: String },

    // Generator input errors
    #[error("Invalid exclude pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(embundle::generate::invalid_glob),
        help("Exclude patterns use glob syntax, e.g. '**/*.tmp' or 'assets/private'")
    )]
    InvalidGlob { pattern: String, reason: String },

    #[error("Not a file: {path}")]
    #[diagnostic(
        code(embundle::generate::not_a_file),
        help("Pass --recursive to bundle the contents of a directory")
    )]
    NotAFile { path: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(embundle::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(embundle::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(embundle::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(embundle::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(embundle::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },
}

impl EmbundleError {
    /// Whether this error is a recoverable lookup miss (file or bundle)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EmbundleError::FileNotFound { .. } | EmbundleError::BundleNotFound { .. }
        )
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, EmbundleError>;
