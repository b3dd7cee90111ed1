//! File system errors

use std::path::Path;

use super::EmbundleError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> EmbundleError {
    EmbundleError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> EmbundleError {
    EmbundleError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an error for a directory passed where a file was expected
pub fn not_a_file(path: &Path) -> EmbundleError {
    EmbundleError::NotAFile {
        path: path.display().to_string(),
    }
}

/// Creates an invalid glob error
pub fn invalid_glob(pattern: impl Into<String>, reason: impl ToString) -> EmbundleError {
    EmbundleError::InvalidGlob {
        pattern: pattern.into(),
        reason: reason.to_string(),
    }
}
