//! Bundle and registry lookup errors

use super::EmbundleError;

/// Creates a file not found error for a path missing from a bundle
pub fn file_not_found(bundle: impl Into<String>, path: impl Into<String>) -> EmbundleError {
    EmbundleError::FileNotFound {
        bundle: bundle.into(),
        path: path.into(),
    }
}

/// Creates a bundle not found error for a name missing from a registry
pub fn not_found(name: impl Into<String>) -> EmbundleError {
    EmbundleError::BundleNotFound { name: name.into() }
}
