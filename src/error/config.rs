//! Configuration errors

use super::EmbundleError;

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl ToString) -> EmbundleError {
    EmbundleError::ConfigReadFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl ToString) -> EmbundleError {
    EmbundleError::ConfigParseFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> EmbundleError {
    EmbundleError::ConfigInvalid {
        message: message.into(),
    }
}
