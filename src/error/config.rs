//! Configuration errors

use super::PolyfillError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PolyfillError {
    PolyfillError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> PolyfillError {
    PolyfillError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PolyfillError {
    PolyfillError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
