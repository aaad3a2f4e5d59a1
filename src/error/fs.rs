//! File system errors

use std::path::Path;

use super::PolyfillError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PolyfillError {
    PolyfillError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> PolyfillError {
    PolyfillError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a directory creation failed error
pub fn create_dir_failed(path: impl Into<String>, reason: impl Into<String>) -> PolyfillError {
    PolyfillError::DirectoryCreateFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a locale directory read failed error
pub fn directory_read_failed(path: impl Into<String>, reason: impl Into<String>) -> PolyfillError {
    PolyfillError::DirectoryReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub(crate) fn file_read_error(path: &Path, e: &std::io::Error) -> PolyfillError {
    read_failed(path.display().to_string(), e.to_string())
}

pub(crate) fn file_write_error(path: &Path, e: &std::io::Error) -> PolyfillError {
    write_failed(path.display().to_string(), e.to_string())
}
