//! Error types and handling for polyfill-locales
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Convenience constructors live in sub-modules by error domain:
//! - [`config`]: Base configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for polyfill-locales operations
#[derive(Error, Diagnostic, Debug)]
pub enum PolyfillError {
    // Locale source errors
    #[error("Failed to read locale directory: {path}: {reason}")]
    #[diagnostic(
        code(polyfill_locales::locale::directory_read_failed),
        help("Check that the upstream package is installed (npm install) or pass --source-dir")
    )]
    DirectoryReadFailed { path: String, reason: String },

    #[error("Invalid locale identifier '{name}' derived from {file}")]
    #[diagnostic(
        code(polyfill_locales::locale::invalid),
        help("Locale identifiers may only contain ASCII letters, digits, '-' and '_'")
    )]
    InvalidLocale { name: String, file: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(polyfill_locales::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(polyfill_locales::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(polyfill_locales::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(polyfill_locales::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(polyfill_locales::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(polyfill_locales::fs::create_dir_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    // Check mode
    #[error("{count} locale artifact(s) are out of date")]
    #[diagnostic(
        code(polyfill_locales::sync::out_of_date),
        help("Run 'polyfill-locales sync' without --check to update them")
    )]
    OutOfDate { count: usize },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(polyfill_locales::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PolyfillError>;
