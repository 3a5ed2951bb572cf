//! Error types for dasmproj
//!
//! Provides a unified error type for loading, saving, and converting
//! project files. Decode failures are unrecoverable: a failing load never
//! yields a partial project.

use thiserror::Error;

/// Result type alias using ProjectError
pub type Result<T> = std::result::Result<T, ProjectError>;

/// Unified error type for project file operations
#[derive(Debug, Error)]
pub enum ProjectError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Read-side Errors
    // -------------------------------------------------------------------------
    /// Fewer bytes were available than a field demands.
    #[error("truncated stream: {0}")]
    TruncatedStream(String),

    /// The bytes were present but did not decode: invalid UTF-8, a negative
    /// declared length, a malformed gzip wrapper, or a bad JSON document.
    #[error("decode error: {0}")]
    Decode(String),

    /// The version byte is newer than this codec understands. Rejected
    /// outright: newer revisions may append sections we cannot locate.
    #[error("unsupported format version {found} (max supported is {max})")]
    UnsupportedVersion { found: u8, max: u8 },

    // -------------------------------------------------------------------------
    // Write-side Errors
    // -------------------------------------------------------------------------
    /// A value cannot be represented in the format, e.g. a string longer
    /// than the 2-byte length prefix allows outside the freeze escape.
    #[error("encode error: {0}")]
    Encode(String),
}
