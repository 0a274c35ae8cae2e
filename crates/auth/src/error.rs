//! Error types for auth source resolution and materialization.

use std::fmt;

use crate::kind::AuthKind;

/// Result type alias for auth resolution operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur while resolving an auth source to a credential file.
///
/// `Display`, `Error`, and `From` are implemented by hand rather than via
/// `thiserror`: the derive unconditionally treats the `source` field of
/// `UnrecognizedSourceFormat` as the error source, but that field is the raw
/// auth source string (a `String`), not a nested error.
#[derive(Debug)]
pub enum AuthError {
    /// Descriptor shape not recognized. Only reachable through the
    /// type-erased resolver entry point; the trait-based API rules this
    /// out at compile time.
    UnsupportedSourceType,

    /// Auth kind label is not one of the known kinds.
    UnsupportedAuthKind(String),

    /// Raw source has no `<prefix>:<payload>` separator and does not name
    /// an existing file.
    UnrecognizedSourceFormat { source: String, kind: AuthKind },

    /// Source has a separator but the prefix is neither the kind label
    /// nor `base64`.
    UnsupportedEncoding { prefix: String },

    /// Malformed base64 payload.
    Base64Decode(base64::DecodeError),

    /// Cache directory creation or file write failed.
    Io(std::io::Error),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSourceType => write!(f, "unsupported auth source type"),
            Self::UnsupportedAuthKind(kind) => write!(f, "unknown auth kind: {kind}"),
            Self::UnrecognizedSourceFormat { source, kind } => {
                write!(f, "unsupported {kind} source and no such file exists: {source}")
            }
            Self::UnsupportedEncoding { prefix } => {
                write!(f, "unsupported source encoding prefix: {prefix:?}")
            }
            Self::Base64Decode(err) => write!(f, "invalid base64 payload: {err}"),
            Self::Io(err) => write!(f, "credential cache I/O error: {err}"),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Base64Decode(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<base64::DecodeError> for AuthError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64Decode(err)
    }
}

impl From<std::io::Error> for AuthError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl AuthError {
    /// Check if this error is retryable.
    ///
    /// Filesystem failures may be transient (permissions, disk pressure);
    /// everything else requires a configuration or caller fix.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
