//! Credential materialization.
//!
//! Turns a raw, declaratively-specified auth source into a file on disk
//! that the NATS client can read. A source is one of:
//!
//! - a path to an existing file, returned unchanged;
//! - `<kind>:<text>` inline literal text, with newlines carried as the
//!   two-character sequence `\n`;
//! - `base64:<payload>` for content that does not survive inline embedding.
//!
//! Decoded content is cached content-addressed, so resolving the same
//! source (or a different encoding of the same bytes) repeatedly always
//! yields the same path and writes at most once.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::{AuthError, Result};
use crate::kind::AuthKind;
use crate::store::CredentialStore;

/// Prefix selecting a base64-encoded payload, e.g. `base64:LS0tLS1CRUdJTg==`.
const BASE64_PREFIX: &str = "base64";

/// Resolves a raw auth source into a path holding usable credential bytes.
///
/// # Errors
/// - [`AuthError::UnrecognizedSourceFormat`] if `raw` has no `:` separator
///   and names no existing file.
/// - [`AuthError::UnsupportedEncoding`] if the prefix is neither the kind
///   label nor `base64`.
/// - [`AuthError::Base64Decode`] for a malformed base64 payload.
/// - [`AuthError::Io`] if the cache write fails.
pub fn materialize_auth<S: CredentialStore>(
    store: &S,
    raw: &str,
    kind: AuthKind,
) -> Result<PathBuf> {
    // Pre-provisioned file: hand it back untouched, no decoding or caching.
    if Path::new(raw).exists() {
        tracing::debug!(path = raw, "auth source is an existing file");
        return Ok(PathBuf::from(raw));
    }

    let Some((prefix, payload)) = raw.split_once(':') else {
        return Err(AuthError::UnrecognizedSourceFormat {
            source: raw.to_string(),
            kind,
        });
    };

    let prefix = prefix.trim();
    let contents = if prefix.eq_ignore_ascii_case(kind.as_str()) {
        decode_literal(payload)
    } else if prefix.eq_ignore_ascii_case(BASE64_PREFIX) {
        BASE64.decode(payload.trim())?
    } else {
        return Err(AuthError::UnsupportedEncoding {
            prefix: prefix.to_string(),
        });
    };

    store.put(&contents, kind)
}

/// Inline literal payload: surrounding whitespace is stripped and each
/// two-character `\n` sequence becomes a real newline byte.
fn decode_literal(payload: &str) -> Vec<u8> {
    payload.trim().replace("\\n", "\n").into_bytes()
}
