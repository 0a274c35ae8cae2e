//! Auth source descriptors.
//!
//! Callers hand the resolver one of two descriptor shapes: the generic
//! client options used by operators, or the declarative server spec that
//! arrives as part of an API object. Both expose their raw sources through
//! the [`AuthSource`] trait so the resolver never inspects concrete types.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// A descriptor carrying raw credential and nkey sources.
///
/// At most one of the two is expected to be set for a given entity; when
/// both are set the credentials bundle wins.
pub trait AuthSource {
    /// Raw credentials bundle source: inline `creds:...` text, a
    /// `base64:...` blob, or a path to an existing file.
    fn credentials_source(&self) -> Option<&str>;

    /// Raw nkey seed source, same accepted forms as the credentials source.
    fn nkey_source(&self) -> Option<&str>;
}

/// Generic connection options shape supplied by operator configuration.
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    /// Credentials bundle source.
    pub credentials: Option<SecretString>,
    /// Nkey seed source.
    pub nkey: Option<SecretString>,
}

impl AuthSource for ConnectOptions {
    fn credentials_source(&self) -> Option<&str> {
        self.credentials.as_ref().map(|s| s.expose_secret())
    }

    fn nkey_source(&self) -> Option<&str> {
        self.nkey.as_ref().map(|s| s.expose_secret())
    }
}

/// Declarative server spec shape, deserialized from an API object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerSpec {
    /// Credentials bundle source.
    pub creds: Option<SecretString>,
    /// Nkey seed source.
    pub nkey: Option<SecretString>,
}

impl AuthSource for ServerSpec {
    fn credentials_source(&self) -> Option<&str> {
        self.creds.as_ref().map(|s| s.expose_secret())
    }

    fn nkey_source(&self) -> Option<&str> {
        self.nkey.as_ref().map(|s| s.expose_secret())
    }
}
