//! The authentication kinds recognized by the materializer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// The two mutually exclusive NATS authentication artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthKind {
    /// An opaque credentials bundle presented wholesale to the server.
    #[serde(rename = "creds")]
    Credentials,
    /// A secret seed from which a keypair is derived for challenge-response
    /// authentication.
    #[serde(rename = "nkey")]
    Nkey,
}

impl AuthKind {
    /// Label for this kind, used both as the inline-source prefix
    /// (`creds:...`, `nkey:...`) and as the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credentials => "creds",
            Self::Nkey => "nkey",
        }
    }

    /// File extension for cache entries of this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Credentials => ".creds",
            Self::Nkey => ".nk",
        }
    }
}

impl fmt::Display for AuthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthKind {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "creds" => Ok(Self::Credentials),
            "nkey" => Ok(Self::Nkey),
            other => Err(AuthError::UnsupportedAuthKind(other.to_string())),
        }
    }
}
