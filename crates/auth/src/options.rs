//! Connection options produced by the resolver.

use std::path::{Path, PathBuf};

/// An authentication option to apply when establishing a NATS connection.
///
/// The resolver appends at most one of these per descriptor; the caller
/// passes the accumulated list to connection establishment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOption {
    /// Authenticate with the credentials bundle at this path.
    CredentialsFile(PathBuf),
    /// Authenticate by signing the server challenge with the nkey seed
    /// stored at this path.
    NkeySeedFile(PathBuf),
}

impl AuthOption {
    /// The credential file backing this option.
    pub fn path(&self) -> &Path {
        match self {
            Self::CredentialsFile(path) | Self::NkeySeedFile(path) => path,
        }
    }
}
