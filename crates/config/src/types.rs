//! Configuration types for the credential cache.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_CREDS_DIR, DEFAULT_KEYS_DIR};

/// Locations of the on-disk credential cache.
///
/// The defaults reproduce the fixed account layout existing deployments
/// expect; tests and non-standard installs inject their own directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Directory holding materialized credentials bundles (`.creds` files).
    pub creds_dir: PathBuf,
    /// Directory holding materialized nkey seeds (`.nk` files).
    pub keys_dir: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            creds_dir: PathBuf::from(DEFAULT_CREDS_DIR),
            keys_dir: PathBuf::from(DEFAULT_KEYS_DIR),
        }
    }
}

impl CacheConfig {
    /// Creates a config with both cache directories rooted under `root`.
    ///
    /// Convenience for tests and single-volume deployments.
    pub fn under_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            creds_dir: root.join("creds"),
            keys_dir: root.join("keys"),
        }
    }
}
