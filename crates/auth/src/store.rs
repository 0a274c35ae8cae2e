//! Content-addressed credential store.
//!
//! Decoded credential bytes are cached under a path derived from their
//! digest, so byte-identical content always lands on the same file and
//! repeated materializations are free. Entries are never deleted; the
//! cache is treated as immutable once written.

use std::fs;
use std::path::{Path, PathBuf};

use md5::{Digest, Md5};
use nack_config::CacheConfig;

use crate::error::Result;
use crate::kind::AuthKind;

/// Lowercase hex digest used as the cache key for decoded credential bytes.
///
/// MD5 keeps the on-disk layout compatible with existing account volumes;
/// the digest is a cache key, not a security boundary.
pub fn content_digest(contents: &[u8]) -> String {
    hex::encode(Md5::digest(contents))
}

/// A content-addressed store for decoded credential bytes.
pub trait CredentialStore {
    /// Deterministic digest-to-path mapping for entries of `kind`.
    fn path_for(&self, digest: &str, kind: AuthKind) -> PathBuf;

    /// Whether an entry with this digest is already present.
    fn exists(&self, digest: &str, kind: AuthKind) -> bool;

    /// Inserts decoded bytes, returning their content-addressed path.
    ///
    /// Inserting content that is already present is a silent no-op
    /// returning the existing path.
    fn put(&self, contents: &[u8], kind: AuthKind) -> Result<PathBuf>;
}

/// Store backed by per-kind cache directories on the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FsStore {
    config: CacheConfig,
}

impl FsStore {
    /// Creates a store over the given cache directories.
    pub fn new(config: CacheConfig) -> Self {
        Self { config }
    }

    /// The cache directory layout this store writes into.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    fn base_dir(&self, kind: AuthKind) -> &Path {
        match kind {
            AuthKind::Credentials => &self.config.creds_dir,
            AuthKind::Nkey => &self.config.keys_dir,
        }
    }
}

impl CredentialStore for FsStore {
    fn path_for(&self, digest: &str, kind: AuthKind) -> PathBuf {
        self.base_dir(kind)
            .join(format!("{digest}{}", kind.extension()))
    }

    fn exists(&self, digest: &str, kind: AuthKind) -> bool {
        self.path_for(digest, kind).exists()
    }

    fn put(&self, contents: &[u8], kind: AuthKind) -> Result<PathBuf> {
        let digest = content_digest(contents);
        let target = self.path_for(&digest, kind);
        if target.exists() {
            tracing::debug!(path = %target.display(), "credential cache hit");
            return Ok(target);
        }

        let dir = self.base_dir(kind);
        create_cache_dir(dir)?;

        // Write to a uniquely named sibling and rename into place, so a
        // concurrent materialization of the same content never observes a
        // partially written cache file. Both writers produce identical
        // bytes, so whichever rename lands last is equivalent.
        let tmp = dir.join(format!("{digest}.{}.tmp", uuid::Uuid::new_v4()));
        if let Err(err) = write_cache_file(&tmp, contents).and_then(|_| fs::rename(&tmp, &target)) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }

        tracing::info!("cache to new file: {}", target.display());
        Ok(target)
    }
}

#[cfg(unix)]
fn create_cache_dir(dir: &Path) -> std::io::Result<()> {
    use nack_config::constants::CACHE_FILE_MODE;
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new()
        .recursive(true)
        .mode(CACHE_FILE_MODE)
        .create(dir)
}

#[cfg(not(unix))]
fn create_cache_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn write_cache_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use nack_config::constants::CACHE_FILE_MODE;
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(CACHE_FILE_MODE)
        .open(path)?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_cache_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    fs::write(path, contents)
}
