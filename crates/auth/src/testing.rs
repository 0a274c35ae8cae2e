//! Testing utilities for auth resolution tests.
//!
//! Available when running tests or when the `test-utils` feature is
//! enabled.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::Result;
use crate::kind::AuthKind;
use crate::store::{CredentialStore, content_digest};

/// In-memory credential store so resolver and materializer tests never
/// touch the real filesystem.
///
/// Paths are virtual (`/memory-store/<kind>/<digest><ext>`) but follow the
/// same digest-to-path mapping as the filesystem store.
#[derive(Debug)]
pub struct MemoryStore {
    root: PathBuf,
    entries: Mutex<HashMap<PathBuf, Vec<u8>>>,
    writes: AtomicUsize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/memory-store"),
            entries: Mutex::new(HashMap::new()),
            writes: AtomicUsize::new(0),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes stored at `path`, if any.
    pub fn contents(&self, path: &std::path::Path) -> Option<Vec<u8>> {
        self.entries.lock().unwrap().get(path).cloned()
    }

    /// Number of inserts that actually stored new content (cache hits are
    /// not counted).
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl CredentialStore for MemoryStore {
    fn path_for(&self, digest: &str, kind: AuthKind) -> PathBuf {
        self.root
            .join(kind.as_str())
            .join(format!("{digest}{}", kind.extension()))
    }

    fn exists(&self, digest: &str, kind: AuthKind) -> bool {
        let path = self.path_for(digest, kind);
        self.entries.lock().unwrap().contains_key(&path)
    }

    fn put(&self, contents: &[u8], kind: AuthKind) -> Result<PathBuf> {
        let digest = content_digest(contents);
        let path = self.path_for(&digest, kind);
        let mut entries = self.entries.lock().unwrap();
        if !entries.contains_key(&path) {
            entries.insert(path.clone(), contents.to_vec());
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(path)
    }
}
