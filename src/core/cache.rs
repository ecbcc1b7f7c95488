//! File system helpers and the in-memory LRU cache
//!
//! - data directory resolution (platform cache dir by default)
//! - whole-file reads and atomic whole-file writes
//! - a small thread-safe LRU used to memoise parsed documents

use lru::LruCache;
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::Mutex,
};

/// Path: ~/.cache/fpl-draft
pub fn default_data_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("fpl-draft")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

/// Sibling path used to stage a write before it is renamed into place.
pub fn staging_path(path: &Path) -> PathBuf {
    sibling_path(path, ".tmp")
}

/// Sibling path holding the previous version of a file while a batch of
/// staged writes is committed.
pub fn backup_path(path: &Path) -> PathBuf {
    sibling_path(path, ".bak")
}

/// Write `contents` to the staging path next to `path` and return it.
pub fn stage_string(path: &Path, contents: &str) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let staged = staging_path(path);
    let mut f = fs::File::create(&staged)?;
    f.write_all(contents.as_bytes())?;
    f.sync_all()?;
    Ok(staged)
}

/// Write a string to file; readers never observe a half-written file.
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    let staged = stage_string(path, contents)?;
    fs::rename(staged, path)
}

/// Thread-safe LRU memo shared by the parallel build phase.
pub struct MemoryCache<K: Hash + Eq, V: Clone> {
    inner: Mutex<LruCache<K, V>>,
}

impl<K: Hash + Eq, V: Clone> MemoryCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(cap)),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let mut cache = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        cache.get(key).cloned()
    }

    pub fn put(&self, key: K, value: V) {
        let mut cache = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        cache.put(key, value);
    }
}
