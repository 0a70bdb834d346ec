//! Memoizing loader keyed by file path

use super::event::EventTable;
use super::loader::load_events;
use crate::error::LoadError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

struct CachedTable {
    table: Arc<EventTable>,
    modified: Option<SystemTime>,
}

/// Process-lifetime cache of loaded tables
///
/// An entry is reused until the file's modification time changes or the
/// entry is dropped via `invalidate`/`clear`. Failed loads are not cached.
pub struct TableCache {
    entries: HashMap<PathBuf, CachedTable>,
    load_count: u64,
}

impl TableCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            load_count: 0,
        }
    }

    /// Return the cached table for `path`, loading it if needed
    pub fn get_or_load(&mut self, path: impl AsRef<Path>) -> Result<Arc<EventTable>, LoadError> {
        let path = path.as_ref();
        let modified = modified_time(path);

        if let Some(cached) = self.entries.get(path) {
            if cached.modified == modified {
                log::debug!("Cache hit: {}", path.display());
                return Ok(cached.table.clone());
            }
            log::info!("🔄 Source changed, reloading: {}", path.display());
        }

        self.load_count += 1;
        let table = Arc::new(load_events(path)?);
        log::info!("📖 Loaded {} events from {}", table.len(), path.display());

        self.entries.insert(
            path.to_path_buf(),
            CachedTable {
                table: table.clone(),
                modified,
            },
        );
        Ok(table)
    }

    pub fn invalidate(&mut self, path: impl AsRef<Path>) {
        self.entries.remove(path.as_ref());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of actual file reads performed
    pub fn load_count(&self) -> u64 {
        self.load_count
    }
}

impl Default for TableCache {
    fn default() -> Self {
        Self::new()
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_unchanged_file_is_read_once() {
        let file = write_csv("u1,G1,purchase,1.0,0\n");
        let mut cache = TableCache::new();

        let first = cache.get_or_load(file.path()).unwrap();
        let second = cache.get_or_load(file.path()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.load_count(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear_forces_reload() {
        let file = write_csv("u1,G1,purchase,1.0,0\n");
        let mut cache = TableCache::new();

        cache.get_or_load(file.path()).unwrap();
        cache.clear();
        assert!(cache.is_empty());

        cache.get_or_load(file.path()).unwrap();
        assert_eq!(cache.load_count(), 2);
    }

    #[test]
    fn test_invalidate_single_entry() {
        let a = write_csv("u1,G1,purchase,1.0,0\n");
        let b = write_csv("u2,G2,play,2.0,0\n");
        let mut cache = TableCache::new();

        cache.get_or_load(a.path()).unwrap();
        cache.get_or_load(b.path()).unwrap();
        cache.invalidate(a.path());

        assert_eq!(cache.len(), 1);
        cache.get_or_load(b.path()).unwrap();
        assert_eq!(cache.load_count(), 2);
    }

    #[test]
    fn test_modified_file_is_reloaded() {
        let mut file = write_csv("u1,G1,purchase,1.0,0\n");
        let mut cache = TableCache::new();
        assert_eq!(cache.get_or_load(file.path()).unwrap().len(), 1);

        file.write_all(b"u2,G1,play,3.0,0\n").unwrap();
        file.flush().unwrap();
        file.as_file()
            .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000))
            .unwrap();

        let table = cache.get_or_load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(cache.load_count(), 2);
    }

    #[test]
    fn test_failed_load_not_cached() {
        let file = write_csv("u1,G1,purchase\n");
        let mut cache = TableCache::new();

        assert!(cache.get_or_load(file.path()).is_err());
        assert!(cache.is_empty());
    }
}
