//! Process-lifetime memoization of the last successful resolution.

use parking_lot::Mutex;
use std::path::PathBuf;

/// Single-slot cache for the resolved payload path.
///
/// Owned by the [`PayloadLocator`](crate::PayloadLocator) rather than held
/// as ambient global state. Populated lazily, never explicitly cleared; a
/// cached path is re-validated against the filesystem on every read, so a
/// cleared extraction cache directory invalidates it implicitly.
///
/// The slot is mutex-guarded: concurrent callers cannot interleave the
/// read-check-write sequence and race each other into redundant extractions.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    slot: Mutex<Option<PathBuf>>,
}

impl ResolutionCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached path if it is still present on disk.
    ///
    /// A stale entry (path no longer exists) is dropped and treated as a
    /// miss.
    #[must_use]
    pub fn get(&self) -> Option<PathBuf> {
        let mut slot = self.slot.lock();
        match slot.as_ref() {
            Some(path) if path.exists() => Some(path.clone()),
            Some(_) => {
                *slot = None;
                None
            }
            None => None,
        }
    }

    /// Record a successful resolution.
    pub fn set(&self, path: PathBuf) {
        *self.slot.lock() = Some(path);
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn ResolutionCache___get___empty_returns_none() {
        let cache = ResolutionCache::new();

        assert_eq!(cache.get(), None);
    }

    #[test]
    fn ResolutionCache___get___existing_path_returns_hit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("libapp.so");
        fs::write(&path, b"payload").unwrap();

        let cache = ResolutionCache::new();
        cache.set(path.clone());

        assert_eq!(cache.get(), Some(path));
    }

    #[test]
    fn ResolutionCache___get___deleted_path_treated_as_miss() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("libapp.so");
        fs::write(&path, b"payload").unwrap();

        let cache = ResolutionCache::new();
        cache.set(path.clone());
        fs::remove_file(&path).unwrap();

        assert_eq!(cache.get(), None);
    }

    #[test]
    fn ResolutionCache___get___stale_entry_stays_dropped_after_recreate() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("libapp.so");
        fs::write(&path, b"payload").unwrap();

        let cache = ResolutionCache::new();
        cache.set(path.clone());
        fs::remove_file(&path).unwrap();
        assert_eq!(cache.get(), None);

        // The stale slot was cleared, not merely skipped
        fs::write(&path, b"payload again").unwrap();
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn ResolutionCache___set___overwrites_previous_entry() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.so");
        let second = temp_dir.path().join("second.so");
        fs::write(&first, b"a").unwrap();
        fs::write(&second, b"b").unwrap();

        let cache = ResolutionCache::new();
        cache.set(first);
        cache.set(second.clone());

        assert_eq!(cache.get(), Some(second));
    }
}
