//! Compute-if-absent memoization over a concurrent cache.
//!
//! Concurrent first requests for the same key are coalesced: exactly one
//! caller runs the initializer while the others wait for its result, so a
//! memoized value is computed at most once per key.

use std::hash::Hash;
use std::sync::Arc;

use moka::sync::Cache;

/// Write-once-per-key memo table.
///
/// Unbounded by default. A capacity turns it into a bounded cache whose
/// evicted keys are recomputed on next access.
pub struct Memo<K, V> {
    inner: Cache<K, V>,
}

impl<K, V> Memo<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Memo that never evicts.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::with_capacity(None)
    }

    /// Memo holding at most `max_capacity` entries when set.
    #[must_use]
    pub fn with_capacity(max_capacity: Option<u64>) -> Self {
        let mut builder = Cache::builder();
        if let Some(cap) = max_capacity {
            builder = builder.max_capacity(cap);
        }
        Self {
            inner: builder.build(),
        }
    }

    /// Memoized value for `key`, if already computed.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.get(key)
    }

    /// True once `key` has been computed (and not evicted).
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    /// Return the memoized value, computing it with `init` on first access.
    pub fn get_or_insert_with<F>(&self, key: K, init: F) -> V
    where
        F: FnOnce() -> V,
    {
        self.inner.get_with(key, init)
    }

    /// Fallible [`get_or_insert_with`](Self::get_or_insert_with).
    ///
    /// Failed initializations are not memoized; the next access retries.
    ///
    /// # Errors
    /// Returns the initializer's error. Callers waiting on the same key
    /// receive a clone of it.
    pub fn try_get_or_insert_with<F, E>(&self, key: K, init: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
        E: Clone + Send + Sync + 'static,
    {
        self.inner.try_get_with(key, init).map_err(Arc::unwrap_or_clone)
    }

    /// Number of memoized entries after pending maintenance has run.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }

    /// True when nothing has been memoized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Default for Memo<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn init_runs_once_per_key() {
        let memo: Memo<&'static str, u32> = Memo::unbounded();
        let calls = AtomicUsize::new(0);
        let f = || {
            calls.fetch_add(1, Ordering::SeqCst);
            7
        };
        assert_eq!(memo.get_or_insert_with("a", f), 7);
        assert_eq!(memo.get_or_insert_with("a", || 99), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(memo.contains(&"a"));
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn errors_are_not_memoized() {
        let memo: Memo<u8, u8> = Memo::unbounded();
        let r: Result<u8, String> = memo.try_get_or_insert_with(1, || Err("boom".to_string()));
        assert_eq!(r, Err("boom".to_string()));
        assert!(!memo.contains(&1));
        let r: Result<u8, String> = memo.try_get_or_insert_with(1, || Ok(5));
        assert_eq!(r, Ok(5));
    }
}
