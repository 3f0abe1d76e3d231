//! Storage of verification records keyed by normalized email

use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::VerificationRecord;

/// Number of independently locked shards in the default store
pub const DEFAULT_SHARD_COUNT: usize = 16;

/// Keyed storage for verification records
///
/// Implementations must make `update` atomic per key: no other operation on
/// the same key may observe or modify the record while the closure runs.
pub trait VerificationStore: Send + Sync {
    /// Atomically read and optionally modify the record for `key`
    ///
    /// The closure receives `None` when no record exists. Leaving `None` in the
    /// slot removes the record, writing `Some` inserts or replaces it. If the
    /// closure panics the stored record is left unchanged.
    fn update<R, F>(&self, key: &str, f: F) -> R
    where
        F: FnOnce(&mut Option<VerificationRecord>) -> R;

    /// Snapshot of the record for `key`
    fn get(&self, key: &str) -> Option<VerificationRecord>;

    /// Keep only records for which `keep` returns true; returns how many were removed
    fn retain(&self, keep: &mut dyn FnMut(&str, &VerificationRecord) -> bool) -> usize;

    /// Number of records held
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local, lock-striped record store
///
/// Each key maps to one shard; all operations on a key hold that shard's lock,
/// while keys on other shards proceed in parallel.
pub struct InMemoryVerificationStore {
    shards: Vec<Mutex<HashMap<String, VerificationRecord>>>,
    hasher: RandomState,
}

impl InMemoryVerificationStore {
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARD_COUNT)
    }

    /// Create a store with `shard_count` shards (at least one)
    pub fn with_shards(shard_count: usize) -> Self {
        let shards = (0..shard_count.max(1))
            .map(|_| Mutex::new(HashMap::new()))
            .collect();
        Self {
            shards,
            hasher: RandomState::new(),
        }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn shard(&self, key: &str) -> MutexGuard<'_, HashMap<String, VerificationRecord>> {
        let index = (self.hasher.hash_one(key) % self.shards.len() as u64) as usize;
        lock(&self.shards[index])
    }
}

impl Default for InMemoryVerificationStore {
    fn default() -> Self {
        Self::new()
    }
}

// A panic inside an update closure leaves the map itself consistent.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl VerificationStore for InMemoryVerificationStore {
    fn update<R, F>(&self, key: &str, f: F) -> R
    where
        F: FnOnce(&mut Option<VerificationRecord>) -> R,
    {
        let mut shard = self.shard(key);
        // The stored record stays in place until the closure returns, so a
        // panic inside it leaves the previous state intact.
        let mut slot = shard.get(key).cloned();
        let result = f(&mut slot);
        match slot {
            Some(record) => match shard.get_mut(key) {
                Some(stored) => *stored = record,
                None => {
                    shard.insert(key.to_string(), record);
                }
            },
            None => {
                shard.remove(key);
            }
        }
        result
    }

    fn get(&self, key: &str) -> Option<VerificationRecord> {
        self.shard(key).get(key).cloned()
    }

    fn retain(&self, keep: &mut dyn FnMut(&str, &VerificationRecord) -> bool) -> usize {
        let mut removed = 0;
        for shard in &self.shards {
            let mut shard = lock(shard);
            let before = shard.len();
            shard.retain(|key, record| keep(key, record));
            removed += before - shard.len();
        }
        removed
    }

    fn len(&self) -> usize {
        self.shards.iter().map(|shard| lock(shard).len()).sum()
    }
}
