//! Sharded concurrent map used as the parallel scoring accumulator.
//!
//! A fixed array of (mutex, ordered map) shards keyed by `key mod S`.
//! Writers to keys on distinct shards proceed without blocking each
//! other; a single [`drain`](ConcurrentMap::drain) at the end of scoring
//! merges the shards into one ordered map. No shard lock is ever held
//! across an external call.

use crate::document::DocumentId;
use parking_lot::{Mutex, MutexGuard};
use std::collections::BTreeMap;

type Shard<V> = BTreeMap<DocumentId, V>;

/// Mapping from document id to an accumulated value, sharded for
/// low-contention concurrent writes.
#[derive(Debug)]
pub struct ConcurrentMap<V> {
    shards: Vec<Mutex<Shard<V>>>,
}

/// Scoped handle to a single entry. Holds the shard lock until dropped.
pub struct Access<'a, V> {
    guard: MutexGuard<'a, Shard<V>>,
    key: DocumentId,
}

impl<V: Default> Access<'_, V> {
    /// Exclusive reference to the entry, default-initialized if absent.
    pub fn value_mut(&mut self) -> &mut V {
        self.guard.entry(self.key).or_default()
    }
}

impl<V: Default> ConcurrentMap<V> {
    /// Creates a map with `shard_count` shards (clamped to at least one).
    pub fn new(shard_count: usize) -> Self {
        let shards = (0..shard_count.max(1))
            .map(|_| Mutex::new(BTreeMap::new()))
            .collect();
        Self { shards }
    }

    /// `rem_euclid` keeps negative keys routable, though document ids are
    /// non-negative in practice.
    fn shard(&self, key: DocumentId) -> &Mutex<Shard<V>> {
        let index = key.rem_euclid(self.shards.len() as DocumentId) as usize;
        &self.shards[index]
    }

    /// Locks the owning shard and returns a handle to the entry for `key`.
    pub fn access(&self, key: DocumentId) -> Access<'_, V> {
        Access {
            guard: self.shard(key).lock(),
            key,
        }
    }

    /// Removes the entry for `key`, if present.
    pub fn erase(&self, key: DocumentId) {
        self.shard(key).lock().remove(&key);
    }

    /// Empties every shard in turn into a single ordered map.
    pub fn drain(&self) -> BTreeMap<DocumentId, V> {
        let mut merged = BTreeMap::new();
        for shard in &self.shards {
            merged.append(&mut *shard.lock());
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_access_default_initializes() {
        let map: ConcurrentMap<f64> = ConcurrentMap::new(8);
        *map.access(3).value_mut() += 1.5;
        *map.access(3).value_mut() += 0.5;
        let merged = map.drain();
        assert_eq!(merged.get(&3), Some(&2.0));
    }

    #[test]
    fn test_erase_removes_entry() {
        let map: ConcurrentMap<f64> = ConcurrentMap::new(4);
        *map.access(7).value_mut() = 1.0;
        map.erase(7);
        assert!(map.drain().is_empty());
    }

    #[test]
    fn test_erase_missing_key_is_noop() {
        let map: ConcurrentMap<f64> = ConcurrentMap::new(4);
        map.erase(42);
        assert!(map.drain().is_empty());
    }

    #[test]
    fn test_drain_is_ordered_and_empties_shards() {
        let map: ConcurrentMap<i32> = ConcurrentMap::new(3);
        for key in [9, 2, 17, 4, 0] {
            *map.access(key).value_mut() = key;
        }
        let merged = map.drain();
        let keys: Vec<DocumentId> = merged.keys().copied().collect();
        assert_eq!(keys, vec![0, 2, 4, 9, 17]);
        assert!(map.drain().is_empty());
    }

    #[test]
    fn test_zero_shard_count_is_clamped() {
        let map: ConcurrentMap<i32> = ConcurrentMap::new(0);
        *map.access(5).value_mut() = 5;
        assert_eq!(map.drain().len(), 1);
    }

    #[test]
    fn test_negative_key_routing() {
        let map: ConcurrentMap<i32> = ConcurrentMap::new(8);
        *map.access(-3).value_mut() = 30;
        assert_eq!(map.drain().get(&-3), Some(&30));
    }

    #[test]
    fn test_concurrent_increments() {
        let map: ConcurrentMap<u64> = ConcurrentMap::new(16);
        thread::scope(|scope| {
            for worker in 0..8 {
                let map = &map;
                scope.spawn(move || {
                    for round in 0..1000 {
                        let key = DocumentId::from((worker * 37 + round) % 64);
                        *map.access(key).value_mut() += 1;
                    }
                });
            }
        });
        let merged = map.drain();
        let total: u64 = merged.values().sum();
        assert_eq!(total, 8 * 1000);
    }
}
