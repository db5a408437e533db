//! Shared token frequency table
//!
//! The only shared mutable state in a processing run. The table is a sharded
//! hash map: the key hash selects one of a power-of-two number of shards, each
//! guarded by its own mutex, so concurrent workers incrementing different
//! tokens rarely contend on the same lock. Keys are case-folded on entry,
//! making the case-insensitive comparison policy a property of the table
//! rather than of any one processing path.

use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::Mutex;

const DEFAULT_SHARDS: usize = 16;

/// Concurrent map from token to occurrence count.
///
/// Iteration order over the table is unspecified; callers that need a stable
/// order go through [`crate::processor::OrderedResult`].
#[derive(Debug)]
pub struct FrequencyTable {
    shards: Box<[Mutex<HashMap<String, u64>>]>,
    hasher: RandomState,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARDS)
    }

    /// Create a table with at least `shards` shards, rounded up to a power of
    /// two so shard selection is a mask of the key hash.
    pub fn with_shards(shards: usize) -> Self {
        let count = shards.max(1).next_power_of_two();
        let shards = (0..count)
            .map(|_| Mutex::new(HashMap::new()))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self {
            shards,
            hasher: RandomState::new(),
        }
    }

    fn shard_for(&self, key: &str) -> usize {
        self.hasher.hash_one(key) as usize & (self.shards.len() - 1)
    }

    /// Atomically increment the count for a token, inserting it with count 1
    /// if absent. Safe to call from any number of concurrent workers; the
    /// final count for a key equals the exact number of calls made for it.
    pub fn increment(&self, token: &str) {
        let key = token.to_lowercase();
        let mut shard = self.shards[self.shard_for(&key)]
            .lock()
            .expect("frequency shard lock poisoned");
        *shard.entry(key).or_insert(0) += 1;
    }

    /// Look up the count for a token under the table's case-insensitive
    /// comparison policy.
    pub fn get(&self, token: &str) -> Option<u64> {
        let key = token.to_lowercase();
        let shard = self.shards[self.shard_for(&key)]
            .lock()
            .expect("frequency shard lock poisoned");
        shard.get(&key).copied()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|s| s.lock().expect("frequency shard lock poisoned").len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all counts, i.e. the total number of tokens observed.
    pub fn total(&self) -> u64 {
        self.shards
            .iter()
            .map(|s| {
                s.lock()
                    .expect("frequency shard lock poisoned")
                    .values()
                    .sum::<u64>()
            })
            .sum()
    }

    /// Consume the table and return the accumulated counts. Only called once
    /// all workers have finished; a key lives in exactly one shard, so a plain
    /// extend cannot collide.
    pub fn into_counts(self) -> HashMap<String, u64> {
        let mut counts = HashMap::new();
        for shard in self.shards.into_vec() {
            counts.extend(shard.into_inner().expect("frequency shard lock poisoned"));
        }
        counts
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
