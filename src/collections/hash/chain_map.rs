//! `ChainMap` — a separate-chaining hash map over an entry arena.
//!
//! Buckets hold the head index of an intrusive singly linked chain through a
//! `Vec` of entry slots; removed entries go onto a free list and are reused.
//! The bucket array is always a power of two so bucket selection is a mask,
//! never a modulo.
//!
//! Key optimizations:
//! - **Entry arena**: chain links are indices into one allocation, not
//!   per-node boxes
//! - **Load factor management**: 75% threshold, doubling growth
//! - **Pluggable hashing**: generic over `BuildHasher`, `RandomState` default
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `insert` | O(1) amortized | Upsert; doubling rehash at 3/4 load |
//! | `get` / `get_mut` | O(1) expected | Chain walk within one bucket |
//! | `remove` | O(1) expected | Unlink in place, slot reused later |
//! | `len` | O(1) | Tracked incrementally |

use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;

/// Bucket count used by the first growth of an empty map.
const INITIAL_BUCKETS: usize = 16;

struct Entry<K, V> {
    key: K,
    value: V,
    /// Next entry index in this bucket's chain.
    next: Option<u32>,
}

enum EntrySlot<K, V> {
    Occupied(Entry<K, V>),
    Free { next_free: Option<u32> },
}

/// A separate-chaining hash map with arena-backed entries.
pub struct ChainMap<K, V, S = RandomState> {
    /// Chain heads, power-of-two length (empty until the first insert).
    buckets: Box<[Option<u32>]>,
    entries: Vec<EntrySlot<K, V>>,
    free_head: Option<u32>,
    len: usize,
    hasher: S,
}

impl<K, V> ChainMap<K, V, RandomState> {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Creates a map pre-sized for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> ChainMap<K, V, S> {
    /// Creates a new empty map using `hasher` for key hashing.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            buckets: Box::new([]),
            entries: Vec::new(),
            free_head: None,
            len: 0,
            hasher,
        }
    }

    /// Creates a map pre-sized for `capacity` entries with the given hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        // Buckets sized so that `capacity` entries stay under 3/4 load.
        let mut buckets = INITIAL_BUCKETS;
        while capacity * 4 > buckets * 3 {
            buckets *= 2;
        }
        Self {
            buckets: vec![None; buckets].into_boxed_slice(),
            entries: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
            hasher,
        }
    }

    /// Returns the number of key-value associations.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map holds no associations.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over all associations in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().filter_map(|slot| match slot {
            EntrySlot::Occupied(entry) => Some((&entry.key, &entry.value)),
            EntrySlot::Free { .. } => None,
        })
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ChainMap<K, V, S> {
    #[inline(always)]
    fn bucket_of(&self, key: &K) -> usize {
        debug_assert!(self.buckets.len().is_power_of_two());
        (self.hasher.hash_one(key) as usize) & (self.buckets.len() - 1)
    }

    /// Doubles the bucket array and redistributes every live entry.
    ///
    /// Associations are preserved; only chain membership changes.
    fn grow(&mut self) {
        let new_len = if self.buckets.is_empty() {
            INITIAL_BUCKETS
        } else {
            self.buckets.len() * 2
        };
        let mut new_buckets = vec![None; new_len].into_boxed_slice();

        for (idx, slot) in self.entries.iter_mut().enumerate() {
            if let EntrySlot::Occupied(entry) = slot {
                let bucket = (self.hasher.hash_one(&entry.key) as usize) & (new_len - 1);
                entry.next = new_buckets[bucket];
                new_buckets[bucket] = Some(idx as u32);
            }
        }
        self.buckets = new_buckets;
    }

    /// Allocates an entry slot, reusing the free list when possible.
    fn alloc(&mut self, key: K, value: V, next: Option<u32>) -> u32 {
        let entry = Entry { key, value, next };
        if let Some(free_idx) = self.free_head {
            let slot = &mut self.entries[free_idx as usize];
            self.free_head = match slot {
                EntrySlot::Free { next_free } => *next_free,
                EntrySlot::Occupied(_) => panic!("corrupted free list: head slot is occupied"),
            };
            *slot = EntrySlot::Occupied(entry);
            free_idx
        } else {
            let idx = self.entries.len();
            assert!(idx <= u32::MAX as usize, "entry arena exceeds u32 index space");
            self.entries.push(EntrySlot::Occupied(entry));
            idx as u32
        }
    }

    /// Inserts or overwrites the association for `key`.
    ///
    /// Returns the displaced value when `key` was already present. May grow
    /// and rehash when the 3/4 load threshold is crossed.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if (self.len + 1) * 4 > self.buckets.len() * 3 {
            self.grow();
        }

        let bucket = self.bucket_of(&key);
        let mut cursor = self.buckets[bucket];
        while let Some(idx) = cursor {
            match &mut self.entries[idx as usize] {
                EntrySlot::Occupied(entry) => {
                    if entry.key == key {
                        return Some(core::mem::replace(&mut entry.value, value));
                    }
                    cursor = entry.next;
                }
                EntrySlot::Free { .. } => panic!("corrupted chain: link points to a free slot"),
            }
        }

        let head = self.buckets[bucket];
        let idx = self.alloc(key, value, head);
        self.buckets[bucket] = Some(idx);
        self.len += 1;
        None
    }

    /// Returns a reference to the value associated with `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        if self.len == 0 {
            return None;
        }
        let mut cursor = self.buckets[self.bucket_of(key)];
        while let Some(idx) = cursor {
            match &self.entries[idx as usize] {
                EntrySlot::Occupied(entry) => {
                    if entry.key == *key {
                        return Some(&entry.value);
                    }
                    cursor = entry.next;
                }
                EntrySlot::Free { .. } => panic!("corrupted chain: link points to a free slot"),
            }
        }
        None
    }

    /// Returns a mutable reference to the value associated with `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        if self.len == 0 {
            return None;
        }
        let bucket = self.bucket_of(key);
        let mut found = None;
        let mut cursor = self.buckets[bucket];
        while let Some(idx) = cursor {
            match &self.entries[idx as usize] {
                EntrySlot::Occupied(entry) => {
                    if entry.key == *key {
                        found = Some(idx as usize);
                        break;
                    }
                    cursor = entry.next;
                }
                EntrySlot::Free { .. } => panic!("corrupted chain: link points to a free slot"),
            }
        }
        match &mut self.entries[found?] {
            EntrySlot::Occupied(entry) => Some(&mut entry.value),
            EntrySlot::Free { .. } => unreachable!(),
        }
    }

    /// Returns `true` if `key` has an association.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes the association for `key`, returning its value.
    ///
    /// Absent keys are a silent no-op returning `None`.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        if self.len == 0 {
            return None;
        }
        let bucket = self.bucket_of(key);
        let mut cursor = self.buckets[bucket];
        let mut prev: Option<u32> = None;

        while let Some(idx) = cursor {
            let (matches, next) = match &self.entries[idx as usize] {
                EntrySlot::Occupied(entry) => (entry.key == *key, entry.next),
                EntrySlot::Free { .. } => panic!("corrupted chain: link points to a free slot"),
            };

            if matches {
                match prev {
                    Some(p) => match &mut self.entries[p as usize] {
                        EntrySlot::Occupied(entry) => entry.next = next,
                        EntrySlot::Free { .. } => unreachable!(),
                    },
                    None => self.buckets[bucket] = next,
                }
                let slot = core::mem::replace(
                    &mut self.entries[idx as usize],
                    EntrySlot::Free {
                        next_free: self.free_head,
                    },
                );
                self.free_head = Some(idx);
                self.len -= 1;
                return match slot {
                    EntrySlot::Occupied(entry) => Some(entry.value),
                    EntrySlot::Free { .. } => unreachable!(),
                };
            }
            prev = cursor;
            cursor = next;
        }
        None
    }
}

impl<K, V, S: Default> Default for ChainMap<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ChainMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
