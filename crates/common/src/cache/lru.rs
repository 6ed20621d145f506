// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! A fixed-capacity, thread-safe least-recently-used cache keyed by strings.
//!
//! The cache pairs a [`RecencyList`] of entries, ordered from most to least recently used,
//! with an index from key to the entry's [`SlotId`]. Both structures sit behind a single
//! mutex and every public operation is one critical section over them.

use std::{
    fmt::Debug,
    num::NonZeroUsize,
    sync::{Mutex, MutexGuard, PoisonError},
};

use ahash::AHashMap;
use log::kv::ToValue;
use ustr::Ustr;

use super::{
    config::LruCacheConfig,
    error::CacheError,
    list::{RecencyList, SlotId},
    stats::CacheStats,
};

/// The logging component used by caches constructed without a name.
pub const DEFAULT_CACHE_NAME: &str = "LruCache";

/// Upper bound on the number of slots reserved up front.
const MAX_PREALLOCATED: usize = 4096;

#[derive(Debug)]
struct Entry<V> {
    key: String,
    value: V,
}

/// The outcome of a set on the unsynchronized state.
#[derive(Debug)]
enum SetOutcome<V> {
    Inserted,
    Updated(V),
    Evicted(Entry<V>),
}

/// The eviction order and index guarded as a unit by [`LruCache`].
///
/// Every key in `index` maps to exactly one live entry in `order` holding that key.
#[derive(Debug)]
struct LruState<V> {
    order: RecencyList<Entry<V>>,
    index: AHashMap<String, SlotId>,
    stats: CacheStats,
}

impl<V> LruState<V> {
    fn with_capacity(capacity: usize) -> Self {
        let reserved = capacity.min(MAX_PREALLOCATED);
        Self {
            order: RecencyList::with_capacity(reserved),
            index: AHashMap::with_capacity(reserved),
            stats: CacheStats::default(),
        }
    }

    fn get(&mut self, key: &str) -> Option<&V> {
        let Some(handle) = self.index.get(key).copied() else {
            self.stats.misses += 1;
            return None;
        };

        self.order.move_to_front(handle);
        self.stats.hits += 1;
        self.order.get(handle).map(|entry| &entry.value)
    }

    fn peek(&self, key: &str) -> Option<&V> {
        let handle = self.index.get(key)?;
        self.order.get(*handle).map(|entry| &entry.value)
    }

    fn set(&mut self, key: String, value: V, capacity: usize) -> SetOutcome<V> {
        if let Some(handle) = self.index.get(&key).copied()
            && let Some(entry) = self.order.get_mut(handle)
        {
            let previous = std::mem::replace(&mut entry.value, value);
            self.order.move_to_front(handle);
            self.stats.updates += 1;
            return SetOutcome::Updated(previous);
        }

        let handle = self.order.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, handle);
        self.stats.insertions += 1;

        // At most one over capacity here, so a single eviction restores the bound
        if self.order.len() > capacity
            && let Some(evicted) = self.evict()
        {
            return SetOutcome::Evicted(evicted);
        }
        SetOutcome::Inserted
    }

    fn remove(&mut self, key: &str) -> Option<Entry<V>> {
        let handle = self.index.get(key).copied()?;
        let entry = self.delete(handle)?;
        self.stats.removals += 1;
        Some(entry)
    }

    /// Removes the least recently used entry, if any.
    fn evict(&mut self) -> Option<Entry<V>> {
        let handle = self.order.back()?;
        let entry = self.delete(handle)?;
        self.stats.evictions += 1;
        Some(entry)
    }

    /// Removes the entry for `handle` from both the order and the index.
    fn delete(&mut self, handle: SlotId) -> Option<Entry<V>> {
        let entry = self.order.remove(handle)?;
        self.index.remove(&entry.key);
        Some(entry)
    }

    fn clear(&mut self) -> Vec<Entry<V>> {
        self.index.clear();
        self.order.clear()
    }
}

/// A fixed-capacity, thread-safe least-recently-used cache.
///
/// Keys are strings and values are opaque to the cache. [`get`](Self::get) and
/// [`set`](Self::set) both mark the key as most recently used. Inserting a new key into a
/// full cache evicts exactly one entry, the least recently used one.
///
/// All operations lock an internal mutex for their O(1) bookkeeping only. Values are
/// returned by clone, and values leaving the cache are dropped after the lock is released.
/// To share a cache between threads wrap it in an [`Arc`](std::sync::Arc).
///
/// # Examples
///
/// ```
/// use lrucache_common::cache::LruCache;
///
/// let cache: LruCache<&str> = LruCache::new(2).unwrap();
/// cache.set("key1", "value1");
/// cache.set("key2", "value2");
/// assert_eq!(cache.get("key1"), Some("value1"));
///
/// // key2 is now the least recently used and is evicted
/// cache.set("key3", "value3");
/// assert_eq!(cache.get("key2"), None);
/// assert!(cache.contains_key("key1"));
/// ```
///
/// Zero capacity is rejected:
///
/// ```
/// use lrucache_common::cache::{CacheError, LruCache};
///
/// let result: Result<LruCache<u32>, _> = LruCache::new(0);
/// assert_eq!(result.unwrap_err(), CacheError::InvalidCapacity(0));
/// ```
pub struct LruCache<V> {
    capacity: NonZeroUsize,
    name: Ustr,
    state: Mutex<LruState<V>>,
}

impl<V> LruCache<V> {
    /// Creates a new empty [`LruCache`] holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(CacheError::InvalidCapacity(0))?;
        Ok(Self::with_capacity(capacity, Ustr::from(DEFAULT_CACHE_NAME)))
    }

    /// Creates a new empty [`LruCache`] from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configured capacity is zero or negative ([`CacheError::InvalidCapacity`]).
    /// - The configured name is empty or all whitespace ([`CacheError::InvalidName`]).
    pub fn from_config(config: &LruCacheConfig) -> Result<Self, CacheError> {
        let capacity = config.validate()?;
        let name = config
            .validate_name()?
            .map_or_else(|| Ustr::from(DEFAULT_CACHE_NAME), Ustr::from);
        Ok(Self::with_capacity(capacity, name))
    }

    fn with_capacity(capacity: NonZeroUsize, name: Ustr) -> Self {
        log::debug!(component = name.to_value(); "Created with capacity {capacity}");
        Self {
            capacity,
            name,
            state: Mutex::new(LruState::with_capacity(capacity.get())),
        }
    }

    /// Returns the maximum number of entries.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns the cache name used as the logging component.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().index.len()
    }

    /// Returns whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().index.is_empty()
    }

    /// Returns whether the cache contains `key`, without changing its recency.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().index.contains_key(key)
    }

    /// Sets `key` to `value` and marks it as most recently used.
    ///
    /// If `key` is already present its value is replaced in place and no eviction occurs.
    /// Otherwise the entry is added and, if the cache was full, the least recently used
    /// entry is evicted and returned.
    pub fn set(&self, key: impl Into<String>, value: V) -> Option<(String, V)> {
        let key = key.into();
        let outcome = self.lock().set(key, value, self.capacity.get());

        match outcome {
            SetOutcome::Inserted => None,
            SetOutcome::Updated(previous) => {
                // Replaced value is released outside the lock
                drop(previous);
                None
            }
            SetOutcome::Evicted(Entry { key, value }) => {
                log::debug!(
                    component = self.name.to_value();
                    "Evicted '{key}' at capacity {}", self.capacity
                );
                Some((key, value))
            }
        }
    }

    /// Removes `key` from the cache.
    ///
    /// Returns whether the key was present.
    pub fn remove(&self, key: &str) -> bool {
        let removed = self.lock().remove(key);
        removed.is_some()
    }

    /// Removes all entries. Statistics are kept.
    pub fn clear(&self) {
        let entries = self.lock().clear();
        log::debug!(component = self.name.to_value(); "Cleared {} entries", entries.len());
    }

    /// Returns the keys from most to least recently used, without changing recency.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.lock()
            .order
            .iter()
            .map(|entry| entry.key.clone())
            .collect()
    }

    /// Returns a snapshot of the operation counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.lock().stats
    }

    /// Resets the operation counters to zero.
    pub fn reset_stats(&self) {
        self.lock().stats = CacheStats::default();
    }

    fn lock(&self) -> MutexGuard<'_, LruState<V>> {
        // Index and order are updated without intermediate panics, so a poisoned state is
        // still consistent
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Clone> LruCache<V> {
    /// Returns a clone of the value for `key` and marks it as most recently used.
    ///
    /// A miss has no side effect other than being counted.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<V> {
        let value = self.lock().get(key).cloned();
        log::trace!(
            component = self.name.to_value();
            "{} '{key}'", if value.is_some() { "Hit" } else { "Miss" }
        );
        value
    }

    /// Returns a clone of the value for `key` without changing its recency.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<V> {
        self.lock().peek(key).cloned()
    }
}

impl<V> Debug for LruCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(LruCache))
            .field("name", &self.name.as_str())
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}
