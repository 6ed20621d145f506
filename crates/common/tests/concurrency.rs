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

//! Concurrent use of a shared cache from many threads.

use std::{
    collections::HashSet,
    sync::{Arc, Barrier},
    thread,
};

use lrucache_common::cache::{LruCache, LruCacheConfig};
use rstest::rstest;

const THREADS: usize = 10;
const KEYS_PER_THREAD: usize = 1_000;

fn key(thread: usize, i: usize) -> String {
    format!("key-{thread}-{i}")
}

fn value(thread: usize, i: usize) -> String {
    format!("value-{thread}-{i}")
}

/// Checks the index (`len`, `contains_key`) agrees with the eviction order (`keys`).
fn assert_consistent<V>(cache: &LruCache<V>) {
    let keys = cache.keys();
    let unique: HashSet<&String> = keys.iter().collect();

    assert_eq!(keys.len(), cache.len());
    assert_eq!(unique.len(), keys.len(), "duplicate keys in eviction order");
    assert!(cache.len() <= cache.capacity());
    for key in &keys {
        assert!(cache.contains_key(key), "'{key}' ordered but not indexed");
    }
}

#[rstest]
fn test_concurrent_writers_and_readers_with_disjoint_keys() {
    let cache: Arc<LruCache<String>> = Arc::new(LruCache::new(1_000).unwrap());
    let barrier = Arc::new(Barrier::new(THREADS * 2));
    let mut handles = Vec::with_capacity(THREADS * 2);

    for t in 0..THREADS {
        let cache = Arc::clone(&cache);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for i in 0..KEYS_PER_THREAD {
                cache.set(key(t, i), value(t, i));
            }
        }));
    }

    for t in 0..THREADS {
        let cache = Arc::clone(&cache);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for i in 0..KEYS_PER_THREAD {
                // Any hit must carry the value written for that key
                if let Some(found) = cache.get(&key(t, i)) {
                    assert_eq!(found, value(t, i));
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 1_000);
    assert_consistent(&cache);

    let stats = cache.stats();
    assert_eq!(stats.insertions, (THREADS * KEYS_PER_THREAD) as u64);
    assert_eq!(stats.evictions, stats.insertions - 1_000);
    assert_eq!(stats.total_lookups(), (THREADS * KEYS_PER_THREAD) as u64);
}

#[rstest]
fn test_last_written_key_per_thread_survives_when_capacity_allows() {
    let cache: Arc<LruCache<String>> = Arc::new(LruCache::new(THREADS * KEYS_PER_THREAD).unwrap());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..KEYS_PER_THREAD {
                    cache.set(key(t, i), value(t, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for t in 0..THREADS {
        assert_eq!(
            cache.get(&key(t, KEYS_PER_THREAD - 1)),
            Some(value(t, KEYS_PER_THREAD - 1))
        );
    }
    assert_eq!(cache.len(), THREADS * KEYS_PER_THREAD);
    assert_eq!(cache.stats().evictions, 0);
}

#[rstest]
fn test_mixed_operations_on_shared_keys_keep_invariants() {
    let config = LruCacheConfig::new(16).with_name("contended");
    let cache: Arc<LruCache<usize>> = Arc::new(LruCache::from_config(&config).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..2_000 {
                    let key = format!("shared-{}", (i * 7 + t) % 40);
                    match i % 4 {
                        0 | 1 => {
                            cache.set(key, i);
                        }
                        2 => {
                            let _ = cache.get(&key);
                        }
                        _ => {
                            cache.remove(&key);
                        }
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_consistent(&cache);
}
