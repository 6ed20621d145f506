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

//! Runs a short sequence of cache operations and reports the results.

use lrucache_common::{
    cache::{LruCache, LruCacheConfig},
    logging::{ensure_logging_initialized, logger::Logger},
};

fn main() -> anyhow::Result<()> {
    if std::env::var_os("LRUCACHE_LOG").is_some() {
        Logger::init_with_env()?;
    } else {
        ensure_logging_initialized();
    }

    let config = LruCacheConfig::new(2).with_name("demo");
    let cache: LruCache<&str> = LruCache::from_config(&config)?;

    cache.set("key1", "value1");
    cache.set("key2", "value2");
    report(&cache, "key1");

    // Adding a third key evicts the least recently used one
    if let Some((key, _)) = cache.set("key3", "value3") {
        log::info!("Set 'key3' evicted '{key}'");
    }

    report(&cache, "key2");
    report(&cache, "key3");
    report(&cache, "key1");

    log::info!("Final stats: {}", serde_json::to_string(&cache.stats())?);
    Ok(())
}

fn report(cache: &LruCache<&str>, key: &str) {
    match cache.get(key) {
        Some(value) => log::info!("{key}: {value}"),
        None => log::info!("{key} has been evicted"),
    }
}
